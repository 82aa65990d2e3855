pub mod admin;
pub mod auth;
pub mod availability;
pub mod booking;
