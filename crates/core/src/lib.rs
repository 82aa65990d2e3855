//! # Slotbook Core
//!
//! Domain types and pure logic for the mock-interview booking service:
//! the daily slot grid, date validation and classification, the availability
//! view, and the shared error taxonomy. This crate performs no I/O; the
//! database and HTTP layers build on it.

/// Date parsing, validation, classification, and display formatting
pub mod dates;
/// Shared error taxonomy for the whole service
pub mod errors;
/// Request/response and domain model types
pub mod models;
/// The fixed daily slot grid
pub mod slots;
