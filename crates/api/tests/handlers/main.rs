#[path = "../test_utils.rs"]
mod test_utils;

mod admin_test;
mod auth_test;
mod availability_test;
