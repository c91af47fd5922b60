//! HTTP handlers.

pub mod password;

pub use password::validate_password;
