// ==============
// crates/backend-lib/src/metrics.rs

//! Central place for metric keys
pub const VALIDATION_REQUESTS: &str = "password.validation.requests";
pub const VALIDATION_ACCEPTED: &str = "password.validation.accepted";
pub const VALIDATION_REJECTED: &str = "password.validation.rejected";
pub const VALIDATION_MALFORMED: &str = "password.validation.malformed";
