// ================
// common/src/lib.rs
// ================
//! Common types and structures
//! used for communication between `passgate` clients and the server.
//! This module defines the HTTP payloads and the endpoint they travel on.

use serde::{Deserialize, Serialize};

/// Path of the password validation endpoint
pub const VALIDATE_PASSWORD_PATH: &str = "/v1/api/password-validate";

/// Body of a password validation request
/// # Fields
/// * `value` - Candidate password, validated exactly as sent
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordRequest {
    pub value: String,
}

/// Body of a password validation response
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordResponse {
    /// Whether the password satisfies every strength rule
    pub valid: bool,
}

/// Error envelope returned for rejected requests
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Machine readable code plus a human readable message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    /// Stable error code (e.g. `VAL_001`)
    pub code: String,
    /// Error description
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_request_wire_format() {
        let req: PasswordRequest = serde_json::from_str(r#"{"value":"AbTp9!fok"}"#).unwrap();
        assert_eq!(req.value, "AbTp9!fok");

        // `value` is mandatory
        assert!(serde_json::from_str::<PasswordRequest>("{}").is_err());
        assert!(serde_json::from_str::<PasswordRequest>(r#"{"value":42}"#).is_err());
    }

    #[test]
    fn test_password_response_wire_format() {
        let json = serde_json::to_string(&PasswordResponse { valid: true }).unwrap();
        assert_eq!(json, r#"{"valid":true}"#);
    }

    #[test]
    fn test_error_response_shape() {
        let err = ErrorResponse::new("VAL_001", "Invalid input provided");
        let value = serde_json::to_value(&err).unwrap();
        assert_eq!(value["error"]["code"], "VAL_001");
        assert_eq!(value["error"]["message"], "Invalid input provided");
    }
}
