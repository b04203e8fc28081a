//! Caller-facing result for the form layer.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tagged success/failure handed to the form layer.
///
/// Serializes as `{"success":true}` or
/// `{"success":false,"error":"<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Outcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

impl From<Result<()>> for Outcome {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(e) => Self::failed(e.user_message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BookError;

    #[test]
    fn test_ok_serializes_without_error() {
        let json = serde_json::to_string(&Outcome::ok()).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }

    #[test]
    fn test_failure_carries_message() {
        let result: Result<()> = Err(BookError::DuplicateEmail {
            email: "a@b.c".into(),
            existing: 0,
        });
        let outcome = Outcome::from(result);

        assert!(!outcome.success);
        assert_eq!(
            serde_json::to_string(&outcome).unwrap(),
            r#"{"success":false,"error":"A user with this email already exists."}"#
        );
    }
}
