//! Error types for Hirelink API operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use thiserror::Error;

/// Result type for Hirelink API operations.
pub type Result<T> = std::result::Result<T, ClientError>;

const FALLBACK_MESSAGE: &str = "An unexpected error occurred";
const FALLBACK_TAG: &str = "Bad Request";
const NETWORK_MESSAGE: &str = "Network Error or Internal Server Error";
const NETWORK_TAG: &str = "Server Error";

/// The normalized shape every failed remote call is converted into.
///
/// Produced exclusively by the gateway, from either a structured error body
/// returned by the server or the absence of any response at all. The field
/// names on the wire match the server's own error envelope, so the struct
/// round-trips through JSON unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: Vec<String>,
    pub error: String,
}

impl ApiError {
    /// Normalize a non-2xx response from its status and raw body.
    ///
    /// The body's `message` field may be a single string or a sequence;
    /// both forms collapse into the message sequence. A missing or
    /// unparseable body falls back to a generic one-element message.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum MessageField {
            One(String),
            Many(Vec<String>),
        }

        #[derive(Deserialize)]
        struct ErrorBody {
            message: Option<MessageField>,
            error: Option<String>,
        }

        let parsed: Option<ErrorBody> = serde_json::from_slice(body).ok();
        let (message, error) = match parsed {
            Some(body) => {
                let message = match body.message {
                    Some(MessageField::One(msg)) => vec![msg],
                    Some(MessageField::Many(msgs)) if !msgs.is_empty() => msgs,
                    _ => vec![FALLBACK_MESSAGE.to_string()],
                };
                let error = body.error.unwrap_or_else(|| FALLBACK_TAG.to_string());
                (message, error)
            }
            None => (
                vec![FALLBACK_MESSAGE.to_string()],
                FALLBACK_TAG.to_string(),
            ),
        };

        ApiError {
            status_code: status,
            message,
            error,
        }
    }

    /// Normalize a request that produced no response at all (connect
    /// failure, timeout, DNS).
    pub fn network() -> Self {
        ApiError {
            status_code: 500,
            message: vec![NETWORK_MESSAGE.to_string()],
            error: NETWORK_TAG.to_string(),
        }
    }

    /// Join the message sequence into a single display string.
    ///
    /// This is the lossy collapse the UI boundary performs; the structured
    /// fields stay intact up to that point.
    #[must_use]
    pub fn display_message(&self) -> String {
        self.message.join(", ")
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.error,
            self.status_code,
            self.message.join("; ")
        )
    }
}

/// Errors that can occur during Hirelink API operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ClientError {
    /// The server answered with a non-2xx status, or no answer arrived at
    /// all. Always carries the normalized shape; callers never see a raw
    /// transport failure.
    #[error("API error: {0}")]
    Api(ApiError),

    /// A request that received no response. Internal to the gateway, which
    /// converts it into `Api(ApiError::network())` before returning.
    #[error("No response from server: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ClientError {
    /// The normalized error, when this is an API failure.
    #[must_use]
    pub fn api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(api) => Some(api),
            _ => None,
        }
    }

    /// HTTP status carried by the normalized error, if any.
    #[inline]
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.api().map(|api| api.status_code)
    }

    /// Check if this is an access denied error.
    #[inline]
    #[must_use]
    pub fn is_access_denied(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_body_is_preserved() {
        let body = br#"{"message":["Unauthorized"],"error":"Unauthorized","statusCode":401}"#;
        let err = ApiError::from_response(401, body);
        assert_eq!(err.status_code, 401);
        assert_eq!(err.message, vec!["Unauthorized".to_string()]);
        assert_eq!(err.error, "Unauthorized");
    }

    #[test]
    fn test_single_string_message_becomes_sequence() {
        let body = br#"{"message":"title should not be empty","error":"Bad Request"}"#;
        let err = ApiError::from_response(400, body);
        assert_eq!(err.message, vec!["title should not be empty".to_string()]);
    }

    #[test]
    fn test_unparseable_body_falls_back() {
        let err = ApiError::from_response(502, b"<html>Bad Gateway</html>");
        assert_eq!(err.status_code, 502);
        assert_eq!(err.message, vec!["An unexpected error occurred".to_string()]);
        assert_eq!(err.error, "Bad Request");
    }

    #[test]
    fn test_empty_json_body_falls_back() {
        let err = ApiError::from_response(500, b"{}");
        assert_eq!(err.message, vec!["An unexpected error occurred".to_string()]);
        assert_eq!(err.error, "Bad Request");
    }

    #[test]
    fn test_network_error_shape() {
        let err = ApiError::network();
        assert_eq!(err.status_code, 500);
        assert_eq!(
            err.message,
            vec!["Network Error or Internal Server Error".to_string()]
        );
        assert_eq!(err.error, "Server Error");
    }

    #[test]
    fn test_wire_round_trip() {
        let err = ApiError::from_response(403, br#"{"message":["Forbidden"],"error":"Forbidden"}"#);
        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("\"statusCode\":403"));
        let back: ApiError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_access_denied_401() {
        let err = ClientError::Api(ApiError::from_response(401, b"{}"));
        assert!(err.is_access_denied());
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_config_error_has_no_status() {
        let err = ClientError::Config("bad base url".into());
        assert_eq!(err.status(), None);
        assert!(!err.is_access_denied());
    }

    #[test]
    fn test_display_message_joins() {
        let err = ApiError {
            status_code: 400,
            message: vec!["email must be valid".into(), "name is required".into()],
            error: "Bad Request".into(),
        };
        assert_eq!(
            err.display_message(),
            "email must be valid, name is required"
        );
    }
}
