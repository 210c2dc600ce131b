//! Maps transport and protocol failures to user-facing error conditions.
//!
//! Rules are evaluated in a fixed order; see [`classify`].

use bytes::Bytes;

use super::condition::{ErrorCondition, RetryAction};
use super::network::{ProtocolError, TransportError};
use super::resume_error::ResumeError;
use crate::traits::HttpError;

pub const NETWORK_ERROR_MESSAGE: &str = "network error, check connection.";
pub const NOT_FOUND_MESSAGE: &str = "resource not found.";
pub const PERMISSION_DENIED_MESSAGE: &str = "permission denied.";
pub const FILE_TOO_LARGE_MESSAGE: &str = "file too large.";
pub const UNSUPPORTED_FORMAT_MESSAGE: &str = "unsupported file format.";
pub const SERVER_ERROR_MESSAGE: &str = "server error, retry later.";

/// Status recorded when only the caller's fallback message applies
pub const FALLBACK_STATUS: u16 = 500;

/// Body fields checked for a server-supplied message, in order.
const MESSAGE_FIELDS: &[&str] = &["message", "error", "detail"];

/// A failed request, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No response was received.
    NoResponse(HttpError),
    /// The server answered with a non-success status.
    Status { status: u16, body: Bytes },
    /// A success response whose body could not be decoded.
    Undecodable { status: u16, reason: String },
}

/// Classify a failure.
///
/// 1. no response: status 0, network message
/// 2. 404
/// 3. 401 / 403
/// 4. 413
/// 5. 415
/// 6. any 5xx
/// 7. `message`, `error` or `detail` string in the body, verbatim
/// 8. `fallback_message` with status 500
///
/// The returned condition carries `retry` unchanged.
pub fn classify(
    failure: &Failure,
    fallback_message: &str,
    retry: Option<RetryAction>,
) -> ErrorCondition {
    let (message, status, error) = match failure {
        Failure::NoResponse(err) => (
            NETWORK_ERROR_MESSAGE.to_string(),
            0,
            ResumeError::Transport(TransportError::from(err)),
        ),
        Failure::Status { status, body } => classify_status(*status, body, fallback_message),
        Failure::Undecodable { status, reason } => {
            tracing::warn!(
                "Unclassified failure (HTTP {} with undecodable body): {}",
                status,
                reason
            );
            (
                fallback_message.to_string(),
                FALLBACK_STATUS,
                ResumeError::Protocol(ProtocolError::Other {
                    status: *status,
                    message: fallback_message.to_string(),
                }),
            )
        }
    };

    ErrorCondition {
        message,
        status,
        retry,
        error,
    }
}

fn classify_status(
    status: u16,
    body: &Bytes,
    fallback_message: &str,
) -> (String, u16, ResumeError) {
    let (message, error) = match status {
        404 => (NOT_FOUND_MESSAGE.to_string(), ProtocolError::NotFound),
        401 | 403 => (
            PERMISSION_DENIED_MESSAGE.to_string(),
            ProtocolError::Forbidden { status },
        ),
        413 => (FILE_TOO_LARGE_MESSAGE.to_string(), ProtocolError::PayloadTooLarge),
        415 => (
            UNSUPPORTED_FORMAT_MESSAGE.to_string(),
            ProtocolError::UnsupportedMediaType,
        ),
        s if s >= 500 => (
            SERVER_ERROR_MESSAGE.to_string(),
            ProtocolError::ServerError { status: s },
        ),
        _ => {
            return match server_message(body) {
                Some(message) => (
                    message.clone(),
                    status,
                    ResumeError::Protocol(ProtocolError::Other { status, message }),
                ),
                None => {
                    tracing::warn!(
                        "Unclassified failure (HTTP {}), using fallback message",
                        status
                    );
                    (
                        fallback_message.to_string(),
                        FALLBACK_STATUS,
                        ResumeError::Protocol(ProtocolError::Other {
                            status,
                            message: fallback_message.to_string(),
                        }),
                    )
                }
            };
        }
    };
    (message, status, ResumeError::Protocol(error))
}

/// Extract a human-readable message from a JSON error body.
pub fn server_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let object = value.as_object()?;
    MESSAGE_FIELDS
        .iter()
        .filter_map(|field| object.get(*field).and_then(|v| v.as_str()))
        .find(|message| !message.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, body: &str) -> Failure {
        Failure::Status {
            status,
            body: Bytes::from(body.to_string()),
        }
    }

    #[test]
    fn test_no_response_is_status_zero() {
        let condition = classify(
            &Failure::NoResponse(HttpError::ConnectionFailed("refused".to_string())),
            "fallback",
            Some(RetryAction::ReloadList),
        );
        assert_eq!(condition.status, 0);
        assert_eq!(condition.message, NETWORK_ERROR_MESSAGE);
        assert_eq!(condition.retry, Some(RetryAction::ReloadList));
        assert!(matches!(condition.error, ResumeError::Transport(_)));
    }

    #[test]
    fn test_timeout_is_network_error() {
        let condition = classify(
            &Failure::NoResponse(HttpError::Timeout("30s".to_string())),
            "fallback",
            None,
        );
        assert_eq!(condition.status, 0);
        assert_eq!(condition.error.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_fixed_status_mappings() {
        let cases = [
            (404, NOT_FOUND_MESSAGE),
            (401, PERMISSION_DENIED_MESSAGE),
            (403, PERMISSION_DENIED_MESSAGE),
            (413, FILE_TOO_LARGE_MESSAGE),
            (415, UNSUPPORTED_FORMAT_MESSAGE),
            (500, SERVER_ERROR_MESSAGE),
            (503, SERVER_ERROR_MESSAGE),
        ];
        for (code, expected) in cases {
            let condition = classify(&status(code, ""), "fallback", None);
            assert_eq!(condition.message, expected, "status {}", code);
            assert_eq!(condition.status, code);
        }
    }

    #[test]
    fn test_fixed_mapping_beats_body_message() {
        let condition = classify(
            &status(404, r#"{"message": "Resume 9 does not exist"}"#),
            "fallback",
            None,
        );
        assert_eq!(condition.message, NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_body_message_surfaced_verbatim() {
        let condition = classify(
            &status(422, r#"{"message": "Filename missing"}"#),
            "fallback",
            None,
        );
        assert_eq!(condition.message, "Filename missing");
        assert_eq!(condition.status, 422);
    }

    #[test]
    fn test_body_error_then_detail_fields() {
        let from_error = classify(&status(400, r#"{"error": "Bad upload"}"#), "fallback", None);
        assert_eq!(from_error.message, "Bad upload");

        let from_detail = classify(
            &status(400, r#"{"detail": "Could not extract sufficient text."}"#),
            "fallback",
            None,
        );
        assert_eq!(from_detail.message, "Could not extract sufficient text.");
    }

    #[test]
    fn test_message_preferred_over_error() {
        let condition = classify(
            &status(400, r#"{"error": "second", "message": "first"}"#),
            "fallback",
            None,
        );
        assert_eq!(condition.message, "first");
    }

    #[test]
    fn test_fallback_records_500() {
        let condition = classify(&status(400, "not json"), "failed to upload", None);
        assert_eq!(condition.message, "failed to upload");
        assert_eq!(condition.status, FALLBACK_STATUS);
        assert_eq!(condition.error.status(), 400);

        let empty_message = classify(&status(409, r#"{"message": ""}"#), "fallback", None);
        assert_eq!(empty_message.message, "fallback");
    }

    #[test]
    fn test_undecodable_uses_fallback() {
        let condition = classify(
            &Failure::Undecodable {
                status: 200,
                reason: "missing field `id`".to_string(),
            },
            "failed to fetch",
            Some(RetryAction::FetchDetail(4)),
        );
        assert_eq!(condition.message, "failed to fetch");
        assert_eq!(condition.status, 500);
        assert_eq!(condition.retry, Some(RetryAction::FetchDetail(4)));
    }

    #[test]
    fn test_server_message_ignores_non_strings() {
        assert_eq!(server_message(br#"{"message": 42}"#), None);
        assert_eq!(server_message(br#"["message"]"#), None);
        assert_eq!(
            server_message(br#"{"message": 42, "error": "boom"}"#),
            Some("boom".to_string())
        );
    }
}
