//! Network and protocol error types.
//!
//! `TransportError` covers failures where no response arrived at all;
//! `ProtocolError` covers responses the server did send but that signal a
//! failure.

use thiserror::Error;

use crate::traits::HttpError;

/// No response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Connection refused, DNS failure, client-side timeout, dropped body.
    #[error("network unreachable: {reason}")]
    NetworkUnreachable { reason: String, timed_out: bool },
}

impl TransportError {
    pub fn timed_out(&self) -> bool {
        match self {
            TransportError::NetworkUnreachable { timed_out, .. } => *timed_out,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        if self.timed_out() {
            "E_NET_TIMEOUT"
        } else {
            "E_NET_CONN"
        }
    }
}

impl From<&HttpError> for TransportError {
    fn from(err: &HttpError) -> Self {
        TransportError::NetworkUnreachable {
            reason: err.to_string(),
            timed_out: matches!(err, HttpError::Timeout(_)),
        }
    }
}

/// The server responded, but not with success.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("HTTP 404: resource not found")]
    NotFound,

    /// 401 or 403
    #[error("HTTP {status}: forbidden")]
    Forbidden { status: u16 },

    #[error("HTTP 413: payload too large")]
    PayloadTooLarge,

    #[error("HTTP 415: unsupported media type")]
    UnsupportedMediaType,

    /// Any 5xx
    #[error("HTTP {status}: server error")]
    ServerError { status: u16 },

    /// Any other failure, with the message the server or caller supplied.
    #[error("HTTP {status}: {message}")]
    Other { status: u16, message: String },
}

impl ProtocolError {
    /// HTTP status that produced this error.
    pub fn status(&self) -> u16 {
        match self {
            ProtocolError::NotFound => 404,
            ProtocolError::Forbidden { status } => *status,
            ProtocolError::PayloadTooLarge => 413,
            ProtocolError::UnsupportedMediaType => 415,
            ProtocolError::ServerError { status } => *status,
            ProtocolError::Other { status, .. } => *status,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ProtocolError::NotFound => "E_HTTP_NOT_FOUND",
            ProtocolError::Forbidden { .. } => "E_HTTP_FORBIDDEN",
            ProtocolError::PayloadTooLarge => "E_HTTP_TOO_LARGE",
            ProtocolError::UnsupportedMediaType => "E_HTTP_MEDIA_TYPE",
            ProtocolError::ServerError { .. } => "E_HTTP_SERVER",
            ProtocolError::Other { .. } => "E_HTTP_OTHER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_from_timeout() {
        let err = TransportError::from(&HttpError::Timeout("30s".to_string()));
        assert!(err.timed_out());
        assert_eq!(err.error_code(), "E_NET_TIMEOUT");
    }

    #[test]
    fn test_transport_from_connection_failure() {
        let err = TransportError::from(&HttpError::ConnectionFailed("refused".to_string()));
        assert!(!err.timed_out());
        assert_eq!(err.error_code(), "E_NET_CONN");
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_protocol_status() {
        assert_eq!(ProtocolError::NotFound.status(), 404);
        assert_eq!(ProtocolError::Forbidden { status: 401 }.status(), 401);
        assert_eq!(ProtocolError::PayloadTooLarge.status(), 413);
        assert_eq!(ProtocolError::UnsupportedMediaType.status(), 415);
        assert_eq!(ProtocolError::ServerError { status: 503 }.status(), 503);
    }

    #[test]
    fn test_protocol_error_codes() {
        assert_eq!(ProtocolError::ServerError { status: 500 }.error_code(), "E_HTTP_SERVER");
        assert_eq!(ProtocolError::NotFound.error_code(), "E_HTTP_NOT_FOUND");
        assert_eq!(
            ProtocolError::Other {
                status: 429,
                message: "slow down".to_string()
            }
            .error_code(),
            "E_HTTP_OTHER"
        );
    }
}
