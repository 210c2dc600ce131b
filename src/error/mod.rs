//! Error handling for the resume client.
//!
//! - **Validation errors**: raised locally before any request
//! - **Transport errors**: no response arrived
//! - **Protocol errors**: the server answered with a failure status
//! - **Unified error type**: `ResumeError` consolidates the three
//! - **Error condition**: the single user-facing error slot, with its retry
//! - **Classifier**: the fixed rule table turning failures into conditions
//!
//! # Example
//!
//! ```ignore
//! use resume_client::error::{classify, Failure, RetryAction};
//!
//! let condition = classify(&failure, "failed to fetch resumes", Some(RetryAction::ReloadList));
//! eprintln!("{}", condition.message);
//! ```
//!
//! | Status | Message | Variant |
//! |--------|---------|---------|
//! | none | network error | `TransportError::NetworkUnreachable` |
//! | 404 | resource not found | `ProtocolError::NotFound` |
//! | 401/403 | permission denied | `ProtocolError::Forbidden` |
//! | 413 | file too large | `ProtocolError::PayloadTooLarge` |
//! | 415 | unsupported file format | `ProtocolError::UnsupportedMediaType` |
//! | 5xx | server error | `ProtocolError::ServerError` |
//! | other | body message or fallback | `ProtocolError::Other` |

mod classifier;
mod condition;
mod network;
mod resume_error;
mod validation;

pub use classifier::{
    classify, server_message, Failure, FALLBACK_STATUS, FILE_TOO_LARGE_MESSAGE,
    NETWORK_ERROR_MESSAGE, NOT_FOUND_MESSAGE, PERMISSION_DENIED_MESSAGE, SERVER_ERROR_MESSAGE,
    UNSUPPORTED_FORMAT_MESSAGE,
};
pub use condition::{ErrorCondition, RequestTarget, RetryAction};
pub use network::{ProtocolError, TransportError};
pub use resume_error::ResumeError;
pub use validation::ValidationError;
