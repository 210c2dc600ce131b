//! The user-facing error slot and the retry actions it can carry.

use std::fmt;

use super::resume_error::ResumeError;
use super::validation::ValidationError;
use crate::models::{ResumeId, ValidFile};

/// Logical target of a request. At most one request per target is current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestTarget {
    /// The resume history list
    ResumeList,
    /// The upload of the pending file
    Upload,
    /// Detail record for one resume
    Detail(ResumeId),
}

impl fmt::Display for RequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestTarget::ResumeList => write!(f, "resume list"),
            RequestTarget::Upload => write!(f, "upload"),
            RequestTarget::Detail(id) => write!(f, "detail {}", id),
        }
    }
}

/// A gateway operation that can be replayed verbatim.
///
/// The upload variant owns the exact validated file that was sent, so a retry
/// re-sends the same bytes without validating again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryAction {
    ReloadList,
    Upload(ValidFile),
    FetchDetail(ResumeId),
}

impl RetryAction {
    pub fn target(&self) -> RequestTarget {
        match self {
            RetryAction::ReloadList => RequestTarget::ResumeList,
            RetryAction::Upload(_) => RequestTarget::Upload,
            RetryAction::FetchDetail(id) => RequestTarget::Detail(*id),
        }
    }
}

/// The single error shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCondition {
    /// Message shown to the user
    pub message: String,
    /// 0 when no response arrived, otherwise the recorded HTTP status
    pub status: u16,
    /// Operation that re-runs the failed request, if any
    pub retry: Option<RetryAction>,
    /// Classified cause
    pub error: ResumeError,
}

impl ErrorCondition {
    /// Condition for a file rejected before upload. Carries no retry.
    pub fn from_validation(err: ValidationError) -> Self {
        Self {
            message: err.user_message(),
            status: 400,
            retry: None,
            error: err.into(),
        }
    }

    /// Target of the failed request, when the condition came from one.
    pub fn target(&self) -> Option<RequestTarget> {
        self.retry.as_ref().map(RetryAction::target)
    }

    pub fn is_retryable(&self) -> bool {
        self.retry.is_some()
    }
}

impl fmt::Display for ErrorCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (status {})", self.message, self.status)
    }
}
