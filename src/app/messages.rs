//! SessionMessage enum for completions of spawned gateway requests.

use crate::error::ErrorCondition;
use crate::models::{ResumeDetail, ResumeId, ResumeSummary, ValidFile};
use crate::state::RequestToken;

/// Results sent back from request tasks to the controller
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Resume list load finished
    ResumesLoaded {
        token: RequestToken,
        result: Result<Vec<ResumeSummary>, ErrorCondition>,
    },
    /// Upload finished; `file` is what was sent
    UploadFinished {
        token: RequestToken,
        file: ValidFile,
        result: Result<ResumeDetail, ErrorCondition>,
    },
    /// Detail fetch for one resume finished
    DetailLoaded {
        token: RequestToken,
        id: ResumeId,
        result: Result<ResumeDetail, ErrorCondition>,
    },
}

impl SessionMessage {
    pub fn token(&self) -> RequestToken {
        match self {
            SessionMessage::ResumesLoaded { token, .. }
            | SessionMessage::UploadFinished { token, .. }
            | SessionMessage::DetailLoaded { token, .. } => *token,
        }
    }
}
