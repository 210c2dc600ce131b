//! Per-session state for the resume screen.

use std::collections::HashMap;

use super::request_slot::{RequestSlot, RequestToken};
use crate::error::{ErrorCondition, RequestTarget};
use crate::models::{PendingUpload, ResumeDetail, ResumeId, ResumeSummary, ValidFile};

/// What happened when a completion was applied to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A newer request for the same target exists; nothing changed.
    Stale,
    Succeeded,
    Failed,
}

/// Session state owned by the view controller.
///
/// Loading flags are independent request slots, one per target, with detail
/// loading keyed by resume id. Which detail gets shown is tracked separately:
/// opening resume B means a late success for resume A no longer opens A, but
/// A's failure is still reported.
#[derive(Debug, Default)]
pub struct SessionStore {
    resumes: Vec<ResumeSummary>,
    selected_detail: Option<ResumeDetail>,
    detail_open: bool,
    last_uploaded: Option<ResumeDetail>,
    pending: Option<PendingUpload>,
    error: Option<ErrorCondition>,

    list: RequestSlot,
    upload: RequestSlot,
    details: HashMap<ResumeId, RequestSlot>,
    detail_view: RequestSlot,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resumes(&self) -> &[ResumeSummary] {
        &self.resumes
    }

    pub fn selected_detail(&self) -> Option<&ResumeDetail> {
        self.selected_detail.as_ref()
    }

    pub fn is_detail_open(&self) -> bool {
        self.detail_open
    }

    /// Detail returned by the most recent successful upload.
    pub fn last_uploaded(&self) -> Option<&ResumeDetail> {
        self.last_uploaded.as_ref()
    }

    pub fn pending(&self) -> Option<&PendingUpload> {
        self.pending.as_ref()
    }

    pub fn error(&self) -> Option<&ErrorCondition> {
        self.error.as_ref()
    }

    pub fn is_list_loading(&self) -> bool {
        self.list.is_loading()
    }

    pub fn is_uploading(&self) -> bool {
        self.upload.is_loading()
    }

    pub fn is_detail_loading(&self, id: ResumeId) -> bool {
        self.details.get(&id).is_some_and(RequestSlot::is_loading)
    }

    pub fn is_any_detail_loading(&self) -> bool {
        self.details.values().any(RequestSlot::is_loading)
    }

    /// No request in flight and no error showing.
    pub fn is_idle(&self) -> bool {
        !self.is_list_loading()
            && !self.is_uploading()
            && !self.is_any_detail_loading()
            && self.error.is_none()
    }

    /// Mark a request for `target` as started with `token`.
    pub fn begin(&mut self, target: RequestTarget, token: RequestToken) {
        match target {
            RequestTarget::ResumeList => self.list.begin(token),
            RequestTarget::Upload => self.upload.begin(token),
            RequestTarget::Detail(id) => {
                self.details.entry(id).or_default().begin(token);
                self.detail_view.begin(token);
            }
        }
    }

    /// Replace the pending upload. Clears any visible error.
    pub fn set_pending(&mut self, pending: PendingUpload) {
        self.pending = Some(pending);
        self.error = None;
    }

    /// Show `condition`, replacing whatever error was visible.
    pub fn set_error(&mut self, condition: ErrorCondition) {
        self.error = Some(condition);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Remove the visible error if it belongs to `target`.
    pub fn clear_error_for(&mut self, target: RequestTarget) {
        if self
            .error
            .as_ref()
            .is_some_and(|e| e.target() == Some(target))
        {
            self.error = None;
        }
    }

    /// Close the detail view. A detail fetch still in flight will no longer
    /// reopen it, though its failure is still reported.
    pub fn close_detail(&mut self) {
        self.selected_detail = None;
        self.detail_open = false;
        self.detail_view.abandon();
    }

    /// Apply a list load. The list is replaced wholesale on success.
    pub fn apply_list(
        &mut self,
        token: RequestToken,
        result: Result<Vec<ResumeSummary>, ErrorCondition>,
    ) -> Applied {
        if !self.list.complete(token) {
            return Applied::Stale;
        }
        match result {
            Ok(resumes) => {
                self.resumes = resumes;
                self.clear_error_for(RequestTarget::ResumeList);
                Applied::Succeeded
            }
            Err(condition) => {
                self.set_error(condition);
                Applied::Failed
            }
        }
    }

    /// Apply an upload of `file`. The pending upload is cleared on success
    /// unless another file was selected in the meantime.
    pub fn apply_upload(
        &mut self,
        token: RequestToken,
        file: &ValidFile,
        result: Result<ResumeDetail, ErrorCondition>,
    ) -> Applied {
        if !self.upload.complete(token) {
            return Applied::Stale;
        }
        match result {
            Ok(detail) => {
                self.last_uploaded = Some(detail);
                if self.pending.as_ref().is_some_and(|p| &p.file == file) {
                    self.pending = None;
                }
                self.clear_error_for(RequestTarget::Upload);
                Applied::Succeeded
            }
            Err(condition) => {
                self.set_error(condition);
                Applied::Failed
            }
        }
    }

    /// Apply a detail fetch for `id`.
    ///
    /// Staleness is decided per id: only a newer fetch of the same resume
    /// supersedes this one. A current failure always sets the error. A current
    /// success opens the view only if this fetch is still the most recently
    /// requested open and the view was not closed in the meantime.
    pub fn apply_detail(
        &mut self,
        token: RequestToken,
        id: ResumeId,
        result: Result<ResumeDetail, ErrorCondition>,
    ) -> Applied {
        let current = self
            .details
            .get_mut(&id)
            .is_some_and(|slot| slot.complete(token));
        if !current {
            return Applied::Stale;
        }
        self.details.remove(&id);
        let opens_view = self.detail_view.complete(token);

        match result {
            Ok(detail) => {
                if opens_view {
                    self.selected_detail = Some(detail);
                    self.detail_open = true;
                }
                self.clear_error_for(RequestTarget::Detail(id));
                Applied::Succeeded
            }
            Err(condition) => {
                self.set_error(condition);
                Applied::Failed
            }
        }
    }
}
