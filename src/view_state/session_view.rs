//! Session-level view state
//!
//! A borrowed snapshot of the session store for one render pass.

use crate::app::Tab;
use crate::error::ErrorCondition;
use crate::models::{PendingUpload, ResumeDetail, ResumeSummary};
use crate::state::SessionStore;

use super::format::{format_size_kb, format_upload_date};

/// One row of the history table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    pub resume: &'a ResumeSummary,
    /// Upload date, e.g. `May 1, 2024`
    pub uploaded_label: String,
    /// Candidate name or `-`
    pub name_label: &'a str,
    /// A detail fetch for this row is in flight
    pub is_loading: bool,
}

/// View state for the resume screen
#[derive(Debug, Clone, Copy)]
pub struct SessionViewState<'a> {
    pub active_tab: Tab,
    pub resumes: &'a [ResumeSummary],
    pub pending: Option<&'a PendingUpload>,
    /// Result of the last successful upload
    pub last_uploaded: Option<&'a ResumeDetail>,
    /// Detail shown in the detail view, when open
    pub selected_detail: Option<&'a ResumeDetail>,
    pub detail_open: bool,
    pub error: Option<&'a ErrorCondition>,
    pub is_uploading: bool,
    pub is_list_loading: bool,
    store: &'a SessionStore,
}

impl<'a> SessionViewState<'a> {
    pub fn new(store: &'a SessionStore, active_tab: Tab) -> Self {
        Self {
            active_tab,
            resumes: store.resumes(),
            pending: store.pending(),
            last_uploaded: store.last_uploaded(),
            selected_detail: store.selected_detail().filter(|_| store.is_detail_open()),
            detail_open: store.is_detail_open(),
            error: store.error(),
            is_uploading: store.is_uploading(),
            is_list_loading: store.is_list_loading(),
            store,
        }
    }

    pub fn history_rows(&self) -> Vec<HistoryRow<'a>> {
        let store = self.store;
        self.resumes
            .iter()
            .map(|resume| HistoryRow {
                resume,
                uploaded_label: format_upload_date(&resume.uploaded_at),
                name_label: resume.name.as_deref().unwrap_or("-"),
                is_loading: store.is_detail_loading(resume.id),
            })
            .collect()
    }

    /// Pending file size, e.g. `2048.0 KB`.
    pub fn pending_size_label(&self) -> Option<String> {
        self.pending.map(|p| format_size_kb(p.size))
    }

    /// Upload button is enabled only with a pending file and no upload running.
    pub fn can_upload(&self) -> bool {
        self.pending.is_some() && !self.is_uploading
    }

    pub fn can_retry(&self) -> bool {
        self.error.is_some_and(ErrorCondition::is_retryable)
    }

    pub fn is_idle(&self) -> bool {
        self.store.is_idle()
    }
}
