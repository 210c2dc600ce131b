//! Request-starting actions for the ViewController.
//!
//! Each action marks its target as loading in the store, then spawns the
//! gateway call. The task sends its tagged result back over the message
//! channel.

use crate::error::{RequestTarget, RetryAction};
use crate::gateway::ResumeGateway;
use crate::models::{ResumeId, ValidFile};
use crate::state::RequestToken;

use super::{SessionMessage, ViewController};

impl ViewController {
    /// Reload the resume list. Safe to call while a load is in flight; only
    /// the latest load is applied.
    pub fn refresh(&mut self) {
        let Some((gateway, token)) = self.start(RequestTarget::ResumeList) else {
            return;
        };
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = gateway.list_resumes().await;
            let _ = tx.send(SessionMessage::ResumesLoaded { token, result });
        });
    }

    /// Upload the pending file. Does nothing without a pending upload.
    pub fn upload(&mut self) {
        let Some(file) = self
            .store
            .as_ref()
            .and_then(|store| store.pending())
            .map(|pending| pending.file.clone())
        else {
            tracing::debug!("Upload requested with no pending file");
            return;
        };
        self.spawn_upload(file);
    }

    /// Fetch the detail record for `id` and open it when it arrives.
    pub fn view_details(&mut self, id: ResumeId) {
        let Some((gateway, token)) = self.start(RequestTarget::Detail(id)) else {
            return;
        };
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = gateway.get_resume_detail(id).await;
            let _ = tx.send(SessionMessage::DetailLoaded { token, id, result });
        });
    }

    /// Re-run the request behind the visible error.
    ///
    /// Returns `false` when there is no error or it carries no retry. The
    /// error is cleared before the request restarts.
    pub fn retry(&mut self) -> bool {
        let Some(store) = self.store.as_mut() else {
            return false;
        };
        let Some(action) = store.error().and_then(|e| e.retry.clone()) else {
            return false;
        };
        store.dismiss_error();

        tracing::info!("Retrying {}", action.target());
        match action {
            RetryAction::ReloadList => self.refresh(),
            RetryAction::Upload(file) => self.spawn_upload(file),
            RetryAction::FetchDetail(id) => self.view_details(id),
        }
        true
    }

    fn spawn_upload(&mut self, file: ValidFile) {
        let Some((gateway, token)) = self.start(RequestTarget::Upload) else {
            return;
        };
        let tx = self.message_tx.clone();

        tokio::spawn(async move {
            let result = gateway.upload_resume(&file).await;
            let _ = tx.send(SessionMessage::UploadFinished {
                token,
                file,
                result,
            });
        });
    }

    /// Issue a token, mark `target` loading and count the request as in
    /// flight. `None` when no session is mounted.
    fn start(&mut self, target: RequestTarget) -> Option<(ResumeGateway, RequestToken)> {
        let gateway = self.gateway.clone()?;
        let token = self.issue_token();
        self.store.as_mut()?.begin(target, token);
        self.in_flight += 1;
        tracing::debug!("Starting {} request (token {})", target, token);
        Some((gateway, token))
    }
}
