//! Message handling for the ViewController.

use crate::state::Applied;

use super::{SessionMessage, ViewController};

impl ViewController {
    /// Apply a completed request to the session.
    ///
    /// Messages for a superseded request, or arriving after unmount, change
    /// nothing.
    pub fn handle_message(&mut self, msg: SessionMessage) {
        self.in_flight = self.in_flight.saturating_sub(1);

        let Some(store) = self.store.as_mut() else {
            tracing::debug!("Dropping result for token {} after unmount", msg.token());
            return;
        };

        let applied = match msg {
            SessionMessage::ResumesLoaded { token, result } => {
                let applied = store.apply_list(token, result);
                if applied == Applied::Succeeded {
                    tracing::debug!("Resume list now has {} entries", store.resumes().len());
                }
                applied
            }
            SessionMessage::UploadFinished {
                token,
                file,
                result,
            } => {
                let applied = store.apply_upload(token, &file, result);
                if applied == Applied::Succeeded {
                    tracing::info!("Uploaded {}, refreshing history", file.name());
                    self.refresh();
                }
                applied
            }
            SessionMessage::DetailLoaded { token, id, result } => {
                store.apply_detail(token, id, result)
            }
        };

        if applied == Applied::Stale {
            tracing::debug!("Ignoring superseded result");
        }
    }
}
