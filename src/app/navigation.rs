//! Local, request-free intents for the ViewController.

use crate::error::ErrorCondition;
use crate::models::{PendingUpload, SelectedFile};
use crate::validator;

use super::{Tab, ViewController};

impl ViewController {
    /// Validate `file` and make it the pending upload.
    ///
    /// A rejected file sets an error with no retry and leaves any previous
    /// pending upload in place. Returns whether the file was accepted.
    pub fn select_file(&mut self, file: SelectedFile) -> bool {
        let limit = match &self.gateway {
            Some(gateway) => gateway.config().max_upload_bytes,
            None => return false,
        };
        let Some(store) = self.store.as_mut() else {
            return false;
        };

        match validator::validate_with_limit(file, limit) {
            Ok(valid) => {
                tracing::debug!("Selected {} ({} bytes)", valid.name(), valid.size());
                store.set_pending(PendingUpload::from(valid));
                true
            }
            Err(err) => {
                tracing::debug!("Rejected file [{}]: {}", err.error_code(), err);
                store.set_error(ErrorCondition::from_validation(err));
                false
            }
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn close_detail(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.close_detail();
        }
    }

    pub fn dismiss_error(&mut self) {
        if let Some(store) = self.store.as_mut() {
            store.dismiss_error();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::config::ClientConfig;
    use crate::error::{ResumeError, ValidationError};
    use crate::gateway::ResumeGateway;
    use bytes::Bytes;
    use std::sync::Arc;

    async fn mounted(config: ClientConfig) -> (ViewController, MockHttpClient) {
        let mock = MockHttpClient::new();
        mock.set_default_response(MockResponse::json(200, &serde_json::json!([])));
        let mut controller = ViewController::new();
        controller.mount(ResumeGateway::new(Arc::new(mock.clone()), config));
        controller.settle().await;
        (controller, mock)
    }

    fn pdf(name: &str, size: usize) -> SelectedFile {
        SelectedFile::new(name, "application/pdf", Bytes::from(vec![b'%'; size]))
    }

    #[tokio::test]
    async fn test_select_file_sets_pending() {
        let (mut controller, mock) = mounted(ClientConfig::new()).await;

        assert!(controller.select_file(pdf("cv.pdf", 2 * 1024 * 1024)));
        let pending = controller.store().unwrap().pending().unwrap();
        assert_eq!(pending.name, "cv.pdf");
        assert_eq!(pending.size, 2 * 1024 * 1024);
        assert!(controller.store().unwrap().error().is_none());
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_rejected_file_keeps_previous_pending() {
        let (mut controller, _mock) = mounted(ClientConfig::new()).await;
        controller.select_file(pdf("first.pdf", 10));

        let rejected = SelectedFile::new("photo.png", "image/png", Bytes::from(vec![0u8; 10]));
        assert!(!controller.select_file(rejected));

        let store = controller.store().unwrap();
        assert_eq!(store.pending().map(|p| p.name.as_str()), Some("first.pdf"));
        let error = store.error().unwrap();
        assert_eq!(error.status, 400);
        assert!(matches!(
            error.error,
            ResumeError::Validation(ValidationError::UnsupportedFormat { .. })
        ));
    }

    #[tokio::test]
    async fn test_selection_uses_configured_limit() {
        let (mut controller, _mock) =
            mounted(ClientConfig::new().with_max_upload_bytes(100)).await;

        assert!(!controller.select_file(pdf("big.pdf", 101)));
        assert!(matches!(
            controller.store().unwrap().error().map(|e| &e.error),
            Some(ResumeError::Validation(ValidationError::FileTooLarge { .. }))
        ));

        assert!(controller.select_file(pdf("ok.pdf", 100)));
        assert!(controller.store().unwrap().error().is_none());
    }

    #[tokio::test]
    async fn test_switch_tab_changes_only_tab() {
        let (mut controller, mock) = mounted(ClientConfig::new()).await;
        controller.switch_tab(Tab::History);
        assert_eq!(controller.active_tab(), Tab::History);
        assert_eq!(controller.in_flight(), 0);
        assert_eq!(mock.request_count(), 1);
    }

    #[tokio::test]
    async fn test_dismiss_error() {
        let (mut controller, _mock) = mounted(ClientConfig::new()).await;
        controller.select_file(SelectedFile::new("a.txt", "text/plain", Bytes::new()));
        assert!(controller.store().unwrap().error().is_some());

        controller.dismiss_error();
        assert!(controller.store().unwrap().error().is_none());
    }
}
