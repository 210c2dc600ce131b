//! Client configuration.
//!
//! Use the builder methods to customize the client; every field has a default
//! that matches the resume service's own development setup.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default origin of the resume service
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
/// Client-side ceiling for one upload, independent of server processing time
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;
/// Largest file accepted for upload (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Configuration for the resume gateway.
///
/// # Example
///
/// ```ignore
/// use resume_client::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://resumes.internal")
///     .with_upload_timeout(std::time::Duration::from_secs(45));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the resume service, without the `/api/v1` prefix
    pub base_url: String,
    /// Upload timeout in seconds (default: 30)
    pub upload_timeout_secs: u64,
    /// Timeout for list and detail requests in seconds (default: none)
    pub request_timeout_secs: Option<u64>,
    /// Maximum upload size in bytes (default: 10 MiB)
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            upload_timeout_secs: DEFAULT_UPLOAD_TIMEOUT_SECS,
            request_timeout_secs: None,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClientConfig {
    /// Create a new ClientConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service origin.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the upload timeout, rounded up to whole seconds (at least one).
    pub fn with_upload_timeout(mut self, timeout: Duration) -> Self {
        self.upload_timeout_secs = whole_secs(timeout);
        self
    }

    /// Set a timeout for list and detail requests, rounded up like
    /// [`with_upload_timeout`](Self::with_upload_timeout).
    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout_secs = timeout.map(whole_secs);
        self
    }

    /// Set the maximum upload size.
    pub fn with_max_upload_bytes(mut self, bytes: u64) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    /// Effective upload timeout; a stored zero counts as one second.
    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs.max(1))
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .map(|secs| Duration::from_secs(secs.max(1)))
    }

    /// Join `path` onto the base URL with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Seconds in `timeout`, rounded up and never zero.
fn whole_secs(timeout: Duration) -> u64 {
    let secs = timeout.as_secs() + u64::from(timeout.subsec_nanos() > 0);
    secs.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.upload_timeout(), Duration::from_secs(30));
        assert!(config.request_timeout().is_none());
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_base_url("https://resumes.example.com/")
            .with_upload_timeout(Duration::from_secs(45))
            .with_request_timeout(Some(Duration::from_secs(10)))
            .with_max_upload_bytes(1024);

        assert_eq!(config.base_url, "https://resumes.example.com/");
        assert_eq!(config.upload_timeout_secs, 45);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.max_upload_bytes, 1024);
    }

    #[test]
    fn test_sub_second_timeouts_round_up() {
        let config = ClientConfig::new()
            .with_upload_timeout(Duration::from_millis(500))
            .with_request_timeout(Some(Duration::from_millis(1500)));
        assert_eq!(config.upload_timeout(), Duration::from_secs(1));
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn test_zero_timeout_becomes_one_second() {
        let config = ClientConfig::new()
            .with_upload_timeout(Duration::ZERO)
            .with_request_timeout(Some(Duration::ZERO));
        assert_eq!(config.upload_timeout_secs, 1);
        assert_eq!(config.request_timeout_secs, Some(1));

        let loaded: ClientConfig =
            serde_json::from_str(r#"{"upload_timeout_secs": 0, "request_timeout_secs": 0}"#)
                .unwrap();
        assert_eq!(loaded.upload_timeout(), Duration::from_secs(1));
        assert_eq!(loaded.request_timeout(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = ClientConfig::new().with_base_url("http://localhost:8000/");
        assert_eq!(
            config.endpoint("/api/v1/resumes/"),
            "http://localhost:8000/api/v1/resumes/"
        );

        let bare = ClientConfig::new().with_base_url("http://localhost:8000");
        assert_eq!(
            bare.endpoint("api/v1/resumes/4"),
            "http://localhost:8000/api/v1/resumes/4"
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ClientConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.5:9000"}"#).unwrap();
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.upload_timeout_secs, 30);
        assert_eq!(config.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
    }
}
