//! Common test utilities for integration tests.
//!
//! Fixtures for server payloads, files and a controller wired to a
//! [`MockHttpClient`].
//!
//! # Example
//!
//! ```ignore
//! let mock = MockHttpClient::new();
//! mock.set_response(&list_url(), MockResponse::json(200, &json!([])));
//! let mut controller = mounted_controller(&mock);
//! controller.settle().await;
//! ```
#![allow(dead_code)]

pub mod fixtures;

pub use fixtures::*;

use std::sync::Arc;

use resume_client::adapters::mock::MockHttpClient;
use resume_client::config::ClientConfig;
use resume_client::gateway::ResumeGateway;
use resume_client::ViewController;

pub const BASE_URL: &str = "http://resumes.test";

pub fn list_url() -> String {
    format!("{}/api/v1/resumes/", BASE_URL)
}

pub fn upload_url() -> String {
    format!("{}/api/v1/resumes/upload", BASE_URL)
}

pub fn detail_url(id: i64) -> String {
    format!("{}/api/v1/resumes/{}", BASE_URL, id)
}

pub fn test_config() -> ClientConfig {
    ClientConfig::new().with_base_url(BASE_URL)
}

pub fn mock_gateway(mock: &MockHttpClient) -> ResumeGateway {
    ResumeGateway::new(Arc::new(mock.clone()), test_config())
}

/// A controller mounted on `mock`. The initial list load is in flight.
pub fn mounted_controller(mock: &MockHttpClient) -> ViewController {
    let mut controller = ViewController::new();
    controller.mount(mock_gateway(mock));
    controller
}
