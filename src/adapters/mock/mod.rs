//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable and delayed responses

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
