//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors, optionally after a delay, for testing purposes.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::traits::{FilePart, Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// File part (for multipart POST requests)
    pub part: Option<FilePart>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait before resolving to the inner response
    Delayed(Duration, Box<MockResponse>),
}

impl MockResponse {
    /// JSON response with the given status.
    pub fn json<T: serde::Serialize>(status: u16, value: &T) -> Self {
        MockResponse::Success(Response::json_body(status, value))
    }

    /// Wrap this response so it resolves after `delay`.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock HTTP client for testing.
///
/// Responses are looked up per URL: queued one-shot responses first (FIFO),
/// then the sticky response for an exact URL, then a prefix match, then the
/// default. Requests are recorded at dispatch time, before any delay elapses,
/// so the recording reflects initiation order.
///
/// # Example
///
/// ```ignore
/// use resume_client::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://127.0.0.1:8000/api/v1/resumes/",
///     MockResponse::json(200, &serde_json::json!([])),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Configured responses by URL pattern
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for a specific URL.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a one-shot response for an exact URL.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of recorded requests.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, part: Option<FilePart>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            part,
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        {
            let mut queued = self.queued.lock().unwrap();
            if let Some(response) = queued.get_mut(url).and_then(|q| q.pop_front()) {
                return Some(response);
            }
        }

        let responses = self.responses.lock().unwrap();

        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }

        // Longest prefix wins so "/resumes/1" is not shadowed by "/resumes/"
        let prefix_match = responses
            .iter()
            .filter(|(pattern, _)| url.starts_with(pattern.as_str()))
            .max_by_key(|(pattern, _)| pattern.len())
            .map(|(_, response)| response.clone());
        if prefix_match.is_some() {
            return prefix_match;
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    async fn resolve(&self, url: &str) -> Result<Response, HttpError> {
        let mut next = self.get_response(url);
        loop {
            match next.take() {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*inner);
                }
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for URL: {}",
                        url
                    )))
                }
            }
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.resolve(url).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        part: &FilePart,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(part.clone()));
        self.resolve(url).await
    }
}
