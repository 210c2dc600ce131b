//! Reqwest-based HTTP client adapter.
//!
//! This module provides the production HTTP client implementation using reqwest,
//! implementing the [`HttpClient`] trait from `crate::traits`.

use async_trait::async_trait;

use crate::traits::{FilePart, Headers, HttpClient, HttpError, Response};

/// Content type used for a file part whose declared type does not parse.
pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

/// HTTP client implementation using reqwest.
///
/// This adapter wraps a `reqwest::Client` and implements the [`HttpClient`] trait,
/// providing GET and single-file multipart POST operations.
///
/// # Example
///
/// ```ignore
/// use resume_client::adapters::ReqwestHttpClient;
/// use resume_client::traits::{Headers, HttpClient};
///
/// let client = ReqwestHttpClient::new();
/// let response = client.get("http://127.0.0.1:8000/api/v1/resumes/", &Headers::new()).await?;
/// println!("Status: {}", response.status);
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a new ReqwestHttpClient with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a new ReqwestHttpClient with a custom reqwest::Client.
    ///
    /// This allows for advanced configuration like connection pools or TLS
    /// settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying reqwest::Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }

    /// Convert reqwest error to HttpError.
    fn convert_error(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::ConnectionFailed(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else if err.is_body() || err.is_decode() {
            HttpError::Io(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    /// Convert reqwest headers to our Headers type.
    fn convert_headers(headers: &reqwest::header::HeaderMap) -> Headers {
        headers
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.to_string(), v.to_string()))
            })
            .collect()
    }

    /// Apply headers to a request builder.
    fn apply_headers(
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> reqwest::RequestBuilder {
        let mut builder = builder;
        for (key, value) in headers {
            builder = builder.header(key, value);
        }
        builder
    }

    /// Build the multipart form for a single file part.
    ///
    /// A content type reqwest cannot parse is sent as
    /// `application/octet-stream` rather than failing locally.
    fn build_form(part: &FilePart) -> reqwest::multipart::Form {
        let file = || {
            reqwest::multipart::Part::bytes(part.bytes.to_vec()).file_name(part.file_name.clone())
        };
        let file = match file().mime_str(&part.content_type) {
            Ok(file) => file,
            Err(err) => {
                tracing::warn!(
                    "Unparseable media type {:?} ({}), sending as {}",
                    part.content_type,
                    err,
                    FALLBACK_CONTENT_TYPE
                );
                file().mime_str(FALLBACK_CONTENT_TYPE).unwrap_or_else(|_| file())
            }
        };
        reqwest::multipart::Form::new().part(part.field.clone(), file)
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<Response, HttpError> {
        let response = builder.send().await.map_err(Self::convert_error)?;

        let status = response.status().as_u16();
        let response_headers = Self::convert_headers(response.headers());
        let body = response.bytes().await.map_err(Self::convert_error)?;

        Ok(Response::with_headers(status, response_headers, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let builder = self.client.get(url);
        let builder = Self::apply_headers(builder, headers);
        self.send(builder).await
    }

    async fn post_multipart(
        &self,
        url: &str,
        part: &FilePart,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let form = Self::build_form(part);
        let builder = self.client.post(url).multipart(form);
        let builder = Self::apply_headers(builder, headers);
        self.send(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_reqwest_http_client_new() {
        let client = ReqwestHttpClient::new();
        let _inner = client.inner();
    }

    #[test]
    fn test_reqwest_http_client_with_custom_client() {
        let custom = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap();
        let client = ReqwestHttpClient::with_client(custom);
        let _ = client.inner();
    }

    #[test]
    fn test_convert_headers() {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::CONTENT_TYPE,
            "application/json".parse().unwrap(),
        );

        let headers = ReqwestHttpClient::convert_headers(&header_map);
        assert_eq!(
            headers.get("content-type"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_build_form_accepts_docx() {
        let part = FilePart::new(
            "file",
            "cv.docx",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            Bytes::from("PK"),
        );
        let form = ReqwestHttpClient::build_form(&part);
        assert!(!form.boundary().is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_media_type_is_still_sent() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::new();
        let part = FilePart::new("file", "cv.pdf", "not a mime", Bytes::from("%PDF"));
        let response = client
            .post_multipart(&format!("{}/upload", server.uri()), &part, &Headers::new())
            .await
            .unwrap();
        assert_eq!(response.status, 201);

        let requests = server.received_requests().await.unwrap();
        let body = String::from_utf8_lossy(&requests[0].body).to_string();
        assert!(body.contains(FALLBACK_CONTENT_TYPE));
        assert!(body.contains("filename=\"cv.pdf\""));
    }

    #[tokio::test]
    async fn test_get_connection_refused() {
        let client = ReqwestHttpClient::new();
        let result = client
            .get("http://127.0.0.1:59999/api/v1/resumes/", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::ConnectionFailed(_)) | Err(HttpError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_get_invalid_url() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not-a-valid-url", &Headers::new()).await;
        assert!(result.is_err());
    }
}
