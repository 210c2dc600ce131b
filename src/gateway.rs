//! Resume service API client.
//!
//! [`ResumeGateway`] is the only component that talks to the backend. Every
//! failure leaves this module already classified as an [`ErrorCondition`]
//! whose retry replays the exact request that failed. Nothing here retries on
//! its own.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::ReqwestHttpClient;
use crate::config::ClientConfig;
use crate::error::{classify, ErrorCondition, Failure, RetryAction};
use crate::models::{ResumeDetail, ResumeId, ResumeSummary, ValidFile};
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// List endpoint. The trailing slash is part of the route.
pub const RESUMES_PATH: &str = "/api/v1/resumes/";
pub const UPLOAD_PATH: &str = "/api/v1/resumes/upload";

pub const LIST_FALLBACK_MESSAGE: &str = "failed to fetch resumes, please try again later.";
pub const UPLOAD_FALLBACK_MESSAGE: &str = "failed to upload resume, please try again.";
pub const DETAIL_FALLBACK_MESSAGE: &str = "failed to fetch resume details, please try again.";

pub fn detail_path(id: ResumeId) -> String {
    format!("{}{}", RESUMES_PATH, id)
}

/// Successful result of replaying a [`RetryAction`].
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayOutput {
    List(Vec<ResumeSummary>),
    Uploaded(ResumeDetail),
    Detail(ResumeDetail),
}

/// Client for the resume REST API.
#[derive(Clone)]
pub struct ResumeGateway {
    client: Arc<dyn HttpClient>,
    config: ClientConfig,
}

impl std::fmt::Debug for ResumeGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResumeGateway")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ResumeGateway {
    pub fn new(client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Gateway backed by the production reqwest client.
    pub fn with_reqwest(config: ClientConfig) -> Self {
        Self::new(Arc::new(ReqwestHttpClient::new()), config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetch the full resume list (`GET /api/v1/resumes/`).
    pub async fn list_resumes(&self) -> Result<Vec<ResumeSummary>, ErrorCondition> {
        let url = self.config.endpoint(RESUMES_PATH);
        let result = self.get_json(&url).await;
        self.finish(result, LIST_FALLBACK_MESSAGE, RetryAction::ReloadList)
    }

    /// Submit a validated file (`POST /api/v1/resumes/upload`).
    ///
    /// Bounded by the configured upload timeout. The returned detail may not
    /// carry `llm_analysis` yet.
    pub async fn upload_resume(&self, file: &ValidFile) -> Result<ResumeDetail, ErrorCondition> {
        let url = self.config.endpoint(UPLOAD_PATH);
        let part = file.to_part();
        let timeout = self.config.upload_timeout();

        tracing::debug!(
            "POST {} ({} bytes, {})",
            url,
            file.size(),
            file.media_type()
        );
        let sent = with_timeout(
            Some(timeout),
            self.client.post_multipart(&url, &part, &json_headers()),
        )
        .await;
        let result = sent.and_then(decode::<ResumeDetail>);
        self.finish(
            result,
            UPLOAD_FALLBACK_MESSAGE,
            RetryAction::Upload(file.clone()),
        )
    }

    /// Fetch one resume's full record (`GET /api/v1/resumes/{id}`).
    pub async fn get_resume_detail(&self, id: ResumeId) -> Result<ResumeDetail, ErrorCondition> {
        let url = self.config.endpoint(&detail_path(id));
        let result = self.get_json(&url).await;
        self.finish(result, DETAIL_FALLBACK_MESSAGE, RetryAction::FetchDetail(id))
    }

    /// Run the operation a retry action describes.
    pub async fn execute(&self, action: &RetryAction) -> Result<GatewayOutput, ErrorCondition> {
        match action {
            RetryAction::ReloadList => self.list_resumes().await.map(GatewayOutput::List),
            RetryAction::Upload(file) => {
                self.upload_resume(file).await.map(GatewayOutput::Uploaded)
            }
            RetryAction::FetchDetail(id) => {
                self.get_resume_detail(*id).await.map(GatewayOutput::Detail)
            }
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, Failure> {
        tracing::debug!("GET {}", url);
        let response = with_timeout(
            self.config.request_timeout(),
            self.client.get(url, &json_headers()),
        )
        .await?;
        decode(response)
    }

    fn finish<T>(
        &self,
        result: Result<T, Failure>,
        fallback: &str,
        retry: RetryAction,
    ) -> Result<T, ErrorCondition> {
        match result {
            Ok(value) => {
                tracing::info!("{} request completed", retry.target());
                Ok(value)
            }
            Err(failure) => {
                let condition = classify(&failure, fallback, Some(retry));
                tracing::warn!(
                    "{} request failed [{}]: {}",
                    condition.target().map(|t| t.to_string()).unwrap_or_default(),
                    condition.error.error_code(),
                    condition.error
                );
                Err(condition)
            }
        }
    }
}

fn json_headers() -> Headers {
    let mut headers = Headers::new();
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}

async fn with_timeout<F>(timeout: Option<Duration>, request: F) -> Result<Response, Failure>
where
    F: std::future::Future<Output = Result<Response, HttpError>>,
{
    let outcome = match timeout {
        Some(limit) => match tokio::time::timeout(limit, request).await {
            Ok(outcome) => outcome,
            Err(_) => Err(HttpError::Timeout(format!(
                "no response within {}s",
                limit.as_secs()
            ))),
        },
        None => request.await,
    };
    outcome.map_err(Failure::NoResponse)
}

fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, Failure> {
    if !response.is_success() {
        return Err(Failure::Status {
            status: response.status,
            body: response.body,
        });
    }
    response.json().map_err(|e| Failure::Undecodable {
        status: response.status,
        reason: e.to_string(),
    })
}
