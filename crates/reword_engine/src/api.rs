use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::Serialize;

use crate::config::ServiceSettings;
use crate::types::{ApiError, PollOutcome};

/// One transform job as the submission endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformJob {
    pub page_url: String,
    pub artifact_file_name: String,
    pub instruction: Option<String>,
}

#[derive(Serialize)]
struct ScrapeBody<'a> {
    #[serde(rename = "pageURL")]
    page_url: &'a str,
    #[serde(rename = "modifiedPageFileName")]
    file_name: &'a str,
    #[serde(rename = "prompt", skip_serializing_if = "Option::is_none")]
    prompt: Option<&'a str>,
}

#[derive(Serialize)]
struct DownloadBody<'a> {
    #[serde(rename = "fileName")]
    file_name: &'a str,
}

/// Seam between the orchestrator and the remote transform service.
#[async_trait::async_trait]
pub trait TransformApi: Send + Sync {
    /// Fire the transform request. Only transport-level success matters;
    /// the artifact arrives via polling, never through this call.
    async fn submit(&self, job: &TransformJob) -> Result<(), ApiError>;

    /// Ask once whether the named artifact is finished.
    async fn poll_artifact(&self, file_name: &str) -> Result<PollOutcome, ApiError>;
}

#[derive(Debug, Clone)]
pub struct HttpTransformApi {
    client: reqwest::Client,
    settings: ServiceSettings,
}

impl HttpTransformApi {
    pub fn new(settings: ServiceSettings) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;
        Ok(Self { client, settings })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.settings.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl TransformApi for HttpTransformApi {
    async fn submit(&self, job: &TransformJob) -> Result<(), ApiError> {
        let body = ScrapeBody {
            page_url: &job.page_url,
            file_name: &job.artifact_file_name,
            prompt: job.instruction.as_deref(),
        };
        let response = self
            .client
            .post(self.endpoint("scrape"))
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::SubmitStatus(status.as_u16()));
        }
        log::info!(
            "Submitted transform job for {} as {}",
            job.page_url,
            job.artifact_file_name
        );
        Ok(())
    }

    async fn poll_artifact(&self, file_name: &str) -> Result<PollOutcome, ApiError> {
        log::debug!("Sending download request for {file_name}");
        let response = self
            .client
            .post(self.endpoint("download"))
            .header(ACCEPT, "application/json")
            .json(&DownloadBody { file_name })
            .send()
            .await?;

        let status = response.status();
        // 202 is the service's "accepted, still processing" answer; every
        // other non-2xx status also counts as not-ready rather than an error.
        if status == StatusCode::ACCEPTED || !status.is_success() {
            return Ok(PollOutcome::Pending);
        }

        let bytes = response.bytes().await?;
        Ok(PollOutcome::Ready(bytes))
    }
}
