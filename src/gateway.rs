use crate::errors::{GatewayError, Operation};
use crate::models::{FeedbackRecord, FilterCriteria, SummaryKind, SummaryPayload, SummaryReport};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{info, warn};

pub type GatewayResult<T> = Result<T, GatewayError>;

/// Boundary to the remote feedback API. One request per call, no retries.
#[async_trait]
pub trait FeedbackApi: Send + Sync {
    async fn fetch_feedback(&self) -> GatewayResult<Vec<FeedbackRecord>>;

    async fn fetch_summary(&self) -> GatewayResult<SummaryPayload>;

    async fn fetch_filtered_feedback(&self, criteria: &FilterCriteria)
        -> GatewayResult<SummaryPayload>;

    async fn request_summary_report(&self, kind: SummaryKind) -> GatewayResult<SummaryReport>;
}

#[derive(Debug, Serialize)]
struct GenerateSummaryBody {
    #[serde(rename = "type")]
    kind: SummaryKind,
}

#[derive(Debug, Deserialize)]
struct GenerateSummaryReply {
    summary: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send<T: DeserializeOwned + Send>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> GatewayResult<T> {
        info!("{operation}");
        execute(request).await.map_err(|err| {
            warn!("{operation} failed: {err}");
            GatewayError::network(operation, err)
        })
    }
}

async fn execute<T: DeserializeOwned + Send>(request: RequestBuilder) -> Result<T, reqwest::Error> {
    request.send().await?.error_for_status()?.json::<T>().await
}

#[async_trait]
impl FeedbackApi for HttpGateway {
    async fn fetch_feedback(&self) -> GatewayResult<Vec<FeedbackRecord>> {
        let request = self.client.get(self.url("/feedback"));
        self.send(Operation::Feedback, request).await
    }

    async fn fetch_summary(&self) -> GatewayResult<SummaryPayload> {
        let request = self.client.get(self.url("/feedback-summary"));
        self.send(Operation::Summary, request).await
    }

    async fn fetch_filtered_feedback(
        &self,
        criteria: &FilterCriteria,
    ) -> GatewayResult<SummaryPayload> {
        let request = self
            .client
            .get(self.url("/filtered-feedback"))
            .query(criteria);
        self.send(Operation::FilteredFeedback, request).await
    }

    async fn request_summary_report(&self, kind: SummaryKind) -> GatewayResult<SummaryReport> {
        let operation = Operation::SummaryReport;
        let request = self
            .client
            .post(self.url("/generate-summary"))
            .json(&GenerateSummaryBody { kind });
        let reply: GenerateSummaryReply = self.send(operation, request).await?;

        if let Some(message) = reply.error.filter(|message| !message.is_empty()) {
            warn!("{operation} returned an error: {message}");
            return Err(GatewayError::Application(message));
        }

        match reply.summary {
            Some(text) => Ok(SummaryReport { text, kind }),
            None => {
                warn!("{operation} reply had neither summary nor error");
                Err(GatewayError::network(operation, "missing summary field"))
            }
        }
    }
}
