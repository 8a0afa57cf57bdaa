//! Analysis service client.
//!
//! Email text goes to `/api/analyze/email` as JSON; screenshots go to
//! `/api/analyze/image` as multipart with a single `file` part.

use phishnet_core::analysis::{self, model::EmailContent};
use phishnet_core::{AnalysisRequest, AnalysisResult, ImageContent, SubmissionGuard};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport;

pub const EMAIL_PATH: &str = "/api/analyze/email";
pub const IMAGE_PATH: &str = "/api/analyze/image";

/// Client for one analysis form. At most one submission is in flight at a time.
#[derive(Clone)]
pub struct AnalysisClient {
    config: ClientConfig,
    client: reqwest::Client,
    guard: SubmissionGuard,
}

impl AnalysisClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = config.http_client();
        Self {
            config,
            client,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Whether a submission is pending.
    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Validate, send and strictly decode one analysis request.
    pub async fn submit(&self, request: AnalysisRequest) -> ClientResult<AnalysisResult> {
        analysis::validate_request(&request)?;
        let _in_flight = self.guard.try_begin().ok_or(ClientError::Busy)?;

        let kind = request.kind();
        let builder = match request {
            AnalysisRequest::Email(email) => self.email_request(&email),
            AnalysisRequest::Image(image) => self.image_request(image)?,
        };

        debug!(kind, "Submitting analysis request");
        let body = transport::send(builder).await?;
        let result = analysis::decode_result(&body)?;

        info!(kind, label = %result.label, confidence = result.confidence, "Analysis complete");
        Ok(result)
    }

    pub async fn analyze_email(&self, email: EmailContent) -> ClientResult<AnalysisResult> {
        self.submit(AnalysisRequest::Email(email)).await
    }

    pub async fn analyze_image(&self, image: ImageContent) -> ClientResult<AnalysisResult> {
        self.submit(AnalysisRequest::Image(image)).await
    }

    fn email_request(&self, email: &EmailContent) -> reqwest::RequestBuilder {
        self.client
            .post(self.config.endpoint(EMAIL_PATH))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(email)
    }

    fn image_request(&self, image: ImageContent) -> ClientResult<reqwest::RequestBuilder> {
        let form = transport::image_form(image)?;
        Ok(self.client.post(self.config.endpoint(IMAGE_PATH)).multipart(form))
    }
}
