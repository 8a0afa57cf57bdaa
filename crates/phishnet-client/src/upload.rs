//! PhishBowl corpus client.

use phishnet_core::upload::{self, model::LabeledEmail};
use phishnet_core::{ImageContent, SampleLabel, SubmissionGuard, UploadReceipt, UploadRequest};
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::transport;

pub const ADD_ONE_PATH: &str = "/api/phishbowl/add_one";
pub const ADD_IMAGE_PATH: &str = "/api/phishbowl/add_image";
pub const COUNT_PATH: &str = "/api/phishbowl/count";

/// Client for contributing samples to the corpus.
#[derive(Clone)]
pub struct UploadClient {
    config: ClientConfig,
    client: reqwest::Client,
    guard: SubmissionGuard,
}

impl UploadClient {
    pub fn new(config: ClientConfig) -> Self {
        let client = config.http_client();
        Self {
            config,
            client,
            guard: SubmissionGuard::new(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.guard.is_busy()
    }

    /// Validate and send one labeled sample.
    pub async fn upload(&self, request: UploadRequest) -> ClientResult<UploadReceipt> {
        upload::validate_upload(&request)?;
        let _in_flight = self.guard.try_begin().ok_or(ClientError::Busy)?;

        let kind = request.kind();
        let label = request.label();
        let builder = match request {
            UploadRequest::Email(email) => self.email_request(&email),
            UploadRequest::Image { content, label } => self.image_request(content, label)?,
        };

        debug!(kind, label = label.as_number(), anonymize = self.config.anonymize, "Uploading sample");
        let body = transport::send(builder).await?;
        let receipt = UploadReceipt(transport::decode_json(&body)?);

        info!(kind, "Sample added to the PhishBowl");
        Ok(receipt)
    }

    pub async fn upload_email(&self, email: LabeledEmail) -> ClientResult<UploadReceipt> {
        self.upload(UploadRequest::Email(email)).await
    }

    pub async fn upload_image(&self, content: ImageContent, label: SampleLabel) -> ClientResult<UploadReceipt> {
        self.upload(UploadRequest::Image { content, label }).await
    }

    /// Number of samples currently in the corpus.
    pub async fn count(&self) -> ClientResult<u64> {
        let body = transport::send(self.client.get(self.config.endpoint(COUNT_PATH))).await?;
        match transport::decode_json(&body)? {
            serde_json::Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| ClientError::Protocol(format!("count {} is not a whole number", n))),
            other => Err(ClientError::Protocol(format!("expected a count, got {}", other))),
        }
    }

    fn anonymize_param(&self) -> &'static str {
        if self.config.anonymize {
            "true"
        } else {
            "false"
        }
    }

    fn email_request(&self, email: &LabeledEmail) -> reqwest::RequestBuilder {
        self.client
            .post(self.config.endpoint(ADD_ONE_PATH))
            .query(&[("anonymize", self.anonymize_param())])
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(email)
    }

    fn image_request(&self, content: ImageContent, label: SampleLabel) -> ClientResult<reqwest::RequestBuilder> {
        let form = transport::image_form(content)?;
        let label = label.as_number().to_string();
        Ok(self
            .client
            .post(self.config.endpoint(ADD_IMAGE_PATH))
            .query(&[("label", label.as_str()), ("anonymize", self.anonymize_param())])
            .multipart(form))
    }
}
