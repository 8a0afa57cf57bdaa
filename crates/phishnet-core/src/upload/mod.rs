//! Corpus (PhishBowl) uploads.

pub mod model;

use crate::analysis::{validate_body, validate_image};
use crate::analysis::model::EmailContent;
use crate::error::PhishnetResult;
use model::{LabeledEmail, SampleLabel, UploadRequest};

/// Check an upload before it goes on the wire.
pub fn validate_upload(request: &UploadRequest) -> PhishnetResult<()> {
    match request {
        UploadRequest::Email(email) => validate_body(&email.body),
        UploadRequest::Image { content, .. } => validate_image(content),
    }
}

impl LabeledEmail {
    pub fn from_content(content: EmailContent, label: SampleLabel) -> Self {
        Self {
            sender: content.sender,
            subject: content.subject,
            body: content.body,
            label,
        }
    }
}
