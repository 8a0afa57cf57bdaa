//! Client-side form checks run before anything is submitted.

use crate::analysis::model::{AnalysisRequest, EmailContent, ImageContent, ImageMime};
use crate::error::{PhishnetError, PhishnetResult};
use crate::upload::model::{LabeledEmail, SampleLabel, UploadRequest};

pub const BODY_REQUIRED: &str = "Body is required.";
pub const IMAGE_REQUIRED: &str = "Please upload an image.";
pub const INVALID_FILE_TYPE: &str = "Invalid file type. Please upload a supported image type.";

/// Raw values of the email form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailForm {
    pub sender: String,
    pub subject: String,
    pub body: String,
}

impl EmailForm {
    pub fn new(sender: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Turn the form into email content, rejecting an empty body.
    ///
    /// Sender and subject are sent as typed, empty strings included; the
    /// service requires both fields to be strings.
    pub fn into_content(self) -> PhishnetResult<EmailContent> {
        if self.body.trim().is_empty() {
            return Err(PhishnetError::validation(BODY_REQUIRED));
        }
        Ok(EmailContent {
            sender: Some(self.sender),
            subject: Some(self.subject),
            body: self.body,
        })
    }

    pub fn into_request(self) -> PhishnetResult<AnalysisRequest> {
        self.into_content().map(AnalysisRequest::Email)
    }

    pub fn into_upload(self, label: SampleLabel) -> PhishnetResult<UploadRequest> {
        let content = self.into_content()?;
        Ok(UploadRequest::Email(LabeledEmail::from_content(content, label)))
    }
}

/// A screenshot picked in the image form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSelection {
    content: ImageContent,
}

impl ImageSelection {
    /// Accept a file by its name, inferring the type from the extension.
    pub fn from_file(name: &str, bytes: Vec<u8>) -> PhishnetResult<Self> {
        let mime = ImageMime::from_path(std::path::Path::new(name))
            .ok_or_else(|| PhishnetError::validation(INVALID_FILE_TYPE))?;
        Self::build(mime, bytes, Some(name))
    }

    /// Accept a file by its declared MIME type.
    pub fn from_mime(mime: &str, bytes: Vec<u8>) -> PhishnetResult<Self> {
        let mime = ImageMime::from_mime(mime)
            .ok_or_else(|| PhishnetError::validation(INVALID_FILE_TYPE))?;
        Self::build(mime, bytes, None)
    }

    fn build(mime: ImageMime, bytes: Vec<u8>, name: Option<&str>) -> PhishnetResult<Self> {
        if bytes.is_empty() {
            return Err(PhishnetError::validation(IMAGE_REQUIRED));
        }
        let mut content = ImageContent::new(bytes, mime);
        if let Some(name) = name {
            let base = std::path::Path::new(name)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(name);
            content = content.with_file_name(base);
        }
        Ok(Self { content })
    }

    pub fn mime_type(&self) -> ImageMime {
        self.content.mime_type
    }

    pub fn into_request(self) -> AnalysisRequest {
        AnalysisRequest::Image(self.content)
    }

    pub fn into_upload(self, label: SampleLabel) -> UploadRequest {
        UploadRequest::Image {
            content: self.content,
            label,
        }
    }
}

/// Fail when no file was picked.
pub fn require_selection(selection: Option<ImageSelection>) -> PhishnetResult<ImageSelection> {
    selection.ok_or_else(|| PhishnetError::validation(IMAGE_REQUIRED))
}
