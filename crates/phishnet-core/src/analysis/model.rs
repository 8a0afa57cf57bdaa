//! Analysis domain models.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Verdict label reported by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnalysisLabel {
    Phishing,
    Legitimate,
}

impl AnalysisLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phishing => "PHISHING",
            Self::Legitimate => "LEGITIMATE",
        }
    }

    /// Parse the wire form, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PHISHING" => Some(Self::Phishing),
            "LEGITIMATE" => Some(Self::Legitimate),
            _ => None,
        }
    }
}

impl fmt::Display for AnalysisLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verdict returned by the analysis service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub label: AnalysisLabel,
    pub confidence: f64,
}

/// Email text submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailContent {
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub body: String,
}

/// Image types the service accepts for screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMime {
    Png,
    Jpeg,
    Tiff,
}

impl ImageMime {
    pub const ALL: [ImageMime; 3] = [ImageMime::Png, ImageMime::Jpeg, ImageMime::Tiff];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Tiff => "image/tiff",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Tiff => "tiff",
        }
    }

    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(essence))
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "tif" | "tiff" => Some(Self::Tiff),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw screenshot bytes plus their type.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageContent {
    pub bytes: Vec<u8>,
    pub mime_type: ImageMime,
    pub file_name: Option<String>,
}

impl ImageContent {
    pub fn new(bytes: Vec<u8>, mime_type: ImageMime) -> Self {
        Self {
            bytes,
            mime_type,
            file_name: None,
        }
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// File name sent in the multipart part.
    pub fn upload_name(&self) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("screenshot.{}", self.mime_type.extension()))
    }
}

impl fmt::Debug for ImageContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageContent")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("mime_type", &self.mime_type)
            .field("file_name", &self.file_name)
            .finish()
    }
}

/// A single analysis submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    Email(EmailContent),
    Image(ImageContent),
}

impl AnalysisRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Image(_) => "image",
        }
    }
}
