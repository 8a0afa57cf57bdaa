//! PhishBowl upload models.

use serde::{Deserialize, Serialize};

use crate::analysis::model::ImageContent;

/// Ground-truth label attached to a corpus sample.
///
/// Sent as a number: 1 for phishing, 0 for legitimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SampleLabel {
    #[default]
    Phishing,
    Legitimate,
}

impl SampleLabel {
    pub fn as_number(&self) -> u8 {
        match self {
            Self::Phishing => 1,
            Self::Legitimate => 0,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Phishing),
            0 => Some(Self::Legitimate),
            _ => None,
        }
    }
}

impl Serialize for SampleLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_number())
    }
}

impl<'de> Deserialize<'de> for SampleLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = f64::deserialize(deserializer)?;
        match n {
            n if n == 1.0 => Ok(Self::Phishing),
            n if n == 0.0 => Ok(Self::Legitimate),
            other => Err(serde::de::Error::custom(format!("invalid sample label {other}"))),
        }
    }
}

/// Email text with its label, as stored in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledEmail {
    pub sender: Option<String>,
    pub subject: Option<String>,
    pub body: String,
    pub label: SampleLabel,
}

/// A single corpus upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadRequest {
    Email(LabeledEmail),
    Image { content: ImageContent, label: SampleLabel },
}

impl UploadRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Email(_) => "email",
            Self::Image { .. } => "image",
        }
    }

    pub fn label(&self) -> SampleLabel {
        match self {
            Self::Email(email) => email.label,
            Self::Image { label, .. } => *label,
        }
    }
}

/// Whatever the corpus endpoint answered with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadReceipt(pub serde_json::Value);

impl UploadReceipt {
    pub fn is_empty(&self) -> bool {
        match &self.0 {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}
