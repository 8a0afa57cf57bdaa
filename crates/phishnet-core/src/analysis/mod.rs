//! Analysis requests and verdicts exchanged with the analysis service.

pub mod model;

use crate::error::{PhishnetError, PhishnetResult};
use model::{AnalysisRequest, AnalysisResult, ImageContent};

/// Check a request before it goes on the wire.
pub fn validate_request(request: &AnalysisRequest) -> PhishnetResult<()> {
    match request {
        AnalysisRequest::Email(email) => validate_body(&email.body),
        AnalysisRequest::Image(image) => validate_image(image),
    }
}

pub(crate) fn validate_body(body: &str) -> PhishnetResult<()> {
    if body.trim().is_empty() {
        return Err(PhishnetError::validation("Body is required."));
    }
    Ok(())
}

pub(crate) fn validate_image(image: &ImageContent) -> PhishnetResult<()> {
    if image.bytes.is_empty() {
        return Err(PhishnetError::validation("Please upload an image."));
    }
    Ok(())
}

/// Reject verdicts whose confidence is not a probability.
pub fn check_result(result: AnalysisResult) -> PhishnetResult<AnalysisResult> {
    if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
        return Err(PhishnetError::invalid_result(format!(
            "confidence {} is outside [0, 1]",
            result.confidence
        )));
    }
    Ok(result)
}

/// Strictly decode a verdict from a JSON body.
pub fn decode_result(body: &[u8]) -> PhishnetResult<AnalysisResult> {
    let result: AnalysisResult = serde_json::from_slice(body)?;
    check_result(result)
}
