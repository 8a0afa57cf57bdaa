//! Request plumbing shared by the analysis and upload clients.

use phishnet_core::ImageContent;
use reqwest::multipart::{Form, Part};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

/// Multipart field carrying the screenshot.
pub(crate) const FILE_FIELD: &str = "file";

/// Wrap a screenshot as a single-part multipart form.
///
/// The boundary and top-level content type are left to reqwest.
pub(crate) fn image_form(content: ImageContent) -> ClientResult<Form> {
    let name = content.upload_name();
    let part = Part::bytes(content.bytes)
        .file_name(name)
        .mime_str(content.mime_type.as_str())?;
    Ok(Form::new().part(FILE_FIELD, part))
}

/// Send one request and return the body of a 2xx response.
pub(crate) async fn send(request: reqwest::RequestBuilder) -> ClientResult<Vec<u8>> {
    let response = request.send().await?;
    let status = response.status();
    let url = response.url().to_string();

    if !status.is_success() {
        let status_text = status.canonical_reason().unwrap_or_default().to_string();
        warn!(status = status.as_u16(), url = %url, "API request failed");
        return Err(ClientError::Transport {
            status: status.as_u16(),
            url,
            status_text,
        });
    }

    let body = response.bytes().await?;
    debug!(status = status.as_u16(), url = %url, len = body.len(), "API request succeeded");
    Ok(body.to_vec())
}

/// Decode a JSON body, treating an empty body as `null`.
pub(crate) fn decode_json(body: &[u8]) -> ClientResult<serde_json::Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ClientError::Protocol(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json() {
        assert_eq!(decode_json(b"").unwrap(), serde_json::Value::Null);
        assert_eq!(decode_json(b" \n").unwrap(), serde_json::Value::Null);
        assert_eq!(decode_json(b"{\"ok\":true}").unwrap(), serde_json::json!({"ok": true}));
        assert!(matches!(decode_json(b"<html>"), Err(ClientError::Protocol(_))));
    }
}
