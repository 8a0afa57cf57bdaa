//! Page routes and the query-string hand-off to the result page.

use tracing::debug;

use crate::analysis::{self, model::AnalysisResult};

/// Known pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Analyze,
    AnalyzeEmail,
    AnalyzeImage,
    Upload,
    UploadEmail,
    UploadImage,
    /// Generic result page of the route table.
    Result,
    /// Result page the analyze forms navigate to.
    AnalyzeResult,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Analyze => "/analyze/",
            Self::AnalyzeEmail => "/analyze/email/",
            Self::AnalyzeImage => "/analyze/image/",
            Self::Upload => "/upload/",
            Self::UploadEmail => "/upload/email/",
            Self::UploadImage => "/upload/image/",
            Self::Result => "/result/",
            Self::AnalyzeResult => "/analyze/result/",
        }
    }

    /// Path with form-encoded query parameters appended.
    pub fn with_query(&self, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return self.path().to_string();
        }
        format!("{}?{}", self.path(), encode_query(params))
    }
}

/// `application/x-www-form-urlencoded` serialization.
pub fn encode_query(params: &[(&str, &str)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", form_encode(k), form_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Look up a single query parameter in a location or bare query string.
pub fn query_param(location: &str, key: &str) -> Option<String> {
    let query = match location.split_once('?') {
        Some((_, query)) => query,
        None => location,
    };
    let query = query.split('#').next().unwrap_or_default();

    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
        if form_decode(k)? == key {
            form_decode(v)
        } else {
            None
        }
    })
}

/// Where to navigate after a successful analysis.
pub fn result_location(result: &AnalysisResult) -> String {
    // Serializing a struct of an enum and an f64 cannot fail.
    let json = serde_json::to_string(result).unwrap_or_else(|_| "{}".to_string());
    Route::AnalyzeResult.with_query(&[("response", json.as_str())])
}

/// Recover the verdict from a result-page location.
///
/// `None` means there is nothing to show and the caller should go home.
pub fn parse_result_location(location: &str) -> Option<AnalysisResult> {
    let response = query_param(location, "response")?;
    if response.trim() == "{}" {
        return None;
    }
    match analysis::decode_result(response.as_bytes()) {
        Ok(result) => Some(result),
        Err(e) => {
            debug!(error = %e, "Discarding undecodable result location");
            None
        }
    }
}

fn form_encode(s: &str) -> String {
    urlencoding::encode(s).replace("%20", "+")
}

fn form_decode(s: &str) -> Option<String> {
    urlencoding::decode(&s.replace('+', " "))
        .ok()
        .map(|decoded| decoded.into_owned())
}
