mod support;

use std::time::Duration;

use axum::http::{Method, StatusCode};
use phishnet_client::{AnalysisClient, ClientConfig, ClientError};
use phishnet_core::form::{EmailForm, ImageSelection, INVALID_FILE_TYPE};
use phishnet_core::{color, routes, AnalysisLabel, GaugeConfig};

use support::{dead_url, MockService};

fn client(base_url: &str) -> AnalysisClient {
    AnalysisClient::new(ClientConfig::with_base_url(base_url))
}

#[tokio::test]
async fn email_submission_renders_phishing_gauge() {
    let mock = MockService::ok(r#"{"label":"PHISHING","confidence":0.87}"#);
    let base = mock.start().await;

    let request = EmailForm::new("a@b.com", "hi", "click here").into_request().unwrap();
    let result = client(&base).submit(request).await.unwrap();

    assert_eq!(result.label, AnalysisLabel::Phishing);
    assert_eq!(result.confidence, 0.87);

    let hits = mock.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].method, Method::POST);
    assert_eq!(hits[0].path, "/api/analyze/email");
    assert_eq!(hits[0].content_type.as_deref(), Some("application/json"));
    let sent = hits[0].json();
    assert_eq!(sent["sender"], "a@b.com");
    assert_eq!(sent["subject"], "hi");
    assert_eq!(sent["body"], "click here");

    let gauge = GaugeConfig::for_result(&result);
    let expected = color::interpolate(color::NEUTRAL, color::PHISHING, 0.87);
    assert_eq!(gauge.colors[0], expected.to_string());
    assert!((gauge.animation_ms() - 955.0).abs() < 1.0);

    let location = routes::result_location(&result);
    assert_eq!(routes::parse_result_location(&location), Some(result));
}

#[tokio::test]
async fn empty_sender_and_subject_are_sent_as_strings() {
    let mock = MockService::ok(r#"{"label":"LEGITIMATE","confidence":0.1}"#);
    let base = mock.start().await;

    let request = EmailForm::new("", "", "click here").into_request().unwrap();
    client(&base).submit(request).await.unwrap();

    let hits = mock.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(
        hits[0].json(),
        serde_json::json!({"sender": "", "subject": "", "body": "click here"})
    );
}

#[tokio::test]
async fn image_submission_is_multipart() {
    let mock = MockService::ok(r#"{"label":"LEGITIMATE","confidence":0.4}"#);
    let base = mock.start().await;

    let selection = ImageSelection::from_file("mail.png", b"\x89PNG-fake".to_vec()).unwrap();
    let result = client(&base).submit(selection.into_request()).await.unwrap();
    assert_eq!(result.label, AnalysisLabel::Legitimate);

    let hits = mock.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].path, "/api/analyze/image");
    let content_type = hits[0].content_type.clone().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));

    let body = hits[0].body_text().to_lowercase();
    assert!(body.contains("name=\"file\""));
    assert!(body.contains("filename=\"mail.png\""));
    assert!(body.contains("image/png"));
    assert!(hits[0].body_text().contains("PNG-fake"));
}

#[tokio::test]
async fn empty_body_never_reaches_the_network() {
    let mock = MockService::ok(r#"{"label":"PHISHING","confidence":0.9}"#);
    let base = mock.start().await;

    let request = phishnet_core::AnalysisRequest::Email(phishnet_core::EmailContent {
        sender: None,
        subject: None,
        body: "\n".to_string(),
    });
    let err = client(&base).submit(request).await.unwrap_err();

    assert!(err.is_validation());
    assert_eq!(err.user_message(), "Body is required.");
    assert!(mock.hits().is_empty());
}

#[tokio::test]
async fn unsupported_image_type_is_rejected_before_submission() {
    let err = ImageSelection::from_mime("image/gif", vec![1, 2, 3]).unwrap_err();
    assert_eq!(err.inline_message(), Some(INVALID_FILE_TYPE));
}

#[tokio::test]
async fn server_error_is_a_transport_error() {
    let mock = MockService::responding(StatusCode::INTERNAL_SERVER_ERROR, "{}");
    let base = mock.start().await;

    let request = EmailForm::new("", "", "hello").into_request().unwrap();
    let err = client(&base).submit(request).await.unwrap_err();

    match &err {
        ClientError::Transport { status, url, status_text } => {
            assert_eq!(*status, 500);
            assert!(url.ends_with("/api/analyze/email"));
            assert_eq!(status_text, "Internal Server Error");
        }
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(err.user_message(), "Something went wrong. Please try again.");
    assert_eq!(mock.hits().len(), 1);
}

#[tokio::test]
async fn malformed_verdict_is_a_protocol_error() {
    for body in [
        r#"{"label":"SPAM","confidence":0.5}"#,
        r#"{"label":"PHISHING","confidence":1.7}"#,
        r#"not json"#,
    ] {
        let mock = MockService::ok(body);
        let base = mock.start().await;
        let request = EmailForm::new("", "", "hello").into_request().unwrap();
        let err = client(&base).submit(request).await.unwrap_err();
        assert!(matches!(err, ClientError::Protocol(_)), "body {body} gave {err:?}");
    }
}

#[tokio::test]
async fn unreachable_service_is_a_network_error() {
    let base = dead_url().await;
    let request = EmailForm::new("", "", "hello").into_request().unwrap();
    let err = client(&base).submit(request).await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
    assert!(!err.is_validation());
}

#[tokio::test]
async fn double_submit_is_refused_while_in_flight() {
    let mock = MockService::ok(r#"{"label":"PHISHING","confidence":0.6}"#)
        .with_delay(Duration::from_millis(200));
    let base = mock.start().await;
    let client = client(&base);

    let first = client.submit(EmailForm::new("", "", "one").into_request().unwrap());
    let second = client.submit(EmailForm::new("", "", "two").into_request().unwrap());
    let (first, second) = tokio::join!(first, second);

    assert!(first.is_ok());
    assert!(matches!(second, Err(ClientError::Busy)));
    assert_eq!(mock.hits().len(), 1);
    assert!(!client.is_busy());

    // The guard is released once the first submission finished.
    let third = client.submit(EmailForm::new("", "", "three").into_request().unwrap()).await;
    assert!(third.is_ok());
}
