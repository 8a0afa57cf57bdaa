mod support;

use axum::http::{Method, StatusCode};
use phishnet_client::{ClientConfig, ClientError, UploadClient};
use phishnet_core::form::{EmailForm, ImageSelection};
use phishnet_core::SampleLabel;

use support::MockService;

#[tokio::test]
async fn email_sample_is_posted_with_label() {
    let mock = MockService::ok(r#"{"added":1}"#);
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    let upload = EmailForm::new("boss@corp.example", "Gift cards", "buy them now")
        .into_upload(SampleLabel::Phishing)
        .unwrap();
    let receipt = client.upload(upload).await.unwrap();
    assert!(!receipt.is_empty());

    let hits = mock.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].method, Method::POST);
    assert_eq!(hits[0].path, "/api/phishbowl/add_one");
    assert_eq!(hits[0].query.as_deref(), Some("anonymize=true"));
    let sent = hits[0].json();
    assert_eq!(sent["label"], 1);
    assert_eq!(sent["body"], "buy them now");
}

#[tokio::test]
async fn image_sample_carries_label_and_anonymize_in_query() {
    let mock = MockService::ok("null");
    let base = mock.start().await;
    let config = ClientConfig {
        anonymize: false,
        ..ClientConfig::with_base_url(&base)
    };
    let client = UploadClient::new(config);

    let selection = ImageSelection::from_file("shot.tiff", vec![0x49, 0x49, 0x2A, 0x00]).unwrap();
    let receipt = client
        .upload(selection.into_upload(SampleLabel::Legitimate))
        .await
        .unwrap();
    assert!(receipt.is_empty());

    let hits = mock.hits();
    assert_eq!(hits[0].path, "/api/phishbowl/add_image");
    assert_eq!(hits[0].query.as_deref(), Some("label=0&anonymize=false"));
    assert!(hits[0]
        .content_type
        .as_deref()
        .unwrap_or_default()
        .starts_with("multipart/form-data"));
    assert!(hits[0].body_text().to_lowercase().contains("image/tiff"));
}

#[tokio::test]
async fn empty_success_body_is_accepted() {
    let mock = MockService::ok("");
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    let upload = EmailForm::new("", "", "text").into_upload(SampleLabel::Phishing).unwrap();
    let receipt = client.upload(upload).await.unwrap();
    assert!(receipt.is_empty());
}

#[tokio::test]
async fn rejected_upload_is_a_transport_error() {
    let mock = MockService::responding(StatusCode::UNPROCESSABLE_ENTITY, r#"{"detail":"bad"}"#);
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    let upload = EmailForm::new("", "", "text").into_upload(SampleLabel::Phishing).unwrap();
    let err = client.upload(upload).await.unwrap_err();
    assert_eq!(err.status(), Some(422));
}

#[tokio::test]
async fn blank_sample_is_not_sent() {
    let mock = MockService::ok("{}");
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    let upload = phishnet_core::UploadRequest::Email(phishnet_core::LabeledEmail {
        sender: None,
        subject: None,
        body: " ".to_string(),
        label: SampleLabel::Phishing,
    });
    let err = client.upload(upload).await.unwrap_err();
    assert!(err.is_validation());
    assert!(mock.hits().is_empty());
}

#[tokio::test]
async fn count_reads_corpus_size() {
    let mock = MockService::ok("42");
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    assert_eq!(client.count().await.unwrap(), 42);
    let hits = mock.hits();
    assert_eq!(hits[0].method, Method::GET);
    assert_eq!(hits[0].path, "/api/phishbowl/count");
}

#[tokio::test]
async fn count_rejects_non_numbers() {
    let mock = MockService::ok(r#"{"count":"many"}"#);
    let base = mock.start().await;
    let client = UploadClient::new(ClientConfig::with_base_url(&base));

    assert!(matches!(client.count().await, Err(ClientError::Protocol(_))));
}
