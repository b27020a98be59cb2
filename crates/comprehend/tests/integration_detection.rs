//! Real-time and batch detection against a wiremock server

mod common;

use comprehend::prelude::*;
use comprehend::{
    BatchDetectSentimentRequest, ClassifyDocumentRequest, DetectEntitiesRequest,
    DetectPiiEntitiesRequest, DetectSentimentRequest, EntityType, PiiEntityType, SentimentType,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_detect_sentiment_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", common::target("DetectSentiment").as_str()))
        .and(header("content-type", "application/x-amz-json-1.1"))
        .and(header_exists("authorization"))
        .and(header_exists("x-amz-date"))
        .and(body_json(serde_json::json!({
            "Text": "The service was quick and friendly.",
            "LanguageCode": "en"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("detect_sentiment")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let request = DetectSentimentRequest::builder()
        .text("The service was quick and friendly.")
        .language_code(LanguageCode::En)
        .build()
        .expect("Failed to build request");

    let response = client.detect_sentiment(request).await.expect("Request failed");

    assert_eq!(response.sentiment, Some(SentimentType::Positive));
    let score = response.sentiment_score.unwrap();
    assert!(score.positive.unwrap() > 0.98);
    assert!(score.mixed.unwrap() < 0.01);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_request_is_signed_with_sigv4() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    client
        .detect_key_phrases(
            comprehend::DetectKeyPhrasesRequest::builder()
                .text("Signed requests only")
                .language_code(LanguageCode::En)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let authorization = requests[0]
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains("/us-east-1/comprehend/aws4_request"));
    assert!(authorization.contains("x-amz-target"));
}

#[tokio::test]
async fn test_detect_entities_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", common::target("DetectEntities").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("detect_entities")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let response = client
        .detect_entities(
            DetectEntitiesRequest::builder()
                .text("Jane Doe flew in from Seattle last Tuesday.")
                .language_code(LanguageCode::En)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let entities = response.entities.unwrap();
    assert_eq!(entities.len(), 3);
    assert_eq!(entities[0].entity_type, Some(EntityType::Person));
    assert_eq!(entities[0].text.as_deref(), Some("Jane Doe"));
    assert_eq!(entities[1].entity_type, Some(EntityType::Location));
    assert_eq!(entities[2].begin_offset, Some(31));
}

#[tokio::test]
async fn test_detect_pii_entities_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", common::target("DetectPiiEntities").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("detect_pii_entities")),
        )
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let response = client
        .detect_pii_entities(
            DetectPiiEntitiesRequest::builder()
                .text("My name is Jane Doe, write to jane.doe@example.com")
                .language_code(LanguageCode::En)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let types: Vec<_> = response
        .entities
        .unwrap()
        .into_iter()
        .filter_map(|e| e.entity_type)
        .collect();
    assert_eq!(types, vec![PiiEntityType::Name, PiiEntityType::Email]);
}

#[tokio::test]
async fn test_classify_document_with_endpoint() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", common::target("ClassifyDocument").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "Classes": [
                { "Name": "BILLING", "Score": 0.91 },
                { "Name": "SUPPORT", "Score": 0.07 }
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let response = client
        .classify_document(
            ClassifyDocumentRequest::builder()
                .text("I was charged twice this month")
                .endpoint_arn(
                    "arn:aws:comprehend:us-east-1:111122223333:document-classifier-endpoint/tickets",
                )
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    let classes = response.classes.unwrap();
    assert_eq!(classes[0].name.as_deref(), Some("BILLING"));
}

#[tokio::test]
async fn test_batch_detect_sentiment_partial_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", common::target("BatchDetectSentiment").as_str()))
        .and(body_json(serde_json::json!({
            "TextList": ["Great!", "", "Awful."],
            "LanguageCode": "en"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("batch_detect_sentiment")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let response = client
        .batch_detect_sentiment(
            BatchDetectSentimentRequest::builder()
                .text_list(vec![
                    "Great!".to_string(),
                    "".to_string(),
                    "Awful.".to_string(),
                ])
                .language_code(LanguageCode::En)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.has_errors());
    assert_eq!(response.success_count(), 2);

    let failed = response.error_for(1).unwrap();
    assert_eq!(failed.error_code.as_deref(), Some("INTERNAL_SERVER_ERROR"));
    assert!(response.error_for(0).is_none());

    let results = response.result_list.unwrap();
    assert_eq!(results[1].index, Some(2));
    assert_eq!(results[1].sentiment, Some(SentimentType::Negative));
}

#[tokio::test]
async fn test_empty_success_body_is_an_empty_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let response = client
        .tag_resource(
            comprehend::TagResourceRequest::builder()
                .resource_arn("arn:aws:comprehend:us-east-1:111122223333:flywheel/fw")
                .tags(vec![comprehend::Tag::new("team", "nlp")])
                .build()
                .unwrap(),
        )
        .await;

    assert!(response.is_ok());
}

#[tokio::test]
async fn test_raw_response_metadata() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-amzn-RequestId", "5a8e2c1e-0000-4000-8000-1234567890ab")
                .set_body_string(common::load_response_fixture("detect_sentiment")),
        )
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let raw = client
        .execute_raw(
            DetectSentimentRequest::builder()
                .text("Fine")
                .language_code(LanguageCode::En)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(raw.status_code(), 200);
    assert_eq!(raw.retries_taken(), 0);
    assert_eq!(raw.request_id(), Some("5a8e2c1e-0000-4000-8000-1234567890ab"));
    assert_eq!(raw.parsed().sentiment, Some(SentimentType::Positive));
}
