//! Asynchronous job lifecycle, pagination and resource management

mod common;

use comprehend::prelude::*;
use comprehend::{
    CreateFlywheelRequest, DescribeSentimentDetectionJobRequest, InputDataConfig, JobFilter,
    ListDocumentClassifiersRequest,
    ListEntitiesDetectionJobsRequest, ListFlywheelsRequest, OutputDataConfig,
    StartSentimentDetectionJobRequest, StopSentimentDetectionJobRequest, TaskConfig,
};
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_json, body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

const JOB_ID: &str = "5d2f0d6f8c4b1e9a7f3c2b1a0e9d8c7b";

fn stop_request() -> StopSentimentDetectionJobRequest {
    StopSentimentDetectionJobRequest::builder()
        .job_id(JOB_ID)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_start_describe_stop_in_progress_job() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            common::target("StartSentimentDetectionJob").as_str(),
        ))
        .and(body_partial_json(serde_json::json!({
            "InputDataConfig": { "S3Uri": "s3://example-bucket/reviews/" },
            "LanguageCode": "en",
            "JobName": "reviews-2026-10"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "JobId": JOB_ID,
            "JobArn": format!("arn:aws:comprehend:us-east-1:111122223333:sentiment-detection-job/{JOB_ID}"),
            "JobStatus": "SUBMITTED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            common::target("DescribeSentimentDetectionJob").as_str(),
        ))
        .and(body_json(serde_json::json!({ "JobId": JOB_ID })))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(common::load_response_fixture(
                "describe_sentiment_detection_job",
            )),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            common::target("StopSentimentDetectionJob").as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "JobId": JOB_ID,
            "JobStatus": "STOP_REQUESTED"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);

    let started = client
        .start_sentiment_detection_job(
            StartSentimentDetectionJobRequest::builder()
                .input_data_config(InputDataConfig::s3("s3://example-bucket/reviews/"))
                .output_data_config(OutputDataConfig::s3("s3://example-bucket/output/"))
                .data_access_role_arn("arn:aws:iam::111122223333:role/ComprehendAccess")
                .language_code(LanguageCode::En)
                .job_name("reviews-2026-10")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(started.job_id.as_deref(), Some(JOB_ID));
    assert_eq!(started.job_status, Some(JobStatus::Submitted));

    let described = client
        .describe_sentiment_detection_job(
            DescribeSentimentDetectionJobRequest::builder()
                .job_id(JOB_ID)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    let status = described.job_status().cloned().unwrap();
    assert_eq!(status, JobStatus::InProgress);
    assert!(status.is_stoppable());

    let properties = described.sentiment_detection_job_properties.unwrap();
    assert_eq!(properties.language_code, Some(LanguageCode::En));
    assert_eq!(properties.submit_time.unwrap().timestamp(), 1_791_158_400);

    let stopped = client.stop_sentiment_detection_job(stop_request()).await.unwrap();
    assert_eq!(stopped.job_status, status.stop_outcome());
    assert_eq!(stopped.job_status, Some(JobStatus::StopRequested));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_stop_completed_job_is_invalid_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            common::target("StopSentimentDetectionJob").as_str(),
        ))
        .respond_with(common::error_template(
            400,
            "InvalidRequestException",
            "Job is already in COMPLETED state",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::mock_client(&mock_server);
    let err = client
        .stop_sentiment_detection_job(stop_request())
        .await
        .unwrap_err();

    assert!(err.is_invalid_request());
    assert_eq!(err.kind(), Some(ServiceErrorKind::InvalidRequest));
    assert_eq!(err.status(), Some(400));
    assert_eq!(JobStatus::Completed.stop_outcome(), None);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_stop_unknown_job() {
    let transport = common::RecordingTransport::new();
    transport.push_error(400, "JobNotFoundException", "no such job");

    let err = transport
        .client()
        .stop_sentiment_detection_job(stop_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ServiceErrorKind::JobNotFound));
    assert_eq!(err.request_id(), Some("recorded-request-id"));
}

#[tokio::test]
async fn test_list_jobs_with_filter() {
    let transport = common::RecordingTransport::new();
    transport.push_json(
        200,
        serde_json::from_str(&common::load_response_fixture(
            "list_entities_detection_jobs_page2",
        ))
        .unwrap(),
    );

    let response = transport
        .client()
        .list_entities_detection_jobs(
            ListEntitiesDetectionJobsRequest::builder()
                .filter(JobFilter::with_status(JobStatus::InProgress))
                .max_results(10)
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.items().len(), 1);
    assert_eq!(
        transport.body(0),
        serde_json::json!({ "Filter": { "JobStatus": "IN_PROGRESS" }, "MaxResults": 10 })
    );
}

#[tokio::test]
async fn test_paginate_collects_every_page() {
    let transport = common::RecordingTransport::new();
    for page in ["page1", "page2"] {
        transport.push_json(
            200,
            serde_json::from_str(&common::load_response_fixture(&format!(
                "list_entities_detection_jobs_{page}"
            )))
            .unwrap(),
        );
    }

    let jobs = transport
        .client()
        .paginate(ListEntitiesDetectionJobsRequest::default())
        .await
        .unwrap();

    let ids: Vec<_> = jobs.iter().filter_map(|job| job.job_id.as_deref()).collect();
    assert_eq!(ids, vec!["job-1", "job-2", "job-3"]);
    assert_eq!(transport.calls(), 2);
    assert_eq!(transport.body(0), serde_json::json!({}));
    assert_eq!(transport.body(1), serde_json::json!({ "NextToken": "page-2" }));
}

#[tokio::test]
async fn test_paginate_rejects_repeated_token() {
    let transport = common::RecordingTransport::new();
    for _ in 0..2 {
        transport.push_json(
            200,
            serde_json::json!({ "FlywheelSummaryList": [], "NextToken": "same" }),
        );
    }

    let err = transport
        .client()
        .paginate(ListFlywheelsRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ResponseValidation(_)));
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn test_paginate_rejects_cycling_tokens() {
    let transport = common::RecordingTransport::new();
    for token in ["token-a", "token-b", "token-a", "token-b", "token-a"] {
        transport.push_json(
            200,
            serde_json::json!({
                "DocumentClassifierPropertiesList": [{ "DocumentClassifierArn": token }],
                "NextToken": token
            }),
        );
    }

    let err = transport
        .client()
        .paginate(ListDocumentClassifiersRequest::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::ResponseValidation(ref message) if message.contains("token-a")));
    assert_eq!(transport.calls(), 3);
    assert_eq!(transport.body(2), serde_json::json!({ "NextToken": "token-b" }));
}

#[tokio::test]
async fn test_create_flywheel_round_trip() {
    let transport = common::RecordingTransport::new();
    transport.push_json(
        200,
        serde_json::json!({
            "FlywheelArn": "arn:aws:comprehend:us-east-1:111122223333:flywheel/support-tickets"
        }),
    );

    let response = transport
        .client()
        .create_flywheel(
            CreateFlywheelRequest::builder()
                .flywheel_name("support-tickets")
                .data_access_role_arn("arn:aws:iam::111122223333:role/ComprehendAccess")
                .data_lake_s3_uri("s3://example-bucket/lake/")
                .task_config(
                    TaskConfig::builder()
                        .language_code(LanguageCode::En)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.flywheel_arn.unwrap().ends_with("flywheel/support-tickets"));
    assert_eq!(transport.operations(), vec!["CreateFlywheel"]);
    assert_eq!(transport.body(0)["TaskConfig"]["LanguageCode"], "en");
    assert_eq!(transport.body(0)["DataLakeS3Uri"], "s3://example-bucket/lake/");
}
