//! Common test utilities and helpers

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use comprehend::http::{HeaderMap, HeaderValue, HttpRequest, Response, StatusCode, Transport};
use comprehend::{Client, ClientBuilder, ClientConfig, Credentials, Result};
use wiremock::{MockServer, ResponseTemplate};

/// Load a response fixture
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(format!("{}.json", name));

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Static test credentials
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// Configuration with short retry delays so retry tests stay fast
#[allow(dead_code)]
pub fn fast_retry_config() -> ClientConfig {
    ClientConfig {
        max_retries: 2,
        retry_base_delay: Duration::from_millis(1),
        retry_max_delay: Duration::from_millis(5),
        ..ClientConfig::default()
    }
}

/// Builder pointed at a wiremock server
#[allow(dead_code)]
pub fn mock_builder(server: &MockServer) -> ClientBuilder {
    ClientBuilder::from_config(fast_retry_config())
        .endpoint(server.uri())
        .credentials(test_credentials())
}

/// Client pointed at a wiremock server
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> Client {
    mock_builder(server).build().expect("Failed to build client")
}

/// Value of the `X-Amz-Target` header for an operation
#[allow(dead_code)]
pub fn target(operation: &str) -> String {
    format!("Comprehend_20171127.{operation}")
}

/// A JSON 1.1 error response
#[allow(dead_code)]
pub fn error_template(status: u16, error_type: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("content-type", "application/x-amz-json-1.1")
        .insert_header("x-amzn-RequestId", "2f4cc4ab-6e1e-4b0a-9c1f-7f2f5a0c0d11")
        .set_body_json(serde_json::json!({
            "__type": error_type,
            "Message": message,
        }))
}

/// A transport that records requests and replays canned responses.
///
/// When the queue runs dry, every further call gets an empty `200 {}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    responses: Mutex<VecDeque<Result<Response>>>,
    requests: Mutex<Vec<HttpRequest>>,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Queue a JSON response.
    pub fn push_json(&self, status: u16, body: serde_json::Value) -> &Self {
        let mut headers = HeaderMap::new();
        headers.insert("x-amzn-requestid", HeaderValue::from_static("recorded-request-id"));
        let status = StatusCode::from_u16(status).expect("valid status");
        self.push(Ok(Response::new(status, headers, body.to_string())))
    }

    /// Queue a service error.
    pub fn push_error(&self, status: u16, error_type: &str, message: &str) -> &Self {
        self.push_json(
            status,
            serde_json::json!({ "__type": error_type, "Message": message }),
        )
    }

    /// Queue an arbitrary result.
    pub fn push(&self, response: Result<Response>) -> &Self {
        self.responses.lock().unwrap().push_back(response);
        self
    }

    /// Number of requests sent so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Operation names of the requests sent so far, in order.
    pub fn operations(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter_map(|r| r.operation().map(String::from))
            .collect()
    }

    /// JSON body of the request at `index`.
    pub fn body(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.lock().unwrap();
        serde_json::from_slice(&requests[index].body).expect("request body is JSON")
    }

    /// Client using this transport.
    pub fn client(self: &Arc<Self>) -> Client {
        ClientBuilder::from_config(fast_retry_config())
            .endpoint("https://comprehend.us-east-1.amazonaws.com")
            .credentials(test_credentials())
            .transport(self.clone())
            .build()
            .expect("Failed to build client")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<Response> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Response::new(StatusCode::OK, HeaderMap::new(), "{}")))
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// JSON request body carrying a placeholder for every listed member.
#[allow(dead_code)]
pub fn placeholder_body(required: &[&str]) -> serde_json::Value {
    serde_json::Value::Object(
        required
            .iter()
            .map(|field| (wire_name(field), placeholder(field)))
            .collect(),
    )
}

/// PascalCase wire name of a snake_case member.
fn wire_name(field: &str) -> String {
    field
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// A value of the right JSON type for a required member.
fn placeholder(field: &str) -> serde_json::Value {
    match field {
        "text_list" | "tag_keys" => serde_json::json!(["placeholder"]),
        "tags" => serde_json::json!([{ "Key": "k", "Value": "v" }]),
        "desired_inference_units" => serde_json::json!(1),
        "language_code" => serde_json::json!("en"),
        "mode" => serde_json::json!("ONLY_OFFSETS"),
        "input_data_config" | "output_data_config" => {
            serde_json::json!({ "S3Uri": "s3://example-bucket/prefix/" })
        }
        _ => serde_json::json!("placeholder"),
    }
}
