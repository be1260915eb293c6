use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sf_api::feed::generator::{FactGenerator, UpstreamError};
use tower::ServiceExt;

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes()
            .to_vec();

        TestResponse { status, body }
    }
}

/// A buffered response from the test app
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body)
        );
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not valid JSON")
    }
}

/// What the mock generator should do with each call.
pub enum MockBehavior {
    /// Answer with labelled text the cleanup pass has to strip.
    Labelled,
    /// Fail the call for this fact number, succeed for the rest.
    FailOnFact(usize),
}

/// In-memory [`FactGenerator`] that counts every call it receives.
pub struct MockGenerator {
    behavior: MockBehavior,
    pub calls: AtomicUsize,
}

impl MockGenerator {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// The fact number a service prompt asks for.
fn fact_number_in(prompt: &str) -> usize {
    prompt
        .split_once("This is fact number ")
        .expect("prompt names a fact number")
        .1
        .split('.')
        .next()
        .unwrap()
        .trim()
        .parse()
        .expect("fact number is an integer")
}

#[async_trait]
impl FactGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Let every concurrent slot get issued before any outcome lands
        tokio::task::yield_now().await;

        let number = fact_number_in(prompt);
        match self.behavior {
            MockBehavior::Labelled => Ok(format!("# Fact Number {number}: Mock body {number}.")),
            MockBehavior::FailOnFact(fail) if number == fail => {
                Err(UpstreamError::Status(StatusCode::INTERNAL_SERVER_ERROR))
            }
            MockBehavior::FailOnFact(_) => Ok(format!("Mock body {number}.")),
        }
    }
}
