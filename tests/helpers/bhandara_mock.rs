//! Mock bhandara service for testing
//!
//! A wiremock server standing in for the remote bhandara API.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, Request, Respond, ResponseTemplate,
};
use bhandara_finder::config::Settings;
use bhandara_finder::services::BhandaraApi;

pub struct BhandaraMockServer {
    pub server: MockServer,
}

impl BhandaraMockServer {
    pub async fn new() -> Self {
        Self { server: MockServer::start().await }
    }

    pub fn base_url(&self) -> String {
        format!("{}/api", self.server.uri())
    }

    /// Settings pointing at this server
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        settings.api.base_url = self.base_url();
        settings.api.timeout_seconds = 2;
        settings
    }

    pub fn api(&self) -> BhandaraApi {
        BhandaraApi::new(&self.settings().api).expect("client should build")
    }

    /// Listing endpoint for a given position
    pub async fn mock_nearby(&self, lat: &str, lon: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path("/api/bhandara"))
            .and(query_param("lat", lat))
            .and(query_param("lon", lon))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Creation endpoint that stores nothing and echoes the payload back
    pub async fn mock_create_echo(&self) {
        Mock::given(method("POST"))
            .and(path("/api/bhandara"))
            .respond_with(EchoCreated)
            .mount(&self.server)
            .await;
    }

    pub async fn mock_create_failure(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/bhandara"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Fail the test if any request reaches the server
    pub async fn expect_no_requests(&self) {
        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.server)
            .await;
    }

    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}

/// Responds 201 with the request body plus server-assigned fields
pub struct EchoCreated;

impl Respond for EchoCreated {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return ResponseTemplate::new(400).set_body_string("invalid json"),
        };

        if let Some(object) = body.as_object_mut() {
            object.insert("_id".to_string(), json!("6710a1b2c3d4e5f607182930"));
            object.insert("attendees".to_string(), json!(0));
            object.insert("createdAt".to_string(), json!("2026-10-19T04:30:00.000Z"));
            object.insert("updatedAt".to_string(), json!("2026-10-19T04:30:00.000Z"));
        }

        ResponseTemplate::new(201).set_body_json(body)
    }
}
