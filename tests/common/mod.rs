//! Shared test utilities and fixtures
//!
//! Mock analysis service plus apps wired to it through the real HTTP client.

#![allow(dead_code)]

use std::time::Duration;

use emotion_client::{AnalysisClient, Url};
use emotion_engine::{App, RequestController, UiOptions};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ANALYZE_PATH: &str = "/analyze";

pub fn analyze_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}{ANALYZE_PATH}", server.uri())).expect("mock server uri is a url")
}

pub fn client_for(server: &MockServer) -> AnalysisClient {
    AnalysisClient::new(analyze_url(server)).expect("client builds")
}

pub fn controller_for(server: &MockServer) -> RequestController<AnalysisClient> {
    RequestController::new(client_for(server))
}

pub fn app_for(server: &MockServer) -> App<AnalysisClient> {
    App::new(client_for(server), UiOptions::default())
}

pub fn emotion_body(emotion: &str, confidence: f64, emoji: &str) -> serde_json::Value {
    serde_json::json!({
        "emotion": emotion,
        "confidence": confidence,
        "emoji": emoji,
    })
}

/// Answer every analyze call with a 200 and the given result.
pub async fn mount_emotion(server: &MockServer, emotion: &str, confidence: f64, emoji: &str) {
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(emotion_body(emotion, confidence, emoji)),
        )
        .mount(server)
        .await;
}

/// Like [`mount_emotion`], but the response is held back and exactly one call is expected.
pub async fn mount_slow_emotion_once(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(emotion_body("Joy", 0.87, "😊"))
                .set_delay(delay),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_status(server: &MockServer, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

pub async fn mount_raw_body(server: &MockServer, body: &str) {
    Mock::given(method("POST"))
        .and(path(ANALYZE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "application/json"),
        )
        .mount(server)
        .await;
}
