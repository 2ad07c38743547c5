//! HTTP client for the remote emotion classification service.
//!
//! # Architecture
//!
//! - [`Analyze`] - The seam the request controller is generic over
//! - [`AnalysisClient`] - `reqwest` implementation that talks to the real service
//! - [`AnalysisError`] - The single failure type; its [`ErrorKind`] is always
//!   [`ErrorKind::TransportFailure`]
//!
//! # Wire Contract
//!
//! | Direction | Shape |
//! |-----------|-------|
//! | Request   | `POST <endpoint>` with `Content-Type: application/json` and body `{"text": "..."}` |
//! | Response  | `{"emotion": string, "confidence": number, "emoji": string}` |
//!
//! The text is sent exactly as typed. Exactly one request is made per call: no retries and
//! no client-side timeout. A connection failure, a non-success status, and an undecodable
//! body all surface as the same error kind; the human-readable detail exists for the log
//! file only.

use std::fmt;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

pub use emotion_types;
pub use emotion_types::EmotionResult;
pub use url::Url;

/// Address of the classification service when nothing is configured.
pub const DEFAULT_ANALYZE_URL: &str = "http://localhost:8000/analyze";

const TCP_KEEPALIVE_SECS: u64 = 60;
const POOL_MAX_IDLE_PER_HOST: usize = 4;
const POOL_IDLE_TIMEOUT_SECS: u64 = 90;

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Category of an analysis failure.
///
/// There is one category: callers cannot tell network, status and decode failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    TransportFailure,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::TransportFailure => f.write_str("transport failure"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("{kind}: {detail}")]
pub struct AnalysisError {
    kind: ErrorKind,
    detail: String,
}

impl AnalysisError {
    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::TransportFailure,
            detail: detail.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Diagnostic text for logs. Never shown in the UI.
    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// One-shot text classification.
pub trait Analyze {
    /// Classify `text`, sent verbatim, with exactly one outbound call.
    fn analyze(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<EmotionResult, AnalysisError>> + Send;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Builder with the connection settings shared by every analysis client.
///
/// Plain `http` is allowed. No request or connect timeout is set.
pub fn http_client_builder() -> reqwest::ClientBuilder {
    use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    default_headers.insert(
        USER_AGENT,
        HeaderValue::from_static(concat!("emotion-analyzer/", env!("CARGO_PKG_VERSION"))),
    );

    reqwest::Client::builder()
        .tcp_keepalive(Some(Duration::from_secs(TCP_KEEPALIVE_SECS)))
        .pool_max_idle_per_host(POOL_MAX_IDLE_PER_HOST)
        .pool_idle_timeout(Some(Duration::from_secs(POOL_IDLE_TIMEOUT_SECS)))
        .default_headers(default_headers)
}

/// Client bound to one analysis endpoint.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl AnalysisClient {
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        let http = http_client_builder().build()?;
        Ok(Self::with_http(http, endpoint))
    }

    #[must_use]
    pub fn with_http(http: reqwest::Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Analyze for AnalysisClient {
    async fn analyze(&self, text: &str) -> Result<EmotionResult, AnalysisError> {
        tracing::debug!(endpoint = %self.endpoint, chars = text.chars().count(), "Sending analysis request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&AnalyzeRequest { text })
            .send()
            .await
            .map_err(|e| AnalysisError::transport(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::transport(format!(
                "service returned {status}: {}",
                excerpt(&body)
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| AnalysisError::transport(format!("failed to read response body: {e}")))?;

        serde_json::from_slice::<EmotionResult>(&body).map_err(|e| {
            AnalysisError::transport(format!(
                "undecodable response ({e}): {}",
                excerpt(&String::from_utf8_lossy(&body))
            ))
        })
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
