//! Client for the external translation backend.
//!
//! The backend exposes three endpoints:
//!
//! - `GET /vtot` starts a sign-detection session
//! - `GET /vtot/results` returns the latest detected signs and emotion
//! - `POST /stot` with `{"action": "start" | "stop"}` drives speech capture;
//!   `stop` answers with the transcript
//!
//! [`TranslationBackend`] abstracts these calls so views and the poller can be
//! exercised against an in-process fake. [`HttpBackend`] is the production
//! implementation built on reqwest, which uses hyper natively and the browser
//! `fetch()` API on WASM.
//!
//! There is no retry or backoff. Callers decide what a failure means.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::BackendConfig;
use crate::detection::DetectionResult;
use crate::error::BackendError;

pub const DETECTION_START_PATH: &str = "/vtot";
pub const DETECTION_RESULTS_PATH: &str = "/vtot/results";
pub const SPEECH_PATH: &str = "/stot";

/// Speech session command sent to `POST /stot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechAction {
    Start,
    Stop,
}

#[derive(Debug, Serialize)]
struct SpeechRequest {
    action: SpeechAction,
}

#[derive(Debug, Deserialize)]
struct SpeechTranscript {
    #[serde(default)]
    text: Option<String>,
}

/// Calls the translation backend makes available.
#[async_trait(?Send)]
pub trait TranslationBackend {
    /// Ask the backend to start a detection session.
    async fn start_detection(&self) -> Result<(), BackendError>;

    /// Fetch the latest detection result.
    async fn fetch_detection(&self) -> Result<DetectionResult, BackendError>;

    /// Begin a speech capture session.
    async fn start_speech(&self) -> Result<(), BackendError>;

    /// End the speech session and return the transcript.
    async fn stop_speech(&self) -> Result<String, BackendError>;
}

/// reqwest-backed [`TranslationBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Build a client for `config.base_url`.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let parsed = url::Url::parse(&config.base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(BackendError::InvalidUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                parsed.scheme()
            )));
        }

        let builder = reqwest::Client::builder();

        // The backend is a local service; never route it through a system proxy.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout()).no_proxy();

        let client = builder
            .build()
            .map_err(|e| BackendError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send `request` and reject non-2xx answers, keeping the body for diagnostics.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<reqwest::Response, BackendError> {
        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(format!("{} unreachable: {}", path, e)))?;

        let status = response.status();
        debug!("{} -> HTTP {}", path, status.as_u16());

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned non-OK response: {}", path, body);
            return Err(BackendError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn post_speech(&self, action: SpeechAction) -> Result<reqwest::Response, BackendError> {
        let request = self
            .client
            .post(self.endpoint(SPEECH_PATH))
            .json(&SpeechRequest { action });
        self.send(request, SPEECH_PATH).await
    }
}

#[async_trait(?Send)]
impl TranslationBackend for HttpBackend {
    async fn start_detection(&self) -> Result<(), BackendError> {
        let request = self.client.get(self.endpoint(DETECTION_START_PATH));
        self.send(request, DETECTION_START_PATH).await?;
        Ok(())
    }

    async fn fetch_detection(&self) -> Result<DetectionResult, BackendError> {
        let request = self.client.get(self.endpoint(DETECTION_RESULTS_PATH));
        let response = self.send(request, DETECTION_RESULTS_PATH).await?;
        response
            .json::<DetectionResult>()
            .await
            .map_err(|e| BackendError::Decode(format!("{}: {}", DETECTION_RESULTS_PATH, e)))
    }

    async fn start_speech(&self) -> Result<(), BackendError> {
        self.post_speech(SpeechAction::Start).await?;
        Ok(())
    }

    async fn stop_speech(&self) -> Result<String, BackendError> {
        let response = self.post_speech(SpeechAction::Stop).await?;
        let transcript = response
            .json::<SpeechTranscript>()
            .await
            .map_err(|e| BackendError::Decode(format!("{}: {}", SPEECH_PATH, e)))?;

        transcript
            .text
            .ok_or_else(|| BackendError::Decode(format!("{}: missing 'text' field", SPEECH_PATH)))
    }
}
