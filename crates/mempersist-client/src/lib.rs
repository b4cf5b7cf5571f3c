pub mod error;

pub use error::{Error, Result};

use mempersist_types::ThreadPayload;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);
const SAVE_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest server body excerpt carried in a Status error
const BODY_EXCERPT_CHARS: usize = 200;

/// Server response to a successful thread save
#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub thread: SavedThread,
}

/// Server-side view of the stored thread
#[derive(Debug, Default, Deserialize)]
pub struct SavedThread {
    /// Server-assigned identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Echo of the client-generated thread id
    #[serde(default)]
    pub thread_id: Option<String>,
    #[serde(default)]
    pub message_count: Option<u64>,
}

/// Blocking HTTP client for the Nowledge Mem API.
///
/// Never retries; transport failures are forwarded to the caller untouched.
pub struct ApiClient {
    base_url: String,
    auth_token: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: &str, auth_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_token: auth_token.to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probe the `/health` endpoint; any failure reads as unhealthy
    pub fn health_check(&self) -> bool {
        self.http
            .get(format!("{}/health", self.base_url))
            .bearer_auth(&self.auth_token)
            .timeout(HEALTH_TIMEOUT)
            .send()
            .map(|response| response.status() == StatusCode::OK)
            .unwrap_or(false)
    }

    /// POST the payload to `/threads` and decode the server's answer
    pub fn save_thread(&self, payload: &ThreadPayload) -> Result<SaveResponse> {
        let response = self
            .http
            .post(format!("{}/threads", self.base_url))
            .bearer_auth(&self.auth_token)
            .timeout(SAVE_TIMEOUT)
            .json(payload)
            .send()?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().unwrap_or_default();
            return Err(Error::Status {
                code: status.as_u16(),
                body: body.chars().take(BODY_EXCERPT_CHARS).collect(),
            });
        }

        Ok(response.json()?)
    }
}
