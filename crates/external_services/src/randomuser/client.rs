//! randomuser.me REST API client.

use crate::error::{Error, Result};
use crate::randomuser::types::UserEnvelope;
use tracing::debug;

/// Base URL for the randomuser API.
const RANDOMUSER_API_BASE_URL: &str = "https://randomuser.me/api/";

/// randomuser REST API client.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for RandomUserClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomUserClient {
    /// Create a new randomuser client with default settings.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: RANDOMUSER_API_BASE_URL.to_string(),
        }
    }

    /// Create a new randomuser client with custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch a single synthetic user record.
    ///
    /// Performs one GET against the API and returns the first element of
    /// the `results` list as a raw value. The record is left untyped; the
    /// normalizer validates its shape.
    pub async fn fetch_user(&self) -> Result<serde_json::Value> {
        debug!("Fetching user from: {}", self.base_url);

        let response = self.http.get(&self.base_url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Api(format!(
                "API returned status {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let envelope: UserEnvelope = response.json().await?;

        envelope
            .results
            .into_iter()
            .next()
            .ok_or(Error::EmptyResults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = RandomUserClient::new();
        assert_eq!(client.base_url, RANDOMUSER_API_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = RandomUserClient::with_base_url("http://localhost:8080/api/");
        assert_eq!(client.base_url, "http://localhost:8080/api/");
    }

    #[test]
    fn test_envelope_empty_results() {
        let envelope: UserEnvelope = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(envelope.results.is_empty());

        let err = envelope
            .results
            .into_iter()
            .next()
            .ok_or(Error::EmptyResults)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyResults));
    }

    #[test]
    fn test_envelope_with_info() {
        let json = r#"{
            "results": [{"gender": "female"}],
            "info": {"seed": "abc123", "results": 1, "page": 1, "version": "1.4"}
        }"#;

        let envelope: UserEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.results.len(), 1);
        let info = envelope.info.unwrap();
        assert_eq!(info.seed, "abc123");
        assert_eq!(info.results, 1);
    }
}
