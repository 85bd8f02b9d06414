//! NATS client implementation with JetStream support.

use anyhow::Result;
use async_nats::jetstream::{self, stream::Stream};
use async_nats::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Default ceiling on a single publish attempt (5 seconds).
pub const DEFAULT_PUBLISH_TIMEOUT_MS: u64 = 5_000;

/// Default retention period for streams (24 hours).
pub const DEFAULT_RETENTION_SECS: u64 = 86_400;

/// Default max messages per stream.
pub const DEFAULT_MAX_MESSAGES: i64 = 1_000_000;

/// Default max bytes per stream (1GB).
pub const DEFAULT_MAX_BYTES: i64 = 1_073_741_824;

/// A publish attempt that did not complete.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("broker send failed: {0}")]
    Send(#[from] async_nats::PublishError),

    #[error("publish exceeded {}ms ceiling", .0.as_millis())]
    Timeout(Duration),
}

/// Configuration for creating a stream.
#[derive(Debug, Clone)]
pub struct StreamConfig {
    /// Stream name.
    pub name: String,
    /// Subject patterns to capture.
    pub subjects: Vec<String>,
    /// Retention period in seconds.
    pub max_age_secs: u64,
    /// Maximum number of messages.
    pub max_messages: i64,
    /// Maximum bytes.
    pub max_bytes: i64,
}

impl StreamConfig {
    /// Create a stream config capturing a single subject.
    pub fn for_subject(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subjects: vec![subject.into()],
            max_age_secs: DEFAULT_RETENTION_SECS,
            max_messages: DEFAULT_MAX_MESSAGES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }

    /// Set retention period in seconds.
    pub fn with_retention(mut self, secs: u64) -> Self {
        self.max_age_secs = secs;
        self
    }
}

/// Wrapper around the NATS client with JetStream context.
#[derive(Clone)]
pub struct NatsClient {
    client: Client,
    jetstream: jetstream::Context,
    publish_timeout: Duration,
}

impl NatsClient {
    /// Connect to a NATS server and create a JetStream context.
    pub async fn connect(url: &str) -> Result<Self> {
        info!("Connecting to NATS at {}", url);
        let client = async_nats::connect(url).await?;
        let jetstream = jetstream::new(client.clone());

        Ok(Self {
            client,
            jetstream,
            publish_timeout: Duration::from_millis(DEFAULT_PUBLISH_TIMEOUT_MS),
        })
    }

    /// Override the ceiling applied to each publish attempt.
    pub fn with_publish_timeout(mut self, timeout: Duration) -> Self {
        self.publish_timeout = timeout;
        self
    }

    /// Create or get a stream with the given configuration.
    pub async fn ensure_stream(&self, config: &StreamConfig) -> Result<Stream> {
        info!(
            "Ensuring stream '{}' exists (subjects: {:?}, retention: {}s)",
            config.name, config.subjects, config.max_age_secs
        );

        let stream = self
            .jetstream
            .get_or_create_stream(jetstream::stream::Config {
                name: config.name.clone(),
                subjects: config.subjects.clone(),
                retention: jetstream::stream::RetentionPolicy::Limits,
                max_messages: config.max_messages,
                max_bytes: config.max_bytes,
                max_age: Duration::from_secs(config.max_age_secs),
                storage: jetstream::stream::StorageType::File,
                ..Default::default()
            })
            .await?;

        info!("Stream '{}' ready", config.name);
        Ok(stream)
    }

    /// Publish a message using NATS Core (fire-and-forget).
    ///
    /// Delivery is not confirmed; the attempt fails if it cannot be handed
    /// to the client within the configured ceiling.
    pub async fn publish(
        &self,
        subject: &str,
        payload: bytes::Bytes,
    ) -> std::result::Result<(), PublishError> {
        tokio::time::timeout(
            self.publish_timeout,
            self.client.publish(subject.to_string(), payload),
        )
        .await
        .map_err(|_| PublishError::Timeout(self.publish_timeout))?
        .map_err(PublishError::from)
    }

    /// Flush buffered messages out to the server.
    pub async fn flush(&self) -> Result<()> {
        self.client.flush().await?;
        Ok(())
    }

    /// Get the underlying JetStream context.
    pub fn context(&self) -> &jetstream::Context {
        &self.jetstream
    }
}
