//! Trait seams for the ingest pipeline.
//!
//! The service loop is generic over where records come from and where
//! serialized records go, so each side can be swapped out in tests.

use async_trait::async_trait;
use bytes::Bytes;
use external_services::randomuser::RandomUserClient;
use nats_client::{NatsClient, PublishError};

/// Source of raw provider records.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch one raw record from the provider.
    async fn fetch(&self) -> external_services::Result<serde_json::Value>;
}

#[async_trait]
impl RecordSource for RandomUserClient {
    async fn fetch(&self) -> external_services::Result<serde_json::Value> {
        self.fetch_user().await
    }
}

/// Destination for serialized normalized records.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Hand a serialized record to the broker (fire-and-forget).
    async fn publish(&self, subject: &str, payload: Bytes) -> Result<(), PublishError>;

    /// Drain buffered messages before shutdown.
    async fn flush(&self) -> anyhow::Result<()>;
}

#[async_trait]
impl RecordSink for NatsClient {
    async fn publish(&self, subject: &str, payload: Bytes) -> Result<(), PublishError> {
        NatsClient::publish(self, subject, payload).await
    }

    async fn flush(&self) -> anyhow::Result<()> {
        NatsClient::flush(self).await
    }
}
