//! NATS client wrapper with JetStream support.

pub mod client;

pub use client::{NatsClient, PublishError, StreamConfig, DEFAULT_PUBLISH_TIMEOUT_MS};
