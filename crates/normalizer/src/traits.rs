//! Core trait for provider adapters (plugin interface).
//!
//! To add a new record provider, implement the `SourceAdapter` trait.

use crate::error::Result;
use crate::schema::NormalizedUser;

/// Configuration for a provider adapter.
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Broker subject normalized records are published to.
    pub output_subject: String,
    /// Destination stream name (for JetStream persistence).
    pub dest_stream: String,
}

/// Core trait for provider adapters.
///
/// Implement this trait to add support for a new record provider.
/// The ingest service is generic over this trait.
pub trait SourceAdapter: Send + Sync + 'static {
    /// Provider name (e.g., "randomuser").
    const NAME: &'static str;

    /// Default broker subject for normalized records.
    const OUTPUT_SUBJECT: &'static str;

    /// Create default adapter configuration.
    fn default_config() -> AdapterConfig {
        AdapterConfig {
            output_subject: Self::OUTPUT_SUBJECT.to_string(),
            dest_stream: Self::OUTPUT_SUBJECT.to_uppercase(),
        }
    }

    /// Validate a raw provider record and reshape it into the canonical
    /// flat schema.
    ///
    /// Fails when a required nested field is absent or of the wrong type.
    /// The raw record is not mutated.
    fn normalize(&self, raw: &serde_json::Value) -> Result<NormalizedUser>;

    /// Build the output subject for a normalized record.
    fn output_subject(&self, config: &AdapterConfig) -> String {
        config.output_subject.clone()
    }
}
