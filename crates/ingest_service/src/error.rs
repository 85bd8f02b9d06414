//! Per-iteration error taxonomy.

use thiserror::Error;

/// Outcome of a failed fetch/normalize/publish iteration.
///
/// These are logged by the loop driver and never propagated; every
/// failure is treated as transient and retried on the next tick.
#[derive(Error, Debug)]
pub enum IterationError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] external_services::Error),

    #[error("normalization failed: {0}")]
    Normalize(#[from] normalizer::Error),

    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("publish failed: {0}")]
    Publish(#[from] nats_client::PublishError),
}

impl IterationError {
    /// Pipeline stage the failure occurred in, used as a metrics label.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Fetch(_) => "fetch",
            Self::Normalize(_) => "normalize",
            Self::Serialize(_) => "serialize",
            Self::Publish(_) => "publish",
        }
    }
}
