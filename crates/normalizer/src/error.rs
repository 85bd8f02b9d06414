//! Error types for record normalization.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required nested field was absent or of the wrong type.
    #[error("invalid record: {0}")]
    InvalidRecord(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
