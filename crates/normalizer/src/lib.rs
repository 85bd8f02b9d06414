//! Normalizer library for reshaping raw provider records into canonical schemas.
//!
//! This crate provides a plugin-based architecture for normalizing records
//! fetched from external providers. To add support for a new provider,
//! implement the `SourceAdapter` trait.
//!
//! # Architecture
//!
//! ```text
//! Raw record (JSON) --> SourceAdapter --> NormalizedUser --> broker
//!                       (validate & reshape)
//! ```
//!
//! # Adding a New Provider
//!
//! ```ignore
//! use normalizer::{NormalizedUser, Result, SourceAdapter};
//!
//! pub struct OtherProviderAdapter;
//!
//! impl SourceAdapter for OtherProviderAdapter {
//!     const NAME: &'static str = "otherprovider";
//!     const OUTPUT_SUBJECT: &'static str = "users_created";
//!
//!     fn normalize(&self, raw: &serde_json::Value) -> Result<NormalizedUser> {
//!         // Validate and reshape the provider's record
//!     }
//! }
//! ```

pub mod error;
pub mod randomuser;
pub mod schema;
pub mod traits;

// Re-export core types
pub use error::{Error, Result};
pub use schema::NormalizedUser;
pub use traits::{AdapterConfig, SourceAdapter};

// Re-export provider adapters
pub use randomuser::RandomUserAdapter;
