//! Bounded-duration user ingestion service.
//!
//! Repeatedly fetches a raw user record from an external provider,
//! normalizes it into the canonical flat schema, and publishes it to a
//! broker subject on a fixed cadence until a wall-clock deadline elapses.
//!
//! # Architecture
//!
//! ```text
//! RecordSource --> SourceAdapter --> RecordSink
//! (HTTP fetch)     (normalize)       (NATS publish)
//!        ^                                |
//!        +------- ticker + deadline ------+
//! ```
//!
//! Iteration failures are demoted to warnings; the loop only stops on
//! deadline expiry or a shutdown signal.

pub mod config;
pub mod error;
pub mod service;
pub mod traits;

pub use config::{IngestConfig, JobConfig};
pub use error::IterationError;
pub use service::IngestService;
pub use traits::{RecordSink, RecordSource};
