//! External data provider API clients.
//!
//! This library provides unified access to external record sources:
//! - randomuser: synthetic user profile generator
//!
//! # Example
//!
//! ```ignore
//! use external_services::randomuser::RandomUserClient;
//!
//! let client = RandomUserClient::new();
//! let raw = client.fetch_user().await?;
//! ```

pub mod error;
pub mod randomuser;

pub use error::{Error, Result};
