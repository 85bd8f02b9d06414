//! randomuser.me response types.

use serde::{Deserialize, Serialize};

/// Top-level envelope returned by the randomuser API.
///
/// Individual records stay untyped here; the upstream shape is nested and
/// inconsistent (some fields arrive as strings or numbers), so validation
/// happens downstream during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct UserEnvelope {
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub info: Option<PageInfo>,
}

/// Pagination metadata attached to every response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    pub seed: String,
    pub results: u32,
    pub page: u32,
    pub version: String,
}
