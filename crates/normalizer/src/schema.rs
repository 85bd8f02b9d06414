//! Canonical user record schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Canonical flat user record.
///
/// Every field is required and non-empty after normalization; failure to
/// produce one aborts the iteration that fetched the raw record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedUser {
    /// Synthetic identifier, generated fresh per record.
    pub id: Uuid,
    /// Given name from the nested name object.
    pub first_name: String,
    /// Family name from the nested name object.
    pub last_name: String,
    pub email: String,
    /// Account name from the nested login object.
    pub username: String,
    /// Date of birth (RFC 3339 on the wire).
    pub dob: DateTime<Utc>,
    /// Account registration timestamp (RFC 3339 on the wire).
    pub registered_date: DateTime<Utc>,
    pub phone: String,
    /// Composed as "{street_number} {street_name}, {city}, {state}, {country}".
    pub address: String,
    pub gender: String,
    /// Always a string; the provider returns either a string or a number.
    pub postcode: String,
    /// Medium-resolution portrait URL.
    pub picture: String,
}
