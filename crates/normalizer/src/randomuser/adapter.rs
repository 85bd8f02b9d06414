//! randomuser provider adapter implementation.

use crate::error::Result;
use crate::schema::NormalizedUser;
use crate::traits::SourceAdapter;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// randomuser provider adapter.
///
/// Handles validation and reshaping of records from the randomuser API
/// into the canonical flat user schema.
#[derive(Debug, Default, Clone)]
pub struct RandomUserAdapter;

impl RandomUserAdapter {
    /// Create a new randomuser adapter.
    pub fn new() -> Self {
        Self
    }
}

impl SourceAdapter for RandomUserAdapter {
    const NAME: &'static str = "randomuser";
    const OUTPUT_SUBJECT: &'static str = "users_created";

    fn normalize(&self, raw: &serde_json::Value) -> Result<NormalizedUser> {
        let record: RawUserRecord = serde_json::from_value(raw.clone())?;
        Ok(transform_user(record))
    }
}

// ============================================================================
// Raw Record Types (private)
// ============================================================================

/// Deserialize a value that could be either a string or a number into a String.
///
/// The provider is inconsistent here: postcodes and street numbers arrive
/// as either type depending on locale. Both are valid inputs; anything
/// else (including null) is a validation failure.
fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[derive(Debug, Deserialize)]
struct RawUserRecord {
    name: RawName,
    location: RawLocation,
    email: String,
    login: RawLogin,
    dob: RawDate,
    registered: RawDate,
    phone: String,
    picture: RawPicture,
    gender: String,
}

#[derive(Debug, Deserialize)]
struct RawName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    street: RawStreet,
    city: String,
    state: String,
    country: String,
    #[serde(deserialize_with = "string_or_number")]
    postcode: String,
}

#[derive(Debug, Deserialize)]
struct RawStreet {
    #[serde(deserialize_with = "string_or_number")]
    number: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawLogin {
    username: String,
}

#[derive(Debug, Deserialize)]
struct RawDate {
    date: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct RawPicture {
    medium: String,
}

// ============================================================================
// Transformation (private)
// ============================================================================

fn transform_user(record: RawUserRecord) -> NormalizedUser {
    let location = record.location;

    NormalizedUser {
        id: Uuid::new_v4(),
        first_name: record.name.first,
        last_name: record.name.last,
        email: record.email,
        username: record.login.username,
        dob: record.dob.date,
        registered_date: record.registered.date,
        phone: record.phone,
        address: format!(
            "{} {}, {}, {}, {}",
            location.street.number, location.street.name, location.city, location.state,
            location.country
        ),
        gender: record.gender,
        postcode: location.postcode,
        picture: record.picture.medium,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> serde_json::Value {
        serde_json::json!({
            "gender": "female",
            "name": {"title": "Miss", "first": "Jennie", "last": "Nichols"},
            "location": {
                "street": {"number": 8929, "name": "Valwood Pkwy"},
                "city": "Billings",
                "state": "Michigan",
                "country": "United States",
                "postcode": "63104",
                "coordinates": {"latitude": "-69.8246", "longitude": "134.8719"}
            },
            "email": "jennie.nichols@example.com",
            "login": {"uuid": "7a0eed16-9430-4d68-901f-c0d4c1c3bf00", "username": "yellowpeacock117"},
            "dob": {"date": "1992-03-08T15:13:16.688Z", "age": 30},
            "registered": {"date": "2007-07-09T05:51:59.390Z", "age": 14},
            "phone": "(272) 790-0888",
            "cell": "(489) 330-2385",
            "picture": {
                "large": "https://randomuser.me/api/portraits/women/75.jpg",
                "medium": "https://randomuser.me/api/portraits/med/women/75.jpg",
                "thumbnail": "https://randomuser.me/api/portraits/thumb/women/75.jpg"
            },
            "nat": "US"
        })
    }

    #[test]
    fn test_normalize_full_record() {
        let adapter = RandomUserAdapter::new();
        let user = adapter.normalize(&sample_record()).unwrap();

        assert_eq!(user.first_name, "Jennie");
        assert_eq!(user.last_name, "Nichols");
        assert_eq!(user.email, "jennie.nichols@example.com");
        assert_eq!(user.username, "yellowpeacock117");
        assert_eq!(user.phone, "(272) 790-0888");
        assert_eq!(user.gender, "female");
        assert_eq!(user.postcode, "63104");
        assert_eq!(
            user.picture,
            "https://randomuser.me/api/portraits/med/women/75.jpg"
        );
        assert_eq!(
            user.address,
            "8929 Valwood Pkwy, Billings, Michigan, United States"
        );
        assert_eq!(user.dob.to_rfc3339(), "1992-03-08T15:13:16.688+00:00");
        assert_eq!(
            user.registered_date.to_rfc3339(),
            "2007-07-09T05:51:59.390+00:00"
        );
    }

    #[test]
    fn test_address_composition() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["location"] = serde_json::json!({
            "street": {"number": 12, "name": "Elm St"},
            "city": "Springfield",
            "state": "IL",
            "country": "USA",
            "postcode": 62704
        });

        let user = adapter.normalize(&record).unwrap();
        assert_eq!(user.address, "12 Elm St, Springfield, IL, USA");
    }

    #[test]
    fn test_numeric_postcode_coerced_to_string() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["location"]["postcode"] = serde_json::json!(28450);

        let user = adapter.normalize(&record).unwrap();
        assert_eq!(user.postcode, "28450");
    }

    #[test]
    fn test_string_postcode_passed_through() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["location"]["postcode"] = serde_json::json!("EC1A 1BB");

        let user = adapter.normalize(&record).unwrap();
        assert_eq!(user.postcode, "EC1A 1BB");
    }

    #[test]
    fn test_null_postcode_rejected() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["location"]["postcode"] = serde_json::Value::Null;

        assert!(adapter.normalize(&record).is_err());
    }

    #[test]
    fn test_fresh_id_per_call() {
        let adapter = RandomUserAdapter::new();
        let record = sample_record();

        let first = adapter.normalize(&record).unwrap();
        let second = adapter.normalize(&record).unwrap();

        assert_ne!(first.id, second.id);
        // Everything except the generated id matches.
        assert_eq!(first.email, second.email);
        assert_eq!(first.address, second.address);
    }

    #[test]
    fn test_missing_first_name_rejected() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["name"]
            .as_object_mut()
            .unwrap()
            .remove("first");

        let err = adapter.normalize(&record).unwrap_err();
        assert!(err.to_string().contains("first"));
    }

    #[test]
    fn test_missing_login_rejected() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record.as_object_mut().unwrap().remove("login");

        assert!(adapter.normalize(&record).is_err());
    }

    #[test]
    fn test_malformed_dob_rejected() {
        let adapter = RandomUserAdapter::new();
        let mut record = sample_record();
        record["dob"]["date"] = serde_json::json!("not-a-timestamp");

        assert!(adapter.normalize(&record).is_err());
    }

    #[test]
    fn test_input_not_mutated() {
        let adapter = RandomUserAdapter::new();
        let record = sample_record();
        let before = record.clone();

        adapter.normalize(&record).unwrap();
        assert_eq!(record, before);
    }

    #[test]
    fn test_serialized_form_uses_flat_field_names() {
        let adapter = RandomUserAdapter::new();
        let user = adapter.normalize(&sample_record()).unwrap();

        let json: serde_json::Value =
            serde_json::from_slice(&serde_json::to_vec(&user).unwrap()).unwrap();
        assert!(json["id"].is_string());
        assert_eq!(json["first_name"], "Jennie");
        assert_eq!(json["registered_date"], "2007-07-09T05:51:59.390Z");
        assert_eq!(json["postcode"], "63104");
    }
}
