use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One remembered chat attempt.
///
/// The phone number is kept as entered (digits only, no dial code) so the
/// original link can be rebuilt from the record at any time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Opaque unique identifier, assigned at creation.
    pub id: String,
    /// Local part of the number, decimal digits only.
    #[serde(rename = "phoneNumber")]
    pub phone_number: String,
    /// Dial code including the leading `+`, e.g. `+971`.
    #[serde(rename = "countryCode")]
    pub country_code: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
    /// Message draft captured at the time of the chat attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ContactRecord {
    /// Create a record with a fresh random id and the current wall-clock time.
    pub fn new(phone_number: &str, country_code: &str, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            phone_number: phone_number.to_string(),
            country_code: country_code.to_string(),
            timestamp: Utc::now().timestamp_millis(),
            note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_unique_ids() {
        let a = ContactRecord::new("501234567", "+971", None);
        let b = ContactRecord::new("501234567", "+971", None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_serializes_with_camel_case_wire_names() {
        let record = ContactRecord {
            id: "abc".to_string(),
            phone_number: "501234567".to_string(),
            country_code: "+971".to_string(),
            timestamp: 1234567890,
            note: Some("Hi".to_string()),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""phoneNumber":"501234567""#));
        assert!(json.contains(r#""countryCode":"+971""#));
        assert!(json.contains(r#""note":"Hi""#));
    }

    #[test]
    fn test_note_is_omitted_when_absent() {
        let record = ContactRecord {
            id: "abc".to_string(),
            phone_number: "501234567".to_string(),
            country_code: "+971".to_string(),
            timestamp: 1234567890,
            note: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("note"));
    }

    #[test]
    fn test_deserializes_record_without_note() {
        let json = r#"{"id":"x","phoneNumber":"12345","countryCode":"+1","timestamp":1000}"#;
        let record: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.phone_number, "12345");
        assert!(record.note.is_none());
    }
}
