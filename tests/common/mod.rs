//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

const HISTORY_FILENAME: &str = "wa_direct_history.json";

/// Builder for creating test data directories with persisted history
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    /// Create a new builder with an empty data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the data directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw content as the persisted history value
    pub fn with_history_json(self, raw: &str) -> Self {
        let path = self.temp_dir.path().join(HISTORY_FILENAME);
        fs::write(path, raw).expect("Failed to write history file");
        self
    }

    /// Persist records programmatically, first record being the newest
    pub fn with_records(self, records: &[ContactRecordBuilder]) -> Self {
        let body =
            records.iter().map(ContactRecordBuilder::to_json).collect::<Vec<_>>().join(",");
        self.with_history_json(&format!("[{body}]"))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for DataDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for persisted contact records
pub struct ContactRecordBuilder {
    id: String,
    phone_number: String,
    country_code: String,
    timestamp: i64,
    note: Option<String>,
}

impl ContactRecordBuilder {
    /// Create a record with default values
    pub fn new() -> Self {
        Self {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            phone_number: "501234567".to_string(),
            country_code: "+971".to_string(),
            timestamp: 1234567890000,
            note: None,
        }
    }

    /// Set the record id
    pub fn id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Set the phone number
    pub fn phone_number(mut self, phone_number: &str) -> Self {
        self.phone_number = phone_number.to_string();
        self
    }

    /// Set the country code
    pub fn country_code(mut self, country_code: &str) -> Self {
        self.country_code = country_code.to_string();
        self
    }

    /// Set the timestamp (epoch milliseconds)
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the note
    pub fn note(mut self, note: &str) -> Self {
        self.note = Some(note.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let note_field =
            self.note.as_ref().map(|n| format!(r#","note":"{}""#, n)).unwrap_or_default();

        format!(
            r#"{{"id":"{}","phoneNumber":"{}","countryCode":"{}","timestamp":{}{}}}"#,
            self.id, self.phone_number, self.country_code, self.timestamp, note_field
        )
    }
}

impl Default for ContactRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper to create a data directory seeded with a couple of records
pub fn seeded_data_dir() -> TempDir {
    DataDirBuilder::new()
        .with_records(&[
            ContactRecordBuilder::new()
                .id("550e8400-e29b-41d4-a716-446655440001")
                .phone_number("7911123456")
                .country_code("+44")
                .timestamp(1700000002000)
                .note("About the flat"),
            ContactRecordBuilder::new()
                .id("550e8400-e29b-41d4-a716-446655440002")
                .phone_number("501234567")
                .country_code("+971")
                .timestamp(1700000001000),
        ])
        .build()
}
