//! WA Direct - compose WhatsApp chat links from the command line
//!
//! This library provides the pieces behind the `wa-direct` CLI:
//!
//! - Building `wa.me` deep links with percent-encoded message text
//! - A bounded, deduplicated list of recently contacted numbers,
//!   persisted as JSON through a pluggable key-value store
//! - AI-assisted message refinement that falls back to the original
//!   draft whenever the API is unavailable
//!
//! # Example
//!
//! ```
//! use wa_direct::{HistoryStore, MemoryStore, build_chat_url};
//!
//! let mut history = HistoryStore::load(MemoryStore::new());
//! history.insert("501234567", "+971", Some("Hi there!".to_string()));
//!
//! let record = &history.entries()[0];
//! let url = build_chat_url(&record.country_code, &record.phone_number, record.note.as_deref());
//! assert_eq!(url, "https://wa.me/971501234567?text=Hi%20there!");
//! ```

pub mod cli;
pub mod clipboard;
pub mod history;
pub mod link;
pub mod models;
pub mod refiner;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use history::{HistoryStore, MAX_HISTORY};
pub use link::{build_chat_url, sanitize_digits};
pub use models::{ContactRecord, Tone};
pub use refiner::MessageRefiner;
pub use storage::{FileStore, MemoryStore, PersistentStore};
