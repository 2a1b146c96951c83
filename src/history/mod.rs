//! Recent-contact history: a bounded, deduplicated list with write-through
//! persistence.
//!
//! The list is ordered most-recent-first and capped at [`MAX_HISTORY`]
//! entries. Re-contacting a number moves its entry to the top instead of
//! duplicating it. Every mutation is mirrored to the backing
//! [`PersistentStore`](crate::storage::PersistentStore) before it returns.

pub mod store;

pub use store::{HistoryStore, MAX_HISTORY, STORAGE_KEY};
