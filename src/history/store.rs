use tracing::warn;

use crate::models::ContactRecord;
use crate::storage::PersistentStore;

/// Storage key the history is persisted under.
pub const STORAGE_KEY: &str = "wa_direct_history";

/// Maximum number of remembered contacts.
pub const MAX_HISTORY: usize = 10;

/// Owns the in-memory contact list and mirrors every mutation to the
/// backing store.
///
/// Loading is lenient: a missing or malformed persisted value yields an
/// empty list, never an error, and the next successful write replaces the
/// bad data. A failed write is logged and the in-memory list stays
/// authoritative for the rest of the session.
pub struct HistoryStore<S: PersistentStore> {
    store: S,
    entries: Vec<ContactRecord>,
}

impl<S: PersistentStore> HistoryStore<S> {
    /// Load the persisted history from `store`.
    pub fn load(store: S) -> Self {
        let entries = match store.get(STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<ContactRecord>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Discarding malformed history: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read history, starting empty: {e:#}");
                Vec::new()
            }
        };

        Self { store, entries }
    }

    /// Current contact list, most recent first.
    pub fn entries(&self) -> &[ContactRecord] {
        &self.entries
    }

    /// Record a chat attempt.
    ///
    /// An existing entry with the same phone number is replaced so the
    /// number moves to the top rather than appearing twice. Overflow beyond
    /// [`MAX_HISTORY`] is dropped from the tail.
    pub fn insert(
        &mut self,
        phone_number: &str,
        country_code: &str,
        note: Option<String>,
    ) -> &[ContactRecord] {
        // Dedupe by exact string match; differently formatted spellings of
        // the same number count as distinct contacts.
        self.entries.retain(|record| record.phone_number != phone_number);

        let record = ContactRecord::new(phone_number, country_code, note);
        self.entries.insert(0, record);
        // The list is already most-recent-first, so position decides which
        // entry is oldest.
        self.entries.truncate(MAX_HISTORY);

        self.persist();
        &self.entries
    }

    /// Remove the entry with the given id. An unknown id is a no-op.
    pub fn delete_by_id(&mut self, id: &str) -> &[ContactRecord] {
        self.entries.retain(|record| record.id != id);
        self.persist();
        &self.entries
    }

    /// Empty the list and erase the persisted value.
    pub fn clear_all(&mut self) -> &[ContactRecord] {
        self.entries.clear();
        if let Err(e) = self.store.remove(STORAGE_KEY) {
            warn!("Failed to erase persisted history: {e:#}");
        }
        &self.entries
    }

    fn persist(&self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(serialized) => serialized,
            Err(e) => {
                warn!("Failed to serialize history, keeping in-memory state: {e}");
                return;
            }
        };

        if let Err(e) = self.store.set(STORAGE_KEY, &serialized) {
            warn!("History write failed, keeping in-memory state: {e:#}");
        }
    }
}
