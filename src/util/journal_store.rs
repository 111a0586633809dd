//! `localStorage` persistence for the student journal.
//!
//! SYSTEM CONTEXT
//! ==============
//! The journal is the only state this app persists: the whole entry list is
//! one JSON blob under [`STORAGE_KEY`], read once when the student dashboard
//! mounts and rewritten in full after each save. Non-hydrate builds (native
//! tests, SSR) see an empty journal and silently drop writes.

#[cfg(test)]
#[path = "journal_store_test.rs"]
mod journal_store_test;

use crate::state::journal::JournalEntry;

/// `localStorage` key holding the serialized entry list.
pub const STORAGE_KEY: &str = "mindcare_journal_entries";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the saved entry list. A missing, unreadable, or corrupt blob starts
/// the journal empty instead of failing the dashboard.
#[must_use]
pub fn load_entries() -> Vec<JournalEntry> {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten()) else {
            return Vec::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Write the entry list back under [`STORAGE_KEY`], newest first.
pub fn save_entries(entries: &[JournalEntry]) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(raw) = serde_json::to_string(entries) else {
            return;
        };
        let _ = storage.set_item(STORAGE_KEY, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = entries;
    }
}
