//! Digital journal state for the student dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries live in browser `localStorage` as one opaque JSON blob (see
//! `util::journal_store`): read once when the dashboard first mounts, written
//! back in full after each save. Nothing here is shared with other users or
//! any server.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use serde::{Deserialize, Serialize};

/// Mood slider bounds (inclusive).
pub const MOOD_MIN: u8 = 1;
pub const MOOD_MAX: u8 = 10;

/// One saved journal entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub content: String,
    /// Human-readable save date, formatted at write time.
    pub date: String,
    /// Self-reported mood, `MOOD_MIN..=MOOD_MAX`.
    pub mood: u8,
}

/// Journal entries for the current browser, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JournalState {
    pub entries: Vec<JournalEntry>,
    /// Set after the one-time load from `localStorage`.
    pub loaded: bool,
}

impl JournalState {
    /// Prepend `entry` so the newest entry renders first.
    pub fn insert(&mut self, entry: JournalEntry) {
        self.entries.insert(0, entry);
    }
}

/// Build a new entry from the draft text, or `None` if the trimmed draft is
/// empty. Mood is clamped to the slider range.
#[must_use]
pub fn new_entry(content: &str, mood: u8, date: String) -> Option<JournalEntry> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    Some(JournalEntry {
        id: uuid::Uuid::new_v4().to_string(),
        content: content.to_owned(),
        date,
        mood: clamp_mood(mood),
    })
}

#[must_use]
pub fn clamp_mood(mood: u8) -> u8 {
    mood.clamp(MOOD_MIN, MOOD_MAX)
}

/// Truncate `content` to at most `max_chars` characters for the
/// recent-entries list, appending an ellipsis when something was cut.
#[must_use]
pub fn preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_owned();
    }
    let mut truncated: String = content.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}
