use super::*;

// =============================================================================
// new_entry
// =============================================================================

#[test]
fn new_entry_trims_content() {
    let entry = new_entry("  rough day  ", 5, "1/2/2026".into()).expect("entry built");
    assert_eq!(entry.content, "rough day");
    assert_eq!(entry.mood, 5);
    assert_eq!(entry.date, "1/2/2026");
}

#[test]
fn new_entry_rejects_empty_draft() {
    assert!(new_entry("", 7, String::new()).is_none());
    assert!(new_entry("   \n\t", 7, String::new()).is_none());
}

#[test]
fn new_entry_clamps_mood_into_slider_range() {
    assert_eq!(new_entry("ok", 0, String::new()).unwrap().mood, MOOD_MIN);
    assert_eq!(new_entry("ok", 99, String::new()).unwrap().mood, MOOD_MAX);
}

#[test]
fn new_entry_ids_are_unique() {
    let a = new_entry("a", 7, String::new()).unwrap();
    let b = new_entry("b", 7, String::new()).unwrap();
    assert_ne!(a.id, b.id);
}

// =============================================================================
// insert
// =============================================================================

#[test]
fn insert_prepends_newest_first() {
    let mut journal = JournalState::default();
    journal.insert(new_entry("first", 7, String::new()).unwrap());
    journal.insert(new_entry("second", 7, String::new()).unwrap());
    assert_eq!(journal.entries[0].content, "second");
    assert_eq!(journal.entries[1].content, "first");
}

// =============================================================================
// preview
// =============================================================================

#[test]
fn preview_passes_short_content_through() {
    assert_eq!(preview("short", 150), "short");
}

#[test]
fn preview_truncates_and_appends_ellipsis() {
    let long = "x".repeat(200);
    let shown = preview(&long, 150);
    assert_eq!(shown.chars().count(), 151);
    assert!(shown.ends_with('…'));
}

#[test]
fn preview_respects_char_boundaries() {
    // Multi-byte content must not be split mid-codepoint.
    let content = "désolé ".repeat(40);
    let shown = preview(&content, 150);
    assert_eq!(shown.chars().count(), 151);
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn journal_entry_serde_round_trip() {
    let entry = new_entry("reflection", 8, "2/3/2026".into()).unwrap();
    let json = serde_json::to_string(&vec![entry.clone()]).unwrap();
    let restored: Vec<JournalEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, vec![entry]);
}
