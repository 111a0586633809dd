#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::journal;

#[test]
fn load_entries_is_empty_without_a_browser() {
    assert!(load_entries().is_empty());
}

#[test]
fn save_entries_is_noop_but_callable() {
    let entry = journal::new_entry("Kept my head up today.", 7, "Aug 25, 2026".to_owned())
        .expect("non-empty draft");
    save_entries(&[entry]);
    assert!(load_entries().is_empty());
}
