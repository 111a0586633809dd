//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock)
//! and the credential seam from page and component logic.

pub mod credentials;
pub mod datetime;
pub mod journal_store;
