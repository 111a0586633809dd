//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome and shared widgets while reading/writing
//! shared state from Leptos context providers.

pub mod feature_card;
pub mod login_modal;
pub mod navigation;
pub mod stat_card;
pub mod toast;
