//! Shared client state provided through Leptos context.
//!
//! ARCHITECTURE
//! ============
//! `session` is the authentication contract, `journal` the local-storage
//! backed journal, and `ui` transient chrome such as toasts. Pages and
//! components read these through `RwSignal` context handles.

pub mod journal;
pub mod session;
pub mod ui;
