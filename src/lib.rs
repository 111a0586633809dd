//! MindCare AI — demo single-page client for a mental-health support platform.
//!
//! ARCHITECTURE
//! ============
//! The crate is a Leptos SPA with three role-specific dashboards behind a
//! client-side session. `state` holds the session, journal, and UI chrome
//! state; `routing` maps the session to exactly one active view; `pages` and
//! `components` render it. All credentials come from a static demo table —
//! there is no server and nothing survives a reload except the journal blob
//! in `localStorage`.

pub mod app;
pub mod components;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point. Hydrates the server-rendered body into the live app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
