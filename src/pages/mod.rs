//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The landing page and the three role dashboards are not separate routes —
//! `routing::select_view` picks one per render from session state. Only the
//! not-found page is reached through the URL router.

pub mod admin;
pub mod landing;
pub mod not_found;
pub mod student;
pub mod volunteer;
