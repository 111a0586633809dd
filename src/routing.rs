//! View selection from session state.
//!
//! DESIGN
//! ======
//! A pure mapping from the current identity (or its absence) to exactly one
//! of four mutually exclusive views. The role match is exhaustive over the
//! closed [`Role`] set, so there is no fall-through and no "unknown role"
//! branch to get wrong.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::session::{Identity, Role};

/// The one view the shell should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    /// Unauthenticated marketing/login landing page.
    Landing,
    Student,
    Volunteer,
    Admin,
}

/// Select the active view for `identity`.
#[must_use]
pub fn select_view(identity: Option<&Identity>) -> ActiveView {
    match identity {
        None => ActiveView::Landing,
        Some(identity) => match identity.role {
            Role::Student => ActiveView::Student,
            Role::Volunteer => ActiveView::Volunteer,
            Role::Admin => ActiveView::Admin,
        },
    }
}
