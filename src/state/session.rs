//! Client-side session state: who is signed in, if anyone.
//!
//! DESIGN
//! ======
//! The session is an explicit value passed around via Leptos context rather
//! than an ambient singleton. Its lifecycle is a closed state machine
//! (`Uninitialized` -> `Authenticated` -> `Ended`) so "logged out" and
//! "never logged in" stay distinguishable, while the authentication flag is
//! exactly "the phase holds an identity".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::credentials::CredentialVerifier;

/// Closed set of account roles. Matched exhaustively wherever a role selects
/// behavior, so an unknown role is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Volunteer,
    Admin,
}

impl Role {
    /// Display label for navigation badges and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Volunteer => "Volunteer",
            Role::Admin => "Admin",
        }
    }
}

/// The authenticated user's display attributes for the current session.
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

/// Session lifecycle phase.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionPhase {
    /// No login has been attempted since the client started.
    #[default]
    Uninitialized,
    /// Exactly one identity is installed.
    Authenticated(Identity),
    /// A previous session was explicitly logged out.
    Ended,
}

/// Holder of at most one [`Identity`] for the lifetime of the client tab.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    phase: SessionPhase,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: SessionPhase::Uninitialized }
    }

    /// Attempt a login against `verifier`. On a match the returned identity
    /// replaces the current phase and `true` is returned; otherwise the
    /// session is left unchanged and `false` is returned. Invalid credentials
    /// are a normal outcome, not an error.
    pub fn login(&mut self, verifier: &dyn CredentialVerifier, email: &str, secret: &str) -> bool {
        match verifier.verify(email, secret) {
            Some(identity) => {
                self.phase = SessionPhase::Authenticated(identity);
                true
            }
            None => false,
        }
    }

    /// End the session unconditionally. Idempotent from every phase.
    pub fn logout(&mut self) {
        self.phase = SessionPhase::Ended;
    }

    #[must_use]
    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.phase {
            SessionPhase::Authenticated(identity) => Some(identity),
            SessionPhase::Uninitialized | SessionPhase::Ended => None,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current_identity().is_some()
    }

    #[must_use]
    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }
}
