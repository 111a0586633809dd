//! Credential verification against the fixed demo account table.
//!
//! DESIGN
//! ======
//! `CredentialVerifier` is the seam between the session store and wherever
//! identities actually come from. The demo build plugs in `DemoDirectory`,
//! a static in-memory table; a real deployment would swap in a
//! network-backed verifier without touching the session or routing code.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::Arc;

use crate::state::session::{Identity, Role};

/// Maps an (email, secret) pair to an [`Identity`], or `None` on any
/// mismatch. Implementations must not distinguish "unknown email" from
/// "wrong secret" in their return value.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, email: &str, secret: &str) -> Option<Identity>;
}

/// Context handle for the app-wide verifier. Provided once by `App` so the
/// login modal never names a concrete implementation.
#[derive(Clone)]
pub struct SharedVerifier(pub Arc<dyn CredentialVerifier>);

struct DemoAccount {
    id: &'static str,
    email: &'static str,
    name: &'static str,
    role: Role,
    secret: &'static str,
}

/// Fixed at compile time; never mutated at runtime.
const DEMO_ACCOUNTS: &[DemoAccount] = &[
    DemoAccount {
        id: "1",
        email: "student@demo.com",
        name: "Demo Student",
        role: Role::Student,
        secret: "demo123",
    },
    DemoAccount {
        id: "2",
        email: "admin@demo.com",
        name: "Demo Admin",
        role: Role::Admin,
        secret: "admin123",
    },
    DemoAccount {
        id: "3",
        email: "volunteer@demo.com",
        name: "Demo Volunteer",
        role: Role::Volunteer,
        secret: "volunteer123",
    },
];

/// Demo credential source backed by [`DEMO_ACCOUNTS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoDirectory;

impl DemoDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The (email, secret) pair for the demo account with `role`, used by
    /// the login modal's prefill buttons.
    #[must_use]
    pub fn account_for_role(role: Role) -> Option<(&'static str, &'static str)> {
        DEMO_ACCOUNTS
            .iter()
            .find(|account| account.role == role)
            .map(|account| (account.email, account.secret))
    }
}

impl CredentialVerifier for DemoDirectory {
    /// Exact string equality on both fields. No trimming, no case folding.
    fn verify(&self, email: &str, secret: &str) -> Option<Identity> {
        let account = DEMO_ACCOUNTS.iter().find(|account| account.email == email)?;
        if account.secret != secret {
            return None;
        }
        Some(Identity {
            id: account.id.to_owned(),
            email: account.email.to_owned(),
            name: account.name.to_owned(),
            role: account.role,
        })
    }
}
