use super::*;
use crate::util::credentials::DemoDirectory;

// =============================================================================
// login
// =============================================================================

#[test]
fn login_unknown_email_fails_and_stays_unauthenticated() {
    let mut session = Session::new();
    assert!(!session.login(&DemoDirectory::new(), "nobody@demo.com", "demo123"));
    assert!(!session.is_authenticated());
    assert_eq!(session.phase(), &SessionPhase::Uninitialized);
}

#[test]
fn login_wrong_secret_fails() {
    let mut session = Session::new();
    assert!(!session.login(&DemoDirectory::new(), "student@demo.com", "wrong"));
    assert!(!session.is_authenticated());
}

#[test]
fn login_demo_student_succeeds_with_student_role() {
    let mut session = Session::new();
    assert!(session.login(&DemoDirectory::new(), "student@demo.com", "demo123"));
    let identity = session.current_identity().expect("identity installed");
    assert_eq!(identity.role, Role::Student);
    assert_eq!(identity.email, "student@demo.com");
    assert_eq!(identity.name, "Demo Student");
}

#[test]
fn login_failure_leaves_existing_identity_in_place() {
    let mut session = Session::new();
    assert!(session.login(&DemoDirectory::new(), "admin@demo.com", "admin123"));
    assert!(!session.login(&DemoDirectory::new(), "admin@demo.com", "nope"));
    assert_eq!(session.current_identity().map(|i| i.role), Some(Role::Admin));
}

// =============================================================================
// logout
// =============================================================================

#[test]
fn logout_clears_authentication() {
    let mut session = Session::new();
    assert!(session.login(&DemoDirectory::new(), "volunteer@demo.com", "volunteer123"));
    assert!(session.is_authenticated());
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.phase(), &SessionPhase::Ended);
}

#[test]
fn logout_is_idempotent_from_every_phase() {
    let mut session = Session::new();
    session.logout();
    session.logout();
    assert_eq!(session.phase(), &SessionPhase::Ended);

    assert!(session.login(&DemoDirectory::new(), "student@demo.com", "demo123"));
    session.logout();
    session.logout();
    assert!(!session.is_authenticated());
}

// =============================================================================
// round-trip
// =============================================================================

#[test]
fn login_logout_login_round_trip_succeeds_identically() {
    let mut session = Session::new();
    let verifier = DemoDirectory::new();

    assert!(session.login(&verifier, "student@demo.com", "demo123"));
    let first = session.current_identity().cloned();
    session.logout();
    assert!(session.login(&verifier, "student@demo.com", "demo123"));
    assert_eq!(session.current_identity().cloned(), first);
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn role_serializes_to_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Role::Student).unwrap(), r#""student""#);
    assert_eq!(serde_json::to_string(&Role::Volunteer).unwrap(), r#""volunteer""#);
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), r#""admin""#);
}

#[test]
fn identity_serde_round_trip() {
    let identity = Identity {
        id: "1".into(),
        email: "student@demo.com".into(),
        name: "Demo Student".into(),
        role: Role::Student,
    };
    let json = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, identity);
}
