use super::*;

// =============================================================================
// verify
// =============================================================================

#[test]
fn verify_all_demo_accounts_match() {
    let directory = DemoDirectory::new();
    let cases = [
        ("student@demo.com", "demo123", Role::Student, "Demo Student"),
        ("admin@demo.com", "admin123", Role::Admin, "Demo Admin"),
        ("volunteer@demo.com", "volunteer123", Role::Volunteer, "Demo Volunteer"),
    ];
    for (email, secret, role, name) in cases {
        let identity = directory.verify(email, secret).expect("demo account verifies");
        assert_eq!(identity.role, role);
        assert_eq!(identity.name, name);
        assert_eq!(identity.email, email);
    }
}

#[test]
fn verify_unknown_email_is_none() {
    assert!(DemoDirectory::new().verify("ghost@demo.com", "demo123").is_none());
}

#[test]
fn verify_wrong_secret_is_none() {
    assert!(DemoDirectory::new().verify("student@demo.com", "demo124").is_none());
}

#[test]
fn verify_is_case_sensitive() {
    let directory = DemoDirectory::new();
    assert!(directory.verify("Student@demo.com", "demo123").is_none());
    assert!(directory.verify("student@demo.com", "DEMO123").is_none());
}

#[test]
fn verify_rejects_untrimmed_input() {
    assert!(DemoDirectory::new().verify(" student@demo.com", "demo123").is_none());
    assert!(DemoDirectory::new().verify("student@demo.com", "demo123 ").is_none());
}

// =============================================================================
// account_for_role
// =============================================================================

#[test]
fn account_for_role_returns_matching_pair() {
    assert_eq!(
        DemoDirectory::account_for_role(Role::Student),
        Some(("student@demo.com", "demo123"))
    );
    assert_eq!(
        DemoDirectory::account_for_role(Role::Admin),
        Some(("admin@demo.com", "admin123"))
    );
    assert_eq!(
        DemoDirectory::account_for_role(Role::Volunteer),
        Some(("volunteer@demo.com", "volunteer123"))
    );
}

#[test]
fn account_for_role_pairs_verify() {
    let directory = DemoDirectory::new();
    for role in [Role::Student, Role::Volunteer, Role::Admin] {
        let (email, secret) = DemoDirectory::account_for_role(role).expect("pair exists");
        let identity = directory.verify(email, secret).expect("prefilled pair verifies");
        assert_eq!(identity.role, role);
    }
}
