use super::*;
use crate::state::ui::ToastTone;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  student@demo.com  ", "demo123"),
        Ok(("student@demo.com".to_owned(), "demo123".to_owned()))
    );
}

#[test]
fn validate_login_input_preserves_secret_whitespace() {
    assert_eq!(
        validate_login_input("student@demo.com", " demo123 "),
        Ok(("student@demo.com".to_owned(), " demo123 ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "demo123"), Err("Enter both email and password."));
    assert_eq!(
        validate_login_input("student@demo.com", ""),
        Err("Enter both email and password.")
    );
    assert_eq!(validate_login_input("", ""), Err("Enter both email and password."));
}

#[test]
fn rejected_credentials_raise_a_destructive_toast() {
    let mut ui = UiState::default();
    ui.push_toast(failed_login_toast());
    let toast = ui.toast.expect("failure should leave a toast on screen");
    assert_eq!(toast.tone, ToastTone::Error);
    assert_eq!(toast.title, "Login failed");
    assert_eq!(toast.message, "Invalid email or password. Please try again.");
}
