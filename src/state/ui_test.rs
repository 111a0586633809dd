use super::*;

// =============================================================================
// push_toast / clear_toast
// =============================================================================

#[test]
fn default_state_has_no_toast() {
    let ui = UiState::default();
    assert!(ui.toast.is_none());
    assert_eq!(ui.toast_seq, 0);
}

#[test]
fn push_toast_installs_and_bumps_seq() {
    let mut ui = UiState::default();
    ui.push_toast(Toast::success("Login successful", "Welcome."));
    assert_eq!(ui.toast_seq, 1);
    let toast = ui.toast.as_ref().expect("toast visible");
    assert_eq!(toast.title, "Login successful");
    assert_eq!(toast.tone, ToastTone::Success);
}

#[test]
fn push_toast_replaces_previous_toast() {
    let mut ui = UiState::default();
    ui.push_toast(Toast::success("First", "one"));
    ui.push_toast(Toast::error("Second", "two"));
    assert_eq!(ui.toast_seq, 2);
    assert_eq!(ui.toast.as_ref().map(|t| t.title.as_str()), Some("Second"));
    assert_eq!(ui.toast.as_ref().map(|t| t.tone), Some(ToastTone::Error));
}

#[test]
fn clear_toast_removes_toast_but_keeps_seq() {
    let mut ui = UiState::default();
    ui.push_toast(Toast::success("Login successful", "Welcome."));
    ui.clear_toast();
    assert!(ui.toast.is_none());
    assert_eq!(ui.toast_seq, 1);
}
