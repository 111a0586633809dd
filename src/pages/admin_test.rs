use super::*;

// =============================================================================
// change_label
// =============================================================================

#[test]
fn change_label_prefixes_positive_changes() {
    assert_eq!(change_label(3), "+3");
}

#[test]
fn change_label_keeps_negative_sign() {
    assert_eq!(change_label(-2), "-2");
}

#[test]
fn change_label_zero_is_unsigned() {
    assert_eq!(change_label(0), "0");
}

// =============================================================================
// thousands
// =============================================================================

#[test]
fn thousands_groups_digits() {
    assert_eq!(thousands(1247), "1,247");
    assert_eq!(thousands(1_000_000), "1,000,000");
}

#[test]
fn thousands_leaves_small_numbers_alone() {
    assert_eq!(thousands(0), "0");
    assert_eq!(thousands(999), "999");
}

// =============================================================================
// severity badges
// =============================================================================

#[test]
fn severity_badge_classes() {
    assert_eq!(Severity::Medium.badge_class(), "badge badge--outline");
    assert_eq!(Severity::High.badge_class(), "badge badge--danger");
    assert_eq!(Severity::Critical.badge_class(), "badge badge--danger");
}

#[test]
fn trend_scores_fit_the_progress_scale() {
    assert!(WELLBEING_TRENDS.iter().all(|t| t.score <= 100));
}
