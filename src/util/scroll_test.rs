use super::*;

#[test]
fn anchor_target_returns_fragment_selector() {
    assert_eq!(anchor_target("#projects"), Some("#projects"));
    assert_eq!(anchor_target("#contact-form"), Some("#contact-form"));
}

#[test]
fn anchor_target_ignores_bare_hash() {
    assert_eq!(anchor_target("#"), None);
}

#[test]
fn anchor_target_ignores_non_fragment_links() {
    assert_eq!(anchor_target("https://example.com/#x"), None);
    assert_eq!(anchor_target("/about"), None);
}

#[test]
fn animate_selector_targets_data_attribute() {
    assert_eq!(ANIMATE_SELECTOR, "[data-animate]");
    assert_ne!(PRE_ANIMATE_CLASS, IN_VIEW_CLASS);
}
