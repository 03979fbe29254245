use super::*;

#[test]
fn marker_present_requires_the_exact_value() {
    assert!(marker_present(Some("true")));
    assert!(!marker_present(Some("false")));
    assert!(!marker_present(Some("1")));
    assert!(!marker_present(Some("")));
    assert!(!marker_present(None));
}

#[test]
fn restore_is_signed_out_off_browser() {
    // Without a browser storage there is no marker to derive from.
    assert!(!restore().authenticated);
}
