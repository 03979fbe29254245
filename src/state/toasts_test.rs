use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.error("two");
    let third = state.success("three");
    assert!(first < second && second < third);
}

#[test]
fn push_records_level_and_message() {
    let mut state = ToastState::default();
    state.success("Login successful");
    state.error("request failed: 500");
    assert_eq!(state.items[0].level, ToastLevel::Success);
    assert_eq!(state.items[0].message, "Login successful");
    assert_eq!(state.items[1].level, ToastLevel::Error);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.success("one");
    let second = state.success("two");
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismiss_ignores_unknown_ids() {
    let mut state = ToastState::default();
    state.success("one");
    state.dismiss(99);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = ToastState::default();
    let first = state.success("one");
    state.dismiss(first);
    let second = state.success("two");
    assert!(second > first);
}
