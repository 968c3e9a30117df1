use super::*;

#[test]
fn push_appends_newest_last() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "saved");
    state.push(ToastKind::Error, "failed");
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "saved");
    assert_eq!(state.toasts[1].message, "failed");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn push_returns_unique_ids() {
    let mut state = ToastState::default();
    let a = state.push(ToastKind::Success, "one");
    let b = state.push(ToastKind::Success, "two");
    assert_ne!(a, b);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let keep = state.push(ToastKind::Success, "keep");
    let drop = state.push(ToastKind::Error, "drop");
    state.dismiss(&drop);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, keep);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastState::default();
    state.push(ToastKind::Success, "only");
    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn kind_classes_are_distinct() {
    assert_ne!(ToastKind::Success.class(), ToastKind::Error.class());
    assert!(ToastKind::Success.class().starts_with("toast"));
}
