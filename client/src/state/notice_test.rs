use contract::ErrorCode;
use session::ApiError;

use super::*;

fn rejected(operation: Operation, code: ErrorCode) -> Result<(), ActionError> {
    Err(ActionError::new(operation, ApiError::Rejected { status: 400, code: Some(code) }))
}

#[test]
fn failure_shows_operation_message() {
    let mut state = NoticeState::default();
    state.record(Operation::SignIn, &rejected(Operation::SignIn, ErrorCode::UnableToLogin));
    let notice = state.current().unwrap();
    assert_eq!(notice.kind, NoticeKind::Failure);
    assert_eq!(notice.text, "Unable to login");
}

#[test]
fn silent_success_shows_nothing() {
    let mut state = NoticeState::default();
    assert_eq!(state.record(Operation::SignIn, &Ok::<(), ActionError>(())), None);
    assert!(state.current().is_none());
}

#[test]
fn announced_success_is_shown() {
    let mut state = NoticeState::default();
    state.record(Operation::DeleteResource, &Ok::<(), ActionError>(()));
    assert_eq!(state.current().map(|n| n.text.as_str()), Some("Resource deleted successfully"));
}

#[test]
fn stale_dismiss_keeps_newer_notice() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one");
    let second = state.push(NoticeKind::Failure, "two");
    state.dismiss(first);
    assert_eq!(state.current().map(|n| n.id), Some(second));
    state.dismiss(second);
    assert!(state.current().is_none());
}
