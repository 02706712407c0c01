use contract::ErrorCode;

use super::*;
use crate::transport::TransportError;

#[test]
fn message_uses_the_operation_table() {
    let err = ActionError::new(Operation::SignIn, ApiError::Rejected { status: 401, code: Some(ErrorCode::UnableToLogin) });
    assert_eq!(err.message(), "Unable to login");
    assert!(err.validation().is_none());
}

#[test]
fn transport_failure_reads_generic() {
    let err = ActionError::new(Operation::ListResources, ApiError::Transport(TransportError::Send("offline".to_owned())));
    assert_eq!(err.message(), "Something went wrong");
}

#[test]
fn display_names_the_operation() {
    let err = ActionError::new(Operation::DeleteResource, ApiError::Rejected { status: 404, code: Some(ErrorCode::NotFound) });
    assert!(err.to_string().starts_with("delete resource failed"));
}
