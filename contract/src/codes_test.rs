use super::*;

#[test]
fn success_code_parses_from_wire_string() {
    let code: Code = serde_json::from_str("\"SUCCESS\"").unwrap();
    assert_eq!(code, Code::Success(SuccessCode::Success));
    assert!(code.is_success());
    assert_eq!(code.error(), None);
}

#[test]
fn known_error_codes_parse_into_error_space() {
    let code: Code = serde_json::from_str("\"ACCESS_TOKEN_EXPIRED\"").unwrap();
    assert_eq!(code, Code::Error(ErrorCode::AccessTokenExpired));
    assert!(!code.is_success());

    let code: Code = serde_json::from_str("\"VIDEO_IS_STILL_BEING_CONVERTED\"").unwrap();
    assert_eq!(code.error(), Some(ErrorCode::VideoIsStillBeingConverted));
}

#[test]
fn unknown_error_code_becomes_unrecognized() {
    let code: Code = serde_json::from_str("\"SOMETHING_NEW\"").unwrap();
    assert_eq!(code.error(), Some(ErrorCode::Unrecognized));
}

#[test]
fn non_string_code_is_rejected() {
    assert!(serde_json::from_str::<Code>("42").is_err());
}

#[test]
fn as_str_matches_serde_spelling() {
    for code in [
        ErrorCode::ValidationRequestError,
        ErrorCode::EmailInUse,
        ErrorCode::UnableToLogin,
        ErrorCode::NotFound,
        ErrorCode::AccessTokenExpired,
        ErrorCode::PasswordDoesNotMatch,
        ErrorCode::PasswordsMustBeTheSame,
        ErrorCode::MulterFileDoesNotExist,
        ErrorCode::MulterSizeError,
        ErrorCode::MulterVideoTypeError,
        ErrorCode::VideoConvertedAlready,
        ErrorCode::VideoIsStillBeingConverted,
        ErrorCode::UnexpectedError,
    ] {
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, format!("\"{}\"", code.as_str()));
    }
}

#[test]
fn display_uses_wire_spelling() {
    assert_eq!(ErrorCode::EmailInUse.to_string(), "EMAIL_IN_USE");
}
