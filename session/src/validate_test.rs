use super::*;

fn login_form(email: &str, password: &str) -> LoginForm {
    LoginForm { email: email.to_owned(), password: password.into() }
}

fn video(content_type: &str, size: u64) -> VideoMeta {
    VideoMeta { file_name: "clip".to_owned(), content_type: content_type.to_owned(), size }
}

#[test]
fn login_accepts_well_formed_credentials() {
    assert!(login(&login_form("ada@example.com", "hunter2")).is_ok());
}

#[test]
fn login_reports_every_failing_field() {
    let errors = login(&login_form("", "abc")).unwrap_err();
    assert_eq!(errors.get("email"), Some(REQUIRED));
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_SHORT));
    assert_eq!(errors.iter().count(), 2);
}

#[test]
fn email_shape_is_checked() {
    for bad in ["ada", "ada@", "@example.com", "ada@example", "ada@.com", "ada@example.", "a da@example.com", "a@b@c.com"] {
        let errors = login(&login_form(bad, "hunter2")).unwrap_err();
        assert_eq!(errors.get("email"), Some(NOT_AN_EMAIL), "{bad}");
    }
    assert!(login(&login_form("a@b.co", "hunter2")).is_ok());
}

#[test]
fn password_length_counts_characters_not_bytes() {
    assert!(login(&login_form("ada@example.com", "ééé")).is_err());
    assert!(login(&login_form("ada@example.com", "éééé")).is_ok());
    let long = "x".repeat(21);
    let errors = login(&login_form("ada@example.com", &long)).unwrap_err();
    assert_eq!(errors.get("password"), Some(PASSWORD_TOO_LONG));
}

#[test]
fn sign_up_requires_matching_confirmation() {
    let form = CreateAccountForm {
        fullname: "Ada Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "hunter2".into(),
        confirm_password: "hunter3".into(),
    };
    let errors = create_account(&form).unwrap_err();
    assert_eq!(errors.get("confirmPassword"), Some(PASSWORDS_DIFFER));
    assert_eq!(errors.get("fullname"), None);

    let form = CreateAccountForm { confirm_password: "hunter2".into(), ..form };
    assert!(create_account(&form).is_ok());
}

#[test]
fn blank_fullname_is_required() {
    let form = UpdateAccountForm { fullname: "   ".to_owned(), ..UpdateAccountForm::default() };
    assert_eq!(update_account(&form).unwrap_err().get("fullname"), Some(REQUIRED));
}

#[test]
fn password_change_validates_new_pair() {
    let form = UpdatePasswordForm {
        old_password: "".into(),
        new_password: "newpass".into(),
        confirm_new_password: "other".into(),
    };
    let errors = update_password(&form).unwrap_err();
    assert_eq!(errors.get("oldPassword"), Some(REQUIRED));
    assert_eq!(errors.get("confirmNewPassword"), Some(PASSWORDS_DIFFER));
}

#[test]
fn reset_requires_code() {
    let form = ResetPasswordForm { code: String::new(), password: "newpass".into(), confirm_password: "newpass".into() };
    assert_eq!(reset_password(&form).unwrap_err().get("code"), Some(REQUIRED));
    assert!(forgot_password(&ForgotPasswordForm { email: "ada@example.com".to_owned() }).is_ok());
}

#[test]
fn upload_rejects_oversized_video() {
    let config = ClientConfig::default();
    let errors = upload("holiday", Some(&video("video/mp4", 60 * 1024 * 1024)), &config).unwrap_err();
    assert_eq!(errors.get("video"), Some("Video must be 50 MB maximum"));
    assert!(upload("holiday", Some(&video("video/mp4", 50 * 1024 * 1024)), &config).is_ok());
}

#[test]
fn oversize_message_names_the_configured_limit() {
    let config = ClientConfig { max_upload_bytes: 10 * 1024 * 1024, ..ClientConfig::default() };
    let errors = upload("holiday", Some(&video("video/mp4", 20 * 1024 * 1024)), &config).unwrap_err();
    assert_eq!(errors.get("video"), Some("Video must be 10 MB maximum"));
    assert_eq!(video_too_large(1536), "Video must be 1.5 KB maximum");
}

#[test]
fn upload_rejects_non_video_and_missing_file() {
    let config = ClientConfig::default();
    let errors = upload("holiday", Some(&video("image/png", 10)), &config).unwrap_err();
    assert_eq!(errors.get("video"), Some(NOT_A_VIDEO));
    let errors = upload("holiday", None, &config).unwrap_err();
    assert_eq!(errors.get("video"), Some(REQUIRED));
}

#[test]
fn upload_title_length_is_bounded() {
    let config = ClientConfig::default();
    let clip = video("video/mkv", 10);
    assert_eq!(upload("", Some(&clip), &config).unwrap_err().get("name"), Some(REQUIRED));
    let long = "t".repeat(51);
    assert_eq!(upload(&long, Some(&clip), &config).unwrap_err().get("name"), Some(TITLE_TOO_LONG));
    assert!(upload(&"t".repeat(50), Some(&clip), &config).is_ok());
}
