//! User-facing notification text.
//!
//! DESIGN
//! ======
//! Each operation owns a small table of the codes it explains specially;
//! everything else falls through to [`common`], which matches the closed
//! [`ErrorCode`] enum exhaustively so a new code cannot be added without
//! deciding what the user sees. Raw codes never reach the UI.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use std::fmt;

use contract::ErrorCode;

pub const GENERIC_FAILURE: &str = "Something went wrong";
pub const UNEXPECTED: &str = "Unexpected error occurred";
pub const CHECK_FORM: &str = "Please correct the highlighted fields";

/// Every user-triggered API operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    FetchProfile,
    SignUp,
    SignIn,
    Logout,
    UpdateAccount,
    UpdatePassword,
    ForgotPassword,
    ResetPassword,
    ListResources,
    CreateResource,
    DeleteResource,
    RetryConversion,
    GetResource,
}

impl Operation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FetchProfile => "fetch profile",
            Self::SignUp => "sign up",
            Self::SignIn => "sign in",
            Self::Logout => "logout",
            Self::UpdateAccount => "update account",
            Self::UpdatePassword => "update password",
            Self::ForgotPassword => "forgot password",
            Self::ResetPassword => "reset password",
            Self::ListResources => "list resources",
            Self::CreateResource => "create resource",
            Self::DeleteResource => "delete resource",
            Self::RetryConversion => "retry conversion",
            Self::GetResource => "get resource",
        }
    }

    /// Notification shown when this operation fails with `code`.
    #[must_use]
    pub fn failure_message(self, code: Option<ErrorCode>) -> &'static str {
        code.map_or(GENERIC_FAILURE, |code| self.specific(code).unwrap_or_else(|| common(code)))
    }

    /// Notification shown when this operation succeeds, if it announces itself.
    #[must_use]
    pub fn success_message(self) -> Option<&'static str> {
        match self {
            Self::UpdateAccount => Some("Account updated successfully"),
            Self::UpdatePassword => Some("Password updated successfully"),
            Self::ForgotPassword => Some("Check your inbox for a reset code"),
            Self::ResetPassword => Some("Password reset successfully"),
            Self::CreateResource => Some("Video uploaded successfully"),
            Self::DeleteResource => Some("Resource deleted successfully"),
            Self::RetryConversion => Some("Conversion retried successfully"),
            Self::FetchProfile | Self::SignUp | Self::SignIn | Self::Logout | Self::ListResources | Self::GetResource => {
                None
            }
        }
    }

    fn specific(self, code: ErrorCode) -> Option<&'static str> {
        use ErrorCode as C;

        let message = match (self, code) {
            (Self::SignUp, C::EmailInUse) => "Email already in use",
            (
                Self::SignUp | Self::UpdateAccount | Self::UpdatePassword | Self::ForgotPassword | Self::ResetPassword,
                C::ValidationRequestError,
            ) => "Make sure you enter the correct info",
            (Self::SignIn, C::UnableToLogin) => "Unable to login",
            (Self::Logout, C::UnexpectedError) => "Unable to logout",
            (Self::UpdateAccount | Self::UpdatePassword | Self::ForgotPassword, C::NotFound) => "Account not found",
            (Self::UpdatePassword, C::PasswordDoesNotMatch) => "Wrong current password",
            (Self::UpdatePassword | Self::ResetPassword, C::PasswordsMustBeTheSame) => {
                "Make sure that you confirm your new password"
            }
            (Self::ResetPassword, C::NotFound) => "This reset code is invalid or has expired",
            (Self::CreateResource, C::MulterFileDoesNotExist) => "Please make sure you upload a video",
            (Self::CreateResource, C::MulterSizeError) => "File is too large",
            (Self::CreateResource, C::MulterVideoTypeError) => "Only video files (.mp4, .mov, .avi, .mkv) are allowed!",
            (Self::CreateResource, C::ValidationRequestError) => "Make sure you enter a name",
            (Self::DeleteResource, C::NotFound) => "The resource you are trying to delete does not exist",
            (Self::RetryConversion, C::VideoConvertedAlready) => "Video converted already",
            (Self::RetryConversion, C::VideoIsStillBeingConverted) => "Keep waiting, video is still under conversion.",
            (Self::GetResource, C::NotFound) => "Resource does not exist",
            _ => return None,
        };
        Some(message)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback text for codes an operation does not explain itself.
#[must_use]
pub fn common(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::UnexpectedError => UNEXPECTED,
        ErrorCode::ValidationRequestError
        | ErrorCode::EmailInUse
        | ErrorCode::UnableToLogin
        | ErrorCode::NotFound
        | ErrorCode::AccessTokenExpired
        | ErrorCode::PasswordDoesNotMatch
        | ErrorCode::PasswordsMustBeTheSame
        | ErrorCode::MulterFileDoesNotExist
        | ErrorCode::MulterSizeError
        | ErrorCode::MulterVideoTypeError
        | ErrorCode::VideoConvertedAlready
        | ErrorCode::VideoIsStillBeingConverted
        | ErrorCode::Unrecognized => GENERIC_FAILURE,
    }
}
