//! Success and error code spaces carried in every envelope.
//!
//! The two spaces are disjoint. `SUCCESS` is the only success code; every
//! other string is an error, and strings this client does not know decode to
//! [`ErrorCode::Unrecognized`] rather than failing the whole reply.

#[cfg(test)]
#[path = "codes_test.rs"]
mod codes_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single success code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuccessCode {
    Success,
}

/// Error codes the API is known to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationRequestError,
    EmailInUse,
    UnableToLogin,
    NotFound,
    AccessTokenExpired,
    PasswordDoesNotMatch,
    PasswordsMustBeTheSame,
    MulterFileDoesNotExist,
    MulterSizeError,
    MulterVideoTypeError,
    VideoConvertedAlready,
    VideoIsStillBeingConverted,
    UnexpectedError,
    /// Any code string this client does not recognise.
    #[serde(other)]
    Unrecognized,
}

impl ErrorCode {
    /// Wire spelling of the code.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ValidationRequestError => "VALIDATION_REQUEST_ERROR",
            Self::EmailInUse => "EMAIL_IN_USE",
            Self::UnableToLogin => "UNABLE_TO_LOGIN",
            Self::NotFound => "NOT_FOUND",
            Self::AccessTokenExpired => "ACCESS_TOKEN_EXPIRED",
            Self::PasswordDoesNotMatch => "PASSWORD_DOES_NOT_MATCH",
            Self::PasswordsMustBeTheSame => "PASSWORDS_MUST_BE_THE_SAME",
            Self::MulterFileDoesNotExist => "MULTER_FILE_DOES_NOT_EXIST",
            Self::MulterSizeError => "MULTER_SIZE_ERROR",
            Self::MulterVideoTypeError => "MULTER_VIDEO_TYPE_ERROR",
            Self::VideoConvertedAlready => "VIDEO_CONVERTED_ALREADY",
            Self::VideoIsStillBeingConverted => "VIDEO_IS_STILL_BEING_CONVERTED",
            Self::UnexpectedError => "UNEXPECTED_ERROR",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `code` field of an envelope: one of the two code spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Code {
    Success(SuccessCode),
    Error(ErrorCode),
}

impl Code {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Success(SuccessCode::Success))
    }

    /// The error code, when this is not a success.
    #[must_use]
    pub fn error(self) -> Option<ErrorCode> {
        match self {
            Self::Success(_) => None,
            Self::Error(code) => Some(code),
        }
    }
}

impl From<ErrorCode> for Code {
    fn from(code: ErrorCode) -> Self {
        Self::Error(code)
    }
}
