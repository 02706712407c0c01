//! Error taxonomy of the session layer.

use contract::{ContractError, ErrorCode};

use crate::transport::TransportError;
use crate::validate::ValidationErrors;

/// Failure of a typed API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response was received. Never triggers a token refresh.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response arrived but its envelope (or status) reported failure.
    #[error("request rejected with status {status} ({})", .code.map_or("no code", ErrorCode::as_str))]
    Rejected { status: u16, code: Option<ErrorCode> },

    /// A body could not be encoded or decoded as JSON.
    #[error("JSON handling failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A success envelope did not have the shape its endpoint promises.
    #[error("unexpected response shape: {0}")]
    Contract(ContractError),

    /// Client-side validation blocked the request before it was sent.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ApiError {
    /// The envelope error code, when one was received.
    #[must_use]
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Rejected { code, .. } => *code,
            Self::Transport(_) | Self::Json(_) | Self::Contract(_) | Self::Invalid(_) => None,
        }
    }

    /// Map an envelope conversion failure, keeping error codes as rejections.
    pub(crate) fn from_contract(status: u16, err: ContractError) -> Self {
        match err {
            ContractError::Rejected(code) => Self::Rejected { status, code: Some(code) },
            ContractError::MissingField(_) => Self::Contract(err),
        }
    }
}
