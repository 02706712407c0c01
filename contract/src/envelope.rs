//! The `{code, data?, itemsPerPage?, page?, totalPages?}` reply wrapper.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::{Deserialize, Serialize};

use crate::ContractError;
use crate::codes::{Code, ErrorCode};

/// Uniform wrapper around every API reply.
///
/// `data` is only present on success variants that carry a payload; the
/// pagination fields are only present on list replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub code: Code,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
}

impl<T> ResponseEnvelope<T> {
    /// Success envelope carrying `data`.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self {
            code: Code::Success(crate::SuccessCode::Success),
            data: Some(data),
            items_per_page: None,
            page: None,
            total_pages: None,
        }
    }

    /// Error envelope carrying only `code`.
    #[must_use]
    pub fn error(code: ErrorCode) -> Self {
        Self { code: Code::Error(code), data: None, items_per_page: None, page: None, total_pages: None }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.code.is_success()
    }

    #[must_use]
    pub fn error_code(&self) -> Option<ErrorCode> {
        self.code.error()
    }

    /// Check the code without requiring a payload.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Rejected`] when the code is an error code.
    pub fn into_unit(self) -> Result<(), ContractError> {
        match self.code.error() {
            Some(code) => Err(ContractError::Rejected(code)),
            None => Ok(()),
        }
    }

    /// Take the payload of a success envelope.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Rejected`] for error codes and
    /// [`ContractError::MissingField`] when a success reply has no `data`.
    pub fn into_data(self) -> Result<T, ContractError> {
        if let Some(code) = self.code.error() {
            return Err(ContractError::Rejected(code));
        }
        self.data.ok_or(ContractError::MissingField("data"))
    }
}

impl<T> ResponseEnvelope<Vec<T>> {
    /// Convert a list reply into a [`Page`].
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::Rejected`] for error codes and
    /// [`ContractError::MissingField`] when pagination metadata is absent.
    pub fn into_page(self) -> Result<Page<T>, ContractError> {
        if let Some(code) = self.code.error() {
            return Err(ContractError::Rejected(code));
        }
        Ok(Page {
            data: self.data.unwrap_or_default(),
            page: self.page.ok_or(ContractError::MissingField("page"))?,
            items_per_page: self.items_per_page.ok_or(ContractError::MissingField("itemsPerPage"))?,
            total_pages: self.total_pages.ok_or(ContractError::MissingField("totalPages"))?,
        })
    }
}

/// One page of a paginated list plus its metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub items_per_page: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// The empty first page shown before anything has been uploaded.
    #[must_use]
    pub fn empty() -> Self {
        Self { data: Vec::new(), page: 1, items_per_page: 0, total_pages: 0 }
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
