//! Account and video resource entities.

#[cfg(test)]
#[path = "entities_test.rs"]
mod entities_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Postal address attached to an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub street: String,
}

/// An account as returned by the profile, sign-in, sign-up and update calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub fullname: String,
    #[serde(default)]
    pub address: Address,
    /// Optimistic-concurrency counter maintained by the server.
    pub version: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl User {
    /// Two-letter avatar initials.
    ///
    /// First letters of the first two words, or the first two letters of a
    /// single-word name.
    #[must_use]
    pub fn initials(&self) -> String {
        let mut words = self.fullname.split_whitespace();
        match (words.next(), words.next()) {
            (Some(first), Some(second)) => first.chars().take(1).chain(second.chars().take(1)).collect(),
            (Some(only), None) => only.chars().take(2).collect(),
            _ => String::new(),
        }
    }
}

/// Conversion lifecycle of an uploaded video.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VideoState {
    Uploaded,
    Converting,
    Complete,
    Failed,
}

impl VideoState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Uploaded => "UPLOADED",
            Self::Converting => "CONVERTING",
            Self::Complete => "COMPLETE",
            Self::Failed => "FAILED",
        }
    }

    /// No further transitions happen without user action.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }

    /// Only failed conversions may be retried.
    #[must_use]
    pub fn can_retry(self) -> bool {
        self == Self::Failed
    }
}

impl fmt::Display for VideoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Owner of a resource: either the populated account or just its id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Owner {
    Profile(Box<User>),
    Id(String),
}

impl Owner {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Profile(user) => &user.id,
            Self::Id(id) => id,
        }
    }
}

/// Stored record of an uploaded video.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub id: String,
    pub name: String,
    /// Upload size in bytes.
    pub size: u64,
    pub status: VideoState,
    pub user: Owner,
    pub created_at: String,
    pub updated_at: String,
}

/// A resource together with its signed media URLs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub resource: ResourceRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

impl Resource {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.resource.id
    }

    #[must_use]
    pub fn status(&self) -> VideoState {
        self.resource.status
    }

    /// URL to play: the converted audio once complete, the video preview otherwise.
    #[must_use]
    pub fn playable_url(&self) -> Option<&str> {
        match self.resource.status {
            VideoState::Complete => self.audio_url.as_deref(),
            VideoState::Uploaded | VideoState::Converting | VideoState::Failed => self.video_url.as_deref(),
        }
    }
}
