//! Client configuration shared by the browser and native front ends.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REFRESH_PATH: &str = "/api/users/refresh-token";
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// MIME types accepted by the upload form.
pub const ALLOWED_VIDEO_TYPES: [&str; 4] = ["video/mp4", "video/mov", "video/avi", "video/mkv"];

/// A configuration override that could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got '{value}'")]
    NotPositive { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin prefixed to every API path. Empty means same-origin.
    pub base_url: String,
    /// Path of the token refresh endpoint.
    pub refresh_path: String,
    pub items_per_page: u32,
    pub max_upload_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            refresh_path: DEFAULT_REFRESH_PATH.to_owned(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at `base_url`; a trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned(), ..Self::default() }
    }

    /// Absolute (or same-origin) URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }

    /// Build a config from key lookups (usually environment variables).
    ///
    /// Optional:
    /// - `VIDAUDIO_BASE_URL`: default same-origin
    /// - `VIDAUDIO_REFRESH_PATH`: default `/api/users/refresh-token`
    /// - `VIDAUDIO_ITEMS_PER_PAGE`: default 10
    /// - `VIDAUDIO_MAX_UPLOAD_BYTES`: default 50 MiB
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotPositive`] for numeric keys that do not
    /// parse or are zero.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = lookup("VIDAUDIO_BASE_URL").map_or_else(Self::default, |url| Self::with_base_url(&url));
        if let Some(path) = lookup("VIDAUDIO_REFRESH_PATH") {
            config.refresh_path = path;
        }
        if let Some(raw) = lookup("VIDAUDIO_ITEMS_PER_PAGE") {
            config.items_per_page = parse_positive("VIDAUDIO_ITEMS_PER_PAGE", raw)?;
        }
        if let Some(raw) = lookup("VIDAUDIO_MAX_UPLOAD_BYTES") {
            config.max_upload_bytes = parse_positive("VIDAUDIO_MAX_UPLOAD_BYTES", raw)?;
        }
        Ok(config)
    }

    #[must_use]
    pub fn is_allowed_video_type(content_type: &str) -> bool {
        ALLOWED_VIDEO_TYPES.contains(&content_type)
    }
}

fn parse_positive<N>(key: &'static str, raw: String) -> Result<N, ConfigError>
where
    N: std::str::FromStr + Default + PartialEq,
{
    match raw.trim().parse::<N>() {
        Ok(n) if n != N::default() => Ok(n),
        _ => Err(ConfigError::NotPositive { key, value: raw }),
    }
}
