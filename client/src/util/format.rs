//! Presentation formatting for resource cards.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use contract::VideoState;
pub use session::format::{format_size, format_timestamp};

/// First `max` characters of `name`, with an ellipsis when cut.
pub fn truncate_name(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_owned();
    }
    let mut cut: String = name.chars().take(max).collect();
    cut.push_str("...");
    cut
}

/// CSS modifier for a status badge.
pub fn status_badge_class(state: VideoState) -> &'static str {
    match state {
        VideoState::Uploaded => "badge badge--uploaded",
        VideoState::Converting => "badge badge--converting",
        VideoState::Complete => "badge badge--complete",
        VideoState::Failed => "badge badge--failed",
    }
}
