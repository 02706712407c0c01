//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (file reading, task spawning)
//! and pure presentation rules from page and component logic.

pub mod file;
pub mod format;
pub mod task;
