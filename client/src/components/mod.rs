//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and resource widgets while reading and
//! writing the shared containers from Leptos context providers.

pub mod delete_modal;
pub mod empty_list;
pub mod field;
pub mod guards;
pub mod loading;
pub mod navbar;
pub mod notice_toast;
pub mod pagination;
pub mod resource_card;
pub mod upload_modal;
