//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, the action it
//! submits, where to navigate afterwards) and delegates rendering details to
//! `components`.

pub mod forgot_password;
pub mod help;
pub mod home;
pub mod landing;
pub mod not_found;
pub mod profile;
pub mod reset_password;
pub mod resource;
pub mod signin;
pub mod signup;
