//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, redirects, local
//! state signals) and delegates rendering details to `components`.

pub mod admin;
pub mod chat;
pub mod home;
pub mod login;
pub mod logout;
pub mod models;
pub mod signup;
