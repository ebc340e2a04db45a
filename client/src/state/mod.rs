//! Client-side view state.
//!
//! DESIGN
//! ======
//! Each module is a plain struct owned by one view (`auth` is shared through
//! context). Pages wrap them in `RwSignal`s; the transitions themselves stay
//! free of Leptos so they can be unit tested directly.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod chat;
pub mod personal;
pub mod upload;
