//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (files, downloads, dialogs,
//! navigation) from page logic. Each one no-ops or stays pure outside the
//! hydrated build so server rendering compiles the same code.

pub mod auth;
pub mod dialog;
pub mod download;
pub mod file;
pub mod markdown;
pub mod navigation;
pub mod time;
