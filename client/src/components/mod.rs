//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (header, spinner) and the interaction
//! surfaces pages compose (model cards, chat bubbles, the manual upload
//! zone). Shared auth state comes from Leptos context.

pub mod chat_message;
pub mod manual_upload;
pub mod model_card;
pub mod site_header;
pub mod spinner;
