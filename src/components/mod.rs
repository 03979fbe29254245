//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chrome shared across pages while reading/writing shared
//! state from Leptos context providers.

pub mod register_dialog;
pub mod toast_stack;
