//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `toasts`) so individual components can
//! depend on small focused models provided via Leptos context.

pub mod auth;
pub mod toasts;
