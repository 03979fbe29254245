//! Persistent session marker over browser `localStorage`.
//!
//! DESIGN
//! ======
//! The marker under [`STORAGE_KEY`] is the single authoritative record of
//! "signed in". The in-memory `AuthState` is derived from it via [`restore`]
//! and updated only through [`sign_in`]/[`sign_out`], which re-derive after
//! every write, so the two representations cannot drift.
//!
//! Presence of the marker, not validity of any server token, is what gates
//! client-side redirects; the server still rejects stale cookies on its own.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// `localStorage` key holding the session marker.
pub const STORAGE_KEY: &str = "auth";

/// Value stored under [`STORAGE_KEY`] for an established session.
const MARKER: &str = "true";

/// True when a stored value marks an established session.
pub(crate) fn marker_present(raw: Option<&str>) -> bool {
    raw == Some(MARKER)
}

/// Read whether a session marker is present. Always false on the server.
pub fn is_established() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return false;
        };
        let raw = storage.get_item(STORAGE_KEY).ok().flatten();
        marker_present(raw.as_deref())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Derive the shared auth state from the persistent marker.
pub fn restore() -> AuthState {
    AuthState {
        authenticated: is_established(),
    }
}

/// Establish the session: write the marker, then re-derive shared state.
pub fn sign_in(auth: RwSignal<AuthState>) {
    write_marker(true);
    auth.set(restore());
}

/// Clear the session marker and re-derive shared state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    write_marker(false);
    auth.set(restore());
}

fn write_marker(present: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            leptos::logging::warn!("session storage unavailable; marker not persisted");
            return;
        };
        let result = if present {
            storage.set_item(STORAGE_KEY, MARKER)
        } else {
            storage.remove_item(STORAGE_KEY)
        };
        if result.is_err() {
            leptos::logging::warn!("session marker write failed");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = present;
    }
}
