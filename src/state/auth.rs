//! Shared authentication state.
//!
//! DESIGN
//! ======
//! Plain data derived from the persistent session marker in `util::session`.
//! Route guards read it through the pure helpers below so redirect decisions
//! stay testable without a browser.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Application-wide authenticated flag, provided via context.
///
/// Updated only through `util::session::sign_in`/`sign_out`, which re-derive
/// it from the persistent marker after every write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
}

/// True when a guarded route should bounce the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.authenticated
}

/// True when the login screen should skip straight to the portal.
pub fn should_redirect_authed(state: &AuthState) -> bool {
    state.authenticated
}
