//! REST API helpers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` outputs instead of panics so auth
//! failures degrade to inline messages and toasts without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{Credentials, RegistrationRequest};
#[cfg(feature = "hydrate")]
use crate::net::types::ValidationErrorBody;

/// Documented success status for credentialed mutations: `204 No Content`.
pub const NO_CONTENT: u16 = 204;

/// True when `status` signals a successful credentialed mutation. The server
/// contract is exactly `204`; every other status is a failure.
pub(crate) fn mutation_succeeded(status: u16) -> bool {
    status == NO_CONTENT
}

/// Prime the CSRF cookie via `GET /api/auth/csrf-cookie`.
///
/// The response body is ignored; the call exists for its cookie side effect
/// and must precede every credentialed mutation.
///
/// # Errors
///
/// Returns an error if the request fails or the server responds with a
/// non-OK status.
pub async fn fetch_csrf_cookie() -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/csrf-cookie")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                status: resp.status(),
                body: None,
            })
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Submit credentials via `POST /api/auth/login`.
///
/// Success is the documented `204 No Content` contract. Failure responses are
/// read for a structured validation body when one is present.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the request never completes and
/// `ApiError::Rejected` for any non-204 response.
pub async fn login(credentials: &Credentials) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if mutation_succeeded(resp.status()) {
            return Ok(());
        }
        let body = resp.json::<ValidationErrorBody>().await.ok();
        Err(ApiError::Rejected {
            status: resp.status(),
            body,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Create an account via `POST /api/auth/register`. Same contract as `login`.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the request never completes and
/// `ApiError::Rejected` for any non-204 response.
pub async fn register(request: &RegistrationRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(request)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if mutation_succeeded(resp.status()) {
            return Ok(());
        }
        let body = resp.json::<ValidationErrorBody>().await.ok();
        Err(ApiError::Rejected {
            status: resp.status(),
            body,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Request a password-reset email via `POST /api/auth/forgot-password`.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the request never completes and
/// `ApiError::Rejected` for any non-204 response.
pub async fn request_password_reset(email: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let resp = gloo_net::http::Request::post("/api/auth/forgot-password")
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if mutation_succeeded(resp.status()) {
            return Ok(());
        }
        let body = resp.json::<ValidationErrorBody>().await.ok();
        Err(ApiError::Rejected {
            status: resp.status(),
            body,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// End the session via `POST /api/auth/logout`. Best-effort.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}
