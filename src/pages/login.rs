//! Login page: schema-validated email + password submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submit flow is two sequential awaited requests: CSRF cookie priming,
//! then the credential post. While the pair is pending the submit control is
//! disabled; there is no timeout or retry. A visitor whose session marker is
//! already present is bounced straight to the portal without seeing the form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::register_dialog::RegisterDialog;
#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::auth::{self, AuthState};
use crate::state::toasts::ToastState;
use crate::util::form;

/// Route navigated to after a successful sign-in.
pub const ADMIN_ROUTE: &str = "/admin";

/// Inline messages produced by submit-time validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check both fields against the schema. Either a request body is produced,
/// or the per-field messages are returned and no network call happens.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let email = form::validate_email(email);
    let password = form::validate_password(password);
    match (email, password) {
        (Ok(email), Ok(password)) => Ok(Credentials { email, password }),
        (email, password) => Err(LoginFieldErrors {
            email: email.err(),
            password: password.err(),
        }),
    }
}

/// Run the two-step submission: CSRF priming, then the credential post.
#[cfg(feature = "hydrate")]
async fn submit_credentials(credentials: &Credentials) -> Result<(), ApiError> {
    crate::net::api::fetch_csrf_cookie().await?;
    crate::net::api::login(credentials).await
}

/// Login page with inline field validation and toast feedback.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // A present session marker skips the form entirely.
    Effect::new(move || {
        if auth::should_redirect_authed(&auth.get()) {
            navigate(ADMIN_ROUTE, NavigateOptions::default());
        }
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<String>);
    let password_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let show_register = RwSignal::new(false);

    let on_register_cancel = Callback::new(move |()| show_register.set(false));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        email_error.set(None);
        password_error.set(None);

        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(errors) => {
                email_error.set(errors.email.map(ToOwned::to_owned));
                password_error.set(errors.password.map(ToOwned::to_owned));
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match submit_credentials(&credentials).await {
                Ok(()) => {
                    crate::util::session::sign_in(auth);
                    toasts.update(|t| {
                        t.success("Login successful");
                    });
                    email.set(String::new());
                    password.set(String::new());
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(ADMIN_ROUTE);
                    }
                }
                Err(error) => {
                    if let Some(message) = error.field_message("email") {
                        email_error.set(Some(message));
                    }
                    toasts.update(|t| {
                        t.error(error.message());
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Lectern"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email"
                        <input
                            class="login-input"
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || email_error.get().is_some()>
                        <p class="login-form__error">{move || email_error.get().unwrap_or_default()}</p>
                    </Show>
                    <label class="login-form__label">
                        "Password"
                        <input
                            class="login-input"
                            type="password"
                            placeholder="********"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || password_error.get().is_some()>
                        <p class="login-form__error">{move || password_error.get().unwrap_or_default()}</p>
                    </Show>
                    <a class="login-form__forgot" href="/forgot-password">
                        "Forgot your password?"
                    </a>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "No account yet? "
                    <button class="login-card__register" on:click=move |_| show_register.set(true)>
                        "Create one"
                    </button>
                </p>
            </div>
            <Show when=move || show_register.get()>
                <RegisterDialog on_cancel=on_register_cancel/>
            </Show>
        </div>
    }
}
