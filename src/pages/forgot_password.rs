//! Password-reset request page linked from the login form.

use leptos::prelude::*;

use crate::state::toasts::ToastState;
use crate::util::form;

/// Single-field screen that asks the server to email a reset link.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let address = match form::validate_email(&email.get()) {
            Ok(address) => address,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&address).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Reset link sent. Check your inbox.");
                    });
                    email.set(String::new());
                }
                Err(api_error) => {
                    toasts.update(|t| {
                        t.error(api_error.message());
                    });
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = address;
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Reset password"</h1>
                <p class="login-card__subtitle">"We will email you a reset link"</p>
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
                    <Show when=move || error.get().is_some()>
                        <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Sending..." } else { "Send reset link" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    <a href="/login">"Back to sign in"</a>
                </p>
            </div>
        </div>
    }
}
