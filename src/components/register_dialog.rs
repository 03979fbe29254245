//! Modal dialog for creating a portal account.

#[cfg(test)]
#[path = "register_dialog_test.rs"]
mod register_dialog_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::net::error::ApiError;
use crate::net::types::RegistrationRequest;
use crate::state::toasts::ToastState;
use crate::util::form;

/// Check the dialog fields against the schema. The name is required and
/// trimmed; email and password follow the login rules.
pub(crate) fn validate_registration_input(
    name: &str,
    email: &str,
    password: &str,
) -> Result<RegistrationRequest, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    let email = form::validate_email(email)?;
    let password = form::validate_password(password)?;
    Ok(RegistrationRequest {
        name: name.to_owned(),
        email,
        password,
    })
}

/// Run the two-step registration: CSRF priming, then the account post.
#[cfg(feature = "hydrate")]
async fn submit_registration(request: &RegistrationRequest) -> Result<(), ApiError> {
    crate::net::api::fetch_csrf_cookie().await?;
    crate::net::api::register(request).await
}

/// Account-creation dialog. Backdrop click cancels; Enter submits.
#[component]
pub fn RegisterDialog(on_cancel: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        if busy.get() {
            return;
        }
        let request = match validate_registration_input(&name.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match submit_registration(&request).await {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Account created. You can sign in now.");
                    });
                    on_cancel.run(());
                }
                Err(api_error) => {
                    let inline = api_error
                        .field_message("email")
                        .unwrap_or_else(|| api_error.message());
                    error.set(Some(inline));
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create Account"</h2>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Password"
                    <input
                        class="dialog__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if busy.get() { "Creating..." } else { "Create" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
