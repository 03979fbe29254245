//! Admin portal landing page behind the session guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the post-login destination. It only checks the derived client-side
//! auth state; any stale cookie is the server's problem to reject on the
//! first real API call.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};

/// Portal landing page. Redirects to `/login` when no session is established.
#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth::should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                crate::util::session::sign_out(auth);
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <Show
            when=move || auth.get().authenticated
            fallback=move || {
                view! {
                    <div class="admin-page">
                        <p>"Redirecting to sign in..."</p>
                    </div>
                }
            }
        >
            <div class="admin-page">
                <header class="admin-page__header toolbar">
                    <span class="toolbar__title">"Lectern Admin"</span>
                    <span class="toolbar__spacer"></span>
                    <button class="btn toolbar__logout" on:click=on_logout title="Sign out">
                        "Sign out"
                    </button>
                </header>
                <main class="admin-page__body">
                    <h1>"Welcome back"</h1>
                    <p>"You are signed in. Pick a section from the navigation to manage the portal."</p>
                </main>
            </div>
        </Show>
    }
}
