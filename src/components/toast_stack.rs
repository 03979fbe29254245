//! Fixed-position overlay rendering the shared toast list.
//!
//! Each toast auto-dismisses after [`DISMISS_AFTER`] via a browser timer
//! task; clicking a toast dismisses it immediately. SSR renders the (empty)
//! container only.

use leptos::prelude::*;

use crate::state::toasts::{ToastLevel, ToastState};

/// How long a toast stays up before auto-dismissal.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(5);

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "toast toast--success",
        ToastLevel::Error => "toast toast--error",
    }
}

/// Overlay component fed by the `ToastState` context.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Schedule one dismiss task per toast. The watermark tracks the next
    // unscheduled id so re-runs of the effect never double-schedule.
    #[cfg(feature = "hydrate")]
    {
        let scheduled = StoredValue::new(0u64);
        Effect::new(move || {
            for toast in toasts.get().items {
                if toast.id < scheduled.get_value() {
                    continue;
                }
                scheduled.set_value(toast.id + 1);
                let id = toast.id;
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(DISMISS_AFTER).await;
                    toasts.update(|t| t.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-stack" role="status">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div
                                class=level_class(toast.level)
                                on:click=move |_| toasts.update(|t| t.dismiss(id))
                            >
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
