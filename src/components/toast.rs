//! Toast host plus the push helpers pages call on success/failure.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// How long a toast stays up before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_MILLIS: u64 = 4_000;

/// Push a success toast and schedule its dismissal.
pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Success, message.into());
}

/// Push an error toast and schedule its dismissal.
pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    push(toasts, ToastKind::Error, message.into());
}

fn push(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let mut id = String::new();
    toasts.update(|t| id = t.push(kind, message));

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_MILLIS)).await;
            toasts.update(|t| t.dismiss(&id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position toast stack; clicking a toast dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|t| {
                        let id = t.id.clone();
                        view! {
                            <div
                                class=t.kind.class()
                                on:click=move |_| toasts.update(|state| state.dismiss(&id))
                            >
                                {t.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
