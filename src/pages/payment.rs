//! Payment page: booking summary and the hosted-checkout handoff.

#[cfg(test)]
#[path = "payment_test.rs"]
mod payment_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::toast;
use crate::net::types::Booking;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format;

const CHECKOUT_UNAVAILABLE: &str = "Unable to start checkout. Please try again.";

fn find_booking(bookings: &[Booking], id: &str) -> Option<Booking> {
    bookings.iter().find(|b| b.id == id).cloned()
}

#[component]
pub fn PaymentPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();
    let starting = RwSignal::new(false);

    // Guarded route: anonymous visitors go to login once the session settles.
    let nav_guard = navigate.clone();
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            nav_guard("/login", NavigateOptions::default());
        }
    });

    let bookings = LocalResource::new(|| async {
        crate::net::api::my_bookings(1000).await.ok().map(|p| p.bookings)
    });

    let on_pay = Callback::new(move |booking_id: String| {
        if starting.get_untracked() {
            return;
        }
        starting.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_checkout_session(&booking_id).await {
                Ok(checkout) => match checkout.url {
                    Some(url) => {
                        // Off to the processor's hosted page; it returns to
                        // /successful or /cancelled with query params.
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    None => {
                        toast::error(toasts, CHECKOUT_UNAVAILABLE);
                        starting.set(false);
                    }
                },
                Err(err) => {
                    toast::error(toasts, err.to_string());
                    starting.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = booking_id;
            starting.set(false);
        }
    });

    view! {
        <div class="payment-page">
            <header>
                <h1>"Complete Payment"</h1>
                <p>"Secure payment through our hosted checkout"</p>
            </header>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let booking_id = params.read().get("booking_id").unwrap_or_default();
                    bookings
                        .get()
                        .map(|list| {
                            let booking = find_booking(&list.unwrap_or_default(), &booking_id);
                            payment_card(booking, on_pay, starting)
                        })
                }}
            </Suspense>
        </div>
    }
}

fn payment_card(
    booking: Option<Booking>,
    on_pay: Callback<String>,
    starting: RwSignal<bool>,
) -> AnyView {
    let Some(booking) = booking else {
        return view! {
            <div class="empty-state">
                <p>"Booking not found"</p>
                <a class="btn btn--primary" href="/dashboard">
                    "Go to Dashboard"
                </a>
            </div>
        }
        .into_any();
    };

    if booking.paid() {
        return view! {
            <div class="payment-card payment-card--settled">
                <h2>"Payment Already Completed"</h2>
                <p>"This booking has already been paid for."</p>
                <a class="btn btn--primary" href="/dashboard">
                    "Go to Dashboard"
                </a>
            </div>
        }
        .into_any();
    }

    let id = booking.id.clone();
    view! {
        <div class="payment-card">
            <div class="payment-card__row">
                <span>"Service"</span>
                <strong>{booking.service_name.clone()}</strong>
            </div>
            <div class="payment-card__row payment-card__row--amount">
                <span>"Amount"</span>
                <strong>{format::money(booking.service_cost)}</strong>
            </div>
            <button
                class="btn btn--primary btn--wide"
                prop:disabled=move || starting.get()
                on:click=move |_| on_pay.run(id.clone())
            >
                {move || if starting.get() { "Redirecting..." } else { "Pay Now" }}
            </button>
        </div>
    }
    .into_any()
}
