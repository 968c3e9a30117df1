//! Checkout return page: verifies the completed session with the backend.

#[cfg(test)]
#[path = "payment_success_test.rs"]
mod payment_success_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::toast;
use crate::net::api::{ApiError, unauthorized};
use crate::state::toast::ToastState;

/// Where verification stands for the returned checkout session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum VerifyPhase {
    /// Return URL lacked `session_id`/`booking_id`.
    MissingParams,
    Verifying,
    Verified,
    /// Verification was rejected as unauthorized; the payment itself still
    /// went through and the backend will sync the booking.
    AuthSkipped,
    Failed,
}

fn phase_message(phase: VerifyPhase) -> &'static str {
    match phase {
        VerifyPhase::MissingParams => {
            "We could not verify the payment because the session details were missing. Please contact support if your payment was processed."
        }
        VerifyPhase::Verifying => "Verifying your payment, please wait...",
        VerifyPhase::Verified => {
            "Your payment has been confirmed. A confirmation has been added to your bookings."
        }
        VerifyPhase::AuthSkipped => {
            "Your payment was successful! Your booking will be synced automatically — refresh your dashboard to see the updated status."
        }
        VerifyPhase::Failed => {
            "Your payment was successful, but there was an issue verifying it. Please contact support if your booking doesn't appear in your dashboard."
        }
    }
}

fn phase_for_error(err: &ApiError) -> VerifyPhase {
    match err {
        ApiError::Status { code, .. } if unauthorized(*code) => VerifyPhase::AuthSkipped,
        _ => VerifyPhase::Failed,
    }
}

#[component]
pub fn PaymentSuccessPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let query = use_query_map();

    let session_id = query.read_untracked().get("session_id").unwrap_or_default();
    let booking_id = query.read_untracked().get("booking_id").unwrap_or_default();
    let missing = session_id.is_empty() || booking_id.is_empty();

    let phase = RwSignal::new(if missing { VerifyPhase::MissingParams } else { VerifyPhase::Verifying });

    #[cfg(feature = "hydrate")]
    if !missing {
        leptos::task::spawn_local(async move {
            match crate::net::api::verify_payment_session(&session_id, &booking_id).await {
                Ok(()) => {
                    toast::success(toasts, "Payment verified successfully!");
                    phase.set(VerifyPhase::Verified);
                }
                Err(err) => {
                    let next = phase_for_error(&err);
                    if next == VerifyPhase::Failed {
                        toast::error(toasts, err.to_string());
                    }
                    phase.set(next);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session_id, booking_id, toasts);
    }

    view! {
        <div class="payment-result payment-result--success">
            <div class="payment-result__card">
                <span class="payment-result__glyph">"\u{1f389}"</span>
                <h2>"Payment Successful"</h2>
                <p>{move || phase_message(phase.get())}</p>
                <div class="payment-result__actions">
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                    <a class="btn btn--outline" href="/services">
                        "Browse Services"
                    </a>
                </div>
            </div>
        </div>
    }
}
