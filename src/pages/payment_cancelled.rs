//! Checkout cancellation return page.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[component]
pub fn PaymentCancelledPage() -> impl IntoView {
    let query = use_query_map();
    // The cancel return URL carries booking_id when checkout started from a
    // specific booking; without it there is nothing to retry from.
    let has_booking = query.read_untracked().get("booking_id").is_some();

    let hint = if has_booking {
        "Your payment was cancelled. You can try again from your booking details."
    } else {
        "Your payment was cancelled."
    };

    view! {
        <div class="payment-result payment-result--cancelled">
            <div class="payment-result__card">
                <span class="payment-result__glyph">"\u{26a0}"</span>
                <h2>"Payment Cancelled"</h2>
                <p>{hint}</p>
                <div class="payment-result__actions">
                    <a class="btn btn--primary" href="/dashboard">
                        "Back to Dashboard"
                    </a>
                    <a class="btn btn--outline" href="/services">
                        "Browse Services"
                    </a>
                </div>
            </div>
        </div>
    }
}
