//! Customer dashboard: profile card, bookings with pay/cancel actions,
//! and payment history.

use leptos::prelude::*;

use crate::components::confirm_modal::ConfirmModal;
use crate::components::loading::Loading;
use crate::components::toast;
use crate::net::types::{Booking, BookingsPage, Payment, PaymentsPage};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::CustomerTab;
use crate::util::format;

#[component]
pub fn UserDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let tab = RwSignal::new(CustomerTab::default());
    // (booking id, service name) pending cancellation confirmation.
    let cancel_target = RwSignal::new(None::<(String, String)>);

    let bookings = LocalResource::new(|| async { crate::net::api::my_bookings(100).await.ok() });
    let payments = LocalResource::new(|| async { crate::net::api::my_payments().await.ok() });

    let on_confirm_cancel = Callback::new(move |()| {
        let Some((id, _)) = cancel_target.get_untracked() else {
            return;
        };
        cancel_target.set(None);
        #[cfg(feature = "hydrate")]
        {
            let bookings = bookings.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::cancel_booking(&id).await {
                    Ok(()) => {
                        toast::success(toasts, "Booking cancelled successfully");
                        bookings.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    let request_cancel = Callback::new(move |target: (String, String)| {
        cancel_target.set(Some(target));
    });

    view! {
        <div class="dashboard dashboard--customer">
            <header>
                <h1>"My Dashboard"</h1>
                <p>"Manage your bookings and payments"</p>
            </header>

            <ProfileCard/>

            <div class="tab-bar">
                <button
                    class=move || tab_class(tab.get() == CustomerTab::Bookings)
                    on:click=move |_| tab.set(CustomerTab::Bookings)
                >
                    {CustomerTab::Bookings.label()}
                </button>
                <button
                    class=move || tab_class(tab.get() == CustomerTab::Payments)
                    on:click=move |_| tab.set(CustomerTab::Payments)
                >
                    {CustomerTab::Payments.label()}
                </button>
            </div>

            <Show when=move || tab.get() == CustomerTab::Bookings>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        bookings.get().map(|page| booking_list(page, request_cancel))
                    }}
                </Suspense>
            </Show>

            <Show when=move || tab.get() == CustomerTab::Payments>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || payments.get().map(payment_table)}
                </Suspense>
            </Show>

            <Show when=move || cancel_target.get().is_some()>
                {move || {
                    let service_name = cancel_target
                        .get()
                        .map(|(_, name)| name)
                        .unwrap_or_default();
                    view! {
                        <ConfirmModal
                            title="Cancel Booking"
                            message=format!(
                                "Are you sure you want to cancel your booking for \"{service_name}\"? This action cannot be undone.",
                            )
                            confirm_label="Yes, Cancel Booking"
                            cancel_label="No, Keep Booking"
                            on_confirm=on_confirm_cancel
                            on_cancel=Callback::new(move |()| cancel_target.set(None))
                        />
                    }
                }}
            </Show>
        </div>
    }
}

/// Avatar, name, email, and role badge for the signed-in user.
#[component]
fn ProfileCard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <section class="profile-card">
            {move || {
                session
                    .get()
                    .user
                    .map(|user| {
                        let initial = format::avatar_initial(&user.display_name);
                        view! {
                            <div class="profile-card__row">
                                {match user.profile_image.clone() {
                                    Some(src) => view! {
                                        <img class="profile-card__avatar" src=src alt=user.display_name.clone()/>
                                    }
                                        .into_any(),
                                    None => view! {
                                        <span class="profile-card__avatar profile-card__avatar--initial">
                                            {initial}
                                        </span>
                                    }
                                        .into_any(),
                                }}
                                <div class="profile-card__details">
                                    <h2>{user.display_name.clone()}</h2>
                                    <p>{user.email.clone()}</p>
                                    <span class="badge badge--accent">{user.role.label()}</span>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active { "tab-bar__tab tab-bar__tab--active" } else { "tab-bar__tab" }
}

fn paid_badge_class(paid: bool) -> &'static str {
    if paid { "badge badge--success" } else { "badge badge--warning" }
}

fn booking_list(page: Option<BookingsPage>, request_cancel: Callback<(String, String)>) -> AnyView {
    let bookings = page.map(|p| p.bookings).unwrap_or_default();
    if bookings.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"No bookings found"</p>
                <a class="btn btn--primary" href="/services">
                    "Book a Service"
                </a>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="booking-list">
            {bookings
                .into_iter()
                .map(|booking| booking_card(booking, request_cancel))
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn booking_card(booking: Booking, request_cancel: Callback<(String, String)>) -> impl IntoView {
    let pay_href = format!("/payment/{}", booking.id);
    let show_pay = !booking.paid() && !booking.status.is_terminal();
    let show_cancel = booking.status.cancellable();
    let cancel_payload = (booking.id.clone(), booking.service_name.clone());
    let paid = booking.paid();

    view! {
        <article class="booking-card">
            <div class="booking-card__summary">
                <h3>{booking.service_name.clone()}</h3>
                <p>{format::date_label(&booking.booking_date)}</p>
                <p>{booking.location.clone()}</p>
                <p class="booking-card__price">{format::money(booking.service_cost)}</p>
                {booking
                    .user_notes
                    .clone()
                    .filter(|notes| !notes.is_empty())
                    .map(|notes| view! { <p class="booking-card__notes">{notes}</p> })}
            </div>
            <div class="booking-card__badges">
                <span class=booking.status.badge_class()>{booking.status.label()}</span>
                <span class=paid_badge_class(paid)>{if paid { "Paid" } else { "Unpaid" }}</span>
            </div>
            <div class="booking-card__actions">
                <Show when=move || show_pay>
                    <a class="btn btn--primary btn--sm" href=pay_href.clone()>
                        "Pay Now"
                    </a>
                </Show>
                <Show when=move || show_cancel>
                    {
                        let payload = cancel_payload.clone();
                        view! {
                            <button
                                class="btn btn--danger btn--sm"
                                on:click=move |_| request_cancel.run(payload.clone())
                            >
                                "Cancel"
                            </button>
                        }
                    }
                </Show>
            </div>
        </article>
    }
}

fn payment_table(page: Option<PaymentsPage>) -> AnyView {
    let payments = page.map(|p| p.payments).unwrap_or_default();
    if payments.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"No payment history"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <table class="payment-table">
            <thead>
                <tr>
                    <th>"Date"</th>
                    <th>"Amount"</th>
                    <th>"Status"</th>
                    <th>"Payment ID"</th>
                </tr>
            </thead>
            <tbody>
                {payments.into_iter().map(payment_row).collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}

fn payment_row(payment: Payment) -> impl IntoView {
    let date = payment.created_at.as_deref().map(format::date_only).unwrap_or_default();
    let reference = payment
        .payment_intent_id
        .as_deref()
        .map(|id| format::short_id(id, 20))
        .unwrap_or_default();

    view! {
        <tr>
            <td>{date}</td>
            <td class="payment-table__amount">{format::money(payment.amount)}</td>
            <td>
                <span class="badge badge--success">{payment.status.clone()}</span>
            </td>
            <td class="payment-table__reference">{reference}</td>
        </tr>
    }
}
