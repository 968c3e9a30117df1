//! Admin booking management: status filter, pagination, decorator
//! assignment, and direct status changes.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::toast;
use crate::net::types::{Booking, BookingsPage, Decorator};
use crate::state::bookings::BookingStatus;
use crate::state::toast::ToastState;
use crate::util::format;

#[component]
pub fn ManageBookings() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let page = RwSignal::new(1u32);
    let status_filter = RwSignal::new(None::<BookingStatus>);

    let bookings = LocalResource::new(move || {
        let page = page.get();
        let status = status_filter.get();
        async move { crate::net::api::all_bookings(page, status).await.ok() }
    });
    let decorators = LocalResource::new(|| async {
        crate::net::api::decorators().await.ok().map(|p| p.decorators)
    });

    let assign = Callback::new(move |(id, email): (String, String)| {
        #[cfg(feature = "hydrate")]
        {
            let bookings = bookings.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::assign_decorator(&id, &email).await {
                    Ok(()) => {
                        toast::success(toasts, "Decorator assigned");
                        bookings.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, email);
        }
    });

    let set_status = Callback::new(move |(id, status): (String, BookingStatus)| {
        #[cfg(feature = "hydrate")]
        {
            let bookings = bookings.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&id, status).await {
                    Ok(()) => {
                        toast::success(toasts, "Status updated");
                        bookings.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, status);
        }
    });

    view! {
        <div class="manage-bookings">
            <header class="manage-bookings__header">
                <h2>"Manage Bookings"</h2>
                <select
                    class="manage-bookings__filter"
                    on:change=move |ev| {
                        page.set(1);
                        status_filter.set(BookingStatus::from_wire(&event_target_value(&ev)));
                    }
                >
                    <option value="">"All Statuses"</option>
                    {BookingStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! { <option value=status.wire()>{status.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let decorators = decorators.get().flatten().unwrap_or_default();
                    bookings.get().map(|data| booking_table(data, &decorators, assign, set_status))
                }}
            </Suspense>

            <div class="pagination">
                <button
                    class="btn btn--sm"
                    prop:disabled=move || page.get() <= 1
                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <span class="pagination__label">
                    "Page " {move || page.get()}
                    {move || {
                        bookings
                            .get()
                            .flatten()
                            .map(|data| format!(" of {}", data.pagination.total_pages.max(1)))
                    }}
                </span>
                <button
                    class="btn btn--sm"
                    prop:disabled=move || {
                        bookings
                            .get()
                            .flatten()
                            .is_some_and(|data| page.get() >= data.pagination.total_pages)
                    }
                    on:click=move |_| page.update(|p| *p += 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

fn booking_table(
    page: Option<BookingsPage>,
    decorators: &[Decorator],
    assign: Callback<(String, String)>,
    set_status: Callback<(String, BookingStatus)>,
) -> AnyView {
    let bookings = page.map(|p| p.bookings).unwrap_or_default();
    if bookings.is_empty() {
        return view! { <p class="empty-state">"No bookings found"</p> }.into_any();
    }
    let active: Vec<Decorator> = decorators.iter().filter(|d| d.is_active).cloned().collect();

    view! {
        <div class="booking-list booking-list--admin">
            {bookings
                .into_iter()
                .map(|booking| admin_booking_card(booking, &active, assign, set_status))
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn admin_booking_card(
    booking: Booking,
    active_decorators: &[Decorator],
    assign: Callback<(String, String)>,
    set_status: Callback<(String, BookingStatus)>,
) -> impl IntoView {
    let customer = booking.user_name.clone().or(booking.user_email.clone()).unwrap_or_default();
    let assigned = booking.decorator_email.clone().unwrap_or_default();
    let id_for_assign = booking.id.clone();
    let id_for_status = booking.id.clone();
    let current_status = booking.status;

    view! {
        <article class="booking-card booking-card--admin">
            <div class="booking-card__summary">
                <h3>{booking.service_name.clone()}</h3>
                <p>{customer}</p>
                <p>{format::date_label(&booking.booking_date)}</p>
                <p>{booking.location.clone()}</p>
                <p class="booking-card__price">{format::money(booking.service_cost)}</p>
            </div>

            <div class="booking-card__badges">
                <span class=current_status.badge_class()>{current_status.label()}</span>
                <span class=if booking.paid() { "badge badge--success" } else { "badge badge--warning" }>
                    {if booking.paid() { "Paid" } else { "Unpaid" }}
                </span>
            </div>

            <div class="booking-card__controls">
                <label class="form__field">
                    "Decorator"
                    <select
                        prop:value=assigned.clone()
                        on:change=move |ev| {
                            let email = event_target_value(&ev);
                            if !email.is_empty() {
                                assign.run((id_for_assign.clone(), email));
                            }
                        }
                    >
                        <option value="">"Assign decorator..."</option>
                        {active_decorators
                            .iter()
                            .map(|decorator| {
                                let label = decorator
                                    .display_name
                                    .clone()
                                    .unwrap_or_else(|| decorator.email.clone());
                                view! {
                                    <option
                                        value=decorator.email.clone()
                                        selected=decorator.email == assigned
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="form__field">
                    "Status"
                    <select on:change=move |ev| {
                        if let Some(status) = BookingStatus::from_wire(&event_target_value(&ev)) {
                            set_status.run((id_for_status.clone(), status));
                        }
                    }>
                        {BookingStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.wire() selected=status == current_status>
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
            </div>
        </article>
    }
}
