//! Decorator dashboard: assigned bookings with a status progress strip and
//! a one-step advance action.

#[cfg(test)]
#[path = "decorator_dashboard_test.rs"]
mod decorator_dashboard_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::toast;
use crate::net::types::{Booking, BookingsPage};
use crate::state::bookings::BookingStatus;
use crate::state::toast::ToastState;
use crate::util::format;

/// Chip class for one step of the progress strip.
fn step_class(current: BookingStatus, step: BookingStatus) -> &'static str {
    let (Some(current_idx), Some(step_idx)) = (current.flow_index(), step.flow_index()) else {
        return "flow-step";
    };
    if step_idx == current_idx {
        "flow-step flow-step--current"
    } else if step_idx < current_idx {
        "flow-step flow-step--done"
    } else {
        "flow-step"
    }
}

#[component]
pub fn DecoratorDashboard() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let assignments = LocalResource::new(|| async { crate::net::api::my_assignments().await.ok() });

    let advance = Callback::new(move |(id, next): (String, BookingStatus)| {
        #[cfg(feature = "hydrate")]
        {
            let assignments = assignments.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_booking_status(&id, next).await {
                    Ok(()) => {
                        toast::success(toasts, "Status updated successfully");
                        assignments.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, next);
        }
    });

    view! {
        <div class="dashboard dashboard--decorator">
            <header>
                <h1>"Decorator Dashboard"</h1>
                <p>"Manage your assigned projects"</p>
            </header>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || assignments.get().map(|page| assignment_list(page, advance))}
            </Suspense>
        </div>
    }
}

fn assignment_list(page: Option<BookingsPage>, advance: Callback<(String, BookingStatus)>) -> AnyView {
    let bookings = page.map(|p| p.bookings).unwrap_or_default();
    if bookings.is_empty() {
        return view! {
            <div class="empty-state">
                <p>"No assigned projects"</p>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="booking-list">
            {bookings
                .into_iter()
                .map(|booking| assignment_card(booking, advance))
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}

fn assignment_card(booking: Booking, advance: Callback<(String, BookingStatus)>) -> impl IntoView {
    let client = booking.user_name.clone().unwrap_or_default();
    let status = booking.status;
    let next = status.next_in_flow();
    let id = booking.id.clone();

    view! {
        <article class="booking-card">
            <div class="booking-card__summary">
                <h3>{booking.service_name.clone()}</h3>
                <p>{format::date_label(&booking.booking_date)}</p>
                <p>{booking.location.clone()}</p>
                <p class="booking-card__client">"Client: " {client}</p>
                {booking
                    .user_notes
                    .clone()
                    .filter(|notes| !notes.is_empty())
                    .map(|notes| view! { <p class="booking-card__notes">"Notes: " {notes}</p> })}
            </div>

            <div class="booking-card__badges">
                <span class=status.badge_class()>{status.label()}</span>
            </div>

            <div class="flow-strip">
                {BookingStatus::DECORATOR_FLOW
                    .into_iter()
                    .map(|step| {
                        view! { <span class=step_class(status, step)>{step.label()}</span> }
                    })
                    .collect::<Vec<_>>()}
            </div>

            {next
                .map(|next_status| {
                    let id = id.clone();
                    view! {
                        <button
                            class="btn btn--primary btn--sm"
                            on:click=move |_| advance.run((id.clone(), next_status))
                        >
                            "Update to " {next_status.label()}
                        </button>
                    }
                })}
        </article>
    }
}
