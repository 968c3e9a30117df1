//! Service detail page with the booking modal.

#[cfg(test)]
#[path = "service_details_test.rs"]
mod service_details_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::types::{NewBooking, Service};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::format;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/600x400";

fn validate_booking_input(date: &str, location: &str) -> Result<(), &'static str> {
    if date.trim().is_empty() {
        return Err("Pick a booking date.");
    }
    if location.trim().is_empty() {
        return Err("Enter the service location.");
    }
    Ok(())
}

/// Assemble the create-booking payload; empty notes are omitted.
fn booking_payload(service_id: &str, date: &str, location: &str, notes: &str) -> NewBooking {
    let notes = notes.trim();
    NewBooking {
        service_id: service_id.to_owned(),
        booking_date: date.trim().to_owned(),
        location: location.trim().to_owned(),
        user_notes: if notes.is_empty() { None } else { Some(notes.to_owned()) },
    }
}

#[component]
pub fn ServiceDetailsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let service = LocalResource::new(move || {
        let id = params.read().get("id").unwrap_or_default();
        async move { crate::net::api::service(&id).await.ok() }
    });

    let show_booking = RwSignal::new(false);
    let booking_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    let nav_guard = navigate.clone();
    let on_book = move |_| {
        if session.get_untracked().user.is_none() {
            toast::error(toasts, "Please login to book a service");
            nav_guard("/login", NavigateOptions::default());
            return;
        }
        booking_date.set(String::new());
        location.set(String::new());
        notes.set(String::new());
        show_booking.set(true);
    };

    #[cfg(feature = "hydrate")]
    let nav_submit = navigate.clone();
    let on_submit = Callback::new(move |()| {
        if submitting.get_untracked() {
            return;
        }
        if let Err(msg) = validate_booking_input(&booking_date.get_untracked(), &location.get_untracked()) {
            toast::error(toasts, msg);
            return;
        }
        let service_id = params.read_untracked().get("id").unwrap_or_default();
        let payload = booking_payload(
            &service_id,
            &booking_date.get_untracked(),
            &location.get_untracked(),
            &notes.get_untracked(),
        );
        submitting.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_submit.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_booking(&payload).await {
                    Ok(_) => {
                        toast::success(toasts, "Booking created successfully!");
                        show_booking.set(false);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(err) => {
                        toast::error(toasts, err.to_string());
                        submitting.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payload;
            submitting.set(false);
        }
    });

    view! {
        <div class="service-details">
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    service
                        .get()
                        .map(|found| match found {
                            Some(service) => details(&service, on_book.clone()).into_any(),
                            None => view! {
                                <p class="empty-state">"Service not found"</p>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>

            <Show when=move || show_booking.get()>
                <Modal title="Book Service" on_close=Callback::new(move |()| show_booking.set(false))>
                    <div class="form">
                        {move || {
                            let user = session.get().user;
                            let service_name = service
                                .get()
                                .flatten()
                                .map(|s| s.service_name)
                                .unwrap_or_default();
                            view! {
                                <label class="form__field">
                                    "Service"
                                    <input type="text" prop:value=service_name disabled/>
                                </label>
                                <label class="form__field">
                                    "Your Email"
                                    <input
                                        type="email"
                                        prop:value=user.as_ref().map(|u| u.email.clone()).unwrap_or_default()
                                        disabled
                                    />
                                </label>
                                <label class="form__field">
                                    "Your Name"
                                    <input
                                        type="text"
                                        prop:value=user.as_ref().map(|u| u.display_name.clone()).unwrap_or_default()
                                        disabled
                                    />
                                </label>
                            }
                        }}
                        <label class="form__field">
                            "Booking Date *"
                            <input
                                type="datetime-local"
                                prop:value=move || booking_date.get()
                                on:input=move |ev| booking_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Location *"
                            <input
                                type="text"
                                placeholder="Enter service location"
                                prop:value=move || location.get()
                                on:input=move |ev| location.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Additional Notes"
                            <textarea
                                placeholder="Any special requirements or notes..."
                                prop:value=move || notes.get()
                                on:input=move |ev| notes.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <button
                            class="btn btn--primary"
                            prop:disabled=move || submitting.get()
                            on:click=move |_| on_submit.run(())
                        >
                            {move || if submitting.get() { "Booking..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}

fn details(service: &Service, on_book: impl FnMut(leptos::ev::MouseEvent) + 'static) -> impl IntoView {
    let image = service.image_url.clone().unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());
    let created = service.created_at.as_deref().map(format::date_only).unwrap_or_default();

    view! {
        <div class="service-details__layout">
            <figure class="service-details__figure">
                <img src=image alt=service.service_name.clone()/>
                <span class="service-card__category">{service.service_category.clone()}</span>
            </figure>

            <div class="service-details__body">
                <h1>{service.service_name.clone()}</h1>
                <p class="service-details__price">
                    {format::money(service.cost)}
                    <span class="service-card__unit">"/" {service.unit.clone()}</span>
                </p>

                <section class="service-details__section">
                    <h2>"Description"</h2>
                    <p>{service.description.clone()}</p>
                </section>

                <section class="service-details__section">
                    <h2>"Service Information"</h2>
                    <dl>
                        <dt>"Category"</dt>
                        <dd>{service.service_category.clone()}</dd>
                        <dt>"Unit"</dt>
                        <dd>{service.unit.clone()}</dd>
                        <dt>"Listed"</dt>
                        <dd>{created}</dd>
                    </dl>
                </section>

                <button class="btn btn--primary btn--wide" on:click=on_book>
                    "Book Now"
                </button>
            </div>
        </div>
    }
}
