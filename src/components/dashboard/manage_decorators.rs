//! Admin decorator management: promote users by email and toggle active
//! status.

#[cfg(test)]
#[path = "manage_decorators_test.rs"]
mod manage_decorators_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::modal::Modal;
use crate::components::toast;
use crate::net::types::{Decorator, DecoratorProfileInput};
use crate::state::toast::ToastState;

/// Ratings arrive as free text; anything unparseable counts as unrated.
fn parse_rating(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}

fn validate_promotion_email(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err("Enter the user's email address");
    }
    Ok(email.to_owned())
}

#[component]
pub fn ManageDecorators() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let decorators = LocalResource::new(|| async { crate::net::api::decorators().await.ok() });

    let show_promote = RwSignal::new(false);
    let email = RwSignal::new(String::new());
    let specialty = RwSignal::new(String::new());
    let rating = RwSignal::new(String::new());
    let experience = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let target = match validate_promotion_email(&email.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                toast::error(toasts, msg);
                return;
            }
        };
        let profile = DecoratorProfileInput {
            specialty: specialty.get_untracked(),
            rating: parse_rating(&rating.get_untracked()),
            experience: experience.get_untracked(),
        };

        #[cfg(feature = "hydrate")]
        {
            let decorators = decorators.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::make_decorator(&target, &profile).await {
                    Ok(()) => {
                        toast::success(toasts, "User role updated to decorator");
                        show_promote.set(false);
                        email.set(String::new());
                        specialty.set(String::new());
                        rating.set(String::new());
                        experience.set(String::new());
                        decorators.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (target, profile);
        }
    });

    let toggle = Callback::new(move |target: String| {
        #[cfg(feature = "hydrate")]
        {
            let decorators = decorators.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::toggle_decorator(&target).await {
                    Ok(()) => {
                        toast::success(toasts, "Decorator status updated");
                        decorators.refetch();
                    }
                    Err(err) => toast::error(toasts, err.to_string()),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = target;
        }
    });

    view! {
        <div class="manage-decorators">
            <header class="manage-decorators__header">
                <h2>"Manage Decorators"</h2>
                <button class="btn btn--primary" on:click=move |_| show_promote.set(true)>
                    "Make User Decorator"
                </button>
            </header>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    decorators
                        .get()
                        .map(|page| decorator_table(page.map(|p| p.decorators).unwrap_or_default(), toggle))
                }}
            </Suspense>

            <Show when=move || show_promote.get()>
                <Modal title="Make User Decorator" on_close=Callback::new(move |()| show_promote.set(false))>
                    <div class="form">
                        <label class="form__field">
                            "User Email"
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Specialty"
                            <input
                                type="text"
                                placeholder="Wedding stages, floral work..."
                                prop:value=move || specialty.get()
                                on:input=move |ev| specialty.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Rating"
                            <input
                                type="number"
                                step="0.1"
                                min="0"
                                max="5"
                                prop:value=move || rating.get()
                                on:input=move |ev| rating.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form__field">
                            "Experience"
                            <input
                                type="text"
                                placeholder="5 years"
                                prop:value=move || experience.get()
                                on:input=move |ev| experience.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_promote.set(false)>
                                "Cancel"
                            </button>
                            <button class="btn btn--primary" on:click=move |_| submit.run(())>
                                "Promote"
                            </button>
                        </div>
                    </div>
                </Modal>
            </Show>
        </div>
    }
}

fn decorator_table(decorators: Vec<Decorator>, toggle: Callback<String>) -> AnyView {
    if decorators.is_empty() {
        return view! { <p class="empty-state">"No decorators yet"</p> }.into_any();
    }

    view! {
        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Email"</th>
                    <th>"Specialty"</th>
                    <th>"Rating"</th>
                    <th>"Experience"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {decorators
                    .into_iter()
                    .map(|decorator| {
                        let target = decorator.email.clone();
                        let active = decorator.is_active;
                        view! {
                            <tr>
                                <td>{decorator.email.clone()}</td>
                                <td>{decorator.specialty.clone().unwrap_or_default()}</td>
                                <td>{format!("{:.1}", decorator.rating)}</td>
                                <td>{decorator.experience.clone().unwrap_or_default()}</td>
                                <td>
                                    <span class=if active { "badge badge--success" } else { "badge badge--error" }>
                                        {if active { "Active" } else { "Inactive" }}
                                    </span>
                                </td>
                                <td>
                                    <button
                                        class="btn btn--sm"
                                        on:click=move |_| toggle.run(target.clone())
                                    >
                                        {if active { "Deactivate" } else { "Activate" }}
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
