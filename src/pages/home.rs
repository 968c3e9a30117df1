//! Landing page: hero, featured services, and active decorator showcase.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::service_card::ServiceCard;
use crate::net::api::ServiceQuery;
use crate::net::types::Decorator;
use crate::util::format;

#[component]
pub fn HomePage() -> impl IntoView {
    let featured = LocalResource::new(|| async {
        let query = ServiceQuery { limit: 6, ..ServiceQuery::default() };
        crate::net::api::services(&query).await.ok()
    });
    let decorators = LocalResource::new(|| async {
        crate::net::api::decorators().await.ok().map(|p| p.decorators)
    });

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Make Every Occasion Beautiful"</h1>
                <p>
                    "Professional decoration for homes, weddings, offices, and events — booked in minutes, tracked to the finished room."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/services">
                        "Browse Services"
                    </a>
                    <a class="btn btn--outline" href="/contact">
                        "Talk to Us"
                    </a>
                </div>
            </section>

            <section class="home-page__featured">
                <h2>"Featured Services"</h2>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        featured
                            .get()
                            .map(|page| {
                                let services = page.map(|p| p.services).unwrap_or_default();
                                view! {
                                    <div class="service-grid">
                                        {services
                                            .into_iter()
                                            .map(|service| view! { <ServiceCard service=service/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                            })
                    }}
                </Suspense>
                <a class="home-page__more" href="/services">
                    "See all services \u{2192}"
                </a>
            </section>

            <section class="home-page__decorators">
                <h2>"Our Decorators"</h2>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        let list = decorators.get().flatten().unwrap_or_default();
                        decorator_strip(&list)
                    }}
                </Suspense>
            </section>
        </div>
    }
}

fn decorator_strip(decorators: &[Decorator]) -> AnyView {
    let active: Vec<&Decorator> = decorators.iter().filter(|d| d.is_active).collect();
    if active.is_empty() {
        return view! { <p class="empty-state">"Our decorator roster is growing — check back soon."</p> }
            .into_any();
    }

    view! {
        <div class="decorator-strip">
            {active
                .into_iter()
                .map(|decorator| {
                    let name = decorator
                        .display_name
                        .clone()
                        .unwrap_or_else(|| decorator.email.clone());
                    let initial = format::avatar_initial(&name);
                    view! {
                        <div class="decorator-card">
                            {match decorator.profile_image.clone() {
                                Some(src) => view! {
                                    <img class="decorator-card__avatar" src=src alt=name.clone()/>
                                }
                                    .into_any(),
                                None => view! {
                                    <span class="decorator-card__avatar decorator-card__avatar--initial">
                                        {initial}
                                    </span>
                                }
                                    .into_any(),
                            }}
                            <h3>{name}</h3>
                            <p>{decorator.specialty.clone().unwrap_or_default()}</p>
                            <span class="decorator-card__rating">
                                {format!("\u{2605} {:.1}", decorator.rating)}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
