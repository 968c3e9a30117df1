//! Service catalog with search, category and price filters, and paging.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::service_card::ServiceCard;
use crate::net::api::ServiceQuery;
use crate::net::types::SERVICE_CATEGORIES;

const PAGE_SIZE: u32 = 12;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let min_price = RwSignal::new(String::new());
    let max_price = RwSignal::new(String::new());
    let page = RwSignal::new(1u32);

    // Any filter change resets to the first page and refetches.
    let services = LocalResource::new(move || {
        let query = ServiceQuery {
            search: search.get(),
            category: category.get(),
            min_price: min_price.get(),
            max_price: max_price.get(),
            page: page.get(),
            limit: PAGE_SIZE,
        };
        async move { crate::net::api::services(&query).await.ok() }
    });

    let on_reset = move |_| {
        search.set(String::new());
        category.set(String::new());
        min_price.set(String::new());
        max_price.set(String::new());
        page.set(1);
    };

    view! {
        <div class="services-page">
            <header>
                <h1>"Our Services"</h1>
                <p>"Browse and book decoration services"</p>
            </header>

            <section class="filter-panel">
                <label class="form__field">
                    "Search Services"
                    <input
                        type="text"
                        placeholder="Search by name..."
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            search.set(event_target_value(&ev));
                            page.set(1);
                        }
                    />
                </label>
                <label class="form__field">
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| {
                            category.set(event_target_value(&ev));
                            page.set(1);
                        }
                    >
                        <option value="">"All Categories"</option>
                        {SERVICE_CATEGORIES
                            .into_iter()
                            .map(|cat| view! { <option value=cat>{cat}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="form__field">
                    "Min Price (BDT)"
                    <input
                        type="number"
                        placeholder="Min"
                        prop:value=move || min_price.get()
                        on:input=move |ev| {
                            min_price.set(event_target_value(&ev));
                            page.set(1);
                        }
                    />
                </label>
                <label class="form__field">
                    "Max Price (BDT)"
                    <input
                        type="number"
                        placeholder="Max"
                        prop:value=move || max_price.get()
                        on:input=move |ev| {
                            max_price.set(event_target_value(&ev));
                            page.set(1);
                        }
                    />
                </label>
                <button class="btn btn--outline btn--sm" on:click=on_reset>
                    "Reset Filters"
                </button>
            </section>

            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    services
                        .get()
                        .map(|data| {
                            let services = data.as_ref().map(|p| p.services.clone()).unwrap_or_default();
                            if services.is_empty() {
                                view! {
                                    <div class="empty-state">
                                        <p>"No services found"</p>
                                    </div>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="service-grid">
                                        {services
                                            .into_iter()
                                            .map(|service| view! { <ServiceCard service=service/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
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
                        services
                            .get()
                            .flatten()
                            .map(|data| format!(" of {}", data.pagination.total_pages.max(1)))
                    }}
                </span>
                <button
                    class="btn btn--sm"
                    prop:disabled=move || {
                        services
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
