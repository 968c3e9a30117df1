//! Admin dashboard: platform stat cards and the management tab bar.

use leptos::prelude::*;

use crate::components::dashboard::analytics::Analytics;
use crate::components::dashboard::manage_bookings::ManageBookings;
use crate::components::dashboard::manage_decorators::ManageDecorators;
use crate::components::dashboard::manage_services::ManageServices;
use crate::net::types::Stats;
use crate::state::ui::AdminTab;
use crate::util::format;

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let tab = RwSignal::new(AdminTab::default());
    let stats = LocalResource::new(|| async { crate::net::api::stats().await.ok() });

    view! {
        <div class="dashboard dashboard--admin">
            <header>
                <h1>"Admin Dashboard"</h1>
                <p>"Manage your platform and view analytics"</p>
            </header>

            <div class="stat-grid">
                {move || {
                    let stats = stats.get().flatten().unwrap_or_default();
                    stat_cards(&stats)
                }}
            </div>

            <div class="tab-bar">
                {AdminTab::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == entry {
                                        "tab-bar__tab tab-bar__tab--active"
                                    } else {
                                        "tab-bar__tab"
                                    }
                                }
                                on:click=move |_| tab.set(entry)
                            >
                                {entry.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="dashboard__tab-content">
                {move || match tab.get() {
                    AdminTab::Analytics => view! { <Analytics/> }.into_any(),
                    AdminTab::Services => view! { <ManageServices/> }.into_any(),
                    AdminTab::Bookings => view! { <ManageBookings/> }.into_any(),
                    AdminTab::Decorators => view! { <ManageDecorators/> }.into_any(),
                }}
            </div>
        </div>
    }
}

fn stat_cards(stats: &Stats) -> Vec<AnyView> {
    [
        ("Total Users", stats.total_users.to_string()),
        ("Total Decorators", stats.total_decorators.to_string()),
        ("Total Services", stats.total_services.to_string()),
        ("Total Revenue", format::money(stats.total_revenue)),
    ]
    .into_iter()
    .map(|(title, value)| {
        view! {
            <div class="stat-card">
                <p class="stat-card__title">{title}</p>
                <p class="stat-card__value">{value}</p>
            </div>
        }
        .into_any()
    })
    .collect()
}
