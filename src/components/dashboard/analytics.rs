//! Analytics tab: aggregate stats and the service-demand histogram.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::net::types::{ServiceDemand, Stats};
use crate::util::format;

/// Bar width for one histogram row, relative to the busiest service.
fn demand_percent(count: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    f64::from(count) / f64::from(max) * 100.0
}

#[component]
pub fn Analytics() -> impl IntoView {
    let stats = LocalResource::new(|| async { crate::net::api::stats().await.ok() });
    let demand = LocalResource::new(|| async { crate::net::api::service_demand().await.ok() });

    view! {
        <div class="analytics">
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    let stats = stats.get().flatten().unwrap_or_default();
                    overview(&stats)
                }}
            </Suspense>

            <section class="analytics__demand">
                <h2>"Top Service Demand"</h2>
                <Suspense fallback=move || view! { <Loading/> }>
                    {move || {
                        let rows = demand.get().flatten().unwrap_or_default();
                        demand_chart(&rows)
                    }}
                </Suspense>
            </section>
        </div>
    }
}

fn overview(stats: &Stats) -> AnyView {
    view! {
        <div class="stat-grid">
            <div class="stat-card">
                <p class="stat-card__title">"Total Bookings"</p>
                <p class="stat-card__value">{stats.total_bookings}</p>
                <p class="stat-card__detail">{stats.completed_bookings} " completed"</p>
            </div>
            <div class="stat-card">
                <p class="stat-card__title">"Pending Bookings"</p>
                <p class="stat-card__value">{stats.pending_bookings}</p>
            </div>
            <div class="stat-card">
                <p class="stat-card__title">"Total Revenue"</p>
                <p class="stat-card__value">{format::money(stats.total_revenue)}</p>
            </div>
            <div class="stat-card">
                <p class="stat-card__title">"Total Services"</p>
                <p class="stat-card__value">{stats.total_services}</p>
            </div>
        </div>
    }
    .into_any()
}

fn demand_chart(rows: &[ServiceDemand]) -> AnyView {
    if rows.is_empty() {
        return view! { <p class="empty-state">"No data available"</p> }.into_any();
    }
    let max = rows.iter().map(|row| row.count).max().unwrap_or(1);

    view! {
        <div class="demand-chart">
            {rows
                .iter()
                .map(|row| {
                    let width = format!("width: {:.1}%", demand_percent(row.count, max));
                    view! {
                        <div class="demand-chart__row">
                            <div class="demand-chart__header">
                                <span>{row.service_name.clone()}</span>
                                <span class="badge badge--accent">{row.count} " bookings"</span>
                            </div>
                            <div class="demand-chart__track">
                                <div class="demand-chart__bar" style=width></div>
                            </div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
