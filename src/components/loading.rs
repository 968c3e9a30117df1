//! Centered loading spinner shown while resources resolve.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner" aria-label="Loading"></span>
        </div>
    }
}
