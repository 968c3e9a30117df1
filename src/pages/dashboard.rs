//! Dashboard page: picks the admin, decorator, or customer panel by role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dashboard::admin_dashboard::AdminDashboard;
use crate::components::dashboard::decorator_dashboard::DecoratorDashboard;
use crate::components::dashboard::user_dashboard::UserDashboard;
use crate::components::loading::Loading;
use crate::net::types::Role;
use crate::state::session::SessionState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    // Guarded route: anonymous visitors go to login once the session settles.
    Effect::new(move || {
        let state = session.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-page">
            {move || {
                let state = session.get();
                if state.loading {
                    return view! { <Loading/> }.into_any();
                }
                match state.user {
                    Some(user) => match user.role {
                        Role::Admin => view! { <AdminDashboard/> }.into_any(),
                        Role::Decorator => view! { <DecoratorDashboard/> }.into_any(),
                        Role::User => view! { <UserDashboard/> }.into_any(),
                    },
                    None => view! {
                        <p class="empty-state">"Please login to access the dashboard."</p>
                    }
                        .into_any(),
                }
            }}
        </div>
    }
}
