//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::Toaster;
use crate::pages::{
    about::AboutPage, contact::ContactPage, coverage::CoveragePage, dashboard::DashboardPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, payment::PaymentPage,
    payment_cancelled::PaymentCancelledPage, payment_success::PaymentSuccessPage,
    register::RegisterPage, service_details::ServiceDetailsPage, services::ServicesPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, starts the session reconciler, and
/// sets up client-side routing with the page chrome around the route outlet.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());

    let dark_mode = crate::util::dark_mode::initial();
    let ui = RwSignal::new(UiState { dark_mode, mobile_menu_open: false });
    crate::util::dark_mode::set(dark_mode);

    provide_context(session);
    provide_context(toasts);
    provide_context(ui);

    // The provider subscription drives reconciliation for the whole app
    // lifetime and is released when this scope is torn down.
    #[cfg(feature = "hydrate")]
    crate::net::reconcile::spawn_session_reconciler(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/decora.css"/>
        <Title text="Decora"/>

        <Router>
            <Navbar/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("services") view=ServicesPage/>
                    <Route
                        path=(StaticSegment("services"), ParamSegment("id"))
                        view=ServiceDetailsPage
                    />
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("coverage") view=CoveragePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route
                        path=(StaticSegment("payment"), ParamSegment("booking_id"))
                        view=PaymentPage
                    />
                    <Route path=StaticSegment("successful") view=PaymentSuccessPage/>
                    <Route path=StaticSegment("cancelled") view=PaymentCancelledPage/>
                </Routes>
            </main>
            <Footer/>
            <Toaster/>
        </Router>
    }
}
