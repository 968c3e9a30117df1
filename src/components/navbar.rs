//! Top navigation: brand, page links, dark-mode toggle, and the session
//! menu (login/register links or the signed-in user's avatar menu).

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::state::ui::UiState;
use crate::util::format;

const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/services", "Services"),
    ("/coverage", "Coverage"),
    ("/about", "About"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_toggle_dark = move |_| {
        let next = !ui.get().dark_mode;
        crate::util::dark_mode::set(next);
        ui.update(|u| u.dark_mode = next);
    };

    let on_toggle_menu = move |_| {
        ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open);
    };

    let on_logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::reconcile::logout(session).await;
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
        }
    });

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|(href, label)| {
                view! {
                    <a class="navbar__link" href=*href>
                        {*label}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Decora"
            </a>

            <button class="navbar__menu-toggle" on:click=on_toggle_menu aria-label="Menu">
                "\u{2630}"
            </button>

            <div class=move || {
                if ui.get().mobile_menu_open { "navbar__links navbar__links--open" } else { "navbar__links" }
            }>
                {links}
            </div>

            <div class="navbar__actions">
                <button class="navbar__dark-toggle" on:click=on_toggle_dark aria-label="Toggle dark mode">
                    {move || if ui.get().dark_mode { "\u{2600}" } else { "\u{1f319}" }}
                </button>

                {move || {
                    let state = session.get();
                    if state.loading {
                        view! { <span class="navbar__session-pending"></span> }.into_any()
                    } else if let Some(user) = state.user {
                        let name = user.display_name.clone();
                        let initial = format::avatar_initial(&name);
                        view! {
                            <div class="navbar__user">
                                {match user.profile_image.clone() {
                                    Some(src) => view! {
                                        <img class="navbar__avatar" src=src alt=name.clone()/>
                                    }
                                        .into_any(),
                                    None => view! {
                                        <span class="navbar__avatar navbar__avatar--initial">{initial}</span>
                                    }
                                        .into_any(),
                                }}
                                <div class="navbar__user-menu">
                                    <span class="navbar__user-name">{name}</span>
                                    <span class="badge badge--accent">{user.role.label()}</span>
                                    <a class="navbar__link" href="/dashboard">
                                        "Dashboard"
                                    </a>
                                    <button class="btn btn--sm" on:click=move |_| on_logout.run(())>
                                        "Logout"
                                    </button>
                                </div>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="navbar__auth">
                                <a class="btn btn--sm" href="/login">
                                    "Login"
                                </a>
                                <a class="btn btn--primary btn--sm" href="/register">
                                    "Register"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </nav>
    }
}
