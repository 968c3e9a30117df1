//! Login page: password form plus the provider popup alternative.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::toast;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let nav_password = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_social = nav_password.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    toast::error(toasts, msg);
                    return;
                }
            };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_password.clone();
            leptos::task::spawn_local(async move {
                match crate::net::reconcile::login(session, &email_value, &password_value).await {
                    Ok(()) => {
                        toast::success(toasts, "Login successful!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(msg) => {
                        toast::error(toasts, msg);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    let on_social = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_social.clone();
            leptos::task::spawn_local(async move {
                match crate::net::reconcile::social_login(session).await {
                    Ok(()) => {
                        toast::success(toasts, "Login successful!");
                        navigate("/", NavigateOptions::default());
                    }
                    Err(msg) => {
                        toast::error(toasts, msg);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Email Address"
                        <input
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Password"
                        <input
                            type="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" prop:disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <div class="auth-card__divider">"OR"</div>

                <button class="btn btn--outline" on:click=on_social prop:disabled=move || busy.get()>
                    "Continue with Google"
                </button>

                <p class="auth-card__switch">
                    "Don't have an account? " <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
