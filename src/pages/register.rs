//! Registration page: profile details, optional image upload, and the
//! provider popup alternative.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::components::image_upload::ImageUploadField;
use crate::components::toast;
use crate::net::types::RegisterRequest;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

const MIN_PASSWORD_CHARS: usize = 6;

fn validate_register_input(
    display_name: &str,
    email: &str,
    password: &str,
) -> Result<(String, String), &'static str> {
    if display_name.trim().is_empty() {
        return Err("Enter your name.");
    }
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter your email.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok((display_name.trim().to_owned(), email.to_owned()))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let display_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let profile_image = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let nav_register = use_navigate();
    #[cfg(feature = "hydrate")]
    let nav_social = nav_register.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() || uploading.get() {
            return;
        }
        let (name_value, email_value) =
            match validate_register_input(&display_name.get(), &email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    toast::error(toasts, msg);
                    return;
                }
            };
        let image = profile_image.get();
        let req = RegisterRequest {
            email: email_value,
            password: password.get(),
            display_name: name_value,
            profile_image: if image.is_empty() { None } else { Some(image) },
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = nav_register.clone();
            leptos::task::spawn_local(async move {
                match crate::net::reconcile::register(session, &req).await {
                    Ok(()) => {
                        toast::success(toasts, "Registration successful!");
                        navigate("/dashboard", NavigateOptions::default());
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
            let _ = req;
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
                        toast::success(toasts, "Registration successful!");
                        navigate("/dashboard", NavigateOptions::default());
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
                <h1>"Create Account"</h1>
                <p class="auth-card__subtitle">"Join us and start decorating"</p>

                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Display Name"
                        <input
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || display_name.get()
                            on:input=move |ev| display_name.set(event_target_value(&ev))
                        />
                    </label>
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
                            placeholder="Enter your password (min 6 characters)"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Profile Image (Optional)"
                        <ImageUploadField value=profile_image uploading=uploading/>
                    </label>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        prop:disabled=move || busy.get() || uploading.get()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>

                <div class="auth-card__divider">"OR"</div>

                <button class="btn btn--outline" on:click=on_social prop:disabled=move || busy.get()>
                    "Continue with Google"
                </button>

                <p class="auth-card__switch">
                    "Already have an account? " <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
