//! Contact page: info cards and a local-only message form.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::*;

use crate::components::toast;
use crate::state::toast::ToastState;

const CONTACT_INFO: [(&str, &str); 4] = [
    ("Email", "support@decora.example"),
    ("Phone", "+880 1700-000000"),
    ("Address", "Dhaka, Bangladesh"),
    ("Working Hours", "Sat-Thu: 9AM-10PM, Fri: 10AM-4PM"),
];

/// The form never leaves the browser; it only needs the fields a human
/// would follow up on.
fn validate_contact_input(name: &str, email: &str, message: &str) -> Result<(), &'static str> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err("Please fill in your name, email, and message.");
    }
    Ok(())
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(msg) = validate_contact_input(&name.get(), &email.get(), &message.get()) {
            toast::error(toasts, msg);
            return;
        }
        toast::success(toasts, "Message sent successfully! We'll get back to you soon.");
        name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        subject.set(String::new());
        message.set(String::new());
    };

    view! {
        <div class="contact-page">
            <section class="hero hero--compact">
                <h1>"Get In Touch"</h1>
                <p>
                    "We'd love to hear from you. Send us a message and we'll respond as soon as possible."
                </p>
            </section>

            <section class="contact-page__info">
                {CONTACT_INFO
                    .into_iter()
                    .map(|(title, content)| {
                        view! {
                            <div class="info-card">
                                <h3>{title}</h3>
                                <p>{content}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="contact-page__form">
                <h2>"Send Us a Message"</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__field">
                        "Name *"
                        <input
                            type="text"
                            placeholder="Your Name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Email *"
                        <input
                            type="email"
                            placeholder="your.email@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Phone"
                        <input
                            type="tel"
                            placeholder="+880 1XXX XXXXXX"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Subject"
                        <input
                            type="text"
                            placeholder="What is this regarding?"
                            prop:value=move || subject.get()
                            on:input=move |ev| subject.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        "Message *"
                        <textarea
                            placeholder="Tell us more about your requirements..."
                            rows=5
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Send Message"
                    </button>
                </form>
            </section>
        </div>
    }
}
