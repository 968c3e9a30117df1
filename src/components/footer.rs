//! Site footer with quick links and contact details.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__brand">
                <span class="footer__logo">"Decora"</span>
                <p>"Decoration services for homes, weddings, and events."</p>
            </div>
            <div class="footer__links">
                <h4>"Quick Links"</h4>
                <a href="/services">"Services"</a>
                <a href="/coverage">"Coverage"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
            </div>
            <div class="footer__contact">
                <h4>"Contact"</h4>
                <p>"support@decora.example"</p>
                <p>"+880 1700-000000"</p>
                <p>"Dhaka, Bangladesh"</p>
            </div>
            <div class="footer__meta">
                <p>"\u{a9} 2026 Decora. All rights reserved."</p>
            </div>
        </footer>
    }
}
