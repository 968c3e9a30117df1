//! About page: company story, values, and achievements.

use leptos::prelude::*;

const VALUES: [(&str, &str, &str); 4] = [
    (
        "\u{2764}",
        "Passion",
        "We pour our hearts into every decoration project, ensuring your vision comes to life beautifully.",
    ),
    (
        "\u{1f4a1}",
        "Creativity",
        "Innovative designs and unique concepts that make your events truly memorable and special.",
    ),
    (
        "\u{1f91d}",
        "Trust",
        "Building lasting relationships through reliability, transparency, and exceptional service quality.",
    ),
    (
        "\u{1f3c6}",
        "Excellence",
        "Committed to delivering the highest quality decorations that exceed your expectations.",
    ),
];

const ACHIEVEMENTS: [(&str, &str); 4] = [
    ("5+", "Years Experience"),
    ("500+", "Happy Clients"),
    ("1000+", "Projects Completed"),
    ("50+", "Expert Decorators"),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <section class="hero hero--compact">
                <h1>"About Decora"</h1>
                <p>
                    "Transforming spaces into beautiful memories since 2019. We are passionate about creating stunning decorations for your special moments."
                </p>
            </section>

            <section class="about-page__pillars">
                <div class="card">
                    <h2>"Our Mission"</h2>
                    <p>
                        "To provide exceptional decoration services that bring joy and elegance to every celebration. We strive to make your special moments unforgettable through creative designs, quality craftsmanship, and personalized attention to detail."
                    </p>
                </div>
                <div class="card">
                    <h2>"Our Vision"</h2>
                    <p>
                        "To become the most trusted and innovative decoration service provider, setting new standards in creativity and customer satisfaction. We envision a future where every celebration is enhanced by our artistic touch."
                    </p>
                </div>
            </section>

            <section class="about-page__values">
                <h2>"Our Core Values"</h2>
                <div class="value-grid">
                    {VALUES
                        .into_iter()
                        .map(|(glyph, title, description)| {
                            view! {
                                <div class="value-card">
                                    <span class="value-card__glyph">{glyph}</span>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="about-page__achievements">
                <h2>"Our Achievements"</h2>
                <div class="stat-grid">
                    {ACHIEVEMENTS
                        .into_iter()
                        .map(|(number, label)| {
                            view! {
                                <div class="stat-card">
                                    <p class="stat-card__value">{number}</p>
                                    <p class="stat-card__title">{label}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta-band">
                <h2>"Ready to Transform Your Space?"</h2>
                <p>
                    "Let's create something beautiful together. Book your consultation today and bring your vision to life."
                </p>
                <a class="btn btn--primary" href="/services">
                    "Explore Our Services"
                </a>
            </section>
        </div>
    }
}
