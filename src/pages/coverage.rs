//! Coverage page: the divisions and cities the service network reaches.

use leptos::prelude::*;

struct CoverageArea {
    division: &'static str,
    cities: &'static [&'static str],
    description: &'static str,
}

const COVERAGE_AREAS: [CoverageArea; 6] = [
    CoverageArea {
        division: "Dhaka Division",
        cities: &["Dhaka", "Gazipur", "Narayanganj", "Tangail", "Manikganj"],
        description: "Full coverage across the capital and surrounding areas with same-day service availability.",
    },
    CoverageArea {
        division: "Chittagong Division",
        cities: &["Chittagong", "Cox's Bazar", "Comilla", "Feni", "Noakhali"],
        description: "Comprehensive decoration services for the port city and coastal regions.",
    },
    CoverageArea {
        division: "Sylhet Division",
        cities: &["Sylhet", "Moulvibazar", "Habiganj", "Sunamganj"],
        description: "Bringing elegance to the tea capital and surrounding districts.",
    },
    CoverageArea {
        division: "Rajshahi Division",
        cities: &["Rajshahi", "Bogra", "Pabna", "Natore", "Sirajganj"],
        description: "Quality decoration services across the northern region.",
    },
    CoverageArea {
        division: "Khulna Division",
        cities: &["Khulna", "Jessore", "Satkhira", "Bagerhat", "Kushtia"],
        description: "Professional services for the southwestern region and beyond.",
    },
    CoverageArea {
        division: "Barisal Division",
        cities: &["Barisal", "Patuakhali", "Bhola", "Pirojpur", "Jhalokathi"],
        description: "Extending our services to the southern riverine districts.",
    },
];

const COVERAGE_STATS: [(&str, &str); 4] = [
    ("64", "Districts Covered"),
    ("100+", "Cities & Towns"),
    ("24/7", "Support Available"),
    ("2-3", "Days Delivery"),
];

#[component]
pub fn CoveragePage() -> impl IntoView {
    view! {
        <div class="coverage-page">
            <section class="hero hero--compact">
                <h1>"Service Coverage"</h1>
                <p>
                    "We bring beautiful decorations to every corner of the country. Discover our extensive service network."
                </p>
            </section>

            <section class="coverage-page__stats">
                <div class="stat-grid">
                    {COVERAGE_STATS
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

            <section class="coverage-page__areas">
                <h2>"Coverage by Division"</h2>
                <div class="coverage-grid">
                    {COVERAGE_AREAS
                        .into_iter()
                        .map(|area| {
                            view! {
                                <div class="coverage-card">
                                    <h3>{area.division}</h3>
                                    <p>{area.description}</p>
                                    <div class="coverage-card__cities">
                                        {area
                                            .cities
                                            .iter()
                                            .map(|city| {
                                                view! { <span class="badge">{*city}</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="cta-band">
                <h2>"Don't See Your Area?"</h2>
                <p>
                    "We're constantly expanding our service network. If your location isn't listed, contact us to check availability."
                </p>
                <div class="cta-band__actions">
                    <a class="btn btn--primary" href="/contact">
                        "Contact Us"
                    </a>
                    <a class="btn btn--outline" href="/services">
                        "View Services"
                    </a>
                </div>
            </section>
        </div>
    }
}
