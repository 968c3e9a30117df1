//! Card for a service in catalog grids.

use leptos::prelude::*;

use crate::net::types::Service;
use crate::util::format;

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/400x250";

/// A clickable card summarizing one service.
#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let href = format!("/services/{}", service.id);
    let image = service.image_url.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_owned());

    view! {
        <div class="service-card">
            <figure class="service-card__figure">
                <img src=image alt=service.service_name.clone()/>
                <span class="service-card__category">{service.service_category}</span>
            </figure>
            <div class="service-card__body">
                <h3 class="service-card__name">{service.service_name}</h3>
                <p class="service-card__description">{service.description}</p>
                <div class="service-card__footer">
                    <span class="service-card__price">
                        {format::money(service.cost)}
                        <span class="service-card__unit">"/" {service.unit}</span>
                    </span>
                    <a class="btn btn--primary btn--sm" href=href>
                        "View Details"
                    </a>
                </div>
            </div>
        </div>
    }
}
