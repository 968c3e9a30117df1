//! Typed wire DTOs for the backend REST API.
//!
//! DESIGN
//! ======
//! Every payload crossing the gateway boundary is deserialized into one of
//! these types, so shape mismatches fail fast at the edge instead of
//! propagating missing fields into the view layer. The backend serializes
//! documents with `_id` keys and camelCase fields; service documents keep
//! their legacy snake_case names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::bookings::BookingStatus;

/// Role attached to a backend user record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Decorator,
    Admin,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Decorator => "decorator",
            Self::Admin => "admin",
        }
    }
}

/// Backend user record, cached locally as the session's user half.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// A bookable decoration service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "_id")]
    pub id: String,
    pub service_name: String,
    pub service_category: String,
    pub cost: f64,
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<String>,
}

/// Categories a service can be filed under.
pub const SERVICE_CATEGORIES: [&str; 7] =
    ["home", "wedding", "office", "seminar", "meeting", "ceremony", "event"];

/// A customer's booking of a service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub service_id: Option<String>,
    pub service_name: String,
    pub service_cost: f64,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    pub booking_date: String,
    pub location: String,
    #[serde(default)]
    pub user_notes: Option<String>,
    pub status: BookingStatus,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub decorator_email: Option<String>,
}

impl Booking {
    /// Paid either via the flag or the payment-status field; the backend
    /// has set one or the other depending on the checkout path.
    pub fn paid(&self) -> bool {
        self.is_paid || self.payment_status.as_deref() == Some("paid")
    }
}

/// A completed or pending payment record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id")]
    pub id: String,
    pub amount: f64,
    pub status: String,
    #[serde(default)]
    pub payment_intent_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A decorator profile as listed for assignment and showcase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decorator {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// Paging envelope on list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ServicesPage {
    pub services: Vec<Service>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BookingsPage {
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub pagination: Pagination,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PaymentsPage {
    pub payments: Vec<Payment>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DecoratorsPage {
    pub decorators: Vec<Decorator>,
}

/// Token + user pair issued by login and register.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: User,
}

/// Aggregate platform stats for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_decorators: u32,
    #[serde(default)]
    pub total_services: u32,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_bookings: u32,
    #[serde(default)]
    pub completed_bookings: u32,
    #[serde(default)]
    pub pending_bookings: u32,
}

/// One bar of the service-demand histogram; `_id` carries the service name.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ServiceDemand {
    #[serde(rename = "_id")]
    pub service_name: String,
    pub count: u32,
}

/// Hosted-checkout session handle.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSession {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// Hosted URL returned by the image-upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UploadedImage {
    pub url: String,
}

// =============================================================
// Request payloads
// =============================================================

/// Login payload: either a password or an identity-provider token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

impl LoginRequest {
    pub fn password(email: &str, password: &str) -> Self {
        Self {
            email: email.to_owned(),
            password: Some(password.to_owned()),
            ..Self::default()
        }
    }

    pub fn provider_token(
        email: &str,
        id_token: &str,
        display_name: Option<String>,
        profile_image: Option<String>,
    ) -> Self {
        Self {
            email: email.to_owned(),
            password: None,
            id_token: Some(id_token.to_owned()),
            display_name,
            profile_image,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub service_id: String,
    pub booking_date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_notes: Option<String>,
}

/// Create/update payload for a service document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ServiceInput {
    pub service_name: String,
    pub service_category: String,
    pub cost: f64,
    pub unit: String,
    pub description: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Profile attached when promoting a user to decorator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DecoratorProfileInput {
    pub specialty: String,
    pub rating: f64,
    pub experience: String,
}
