//! HTTP gateway to the backend REST API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning errors since these endpoints are only meaningful
//! in the browser.
//!
//! Every request carries the cached bearer credential when one exists. Any
//! 401/403 response — from any endpoint — evicts the local session and
//! hard-redirects to the login route; callers never get to handle an
//! unauthorized response themselves.
//!
//! ERROR HANDLING
//! ==============
//! All calls resolve to `Result<_, ApiError>`; the server's `{ message }`
//! error body is surfaced when present so forms can show it verbatim. No
//! retries anywhere; every operation is attempt-once.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use super::types::{
    AuthSession, Booking, BookingsPage, CheckoutSession, DecoratorProfileInput, DecoratorsPage,
    LoginRequest, NewBooking, PaymentsPage, RegisterRequest, Service, ServiceDemand, ServiceInput,
    ServicesPage, Stats, UploadedImage, User,
};
use crate::state::bookings::BookingStatus;

/// Route the gateway bounces to after evicting an unauthorized session.
pub const LOGIN_PATH: &str = "/login";

#[cfg(any(test, feature = "hydrate"))]
const SESSION_EXPIRED: &str = "Session expired";

/// Failure surfaced by a gateway call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status, with the server's message when it sent one.
    #[error("{message}")]
    Status { code: u16, message: String },
    /// The response body did not match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

#[derive(Clone, Copy, Debug)]
enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

// =============================================================
// Pure request plumbing (unit-tested)
// =============================================================

/// Statuses that terminate the session, per the global eviction policy.
pub fn unauthorized(status: u16) -> bool {
    status == 401 || status == 403
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Extract the display message from a `{ "message": ... }` error body.
#[cfg(any(test, feature = "hydrate"))]
fn error_body_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    parsed.message.filter(|m| !m.is_empty())
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

fn service_endpoint(id: &str) -> String {
    format!("/api/services/{id}")
}

fn booking_status_endpoint(id: &str) -> String {
    format!("/api/bookings/{id}/status")
}

fn assign_decorator_endpoint(id: &str) -> String {
    format!("/api/bookings/{id}/assign-decorator")
}

fn cancel_booking_endpoint(id: &str) -> String {
    format!("/api/bookings/{id}/cancel")
}

fn make_decorator_endpoint(email: &str) -> String {
    format!("/api/users/{}/make-decorator", urlencoding::encode(email))
}

fn toggle_decorator_endpoint(email: &str) -> String {
    format!("/api/decorators/{}/toggle-status", urlencoding::encode(email))
}

/// Filters for the paged service catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ServiceQuery {
    pub search: String,
    pub category: String,
    pub min_price: String,
    pub max_price: String,
    pub page: u32,
    pub limit: u32,
}

fn push_pair(query: &mut String, key: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    query.push(if query.is_empty() { '?' } else { '&' });
    query.push_str(key);
    query.push('=');
    query.push_str(&urlencoding::encode(value));
}

fn services_query(q: &ServiceQuery) -> String {
    let mut query = String::new();
    push_pair(&mut query, "search", q.search.trim());
    push_pair(&mut query, "category", &q.category);
    push_pair(&mut query, "minPrice", q.min_price.trim());
    push_pair(&mut query, "maxPrice", q.max_price.trim());
    if q.page > 0 {
        push_pair(&mut query, "page", &q.page.to_string());
    }
    if q.limit > 0 {
        push_pair(&mut query, "limit", &q.limit.to_string());
    }
    query
}

fn bookings_query(page: u32, status: Option<BookingStatus>) -> String {
    let mut query = String::new();
    push_pair(&mut query, "page", &page.to_string());
    push_pair(&mut query, "limit", "10");
    if let Some(status) = status {
        push_pair(&mut query, "status", status.wire());
    }
    query
}

fn limit_query(limit: u32) -> String {
    format!("?limit={limit}")
}

fn to_body<T: Serialize>(value: &T) -> Option<serde_json::Value> {
    serde_json::to_value(value).ok()
}

// =============================================================
// Transport
// =============================================================

#[cfg(feature = "hydrate")]
async fn send(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use gloo_net::http::Request;

    let url = crate::util::config::api_url(path);
    let mut builder = match method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Patch => Request::patch(&url),
        Method::Delete => Request::delete(&url),
    };
    if let Some(token) = crate::util::storage::cached_token() {
        builder = builder.header("Authorization", &bearer_header(&token));
    }

    let request = match body {
        Some(value) => builder.json(&value).map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
    };
    let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;

    let status = resp.status();
    if unauthorized(status) {
        evict_session();
        return Err(ApiError::Status { code: status, message: SESSION_EXPIRED.to_owned() });
    }
    if !resp.ok() {
        let message = match resp.text().await {
            Ok(text) => error_body_message(&text).unwrap_or_else(|| request_failed_message(status)),
            Err(_) => request_failed_message(status),
        };
        return Err(ApiError::Status { code: status, message });
    }
    Ok(resp)
}

/// Clear the cached session and bounce to the login route.
#[cfg(feature = "hydrate")]
fn evict_session() {
    crate::util::storage::clear_session();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(LOGIN_PATH);
    }
}

#[cfg(feature = "hydrate")]
async fn execute<T: serde::de::DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    let resp = send(method, path, body).await?;
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn execute_unit(
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    send(method, path, body).await.map(|_| ())
}

#[cfg(not(feature = "hydrate"))]
async fn execute<T>(
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
) -> Result<T, ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

#[cfg(not(feature = "hydrate"))]
async fn execute_unit(
    _method: Method,
    _path: &str,
    _body: Option<serde_json::Value>,
) -> Result<(), ApiError> {
    Err(ApiError::Network("not available on server".to_owned()))
}

// =============================================================
// Auth
// =============================================================

/// Exchange credentials (password or provider token) for a session.
pub async fn login(req: &LoginRequest) -> Result<AuthSession, ApiError> {
    execute(Method::Post, "/api/auth/login", to_body(req)).await
}

/// Create an account and receive a session in one step.
pub async fn register(req: &RegisterRequest) -> Result<AuthSession, ApiError> {
    execute(Method::Post, "/api/auth/register", to_body(req)).await
}

/// Validate the cached credential and fetch the current user record.
pub async fn me() -> Result<User, ApiError> {
    execute(Method::Get, "/api/auth/me", None).await
}

// =============================================================
// Services
// =============================================================

pub async fn services(q: &ServiceQuery) -> Result<ServicesPage, ApiError> {
    let path = format!("/api/services{}", services_query(q));
    execute(Method::Get, &path, None).await
}

pub async fn service(id: &str) -> Result<Service, ApiError> {
    execute(Method::Get, &service_endpoint(id), None).await
}

pub async fn create_service(input: &ServiceInput) -> Result<Service, ApiError> {
    execute(Method::Post, "/api/services", to_body(input)).await
}

pub async fn update_service(id: &str, input: &ServiceInput) -> Result<Service, ApiError> {
    execute(Method::Put, &service_endpoint(id), to_body(input)).await
}

pub async fn delete_service(id: &str) -> Result<(), ApiError> {
    execute_unit(Method::Delete, &service_endpoint(id), None).await
}

// =============================================================
// Bookings
// =============================================================

pub async fn create_booking(input: &NewBooking) -> Result<Booking, ApiError> {
    execute(Method::Post, "/api/bookings", to_body(input)).await
}

/// The signed-in customer's bookings, newest first.
pub async fn my_bookings(limit: u32) -> Result<BookingsPage, ApiError> {
    let path = format!("/api/bookings/my-bookings{}", limit_query(limit));
    execute(Method::Get, &path, None).await
}

/// All bookings, paged, optionally filtered by status. Admin only.
pub async fn all_bookings(page: u32, status: Option<BookingStatus>) -> Result<BookingsPage, ApiError> {
    let path = format!("/api/bookings{}", bookings_query(page, status));
    execute(Method::Get, &path, None).await
}

pub async fn update_booking_status(id: &str, status: BookingStatus) -> Result<(), ApiError> {
    execute_unit(
        Method::Patch,
        &booking_status_endpoint(id),
        Some(json!({ "status": status.wire() })),
    )
    .await
}

pub async fn assign_decorator(id: &str, decorator_email: &str) -> Result<(), ApiError> {
    execute_unit(
        Method::Patch,
        &assign_decorator_endpoint(id),
        Some(json!({ "decoratorEmail": decorator_email })),
    )
    .await
}

pub async fn cancel_booking(id: &str) -> Result<(), ApiError> {
    execute_unit(Method::Patch, &cancel_booking_endpoint(id), None).await
}

/// Bookings assigned to the signed-in decorator.
pub async fn my_assignments() -> Result<BookingsPage, ApiError> {
    execute(Method::Get, "/api/bookings/my-assignments", None).await
}

// =============================================================
// Payments
// =============================================================

/// Start a hosted checkout for a booking.
pub async fn create_checkout_session(booking_id: &str) -> Result<CheckoutSession, ApiError> {
    execute(
        Method::Post,
        "/api/payments/create-checkout-session",
        Some(json!({ "bookingId": booking_id })),
    )
    .await
}

/// Confirm a completed checkout against the backend.
pub async fn verify_payment_session(session_id: &str, booking_id: &str) -> Result<(), ApiError> {
    execute_unit(
        Method::Post,
        "/api/payments/verify-session",
        Some(json!({ "sessionId": session_id, "bookingId": booking_id })),
    )
    .await
}

pub async fn my_payments() -> Result<PaymentsPage, ApiError> {
    execute(Method::Get, "/api/payments/my-payments", None).await
}

// =============================================================
// Decorators & users
// =============================================================

pub async fn decorators() -> Result<DecoratorsPage, ApiError> {
    execute(Method::Get, "/api/decorators", None).await
}

/// Promote a user to decorator with an initial profile. Admin only.
pub async fn make_decorator(email: &str, profile: &DecoratorProfileInput) -> Result<(), ApiError> {
    execute_unit(Method::Patch, &make_decorator_endpoint(email), to_body(profile)).await
}

pub async fn toggle_decorator(email: &str) -> Result<(), ApiError> {
    execute_unit(Method::Patch, &toggle_decorator_endpoint(email), None).await
}

// =============================================================
// Analytics & uploads
// =============================================================

pub async fn stats() -> Result<Stats, ApiError> {
    execute(Method::Get, "/api/analytics/stats", None).await
}

pub async fn service_demand() -> Result<Vec<ServiceDemand>, ApiError> {
    #[derive(serde::Deserialize)]
    struct DemandPage {
        #[serde(rename = "serviceDemand", default)]
        service_demand: Vec<ServiceDemand>,
    }
    let page: DemandPage = execute(Method::Get, "/api/analytics/service-demand", None).await?;
    Ok(page.service_demand)
}

/// Upload a base64 data-URL image; returns the hosted URL.
pub async fn upload_image(data_url: &str) -> Result<UploadedImage, ApiError> {
    execute(Method::Post, "/api/upload-image", Some(json!({ "image": data_url }))).await
}
