use super::*;

// =============================================================
// Helpers
// =============================================================

fn user_json() -> &'static str {
    r#"{
        "_id": "u-1",
        "email": "alice@example.com",
        "displayName": "Alice",
        "profileImage": "https://img.example/a.png",
        "role": "decorator"
    }"#
}

// =============================================================
// User / Role
// =============================================================

#[test]
fn user_parses_document_shape() {
    let user: User = serde_json::from_str(user_json()).expect("user");
    assert_eq!(user.id, "u-1");
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.display_name, "Alice");
    assert_eq!(user.role, Role::Decorator);
}

#[test]
fn user_role_defaults_to_user_when_missing() {
    let user: User =
        serde_json::from_str(r#"{"_id":"u-2","email":"b@example.com","displayName":"Bob"}"#)
            .expect("user");
    assert_eq!(user.role, Role::User);
    assert!(user.profile_image.is_none());
}

#[test]
fn user_round_trips_through_the_cache_serialization() {
    let user: User = serde_json::from_str(user_json()).expect("user");
    let raw = serde_json::to_string(&user).expect("serialize");
    let back: User = serde_json::from_str(&raw).expect("reparse");
    assert_eq!(user, back);
}

#[test]
fn role_wire_form_is_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Admin).expect("role"), "\"admin\"");
    let role: Role = serde_json::from_str("\"decorator\"").expect("role");
    assert_eq!(role, Role::Decorator);
}

// =============================================================
// Service
// =============================================================

#[test]
fn service_parses_mixed_case_document() {
    let service: Service = serde_json::from_str(
        r#"{
            "_id": "s-1",
            "service_name": "Wedding Stage",
            "service_category": "wedding",
            "cost": 15000,
            "unit": "event",
            "description": "Full stage setup",
            "imageUrl": "https://img.example/s.png",
            "createdAt": "2026-01-10T00:00:00Z"
        }"#,
    )
    .expect("service");
    assert_eq!(service.service_name, "Wedding Stage");
    assert_eq!(service.cost, 15000.0);
    assert_eq!(service.image_url.as_deref(), Some("https://img.example/s.png"));
}

#[test]
fn service_tolerates_missing_optionals() {
    let service: Service = serde_json::from_str(
        r#"{"_id":"s-2","service_name":"Office","service_category":"office","cost":500,"unit":"day"}"#,
    )
    .expect("service");
    assert!(service.description.is_empty());
    assert!(service.image_url.is_none());
}

// =============================================================
// Booking
// =============================================================

#[test]
fn booking_parses_and_reports_paid() {
    let booking: Booking = serde_json::from_str(
        r#"{
            "_id": "b-1",
            "serviceName": "Wedding Stage",
            "serviceCost": 15000,
            "bookingDate": "2026-09-01T10:00",
            "location": "Dhaka",
            "status": "materials-prepared",
            "isPaid": true
        }"#,
    )
    .expect("booking");
    assert_eq!(booking.status, crate::state::bookings::BookingStatus::MaterialsPrepared);
    assert!(booking.paid());
}

#[test]
fn booking_paid_via_payment_status_field() {
    let booking: Booking = serde_json::from_str(
        r#"{
            "_id": "b-2",
            "serviceName": "Office",
            "serviceCost": 500,
            "bookingDate": "2026-09-01T10:00",
            "location": "Dhaka",
            "status": "pending",
            "paymentStatus": "paid"
        }"#,
    )
    .expect("booking");
    assert!(!booking.is_paid);
    assert!(booking.paid());
}

// =============================================================
// List envelopes and misc payloads
// =============================================================

#[test]
fn services_page_defaults_pagination() {
    let page: ServicesPage = serde_json::from_str(r#"{"services":[]}"#).expect("page");
    assert_eq!(page.pagination, Pagination::default());
}

#[test]
fn auth_session_parses_token_and_user() {
    let json = format!(r#"{{"token":"tok-1","user":{}}}"#, user_json());
    let session: AuthSession = serde_json::from_str(&json).expect("session");
    assert_eq!(session.token, "tok-1");
    assert_eq!(session.user.id, "u-1");
}

#[test]
fn service_demand_reads_id_as_name() {
    let demand: ServiceDemand =
        serde_json::from_str(r#"{"_id":"Wedding Stage","count":12}"#).expect("demand");
    assert_eq!(demand.service_name, "Wedding Stage");
    assert_eq!(demand.count, 12);
}

#[test]
fn checkout_session_fields_are_optional() {
    let session: CheckoutSession =
        serde_json::from_str(r#"{"url":"https://pay.example/cs_1"}"#).expect("session");
    assert_eq!(session.url.as_deref(), Some("https://pay.example/cs_1"));
    assert!(session.session_id.is_none());
}

#[test]
fn stats_default_all_zero() {
    let stats: Stats = serde_json::from_str("{}").expect("stats");
    assert_eq!(stats.total_users, 0);
    assert_eq!(stats.total_revenue, 0.0);
}

// =============================================================
// Request payloads
// =============================================================

#[test]
fn login_request_password_omits_token_fields() {
    let req = LoginRequest::password("a@b.com", "secret");
    let json = serde_json::to_value(&req).expect("json");
    assert_eq!(json["email"], "a@b.com");
    assert_eq!(json["password"], "secret");
    assert!(json.get("idToken").is_none());
    assert!(json.get("displayName").is_none());
}

#[test]
fn login_request_provider_token_omits_password() {
    let req = LoginRequest::provider_token("a@b.com", "idt-1", Some("Alice".to_owned()), None);
    let json = serde_json::to_value(&req).expect("json");
    assert_eq!(json["idToken"], "idt-1");
    assert_eq!(json["displayName"], "Alice");
    assert!(json.get("password").is_none());
    assert!(json.get("profileImage").is_none());
}

#[test]
fn new_booking_serializes_camel_case() {
    let req = NewBooking {
        service_id: "s-1".to_owned(),
        booking_date: "2026-09-01T10:00".to_owned(),
        location: "Dhaka".to_owned(),
        user_notes: None,
    };
    let json = serde_json::to_value(&req).expect("json");
    assert_eq!(json["serviceId"], "s-1");
    assert_eq!(json["bookingDate"], "2026-09-01T10:00");
    assert!(json.get("userNotes").is_none());
}

#[test]
fn service_input_keeps_legacy_field_names() {
    let input = ServiceInput {
        service_name: "Stage".to_owned(),
        service_category: "wedding".to_owned(),
        cost: 1000.0,
        unit: "event".to_owned(),
        description: String::new(),
        image_url: Some("https://img.example/s.png".to_owned()),
    };
    let json = serde_json::to_value(&input).expect("json");
    assert_eq!(json["service_name"], "Stage");
    assert_eq!(json["imageUrl"], "https://img.example/s.png");
}
