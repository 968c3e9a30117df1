use super::*;

// =============================================================
// Unauthorized policy
// =============================================================

#[test]
fn unauthorized_is_exactly_401_and_403() {
    assert!(unauthorized(401));
    assert!(unauthorized(403));
    for status in [200, 201, 204, 400, 404, 409, 422, 500, 502] {
        assert!(!unauthorized(status), "{status}");
    }
}

// =============================================================
// Headers and messages
// =============================================================

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("tok-1"), "Bearer tok-1");
}

#[test]
fn error_body_message_reads_message_field() {
    assert_eq!(
        error_body_message(r#"{"message":"Invalid credentials"}"#),
        Some("Invalid credentials".to_owned())
    );
}

#[test]
fn error_body_message_ignores_empty_and_malformed_bodies() {
    assert_eq!(error_body_message(r#"{"message":""}"#), None);
    assert_eq!(error_body_message(r#"{"error":"nope"}"#), None);
    assert_eq!(error_body_message("not json"), None);
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn api_error_display_uses_server_message() {
    let err = ApiError::Status { code: 400, message: "Invalid credentials".to_owned() };
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[test]
fn eviction_error_reads_as_session_expired() {
    let err = ApiError::Status { code: 401, message: SESSION_EXPIRED.to_owned() };
    assert_eq!(err.to_string(), "Session expired");
}

// =============================================================
// Endpoint formatting
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(service_endpoint("s1"), "/api/services/s1");
    assert_eq!(booking_status_endpoint("b1"), "/api/bookings/b1/status");
    assert_eq!(assign_decorator_endpoint("b1"), "/api/bookings/b1/assign-decorator");
    assert_eq!(cancel_booking_endpoint("b1"), "/api/bookings/b1/cancel");
}

#[test]
fn decorator_endpoints_encode_emails() {
    assert_eq!(make_decorator_endpoint("a+b@x.com"), "/api/users/a%2Bb%40x.com/make-decorator");
    assert_eq!(toggle_decorator_endpoint("a@x.com"), "/api/decorators/a%40x.com/toggle-status");
}

// =============================================================
// Query assembly
// =============================================================

#[test]
fn services_query_skips_empty_filters() {
    let q = ServiceQuery { page: 1, limit: 12, ..ServiceQuery::default() };
    assert_eq!(services_query(&q), "?page=1&limit=12");
}

#[test]
fn services_query_includes_all_set_filters() {
    let q = ServiceQuery {
        search: "stage decor".to_owned(),
        category: "wedding".to_owned(),
        min_price: "100".to_owned(),
        max_price: "5000".to_owned(),
        page: 2,
        limit: 12,
    };
    assert_eq!(
        services_query(&q),
        "?search=stage%20decor&category=wedding&minPrice=100&maxPrice=5000&page=2&limit=12"
    );
}

#[test]
fn services_query_trims_whitespace_filters() {
    let q = ServiceQuery { search: "  ".to_owned(), page: 1, limit: 6, ..ServiceQuery::default() };
    assert_eq!(services_query(&q), "?page=1&limit=6");
}

#[test]
fn bookings_query_optionally_filters_status() {
    use crate::state::bookings::BookingStatus;
    assert_eq!(bookings_query(1, None), "?page=1&limit=10");
    assert_eq!(
        bookings_query(3, Some(BookingStatus::OnTheWay)),
        "?page=3&limit=10&status=on-the-way"
    );
}

#[test]
fn limit_query_formats() {
    assert_eq!(limit_query(100), "?limit=100");
}
