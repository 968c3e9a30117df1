use super::*;

#[test]
fn join_base_handles_trailing_slash() {
    assert_eq!(join_base("https://api.example.com/", "/api/services"), "https://api.example.com/api/services");
    assert_eq!(join_base("https://api.example.com", "/api/services"), "https://api.example.com/api/services");
}

#[test]
fn join_base_empty_base_yields_relative_path() {
    assert_eq!(join_base("", "/api/auth/me"), "/api/auth/me");
}

#[test]
fn api_url_starts_from_configured_base() {
    // With no env override the base is empty and paths stay same-origin.
    assert!(api_url("/api/services").ends_with("/api/services"));
}
