use super::*;

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_prefers_server_message() {
    let err = ApiError::Status { code: 400, message: "Invalid credentials".to_owned() };
    assert_eq!(failure_message(&err, LOGIN_FAILED), "Invalid credentials");
}

#[test]
fn failure_message_falls_back_for_transport_errors() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(failure_message(&err, LOGIN_FAILED), "Login failed");
}

#[test]
fn failure_message_falls_back_for_decode_errors() {
    let err = ApiError::Decode("missing field `token`".to_owned());
    assert_eq!(failure_message(&err, REGISTRATION_FAILED), "Registration failed");
}

#[test]
fn failure_message_falls_back_when_server_message_is_blank() {
    let err = ApiError::Status { code: 500, message: String::new() };
    assert_eq!(failure_message(&err, SOCIAL_LOGIN_FAILED), "Social login failed");
}

// =============================================================
// nonempty_or
// =============================================================

#[test]
fn nonempty_or_keeps_provider_message() {
    assert_eq!(nonempty_or("popup closed by user".to_owned(), SOCIAL_LOGIN_FAILED), "popup closed by user");
}

#[test]
fn nonempty_or_replaces_blank_messages() {
    assert_eq!(nonempty_or(String::new(), SOCIAL_LOGIN_FAILED), "Social login failed");
    assert_eq!(nonempty_or("   ".to_owned(), SOCIAL_LOGIN_FAILED), "Social login failed");
}
