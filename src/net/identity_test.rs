use super::*;

#[test]
fn signed_in_payload_parses_principal() {
    let event = parse_session_payload(Some(
        r#"{"email":"a@b.com","displayName":"Alice","photoUrl":null}"#,
    ));
    match event {
        ProviderEvent::SignedIn(user) => {
            assert_eq!(user.email, "a@b.com");
            assert_eq!(user.display_name.as_deref(), Some("Alice"));
            assert!(user.photo_url.is_none());
        }
        ProviderEvent::SignedOut => panic!("expected signed-in"),
    }
}

#[test]
fn null_payload_is_signed_out() {
    assert_eq!(parse_session_payload(Some("null")), ProviderEvent::SignedOut);
}

#[test]
fn missing_payload_is_signed_out() {
    assert_eq!(parse_session_payload(None), ProviderEvent::SignedOut);
}

#[test]
fn malformed_payload_fails_closed_to_signed_out() {
    assert_eq!(parse_session_payload(Some("not json")), ProviderEvent::SignedOut);
    assert_eq!(parse_session_payload(Some(r#"{"noEmail":true}"#)), ProviderEvent::SignedOut);
}
