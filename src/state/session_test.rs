use super::*;
use crate::net::types::Role;

// =============================================================
// Helpers
// =============================================================

fn user(email: &str) -> User {
    User {
        id: "u-1".to_owned(),
        email: email.to_owned(),
        display_name: "Alice".to_owned(),
        profile_image: None,
        role: Role::User,
    }
}

fn provider_user(email: &str) -> ProviderUser {
    ProviderUser {
        email: email.to_owned(),
        display_name: Some("Alice".to_owned()),
        photo_url: None,
    }
}

fn full_cache() -> CredentialCache {
    CredentialCache::new(Some("tok-1".to_owned()), Some(user("a@b.com")))
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_starts_loading_and_anonymous() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn settle_authenticated_leaves_loading() {
    let mut state = SessionState::default();
    state.settle(Settled::Authenticated(user("a@b.com")));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[test]
fn settle_anonymous_leaves_loading() {
    let mut state = SessionState::default();
    state.settle(Settled::Anonymous);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn settle_never_returns_to_loading() {
    // Terminal state after any sequence of settles is authenticated or
    // anonymous, never loading.
    let mut state = SessionState::default();
    let outcomes = [
        Settled::Anonymous,
        Settled::Authenticated(user("a@b.com")),
        Settled::Anonymous,
    ];
    for outcome in outcomes {
        state.settle(outcome);
        assert!(!state.loading);
    }
}

// =============================================================
// CredentialCache pairing
// =============================================================

#[test]
fn cache_store_sets_both_halves() {
    let mut cache = CredentialCache::default();
    cache.store("tok-9".to_owned(), user("a@b.com"));
    assert_eq!(cache.token(), Some("tok-9"));
    assert_eq!(cache.user().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[test]
fn cache_clear_drops_both_halves() {
    let mut cache = full_cache();
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.token().is_none());
    assert!(cache.user().is_none());
}

#[test]
fn cache_refresh_user_requires_token() {
    let mut cache = CredentialCache::default();
    cache.refresh_user(user("a@b.com"));
    assert!(cache.is_empty());

    let mut cache = full_cache();
    cache.refresh_user(user("new@b.com"));
    assert_eq!(cache.token(), Some("tok-1"));
    assert_eq!(cache.user().map(|u| u.email.as_str()), Some("new@b.com"));
}

#[test]
fn adopt_session_stores_exactly_the_exchanged_pair() {
    let mut cache = CredentialCache::default();
    let settled = adopt_session(&mut cache, "tok-2".to_owned(), user("c@d.com"));
    assert_eq!(cache.token(), Some("tok-2"));
    assert_eq!(cache.user().map(|u| u.email.as_str()), Some("c@d.com"));
    assert_eq!(settled, Settled::Authenticated(user("c@d.com")));
}

#[test]
fn drop_session_empties_cache_and_settles_anonymous() {
    let mut cache = full_cache();
    let settled = drop_session(&mut cache);
    assert!(cache.is_empty());
    assert_eq!(settled, Settled::Anonymous);
}

// =============================================================
// plan_for_event decision table
// =============================================================

#[test]
fn signed_in_with_cached_token_validates_then_refreshes() {
    let event = ProviderEvent::SignedIn(provider_user("a@b.com"));
    assert_eq!(plan_for_event(&event, &full_cache()), ReconcilePlan::ValidateThenRefresh);
}

#[test]
fn signed_in_without_cached_token_exchanges_unforced() {
    let event = ProviderEvent::SignedIn(provider_user("a@b.com"));
    assert_eq!(
        plan_for_event(&event, &CredentialCache::default()),
        ReconcilePlan::Exchange { force_token: false }
    );
}

#[test]
fn signed_in_with_orphaned_user_record_still_exchanges() {
    // A user record without a token is not a usable credential.
    let event = ProviderEvent::SignedIn(provider_user("a@b.com"));
    let cache = CredentialCache::new(None, Some(user("a@b.com")));
    assert_eq!(plan_for_event(&event, &cache), ReconcilePlan::Exchange { force_token: false });
}

#[test]
fn signed_out_with_full_cache_validates_password_session() {
    assert_eq!(
        plan_for_event(&ProviderEvent::SignedOut, &full_cache()),
        ReconcilePlan::ValidateOrClear
    );
}

#[test]
fn signed_out_with_partial_cache_settles_anonymous() {
    let token_only = CredentialCache::new(Some("tok-1".to_owned()), None);
    assert_eq!(plan_for_event(&ProviderEvent::SignedOut, &token_only), ReconcilePlan::Anonymous);

    let user_only = CredentialCache::new(None, Some(user("a@b.com")));
    assert_eq!(plan_for_event(&ProviderEvent::SignedOut, &user_only), ReconcilePlan::Anonymous);
}

#[test]
fn signed_out_with_empty_cache_settles_anonymous() {
    assert_eq!(
        plan_for_event(&ProviderEvent::SignedOut, &CredentialCache::default()),
        ReconcilePlan::Anonymous
    );
}

// =============================================================
// ProviderUser wire shape
// =============================================================

#[test]
fn provider_user_parses_bridge_payload() {
    let parsed: ProviderUser = serde_json::from_str(
        r#"{"email":"a@b.com","displayName":"Alice","photoUrl":"https://img.example/a.png"}"#,
    )
    .expect("provider user");
    assert_eq!(parsed.email, "a@b.com");
    assert_eq!(parsed.display_name.as_deref(), Some("Alice"));
    assert_eq!(parsed.photo_url.as_deref(), Some("https://img.example/a.png"));
}

#[test]
fn provider_user_tolerates_missing_optional_fields() {
    let parsed: ProviderUser = serde_json::from_str(r#"{"email":"a@b.com"}"#).expect("provider user");
    assert!(parsed.display_name.is_none());
    assert!(parsed.photo_url.is_none());
}
