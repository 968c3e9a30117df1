//! Session reconciliation between the identity provider and the backend.
//!
//! DESIGN
//! ======
//! Provider session-change events land in a single-consumer queue and are
//! reconciled one at a time, so a burst of sign-in/sign-out notifications
//! can never interleave passes. Each pass resolves a `ReconcilePlan` (pure,
//! see `state::session`) against the backend and settles the shared session
//! signal. Imperative operations (login, register, social login, logout)
//! are not queued; the last writer wins against the event stream.
//!
//! ERROR HANDLING
//! ==============
//! Reconciliation never surfaces errors to callers — failures degrade to
//! the anonymous state with the cache cleared. Imperative operations return
//! `Err(message)` with the server's message when it sent one, so forms can
//! show it without exception handling.

#[cfg(test)]
#[path = "reconcile_test.rs"]
mod reconcile_test;

use super::api::ApiError;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const SOCIAL_LOGIN_FAILED: &str = "Social login failed";

/// User-facing message for a failed auth operation: the server's message
/// when it sent one, otherwise the operation's fallback.
pub fn failure_message(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => fallback.to_owned(),
    }
}

/// Keep a provider-supplied message unless it is blank.
pub fn nonempty_or(message: String, fallback: &str) -> String {
    if message.trim().is_empty() { fallback.to_owned() } else { message }
}

#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use super::{api, identity};
#[cfg(feature = "hydrate")]
use crate::net::types::{AuthSession, LoginRequest, RegisterRequest, User};
#[cfg(feature = "hydrate")]
use crate::state::session::{
    CredentialCache, ProviderEvent, ProviderUser, ReconcilePlan, SessionState, Settled,
    adopt_session, drop_session, plan_for_event,
};
#[cfg(feature = "hydrate")]
use crate::util::storage;

/// Acquire the provider subscription and start the reconciliation loop.
///
/// The subscription is released on scope cleanup. When the bridge is
/// absent (page loaded without the identity SDK) a synthetic signed-out
/// event still runs one pass, so cached password sessions are validated
/// and `loading` always settles.
#[cfg(feature = "hydrate")]
pub fn spawn_session_reconciler(session: RwSignal<SessionState>) {
    use futures::StreamExt;

    let (tx, mut rx) = futures::channel::mpsc::unbounded::<ProviderEvent>();

    let queue = tx.clone();
    let subscription = identity::subscribe(move |event| {
        let _ = queue.unbounded_send(event);
    });
    if subscription.is_none() {
        leptos::logging::warn!("identity bridge unavailable; reconciling from cache only");
        let _ = tx.unbounded_send(ProviderEvent::SignedOut);
    }
    leptos::prelude::on_cleanup(move || {
        if let Some(sub) = subscription {
            sub.cancel();
        }
    });

    leptos::task::spawn_local(async move {
        while let Some(event) = rx.next().await {
            let settled = reconcile_event(&event).await;
            session.update(|s| s.settle(settled));
        }
    });
}

/// Run one reconciliation pass. Every branch terminates in a settled
/// session; unexpected failures degrade to anonymous with the cache
/// cleared.
#[cfg(feature = "hydrate")]
async fn reconcile_event(event: &ProviderEvent) -> Settled {
    let mut cache = storage::snapshot();
    match plan_for_event(event, &cache) {
        ReconcilePlan::ValidateThenRefresh => match api::me().await {
            Ok(user) => {
                storage::refresh_user(&user);
                Settled::Authenticated(user)
            }
            Err(_) => {
                // Cached credential rejected: trade a force-refreshed
                // provider token for a new session.
                let ProviderEvent::SignedIn(principal) = event else {
                    return clear(&mut cache);
                };
                match exchange(principal, true).await {
                    Ok(auth) => adopt(&mut cache, auth),
                    Err(err) => {
                        leptos::logging::warn!("credential refresh failed: {err}");
                        clear(&mut cache)
                    }
                }
            }
        },
        ReconcilePlan::Exchange { force_token } => {
            let ProviderEvent::SignedIn(principal) = event else {
                return clear(&mut cache);
            };
            match exchange(principal, force_token).await {
                Ok(auth) => adopt(&mut cache, auth),
                Err(err) => {
                    leptos::logging::warn!("token exchange failed: {err}");
                    Settled::Anonymous
                }
            }
        }
        ReconcilePlan::ValidateOrClear => match api::me().await {
            Ok(user) => {
                // Password session the provider knows nothing about.
                storage::refresh_user(&user);
                Settled::Authenticated(user)
            }
            Err(_) => clear(&mut cache),
        },
        ReconcilePlan::Anonymous => Settled::Anonymous,
    }
}

/// Trade a provider ID token for a backend session.
#[cfg(feature = "hydrate")]
async fn exchange(principal: &ProviderUser, force: bool) -> Result<AuthSession, String> {
    let id_token = identity::id_token(force).await?;
    let req = LoginRequest::provider_token(
        &principal.email,
        &id_token,
        principal.display_name.clone(),
        principal.photo_url.clone(),
    );
    api::login(&req).await.map_err(|e| e.to_string())
}

#[cfg(feature = "hydrate")]
fn adopt(cache: &mut CredentialCache, auth: AuthSession) -> Settled {
    storage::save_session(&auth.token, &auth.user);
    adopt_session(cache, auth.token, auth.user)
}

#[cfg(feature = "hydrate")]
fn clear(cache: &mut CredentialCache) -> Settled {
    storage::clear_session();
    drop_session(cache)
}

#[cfg(feature = "hydrate")]
fn apply_auth(session: RwSignal<SessionState>, auth: AuthSession) {
    storage::save_session(&auth.token, &auth.user);
    session.update(|s| s.settle(Settled::Authenticated(auth.user)));
}

// =============================================================
// Imperative operations
// =============================================================

/// Password login. On success the session and cache are replaced; on
/// failure both are untouched.
///
/// # Errors
///
/// Returns the server's message, or a generic fallback.
#[cfg(feature = "hydrate")]
pub async fn login(session: RwSignal<SessionState>, email: &str, password: &str) -> Result<(), String> {
    match api::login(&LoginRequest::password(email, password)).await {
        Ok(auth) => {
            apply_auth(session, auth);
            Ok(())
        }
        Err(err) => Err(failure_message(&err, LOGIN_FAILED)),
    }
}

/// Create an account and adopt the returned session.
///
/// # Errors
///
/// Returns the server's message, or a generic fallback.
#[cfg(feature = "hydrate")]
pub async fn register(session: RwSignal<SessionState>, req: &RegisterRequest) -> Result<(), String> {
    match api::register(req).await {
        Ok(auth) => {
            apply_auth(session, auth);
            Ok(())
        }
        Err(err) => Err(failure_message(&err, REGISTRATION_FAILED)),
    }
}

/// Interactive provider sign-in, then a backend exchange. Popup
/// cancellation and backend rejection both surface as `Err(message)` with
/// no session mutation.
///
/// # Errors
///
/// Returns the provider's or server's message, or a generic fallback.
#[cfg(feature = "hydrate")]
pub async fn social_login(session: RwSignal<SessionState>) -> Result<(), String> {
    let principal = identity::sign_in_popup()
        .await
        .map_err(|m| nonempty_or(m, SOCIAL_LOGIN_FAILED))?;
    match exchange(&principal, false).await {
        Ok(auth) => {
            apply_auth(session, auth);
            Ok(())
        }
        Err(m) => Err(nonempty_or(m, SOCIAL_LOGIN_FAILED)),
    }
}

/// Sign out. Provider sign-out is best-effort; the local session and cache
/// are dropped unconditionally.
#[cfg(feature = "hydrate")]
pub async fn logout(session: RwSignal<SessionState>) {
    if let Err(err) = identity::sign_out().await {
        leptos::logging::warn!("identity sign-out failed: {err}");
    }
    storage::clear_session();
    session.update(|s| s.settle(Settled::Anonymous));
}

/// Overwrite the session's user record after a server-confirmed mutation
/// elsewhere; no backend round-trip.
#[cfg(feature = "hydrate")]
pub fn update_user(session: RwSignal<SessionState>, user: User) {
    storage::refresh_user(&user);
    session.update(|s| s.settle(Settled::Authenticated(user)));
}
