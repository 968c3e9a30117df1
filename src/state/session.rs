//! Session state and the pure core of the session reconciler.
//!
//! DESIGN
//! ======
//! The reconciler keeps the locally cached backend session (bearer token +
//! user record) consistent with the identity provider's sign-in state and
//! the backend's acceptance of the cached credential. The decision of what
//! to do for a given provider event is pure data (`plan_for_event`), so the
//! branching is testable without a browser; `net::reconcile` executes the
//! plans against the backend.
//!
//! The session has a single writer (the reconciler and its imperative
//! operations) and many readers (pages and components via context).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::Deserialize;

use crate::net::types::User;

/// Process-wide session value provided as `RwSignal<SessionState>` context.
///
/// `loading` is true only until the very first reconciliation pass settles;
/// after that the session is always either authenticated or anonymous.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    /// Adopt the terminal value of a reconciliation pass or imperative
    /// operation. Leaves the loading phase permanently.
    pub fn settle(&mut self, outcome: Settled) {
        self.user = match outcome {
            Settled::Authenticated(user) => Some(user),
            Settled::Anonymous => None,
        };
        self.loading = false;
    }
}

/// The identity provider's view of a signed-in principal.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub email: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// A session-change notification from the identity provider.
///
/// Fires once at startup and again on every sign-in/sign-out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    SignedIn(ProviderUser),
    SignedOut,
}

/// Paired snapshot of the durable credential cache.
///
/// Token and user are only ever written or cleared together; the paired
/// methods are the only mutators so a completed cycle can never leave one
/// half behind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CredentialCache {
    token: Option<String>,
    user: Option<User>,
}

impl CredentialCache {
    pub fn new(token: Option<String>, user: Option<User>) -> Self {
        Self { token, user }
    }

    /// Replace both halves with a freshly issued session.
    pub fn store(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    /// Refresh the cached user record without touching the credential.
    /// Only valid while a token is present (post-validation refresh).
    pub fn refresh_user(&mut self, user: User) {
        if self.token.is_some() {
            self.user = Some(user);
        }
    }

    /// Drop both halves.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }
}

/// What the reconciler must do for a provider event, given the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcilePlan {
    /// Validate the cached credential against the backend; if the backend
    /// rejects it, exchange a force-refreshed provider token for a new
    /// session, clearing the cache when the exchange also fails.
    ValidateThenRefresh,
    /// No cached credential: exchange a provider token for a session.
    Exchange { force_token: bool },
    /// Provider signed out but a full cached session exists (password
    /// sessions the provider knows nothing about): validate it, clearing
    /// the cache on rejection.
    ValidateOrClear,
    /// Nothing usable on either side: settle as anonymous.
    Anonymous,
}

/// Decision table for a provider event against the current cache.
pub fn plan_for_event(event: &ProviderEvent, cache: &CredentialCache) -> ReconcilePlan {
    match event {
        ProviderEvent::SignedIn(_) => {
            if cache.has_token() {
                ReconcilePlan::ValidateThenRefresh
            } else {
                ReconcilePlan::Exchange { force_token: false }
            }
        }
        ProviderEvent::SignedOut => {
            if cache.has_token() && cache.user().is_some() {
                ReconcilePlan::ValidateOrClear
            } else {
                ReconcilePlan::Anonymous
            }
        }
    }
}

/// Terminal value a reconciliation pass or auth operation settles on.
/// Never `Loading`: every path through the reconciler produces one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum Settled {
    Authenticated(User),
    Anonymous,
}

/// Adopt a freshly exchanged backend session into the cache.
pub fn adopt_session(cache: &mut CredentialCache, token: String, user: User) -> Settled {
    cache.store(token, user.clone());
    Settled::Authenticated(user)
}

/// Fail closed: drop the cache and settle anonymous.
pub fn drop_session(cache: &mut CredentialCache) -> Settled {
    cache.clear();
    Settled::Anonymous
}
