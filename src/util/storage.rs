//! Durable credential cache over `localStorage`.
//!
//! Two string-keyed entries — the bearer token and the serialized user
//! record — are the persistence-of-record across page reloads. They are
//! only ever written or cleared through the paired operations here, so a
//! completed auth cycle never leaves one half behind. Requires a browser
//! environment; inert on the server.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::User;
use crate::state::session::CredentialCache;

#[cfg(any(test, feature = "hydrate"))]
const TOKEN_KEY: &str = "decora_token";
#[cfg(any(test, feature = "hydrate"))]
const USER_KEY: &str = "decora_user";

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the cached bearer token, if any.
pub fn cached_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the cached user record. A corrupt entry reads as absent.
pub fn cached_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let raw = local_storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Current cache contents as a paired snapshot.
pub fn snapshot() -> CredentialCache {
    CredentialCache::new(cached_token(), cached_user())
}

/// Persist a freshly issued session: token and user together.
pub fn save_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Refresh the persisted user record after a successful validation.
/// The token half is left untouched.
pub fn refresh_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            if let Ok(raw) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &raw);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Drop both entries. Called on logout and on credential rejection.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
