//! Bridge to the host page's identity-provider SDK.
//!
//! The page that loads this bundle also loads the vendor identity SDK and
//! exposes a small `window.identityBridge` object: `signInPopup()`,
//! `idToken(force)`, `signOut()` (all promise-returning), and
//! `onSessionChanged(cb)` which returns an unsubscribe function. Payloads
//! cross the boundary as JSON strings — `{"email", "displayName",
//! "photoUrl"}` for a signed-in principal, `null` for signed-out — and are
//! parsed here with serde.
//!
//! Browser-only; every entry point is inert on the server.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use crate::state::session::{ProviderEvent, ProviderUser};

/// Parse a session-change payload from the bridge.
///
/// Anything that is not a well-formed signed-in principal — `null`, a
/// missing payload, malformed JSON — reads as signed-out, so a broken
/// bridge fails closed instead of wedging the session.
pub fn parse_session_payload(payload: Option<&str>) -> ProviderEvent {
    let Some(raw) = payload else {
        return ProviderEvent::SignedOut;
    };
    match serde_json::from_str::<Option<ProviderUser>>(raw) {
        Ok(Some(user)) => ProviderEvent::SignedIn(user),
        Ok(None) => ProviderEvent::SignedOut,
        Err(_) => ProviderEvent::SignedOut,
    }
}

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(catch, js_namespace = ["window", "identityBridge"], js_name = signInPopup)]
        pub fn sign_in_popup() -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["window", "identityBridge"], js_name = idToken)]
        pub fn id_token(force: bool) -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["window", "identityBridge"], js_name = signOut)]
        pub fn sign_out() -> Result<js_sys::Promise, JsValue>;

        #[wasm_bindgen(catch, js_namespace = ["window", "identityBridge"], js_name = onSessionChanged)]
        pub fn on_session_changed(cb: &js_sys::Function) -> Result<js_sys::Function, JsValue>;
    }
}

#[cfg(feature = "hydrate")]
fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &wasm_bindgen::JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "identity provider unavailable".to_owned())
}

#[cfg(feature = "hydrate")]
async fn resolve(promise: Result<js_sys::Promise, wasm_bindgen::JsValue>) -> Result<wasm_bindgen::JsValue, String> {
    let promise = promise.map_err(|e| js_error_message(&e))?;
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| js_error_message(&e))
}

/// Open the provider's interactive sign-in popup.
///
/// # Errors
///
/// Returns the provider's message when the popup is cancelled or fails.
#[cfg(feature = "hydrate")]
pub async fn sign_in_popup() -> Result<ProviderUser, String> {
    let value = resolve(js::sign_in_popup()).await?;
    let raw = value.as_string().ok_or_else(|| "identity provider unavailable".to_owned())?;
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

/// Request an ID token for the current principal; `force` bypasses the
/// provider's token cache.
#[cfg(feature = "hydrate")]
pub async fn id_token(force: bool) -> Result<String, String> {
    let value = resolve(js::id_token(force)).await?;
    value.as_string().ok_or_else(|| "identity provider unavailable".to_owned())
}

/// Sign out of the provider session. Best-effort; callers log failures.
#[cfg(feature = "hydrate")]
pub async fn sign_out() -> Result<(), String> {
    resolve(js::sign_out()).await.map(|_| ())
}

/// Live session-change subscription. Dropping without `cancel` leaks the
/// provider-side listener, so the owner must cancel on scope cleanup.
#[cfg(feature = "hydrate")]
pub struct Subscription {
    unsubscribe: js_sys::Function,
    _callback: wasm_bindgen::prelude::Closure<dyn FnMut(wasm_bindgen::JsValue)>,
}

#[cfg(feature = "hydrate")]
impl Subscription {
    pub fn cancel(self) {
        let _ = self.unsubscribe.call0(&wasm_bindgen::JsValue::NULL);
    }
}

/// Subscribe to provider session changes. The callback fires once with the
/// current state and again on every sign-in/sign-out.
///
/// Returns `None` when the bridge is not present on the page.
#[cfg(feature = "hydrate")]
pub fn subscribe(mut on_event: impl FnMut(ProviderEvent) + 'static) -> Option<Subscription> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let callback: Closure<dyn FnMut(wasm_bindgen::JsValue)> = Closure::new(move |value: wasm_bindgen::JsValue| {
        let payload = value.as_string();
        on_event(parse_session_payload(payload.as_deref()));
    });
    match js::on_session_changed(callback.as_ref().unchecked_ref()) {
        Ok(unsubscribe) => Some(Subscription { unsubscribe, _callback: callback }),
        Err(_) => None,
    }
}
