//! Build-time configuration.
//!
//! The deploy pipeline bakes these in as environment variables at compile
//! time; nothing here is read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the backend API. Empty means same-origin relative paths.
pub fn api_base() -> &'static str {
    option_env!("DECORA_API_URL").unwrap_or("")
}

/// Identity-provider project id, surfaced to the host page's SDK loader.
pub fn identity_project() -> Option<&'static str> {
    option_env!("DECORA_IDENTITY_PROJECT")
}

/// Payment processor publishable key for the hosted checkout.
pub fn payment_publishable_key() -> Option<&'static str> {
    option_env!("DECORA_PAYMENT_PUBLIC_KEY")
}

/// Join the configured base with an absolute API path.
pub fn api_url(path: &str) -> String {
    join_base(api_base(), path)
}

fn join_base(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    format!("{base}{path}")
}
