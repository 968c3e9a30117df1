use super::*;

#[test]
fn storage_keys_are_prefixed_and_distinct() {
    assert!(TOKEN_KEY.starts_with("decora_"));
    assert!(USER_KEY.starts_with("decora_"));
    assert_ne!(TOKEN_KEY, USER_KEY);
}

#[test]
fn snapshot_outside_a_browser_is_empty() {
    // Native builds have no localStorage; the cache must read as empty
    // rather than erroring so SSR and tests stay inert.
    let cache = snapshot();
    assert!(cache.is_empty());
}

#[test]
fn cached_reads_outside_a_browser_are_none() {
    assert!(cached_token().is_none());
    assert!(cached_user().is_none());
}
