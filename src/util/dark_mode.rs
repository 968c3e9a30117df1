//! Dark mode preference: storage-backed with a system-preference fallback,
//! applied as a `.dark-mode` class on the `<html>` element.

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "decora_dark";

/// Resolve the preference at startup: an explicit stored choice wins,
/// otherwise the system's `prefers-color-scheme`.
pub fn initial() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(stored)) = storage.get_item(STORAGE_KEY) {
                return stored == "true";
            }
        }
        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the mode to the document and persist the choice.
pub fn set(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = el.class_list();
            if enabled {
                let _ = classes.add_1("dark-mode");
            } else {
                let _ = classes.remove_1("dark-mode");
            }
        }
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, if enabled { "true" } else { "false" });
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
