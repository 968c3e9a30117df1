//! Profile/service image picker: file input, client-side size cap, base64
//! upload through the backend's image endpoint.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;

use crate::components::toast;
use crate::state::toast::ToastState;

/// Client-side upload cap; the backend enforces its own limit too.
const MAX_IMAGE_BYTES: f64 = 5.0 * 1024.0 * 1024.0;

pub fn image_too_large(size_bytes: f64) -> bool {
    size_bytes > MAX_IMAGE_BYTES
}

/// File input that uploads the selected image and writes the hosted URL
/// into `value`. Shows a preview once a URL is set.
#[component]
pub fn ImageUploadField(value: RwSignal<String>, uploading: RwSignal<bool>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            start_upload(&ev, value, uploading, toasts);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, toasts);
        }
    };

    view! {
        <div class="image-upload">
            <input
                class="image-upload__input"
                type="file"
                accept="image/*"
                prop:disabled=move || uploading.get()
                on:change=on_change
            />
            <Show when=move || uploading.get()>
                <span class="loading__spinner" aria-label="Uploading"></span>
            </Show>
            <Show when=move || !value.get().is_empty()>
                <img class="image-upload__preview" src=move || value.get() alt="Preview"/>
            </Show>
        </div>
    }
}

/// Read the selected file as a data URL and hand it to the upload endpoint.
#[cfg(feature = "hydrate")]
fn start_upload(
    ev: &leptos::ev::Event,
    value: RwSignal<String>,
    uploading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::Closure;

    let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    if image_too_large(file.size()) {
        toast::error(toasts, "Image size should be less than 5MB");
        return;
    }

    let Ok(reader) = web_sys::FileReader::new() else {
        toast::error(toasts, "Failed to read image");
        return;
    };
    uploading.set(true);

    let reader_handle = reader.clone();
    let onloadend: Closure<dyn FnMut()> = Closure::new(move || {
        let data_url = reader_handle.result().ok().and_then(|v| v.as_string());
        let Some(data_url) = data_url else {
            uploading.set(false);
            toast::error(toasts, "Failed to read image");
            return;
        };
        leptos::task::spawn_local(async move {
            match crate::net::api::upload_image(&data_url).await {
                Ok(uploaded) => {
                    value.set(uploaded.url);
                    toast::success(toasts, "Image uploaded successfully!");
                }
                Err(_) => toast::error(toasts, "Failed to upload image"),
            }
            uploading.set(false);
        });
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    // One-shot callback; the reader owns no Rust state worth reclaiming.
    onloadend.forget();

    if reader.read_as_data_url(&file).is_err() {
        uploading.set(false);
        toast::error(toasts, "Failed to read image");
    }
}
