//! Saving binary responses in the browser.
//!
//! A blob is wrapped in a temporary object URL, clicked through a detached
//! anchor with a `download` name, then revoked.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Fallback name when a manual has no stored file name.
pub const DEFAULT_MANUAL_NAME: &str = "manual.pdf";

/// Name to save a download under. Path separators are not allowed.
pub fn download_name(file_name: &str) -> String {
    let base = file_name.rsplit(['/', '\\']).next().unwrap_or_default().trim();
    if base.is_empty() {
        return DEFAULT_MANUAL_NAME.to_owned();
    }
    base.to_owned()
}

#[cfg(feature = "hydrate")]
pub use browser::{blob_from_bytes, save_bytes};

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::{JsCast as _, JsValue};

    /// Copy `bytes` into a `Blob` of type `mime_type`.
    pub fn blob_from_bytes(bytes: &[u8], mime_type: &str) -> Result<web_sys::Blob, JsValue> {
        let array = js_sys::Uint8Array::from(bytes);
        let parts = js_sys::Array::of1(&array);
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime_type);
        web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
    }

    /// Trigger a browser download of `bytes` named `file_name`.
    pub fn save_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), JsValue> {
        let blob = blob_from_bytes(bytes, mime_type)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;
        let result = click_link(&url, &super::download_name(file_name));
        let _ = web_sys::Url::revoke_object_url(&url);
        result
    }

    fn click_link(url: &str, file_name: &str) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;
        let anchor = document
            .create_element("a")?
            .dyn_into::<web_sys::HtmlAnchorElement>()?;
        anchor.set_href(url);
        anchor.set_download(file_name);
        body.append_child(&anchor)?;
        anchor.click();
        body.remove_child(&anchor)?;
        Ok(())
    }
}
