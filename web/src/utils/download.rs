/// How long the object URL outlives the click that starts the download.
#[cfg(feature = "hydrate")]
const OBJECT_URL_LIFETIME: std::time::Duration = std::time::Duration::from_secs(1);

/// Saves `bytes` as a file download in the browser.
#[cfg(feature = "hydrate")]
pub fn save_bytes(file_name: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

    let js_err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_string())?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "could not create download link".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    leptos::prelude::set_timeout(
        move || {
            if let Err(e) = Url::revoke_object_url(&url) {
                tracing::warn!(error = ?e, "could not revoke download url");
            }
        },
        OBJECT_URL_LIFETIME,
    );
    tracing::debug!(file_name, size = bytes.len(), "download started");
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
pub fn save_bytes(file_name: &str, _mime: &str, _bytes: &[u8]) -> Result<(), String> {
    Err(format!("{} can only be downloaded in the browser", file_name))
}
