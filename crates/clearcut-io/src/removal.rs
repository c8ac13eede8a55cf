//! Binding to the external background-removal collaborator.
//!
//! The segmentation model itself lives in an imported third-party ESM
//! module (`@imgly/background-removal`, re-exported by
//! `js/removal.js`); this module only adapts its promise into a typed
//! async contract: image `Blob` in, transparent-background `Blob` or
//! error out.  Error payloads are opaque — callers log them to the
//! console and show a generic message.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/removal.js")]
extern "C" {
    #[wasm_bindgen(js_name = removeBackground, catch)]
    async fn remove_background_js(image: &web_sys::Blob) -> Result<JsValue, JsValue>;
}

/// Errors from the removal collaborator.
#[derive(Debug, thiserror::Error)]
pub enum RemovalError {
    /// The collaborator's promise rejected.  The payload is diagnostic
    /// only and is never surfaced to the user.
    #[error("background removal failed: {0}")]
    Collaborator(String),

    /// The collaborator resolved with something other than a `Blob`.
    #[error("collaborator returned a non-Blob value")]
    NotABlob,
}

/// Remove the background from an image.
///
/// Hands the image `Blob` to the collaborator and resolves with a new
/// `Blob` whose background is transparent.  The first call also
/// fetches and compiles the model, which can take a while — callers
/// should show a loading state before awaiting.
///
/// # Errors
///
/// Returns [`RemovalError::Collaborator`] if the collaborator rejects
/// for any reason (unsupported format, decode failure, model fetch
/// failure, resource exhaustion), or [`RemovalError::NotABlob`] if it
/// resolves with an unexpected value.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn remove_background(image: &web_sys::Blob) -> Result<web_sys::Blob, RemovalError> {
    let value = remove_background_js(image)
        .await
        .map_err(|e| RemovalError::Collaborator(format!("{e:?}")))?;
    value
        .dyn_into::<web_sys::Blob>()
        .map_err(|_| RemovalError::NotABlob)
}
