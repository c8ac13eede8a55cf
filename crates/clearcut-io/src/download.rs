//! File download via a temporary anchor element.
//!
//! Dioxus has no built-in file download API.  This module triggers
//! downloads by programmatically clicking a temporary
//! `<a download="filename">` element pointing at an existing object
//! URL (the [`ImageHandle`](crate::blob::ImageHandle) already owns
//! one, so no new Blob is created here).
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;

/// Filename used for every processed-image download.
///
/// Fixed regardless of the input filename — the collaborator always
/// produces a PNG with a transparent background.
pub const PROCESSED_FILENAME: &str = "processed-image.png";

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Trigger a file download in the browser.
///
/// Creates a temporary `<a>` element with `href` set to `url` and
/// `download` set to `filename`, appends it to the body, clicks it,
/// and removes it.  The URL is not revoked — it is owned by the
/// caller's handle.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if any browser API call fails
/// (e.g., element creation or DOM insertion).
pub fn trigger_download(url: &str, filename: &str) -> Result<(), DownloadError> {
    let window =
        web_sys::window().ok_or_else(|| DownloadError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("failed to cast element: {e:?}")))?;

    anchor.set_href(url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // Best-effort cleanup — the download is already initiated.
    let _ = body.remove_child(&anchor);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processed_filename_is_fixed() {
        // The download name is a constant, independent of the input
        // file's name or format.
        assert_eq!(PROCESSED_FILENAME, "processed-image.png");
    }
}
