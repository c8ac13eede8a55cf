//! Displayable image references backed by Blob object URLs.
//!
//! An [`ImageHandle`] wraps the object URL for an image `Blob` so it
//! can be used as an `<img src>`.  The handle owns the URL and revokes
//! it on drop, so reassigning a signal or tearing down a component
//! releases the previous reference automatically.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur when creating a Blob or its object URL.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for BlobError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create a `Blob` with the given media type from raw bytes.
///
/// # Errors
///
/// Returns [`BlobError::JsError`] if `Blob` construction fails.
pub fn blob_from_bytes(bytes: &[u8], media_type: &str) -> Result<web_sys::Blob, BlobError> {
    let uint8_array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::new();
    parts.push(&uint8_array);

    let opts = BlobPropertyBag::new();
    opts.set_type(media_type);

    Ok(web_sys::Blob::new_with_u8_array_sequence_and_options(
        &parts, &opts,
    )?)
}

/// An owned object URL for an image `Blob`.
///
/// The URL stays valid for the lifetime of the handle and is revoked
/// when the handle is dropped.
#[derive(Debug)]
pub struct ImageHandle {
    url: String,
}

impl ImageHandle {
    /// Wrap an existing `Blob` in a fresh object URL.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if `URL.createObjectURL` fails.
    pub fn from_blob(blob: &web_sys::Blob) -> Result<Self, BlobError> {
        let url = web_sys::Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    /// Create a `Blob` from raw bytes and wrap it in an object URL.
    ///
    /// # Errors
    ///
    /// Returns [`BlobError::JsError`] if `Blob` creation or
    /// `URL.createObjectURL` fails.
    pub fn from_bytes(bytes: &[u8], media_type: &str) -> Result<Self, BlobError> {
        Self::from_blob(&blob_from_bytes(bytes, media_type)?)
    }

    /// The object URL, usable as an `<img src>` or download href.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl PartialEq for ImageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Drop for ImageHandle {
    fn drop(&mut self) {
        // Best-effort: the URL may already be gone with the document.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}
