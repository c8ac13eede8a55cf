//! Service worker registration.
//!
//! The caching policy itself (stale-while-revalidate for the large
//! model .wasm assets) is configuration inside the worker script; this
//! module only registers that script with the browser.  The script is
//! bundled under `/assets/`, so registration widens the scope to `"/"`
//! to control the page at the site root — the host must send a
//! `Service-Worker-Allowed: /` header for the script.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Scope the service worker is registered under.  Root scope, so
/// fetches from the page at `/` (including the collaborator's model
/// downloads) pass through the worker's routes.
pub const ROOT_SCOPE: &str = "/";

/// Errors that can occur when registering the service worker.
#[derive(Debug, thiserror::Error)]
pub enum PwaError {
    /// A browser API call returned an error or a required object was
    /// missing.
    #[error("service worker API error: {0}")]
    JsError(String),
}

impl From<JsValue> for PwaError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Register the service worker at `script_url` with [`ROOT_SCOPE`].
///
/// Resolves once the browser accepts the registration.  Failures are
/// non-fatal for the app — the caller should log and continue, the
/// page just runs uncached.
///
/// # Errors
///
/// Returns [`PwaError::JsError`] if the window or navigator is
/// unavailable, or if the registration is rejected (e.g., the script
/// 404s, or the host does not allow the widened scope).
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn register_service_worker(script_url: &str) -> Result<(), PwaError> {
    let window = web_sys::window().ok_or_else(|| PwaError::JsError("no global window".into()))?;
    let container = window.navigator().service_worker();

    let options = web_sys::RegistrationOptions::new();
    options.set_scope(ROOT_SCOPE);

    let promise = container.register_with_options(script_url, &options);
    JsFuture::from(promise).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_is_the_site_root() {
        // The worker must control the page at "/", not just /assets/,
        // or its routes never intercept the model fetches.
        assert_eq!(ROOT_SCOPE, "/");
    }
}
