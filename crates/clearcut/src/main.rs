use std::rc::Rc;

use clearcut_io::blob::{self, ImageHandle};
use clearcut_io::session::SessionState;
use clearcut_io::{FileUpload, ResultPanels, pwa, removal};
use dioxus::prelude::*;
use wasm_bindgen::JsValue;

// Bundled without hash suffixes: the manifest references the icon by
// path, and the service worker URL must stay stable across deploys or
// the browser treats every deploy as a brand-new worker.
const MANIFEST: Asset = asset!(
    "/assets/manifest.json",
    AssetOptions::builder().with_hash_suffix(false)
);
const APP_ICON: Asset = asset!(
    "/assets/icon.svg",
    AssetOptions::builder().with_hash_suffix(false)
);
const SERVICE_WORKER: Asset = asset!(
    "/assets/sw.js",
    AssetOptions::builder().with_hash_suffix(false)
);

fn main() {
    dioxus::launch(app);
}

/// Root application component.
///
/// Owns the whole removal session in one [`SessionState`] signal and
/// wires together the upload zone, loading spinner, error banner, and
/// before/after panels.  The async removal runs through the
/// submission-token protocol so a stale in-flight result never
/// overwrites a newer one.
fn app() -> Element {
    let mut session = use_signal(SessionState::<Rc<ImageHandle>>::new);

    // Register the service worker once at startup, at root scope so
    // its routes control the page at "/" (the worker script lives
    // under /assets/; hosting must send `Service-Worker-Allowed: /`
    // for it).  Failure just means the page runs uncached.
    use_future(move || async move {
        if let Err(e) = pwa::register_service_worker(&SERVICE_WORKER.to_string()).await {
            web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
        }
    });

    // --- File selection handler (both drag-drop and picker) ---
    let on_select = move |(bytes, media_type): (Vec<u8>, &'static str)| {
        // One Blob serves both the original preview and the
        // collaborator call.
        let source_blob = match blob::blob_from_bytes(&bytes, media_type) {
            Ok(b) => b,
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                return;
            }
        };
        let source = match ImageHandle::from_blob(&source_blob) {
            Ok(handle) => Rc::new(handle),
            Err(e) => {
                web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                return;
            }
        };

        // Loading becomes visible synchronously, before the
        // collaborator runs.  `submit` also clears the previous
        // processed handle, revoking its object URL on drop.
        let token = session.write().submit(source);

        spawn(async move {
            // Yield to the browser event loop so the spinner paints
            // before the collaborator starts fetching/compiling the
            // model.
            gloo_timers::future::TimeoutFuture::new(0).await;

            let outcome = removal::remove_background(&source_blob).await;

            // A newer submission supersedes this one — discard the
            // stale result without touching state.
            if !session.peek().is_current(token) {
                return;
            }

            match outcome {
                Ok(result_blob) => match ImageHandle::from_blob(&result_blob) {
                    Ok(handle) => {
                        session.write().complete(token, Rc::new(handle));
                    }
                    Err(e) => {
                        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                        session.write().fail(token);
                    }
                },
                Err(e) => {
                    // Diagnostics only — the user sees the fixed
                    // message from the session state.
                    web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
                    session.write().fail(token);
                }
            }
        });
    };

    let loading = session.read().status().is_loading();
    let error_message = session.read().status().error_message().map(ToOwned::to_owned);

    // --- Layout ---
    rsx! {
        // Tailwind utilities via the Play CDN — this repo carries no
        // node toolchain.  Custom bits (checkerboard backdrop) live in
        // assets/main.css.
        script { src: "https://cdn.tailwindcss.com" }
        style { dangerous_inner_html: include_str!("../assets/main.css") }

        // Installable-app metadata.  The caching policy
        // (stale-while-revalidate for the large model .wasm assets)
        // is configuration in assets/sw.js.
        link { rel: "manifest", href: MANIFEST }
        link { rel: "icon", href: APP_ICON }

        div { class: "min-h-screen p-8",
            div { class: "max-w-4xl mx-auto",
                h1 { class: "text-4xl font-bold text-center mb-8", "clearcut" }
                p { class: "text-center text-gray-500 mb-8",
                    "Remove image backgrounds entirely in your browser"
                }

                FileUpload { on_select: on_select }

                if let Some(ref message) = error_message {
                    div { class: "mt-4 p-4 bg-red-100 text-red-700 rounded",
                        "{message}"
                    }
                }

                if loading {
                    div { class: "mt-8 text-center",
                        div { class: "inline-block animate-spin rounded-full h-8 w-8 border-4 border-gray-300 border-t-blue-600" }
                        p { class: "mt-2", "Processing image..." }
                    }
                }

                ResultPanels {
                    original: session.read().source().cloned(),
                    processed: session.read().processed().cloned(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn service_worker_config_pins_the_wasm_cache_policy() {
        // The .wasm model assets are served stale-while-revalidate
        // from a bounded cache: 10 entries, 30 days.
        let sw = include_str!("../assets/sw.js");
        assert!(sw.contains("StaleWhileRevalidate"));
        assert!(sw.contains("wasm-cache"));
        assert!(sw.contains("maxEntries: 10"));
        assert!(sw.contains("30 * 24 * 60 * 60"));
    }

    #[test]
    fn manifest_declares_installable_metadata() {
        let manifest = include_str!("../assets/manifest.json");
        assert!(manifest.contains("\"name\": \"clearcut\""));
        assert!(manifest.contains("\"theme_color\""));
        // The icon path must match where the un-hashed asset lands.
        assert!(manifest.contains("/assets/icon.svg"));
    }
}
