//! Before/after preview panels with the download action.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdDownload;

use crate::blob::ImageHandle;
use crate::download;

/// Props for the [`ResultPanels`] component.
#[derive(Props, Clone)]
pub struct ResultPanelsProps {
    /// The original image, shown in the left panel when present.
    /// Wrapped in `Rc` so replacing a handle drops (and revokes) the
    /// old one exactly once.
    original: Option<Rc<ImageHandle>>,
    /// The processed image.  The right panel and its download button
    /// only render when this is set.
    processed: Option<Rc<ImageHandle>>,
}

impl PartialEq for ResultPanelsProps {
    fn eq(&self, other: &Self) -> bool {
        handles_eq(self.original.as_ref(), other.original.as_ref())
            && handles_eq(self.processed.as_ref(), other.processed.as_ref())
    }
}

fn handles_eq(a: Option<&Rc<ImageHandle>>, b: Option<&Rc<ImageHandle>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        (None, None) => true,
        _ => false,
    }
}

/// Side-by-side original and processed image panels.
///
/// Renders nothing until an original exists.  The processed panel
/// shows the result on a checkerboard backdrop (so transparency is
/// visible) together with a Download button that saves the image as
/// [`download::PROCESSED_FILENAME`].
#[component]
pub fn ResultPanels(props: ResultPanelsProps) -> Element {
    let mut download_error = use_signal(|| Option::<String>::None);

    let download_click = {
        let processed = props.processed.clone();
        move |_| {
            // Only rendered when a processed handle exists, so the
            // URL is always valid here.
            if let Some(ref handle) = processed {
                match download::trigger_download(handle.url(), download::PROCESSED_FILENAME) {
                    Ok(()) => download_error.set(None),
                    Err(e) => download_error.set(Some(format!("Download failed: {e}"))),
                }
            }
        }
    };

    if props.original.is_none() && props.processed.is_none() {
        return rsx! {};
    }

    rsx! {
        div { class: "mt-8 grid grid-cols-1 md:grid-cols-2 gap-8",
            if let Some(ref original) = props.original {
                div {
                    h2 { class: "text-lg font-semibold mb-2", "Original Image" }
                    img {
                        src: "{original.url()}",
                        alt: "Original",
                        class: "w-full rounded-lg shadow-lg",
                    }
                }
            }

            if let Some(ref processed) = props.processed {
                div {
                    div { class: "flex justify-between items-center mb-2",
                        h2 { class: "text-lg font-semibold", "Processed Image" }
                        button {
                            class: "flex items-center gap-2 px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700 cursor-pointer",
                            onclick: download_click,
                            Icon {
                                icon: LdDownload,
                                width: 20,
                                height: 20,
                            }
                            "Download"
                        }
                    }

                    if let Some(ref err) = download_error() {
                        p { class: "text-red-600 text-sm mb-2", "{err}" }
                    }

                    img {
                        src: "{processed.url()}",
                        alt: "Processed",
                        class: "w-full rounded-lg shadow-lg checkerboard",
                    }
                }
            }
        }
    }
}
