//! File upload component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

use crate::media;

/// Props for the [`FileUpload`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FileUploadProps {
    /// Called with the raw file bytes and declared media type after an
    /// accepted selection.
    on_select: EventHandler<(Vec<u8>, &'static str)>,
}

/// A drag-and-drop zone with a hidden file input behind a clickable
/// label.
///
/// Accepts PNG, JPEG, and WebP images.  Both the drag-and-drop and
/// file-picker paths run the same media-type gate: non-image files are
/// silently ignored and never start processing.  Accepted files are
/// read and forwarded via `on_select` with `(bytes, media_type)`.
#[component]
pub fn FileUpload(props: FileUploadProps) -> Element {
    let mut dragging = use_signal(|| false);
    let mut read_error = use_signal(|| Option::<String>::None);
    let on_select = props.on_select;

    // Validate, read, and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths so the gate/read/callback logic lives in
    // one place and both paths apply the same media-type check.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let Some(media_type) = media::image_media_type_for(&file.name()) else {
                // Not an image — ignore without touching the
                // processing status.
                return;
            };
            match file.read_bytes().await {
                Ok(bytes) => {
                    read_error.set(None);
                    on_select.call((bytes.to_vec(), media_type));
                }
                Err(e) => {
                    read_error.set(Some(format!("Failed to read file: {e}")));
                }
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let border_class = if dragging() {
        "border-blue-500 bg-blue-50"
    } else {
        "border-gray-300"
    };

    rsx! {
        div {
            class: "border-2 border-dashed rounded-lg p-8 text-center transition-colors {border_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            if let Some(ref err) = read_error() {
                p { class: "text-red-600 mb-2", "{err}" }
            }

            input {
                r#type: "file",
                accept: "image/*",
                class: "hidden",
                id: "file-input",
                onchange: handle_files,
            }
            label {
                r#for: "file-input",
                class: "cursor-pointer flex flex-col items-center",
                Icon {
                    icon: LdUpload,
                    width: 48,
                    height: 48,
                    class: "text-gray-400 mb-4",
                }
                p { class: "text-lg mb-2",
                    "Drag and drop an image here, or click to select"
                }
                p { class: "text-sm text-gray-500", "Supports JPG, PNG, WebP, GIF, BMP" }
            }
        }
    }
}
