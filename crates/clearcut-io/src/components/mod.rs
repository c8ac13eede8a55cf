//! Dioxus UI components for clearcut.
//!
//! Provides the drag-and-drop upload zone with file picker, and the
//! before/after result panels with the download button.

mod panels;
mod upload;

pub use panels::ResultPanels;
pub use upload::FileUpload;
