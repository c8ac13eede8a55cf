//! clearcut-io: Browser I/O and Dioxus component library.
//!
//! Handles file selection, Blob URL lifetimes, the background-removal
//! collaborator binding, file downloads, and provides the UI
//! components for the clearcut web application.

pub mod blob;
pub mod components;
pub mod download;
pub mod media;
pub mod pwa;
pub mod removal;
pub mod session;

pub use blob::ImageHandle;
pub use components::{FileUpload, ResultPanels};
pub use session::{ProcessingStatus, SessionState};
