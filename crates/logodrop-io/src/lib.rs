//! logodrop-io: Browser I/O and Dioxus component library.
//!
//! Handles the multipart upload request, local previews, clipboard
//! access, and stylesheet setup, and provides the upload widget and
//! notification components for host pages.

pub mod client;
pub mod clipboard;
pub mod components;
pub mod field;
pub mod preview;
pub mod styles;

pub use client::{UploadClient, UploadError};
pub use components::{LogoUploader, NotificationArea, ToastNotifier};
pub use field::SignalField;
