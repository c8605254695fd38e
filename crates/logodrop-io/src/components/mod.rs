//! Dioxus UI components for logodrop.
//!
//! Provides the upload widget and the toast notification area it
//! reports to.

mod notifications;
mod uploader;

pub use notifications::{NotificationArea, ToastNotifier};
pub use uploader::LogoUploader;
