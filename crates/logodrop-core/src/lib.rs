//! logodrop-core: Pure upload-widget logic (sans-IO).
//!
//! Validates selected files, models the preview and notification
//! state, normalizes upload responses, and reconciles upload results
//! with the host form field through [`UploadController`].
//!
//! This crate has **no I/O dependencies** -- it never reads files or
//! touches the network. All browser and HTTP interaction lives in
//! `logodrop-io`.

pub mod controller;
pub mod field;
pub mod notify;
pub mod policy;
pub mod preview;
pub mod types;
pub mod url;

pub use controller::{Phase, UploadController, UploadOutcome, UploadTicket};
pub use field::{BoundField, copy_target};
pub use notify::{
    Notification, NotificationId, NotificationKind, NotificationList, NotificationPhase,
    NotificationTimings, Notifier,
};
pub use policy::{ValidationError, ValidationPolicy};
pub use preview::{PreviewState, data_uri};
pub use types::{FileCandidate, UploadConfig, UploadResult, WidgetConfig};
pub use url::normalize_url;
