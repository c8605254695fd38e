//! Copy the bound field's URL via the browser Clipboard API.
//!
//! All functions require a browser environment (`wasm32-unknown-unknown`
//! target) and a user-gesture context (i.e., called from a click
//! handler).

use logodrop_core::{BoundField, NotificationKind, Notifier, copy_target};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// Shown after the URL lands on the clipboard.
pub const COPIED_MESSAGE: &str = "Image URL copied to clipboard";

/// Errors that can occur when accessing the clipboard.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// A browser API call returned an error or a required object was missing.
    #[error("clipboard API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Copy the field's current URL to the clipboard and report the outcome.
///
/// Does nothing when the field is blank. Success and failure are both
/// surfaced through `notifier`.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Clipboard is !Send
pub async fn copy_field_url(field: &impl BoundField, notifier: &impl Notifier) {
    let Some(url) = copy_target(field) else {
        return;
    };
    match write_text(&url).await {
        Ok(()) => notifier.notify(COPIED_MESSAGE, NotificationKind::Success),
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            notifier.notify(&format!("Copy failed: {e}"), NotificationKind::Error);
        }
    }
}

/// Copy `text` to the system clipboard.
///
/// Wraps [`navigator.clipboard.writeText()`][mdn].
///
/// # Errors
///
/// Returns [`ClipboardError::JsError`] if the browser window, navigator,
/// or clipboard object is unavailable, or if the write operation fails
/// (e.g., the page does not have clipboard-write permission).
///
/// [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/Clipboard/writeText
#[allow(clippy::future_not_send)] // WASM is single-threaded; Clipboard is !Send
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window =
        web_sys::window().ok_or_else(|| ClipboardError::JsError("no global window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
