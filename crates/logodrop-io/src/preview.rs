//! Immediate client-side preview of a selected file.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target)
//! for the event-loop yield.

use logodrop_core::{FileCandidate, data_uri};

/// Render `file` as a `data:` URI for the preview surface.
///
/// Yields to the browser event loop once before encoding so the
/// "uploading" notification can paint first. Never touches the network;
/// single-shot and not cancellable.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn render_local_preview(file: &FileCandidate) -> String {
    gloo_timers::future::TimeoutFuture::new(0).await;
    data_uri(&file.mime_type, &file.bytes)
}
