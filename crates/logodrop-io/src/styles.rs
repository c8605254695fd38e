//! One-time stylesheet installation.
//!
//! The widget's CSS is injected into `<head>` the first time a widget
//! mounts. The `<style>` element carries a fixed id, so repeated calls
//! (several widgets on one page, remounts) leave exactly one copy.

use wasm_bindgen::JsValue;

/// Id of the injected `<style>` element.
pub const STYLE_ELEMENT_ID: &str = "logodrop-styles";

/// Errors that can occur while installing the stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for StyleError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Install the widget stylesheet unless it is already present.
///
/// Returns `true` if this call inserted it.
///
/// # Errors
///
/// Returns [`StyleError::JsError`] if the window, document, or `<head>`
/// is unavailable, or if element creation fails.
pub fn ensure_installed() -> Result<bool, StyleError> {
    let window = web_sys::window().ok_or_else(|| StyleError::JsError("no global window".into()))?;
    let document = window
        .document()
        .ok_or_else(|| StyleError::JsError("no document".into()))?;
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(false);
    }

    let head = document
        .head()
        .ok_or_else(|| StyleError::JsError("no document head".into()))?;
    let style = document.create_element("style")?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(true)
}

const STYLESHEET: &str = r"
.logodrop-notifications {
    position: fixed;
    top: 20px;
    right: 20px;
    z-index: 9999;
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.logodrop-notification {
    padding: 10px 15px;
    border-radius: 4px;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
    display: flex;
    align-items: center;
    gap: 8px;
    max-width: 300px;
    transition: opacity 0.5s;
    animation: logodrop-slide-in 0.3s ease-out;
}

.logodrop-notification.info {
    background-color: #1a1a29;
    border-left: 4px solid #3f87f5;
    color: #64b5f6;
}

.logodrop-notification.success {
    background-color: #1a291a;
    border-left: 4px solid #52c41a;
    color: #6bbd6e;
}

.logodrop-notification.error {
    background-color: #291a1a;
    border-left: 4px solid #ff4d4f;
    color: #e57373;
}

.logodrop-notification.fading {
    opacity: 0;
}

.logodrop-uploader {
    margin-top: 10px;
    display: flex;
    flex-direction: column;
    gap: 10px;
}

.logodrop-tip {
    font-size: 13px;
    opacity: 0.8;
}

.logodrop-preview {
    width: 100%;
    min-height: 40px;
    border: 1px dashed #2a2a2a;
    border-radius: 4px;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 8px;
}

.logodrop-preview img {
    max-height: 100px;
    max-width: 100%;
    border-radius: 4px;
}

.logodrop-actions {
    display: flex;
    gap: 8px;
}

.logodrop-button {
    flex: 1;
    padding: 6px 12px;
    border-radius: 4px;
    cursor: pointer;
    font-size: 14px;
    text-align: center;
}

.logodrop-hidden {
    display: none;
}

.logodrop-hint {
    padding: 8px 12px;
    border: 1px solid currentColor;
    border-radius: 4px;
    font-size: 14px;
}

@keyframes logodrop-slide-in {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
";
