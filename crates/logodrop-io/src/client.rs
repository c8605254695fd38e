//! HTTP upload client.
//!
//! [`UploadClient`] posts the selected file as a multipart form and
//! normalizes whatever comes back into an [`UploadResult`]. It never
//! returns an error: transport failures, non-2xx statuses, and
//! undecodable bodies all become [`UploadResult::Failure`], so the
//! widget has a single result shape to branch on.
//!
//! `reqwest` uses `fetch` on `wasm32-unknown-unknown` and hyper
//! elsewhere, so the same client runs in the browser and in native
//! tests against a mock server.

use logodrop_core::{FileCandidate, UploadConfig, UploadResult, normalize_url};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use wasm_bindgen::JsValue;

/// Reasons an upload attempt can fail.
///
/// Only used inside the client; [`UploadClient::upload`] flattens these
/// into [`UploadResult::Failure`] using their `Display` text.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request could not be built or sent, or the body could not be
    /// read.
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server rejected the upload: {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not the expected JSON object.
    #[error("invalid upload response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A browser API call returned an error or a required object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Expected body of a successful upload.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

/// Submits files to the upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadClient {
    http: reqwest::Client,
    base_url: String,
    config: UploadConfig,
}

impl UploadClient {
    /// Create a client that resolves `config.endpoint` against `base_url`
    /// (scheme and authority, e.g. `https://example.com`).
    #[must_use]
    pub fn new(base_url: impl Into<String>, config: UploadConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            config,
        }
    }

    /// Create a client for the page the widget is embedded in.
    ///
    /// The endpoint is resolved against `window.location.origin`. On
    /// non-wasm targets there is no page, so the endpoint stays relative
    /// and every upload reports the resulting transport failure.
    #[must_use]
    pub fn for_current_page(config: UploadConfig) -> Self {
        let origin = page_origin().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "page origin unavailable; uploads will fail");
            String::new()
        });
        Self::new(origin, config)
    }

    /// Absolute URL the client posts to.
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.config.endpoint
        )
    }

    /// Upload `file` and normalize the outcome.
    ///
    /// On success the returned URL has the configured API prefix
    /// stripped (see [`normalize_url`]).
    pub async fn upload(&self, file: &FileCandidate) -> UploadResult {
        match self.try_upload(file).await {
            Ok(url) => {
                tracing::debug!(file = %file.name, %url, "upload succeeded");
                UploadResult::Success { url }
            }
            Err(e) => {
                tracing::warn!(file = %file.name, error = %e, "upload failed");
                UploadResult::failure(e.to_string())
            }
        }
    }

    async fn try_upload(&self, file: &FileCandidate) -> Result<String, UploadError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        if !file.mime_type.is_empty() {
            part = part.mime_str(&file.mime_type)?;
        }
        let form = Form::new().part(self.config.field_name.clone(), part);

        let response = self
            .http
            .post(self.endpoint_url())
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(UploadError::Status(status));
        }

        let body = response.text().await?;
        let parsed: UploadResponse = serde_json::from_str(&body)?;
        Ok(normalize_url(&parsed.url, &self.config.api_prefix))
    }
}

/// `window.location.origin` of the current page.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Result<String, UploadError> {
    let window = web_sys::window().ok_or_else(|| UploadError::JsError("no global window".into()))?;
    Ok(window.location().origin()?)
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Result<String, UploadError> {
    Err(UploadError::JsError("no browser page on this target".into()))
}
