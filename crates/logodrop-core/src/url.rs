//! Public URL normalization for upload responses.

/// Strip a server-internal routing prefix from an uploaded file's URL.
///
/// When `url` starts with `api_prefix` (e.g. `"/api/"`), that leading
/// prefix is replaced by a single `/`. Only the leading occurrence is
/// touched; URLs without the prefix, including absolute URLs that
/// contain it later on, pass through unchanged. An empty prefix disables
/// the rewrite.
#[must_use]
pub fn normalize_url(url: &str, api_prefix: &str) -> String {
    if api_prefix.is_empty() {
        return url.to_owned();
    }
    url.strip_prefix(api_prefix)
        .map_or_else(|| url.to_owned(), |rest| format!("/{rest}"))
}
