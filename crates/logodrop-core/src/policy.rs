//! Client-side validation applied before any network call.

use serde::{Deserialize, Serialize};

use crate::types::FileCandidate;

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;

/// Size and type constraints for selected files.
///
/// The default accepts images up to 1 MiB. The type prefix is checked
/// against the file's declared MIME type, not sniffed from its contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPolicy {
    /// Largest accepted file, inclusive.
    pub max_bytes: u64,
    /// Required prefix of the declared MIME type.
    pub allowed_type_prefix: String,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            max_bytes: MIB,
            allowed_type_prefix: String::from("image/"),
        }
    }
}

/// Why a file was rejected before upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The file is larger than [`ValidationPolicy::max_bytes`].
    #[error("image is {size} bytes, which exceeds the {limit} limit; choose a smaller image")]
    TooLarge {
        /// Actual size in bytes.
        size: u64,
        /// Display form of the limit, e.g. `"1 MB"`.
        limit: String,
    },

    /// The declared MIME type does not match the allowed prefix.
    #[error("unsupported file type {mime:?}; choose an image file")]
    UnsupportedType {
        /// The declared MIME type (possibly empty).
        mime: String,
    },
}

impl ValidationPolicy {
    /// Check a candidate against this policy.
    ///
    /// Size is checked first, so an oversize file of the wrong type
    /// reports [`ValidationError::TooLarge`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TooLarge`] when `file.size > max_bytes`
    /// and [`ValidationError::UnsupportedType`] when the MIME type does not
    /// start with `allowed_type_prefix`.
    pub fn validate(&self, file: &FileCandidate) -> Result<(), ValidationError> {
        if file.size > self.max_bytes {
            return Err(ValidationError::TooLarge {
                size: file.size,
                limit: self.limit_label(),
            });
        }
        if !file
            .mime_type
            .to_ascii_lowercase()
            .starts_with(&self.allowed_type_prefix.to_ascii_lowercase())
        {
            return Err(ValidationError::UnsupportedType {
                mime: file.mime_type.clone(),
            });
        }
        Ok(())
    }

    /// Short display label for the size limit (`"1 MB"`, `"512 KB"`).
    #[must_use]
    pub fn limit_label(&self) -> String {
        let bytes = self.max_bytes;
        if bytes >= MIB && bytes % MIB == 0 {
            format!("{} MB", bytes / MIB)
        } else if bytes >= KIB && bytes % KIB == 0 {
            format!("{} KB", bytes / KIB)
        } else {
            format!("{bytes} bytes")
        }
    }
}
