//! Data URIs for uploaded images
//!
//! Images reach the record as data URIs and are embedded verbatim. Files
//! above [`COMPRESSION_THRESHOLD_BYTES`] still load but log a warning.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fmt;
use std::path::Path;

use crate::{Error, Result};

/// Upload size above which images should be shrunk before embedding (50 KiB)
pub const COMPRESSION_THRESHOLD_BYTES: usize = 50 * 1024;

/// Whether an upload of `len` bytes is above the size threshold.
pub fn needs_compression(len: usize) -> bool {
    len > COMPRESSION_THRESHOLD_BYTES
}

/// MIME type for an image path, from its extension.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Encode raw image bytes as a base64 data URI string.
pub fn encode_image(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// A parsed `data:` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub mime: String,
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Parse `data:<mime>[;base64],<payload>`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or_else(|| Error::InvalidDataUri("missing `data:` prefix".into()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| Error::InvalidDataUri("missing `,` separator".into()))?;
        let (mime, is_base64) = match meta.strip_suffix(";base64") {
            Some(mime) => (mime, true),
            None => (meta, false),
        };
        let data = if is_base64 {
            STANDARD
                .decode(payload)
                .map_err(|e| Error::InvalidDataUri(format!("bad base64 payload: {e}")))?
        } else {
            payload.as_bytes().to_vec()
        };
        let mime = if mime.is_empty() { "text/plain" } else { mime };
        Ok(Self::new(mime, data))
    }

    /// Load an image file as a data URI.
    pub fn from_file(path: &Path) -> Result<Self> {
        let mime = mime_for_path(path).ok_or_else(|| {
            Error::InvalidDataUri(format!("unsupported image type: {}", path.display()))
        })?;
        let data = std::fs::read(path)?;
        if needs_compression(data.len()) {
            log::warn!(
                "{} is {} bytes; images above {} bytes should be shrunk before embedding",
                path.display(),
                data.len(),
                COMPRESSION_THRESHOLD_BYTES
            );
        }
        Ok(Self::new(mime, data))
    }

    /// Decoded payload size.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_image(&self.mime, &self.data))
    }
}
