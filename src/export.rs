//! Copy and download payloads
//!
//! The rendered fragment is the clipboard payload (`text/html`) and the
//! body of the downloadable `.html` file. Both are only produced once the
//! validity gate passes.

use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::model::SignatureData;
use crate::template::{self, Template};
use crate::validation::Readiness;
use crate::{Error, Result};

/// MIME type of the clipboard payload
pub const MIME_TYPE: &str = "text/html";
/// File name offered for downloads
pub const DEFAULT_FILE_NAME: &str = "email-signature.html";

/// A gated, ready-to-ship signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureExport {
    pub template: Template,
    pub html: String,
}

impl SignatureExport {
    /// Render the record with its active template, provided it passes the
    /// validity gate.
    pub fn prepare(data: &SignatureData) -> Result<Self> {
        Self::prepare_with(data, data.active_template())
    }

    /// Like [`SignatureExport::prepare`] with an explicit template.
    pub fn prepare_with(data: &SignatureData, template: Template) -> Result<Self> {
        let readiness = Readiness::check(data);
        if !readiness.is_ready() {
            log::debug!("export blocked by {} open issue(s)", readiness.issues.len());
            return Err(Error::NotReady(readiness));
        }
        Ok(Self::ungated(data, template))
    }

    /// Render without consulting the gate (live preview).
    pub fn ungated(data: &SignatureData, template: Template) -> Self {
        Self {
            template,
            html: template.render(data),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// SHA-256 of the payload, hex encoded.
    pub fn fingerprint(&self) -> String {
        fingerprint(&self.html)
    }

    /// Write the payload to `path`, forcing an `.html` extension. When
    /// `path` is a directory the default file name is used inside it.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf> {
        let target = download_path(path);
        std::fs::write(&target, self.html.as_bytes()).map_err(|e| {
            Error::ExportError(format!("failed to write {}: {}", target.display(), e))
        })?;
        log::debug!("wrote {} bytes to {}", self.html.len(), target.display());
        Ok(target)
    }
}

/// Resolve where a download lands.
pub fn download_path(path: &Path) -> PathBuf {
    if path.is_dir() {
        return path.join(DEFAULT_FILE_NAME);
    }
    let is_html = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("html"));
    if is_html {
        path.to_path_buf()
    } else {
        path.with_extension("html")
    }
}

/// SHA-256 of an HTML payload, hex encoded.
pub fn fingerprint(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}

/// Preview render of the active template; never gated.
pub fn preview(data: &SignatureData) -> String {
    template::generate(data)
}
