//! Input adapter: shape an upload's raw bytes and declared filename into an
//! [`UploadedFile`] the pipeline can consume.
//!
//! ## Why an `Option`-returning constructor?
//!
//! "No file selected" is a state, not an error: the presentation layer shows
//! its initial prompt and nothing else happens. Refusing to construct an
//! [`UploadedFile`] from an empty payload makes that state unrepresentable
//! downstream — the pipeline cannot be invoked without input because there is
//! no value to invoke it with.
//!
//! Extension filtering is advisory. The allow-list exists so the presentation
//! layer can restrict its file picker; nothing here inspects file content,
//! and by default the pipeline converts whatever it is handed (format
//! detection is the external converter's job).

use tracing::debug;

/// File extensions the presentation layer is expected to accept.
///
/// Lowercase, without the leading dot. Advisory only — see the module docs.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pptx", "docx", "xlsx", "pdf", "jpg", "jpeg", "png", "txt", "html", "csv", "json",
];

/// A single uploaded document: declared filename plus raw bytes.
///
/// Ephemeral — created per user action, dropped once the outcome has been
/// produced. Construction via [`UploadedFile::new`] guarantees the payload is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Build an `UploadedFile` from a declared filename and raw bytes.
    ///
    /// Returns `None` when `bytes` is empty — the "no input" state. The
    /// filename is taken as declared; no path components are expected or
    /// stripped.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Option<Self> {
        if bytes.is_empty() {
            debug!("empty upload payload, nothing to convert");
            return None;
        }
        let name = name.into();
        debug!(name = %name, size = bytes.len(), "accepted upload");
        Some(Self { name, bytes })
    }

    /// The filename as declared by the uploader, extension included.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw file content. Never empty.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lowercased final extension segment of the declared filename, if any.
    ///
    /// `"archive.tar.gz"` yields `"gz"`; leading-dot names like
    /// `".gitignore"` have no extension.
    pub fn extension(&self) -> Option<String> {
        extension(&self.name)
    }

    /// Whether the declared extension is on [`SUPPORTED_EXTENSIONS`].
    pub fn has_supported_extension(&self) -> bool {
        is_supported_extension(&self.name)
    }
}

/// Lowercased final extension segment of `name`, if any.
pub fn extension(name: &str) -> Option<String> {
    match name.rfind('.') {
        // A leading dot is part of the name, not an extension separator.
        Some(0) | None => None,
        Some(idx) => {
            let ext = &name[idx + 1..];
            if ext.is_empty() {
                None
            } else {
                Some(ext.to_ascii_lowercase())
            }
        }
    }
}

/// Whether `name`'s extension is on [`SUPPORTED_EXTENSIONS`].
///
/// Names without an extension are not supported; the comparison is
/// case-insensitive (`Report.PDF` passes).
pub fn is_supported_extension(name: &str) -> bool {
    match extension(name) {
        Some(ext) => SUPPORTED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}
