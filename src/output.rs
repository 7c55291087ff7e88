//! Conversion outcomes and the download artifact derived from them.
//!
//! ## Why an outcome value instead of `Result`?
//!
//! A failed conversion is an ordinary, expected answer the presentation layer
//! renders in place of a success confirmation — not a fault to propagate.
//! Modelling both ends of the contract as one [`ConversionOutcome`] value
//! makes the no-throw guarantee structural: the pipeline returns it
//! unconditionally, and the host matches on it.
//!
//! [`DownloadArtifact`] keeps its fields private on purpose. The only way to
//! obtain one is [`ConversionOutcome::download_artifact`], which returns
//! `None` for failures — so "a failure never yields a download" holds by
//! construction rather than by convention.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// MIME type of every download artifact.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// The result of converting one uploaded file. Immutable once produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    /// The converter succeeded; `markdown` is its output, verbatim.
    Converted { markdown: String },
    /// The converter failed, panicked, or timed out.
    Failed { error: ConvertError },
}

impl ConversionOutcome {
    /// Whether this outcome is a success.
    pub fn is_converted(&self) -> bool {
        matches!(self, ConversionOutcome::Converted { .. })
    }

    /// The Markdown text, if the conversion succeeded.
    pub fn markdown(&self) -> Option<&str> {
        match self {
            ConversionOutcome::Converted { markdown } => Some(markdown),
            ConversionOutcome::Failed { .. } => None,
        }
    }

    /// The structured failure cause, if the conversion failed.
    pub fn error(&self) -> Option<&ConvertError> {
        match self {
            ConversionOutcome::Converted { .. } => None,
            ConversionOutcome::Failed { error } => Some(error),
        }
    }

    /// The user-facing failure message, if the conversion failed.
    ///
    /// Always begins with [`crate::error::FAILURE_MESSAGE_PREFIX`].
    pub fn failure_message(&self) -> Option<String> {
        self.error().map(ConvertError::failure_message)
    }

    /// Materialise the download offered for this outcome.
    ///
    /// Returns `Some` only for [`ConversionOutcome::Converted`]: the artifact
    /// is named after the original upload with its final extension swapped
    /// for `.md`, and its content is the Markdown text UTF-8 encoded,
    /// byte-for-byte. A `Failed` outcome never yields a download.
    pub fn download_artifact(&self, original_name: &str) -> Option<DownloadArtifact> {
        match self {
            ConversionOutcome::Converted { markdown } => Some(DownloadArtifact {
                filename: derive_output_name(original_name),
                content: markdown.clone().into_bytes(),
                mime_type: MARKDOWN_MIME.to_string(),
            }),
            ConversionOutcome::Failed { .. } => None,
        }
    }
}

/// The file offered for download after a successful conversion.
///
/// Constructed only by [`ConversionOutcome::download_artifact`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadArtifact {
    filename: String,
    content: Vec<u8>,
    mime_type: String,
}

impl DownloadArtifact {
    /// Suggested filename: original base name with `.md` appended.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// UTF-8 encoded Markdown content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Always [`MARKDOWN_MIME`].
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Consume the artifact, yielding `(filename, content)`.
    pub fn into_parts(self) -> (String, Vec<u8>) {
        (self.filename, self.content)
    }

    /// Write the artifact into `dir` under its suggested filename.
    ///
    /// Uses atomic write (temp file + rename) to prevent partial files, and
    /// returns the path written.
    pub async fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<PathBuf, ConvertError> {
        let dir = dir.as_ref();
        let path = dir.join(&self.filename);
        let map_err = |e: std::io::Error| ConvertError::ArtifactWriteFailed {
            filename: self.filename.clone(),
            detail: e.to_string(),
        };

        tokio::fs::create_dir_all(dir).await.map_err(map_err)?;

        let tmp_path = path.with_extension("md.tmp");
        tokio::fs::write(&tmp_path, &self.content)
            .await
            .map_err(map_err)?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(map_err)?;

        debug!(path = %path.display(), bytes = self.content.len(), "artifact written");
        Ok(path)
    }
}

/// Derive the suggested download filename from the original upload's name.
///
/// Strips only the final extension segment and appends `.md`, matching the
/// upload widget's notion of "the" extension:
///
/// ```rust
/// use docs2md::derive_output_name;
///
/// assert_eq!(derive_output_name("report.pdf"), "report.md");
/// assert_eq!(derive_output_name("archive.tar.gz"), "archive.tar.md");
/// assert_eq!(derive_output_name("noext"), "noext.md");
/// ```
pub fn derive_output_name(original_name: &str) -> String {
    let stem = match original_name.rfind('.') {
        // A leading dot is part of the name, not an extension separator.
        Some(0) | None => original_name,
        Some(idx) => &original_name[..idx],
    };
    format!("{stem}.md")
}
