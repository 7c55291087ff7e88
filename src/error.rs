//! Error types for the docs2md library.
//!
//! All failure modes of a conversion collapse into one enum, [`ConvertError`],
//! because a conversion is all-or-nothing per file: there is no partial
//! success and therefore no page-level or stage-level error to track
//! separately. The enum is structured (one variant per cause) so hosts can
//! branch on the kind, while [`ConvertError::failure_message`] produces the
//! single user-facing string the presentation layer shows in place of a
//! success confirmation.
//!
//! Note that [`crate::convert::convert`] never *returns* this type as an
//! `Err` — failures surface as a [`crate::output::ConversionOutcome::Failed`]
//! value carrying the error. The only fallible-by-`Result` surface is config
//! building.

use thiserror::Error;

/// Fixed prefix of every user-facing failure message.
///
/// The presentation layer relies on this wording; the underlying cause is
/// appended after it by [`ConvertError::failure_message`].
pub const FAILURE_MESSAGE_PREFIX: &str =
    "Error: Failed to convert the file. Please ensure the file type is supported. Details: ";

/// The boxed error type external converters report failures with.
///
/// Converters are black boxes; whatever they raise is carried verbatim as the
/// `Details:` portion of the failure message.
pub type ConverterError = Box<dyn std::error::Error + Send + Sync>;

/// All failure causes a conversion can resolve to.
///
/// Every variant carries a human-readable detail string; there is no richer
/// structure because the converter itself is opaque.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum ConvertError {
    /// The file's extension is outside the allow-list and the pipeline was
    /// configured to enforce it (enforcement is off by default; the list is
    /// advisory and normally checked by the presentation layer).
    #[error("unsupported file extension {extension:?} for '{name}'")]
    UnsupportedFormat { name: String, extension: String },

    /// The external converter reported an error.
    #[error("conversion failed: {detail}")]
    ConversionFailed { detail: String },

    /// The external converter panicked; the panic was contained at the
    /// pipeline boundary.
    #[error("converter panicked: {detail}")]
    ConverterPanicked { detail: String },

    /// The external converter did not return within the configured bound.
    #[error("conversion timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Could not write a download artifact to disk.
    #[error("failed to write artifact '{filename}': {detail}")]
    ArtifactWriteFailed { filename: String, detail: String },

    /// Builder validation failed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ConvertError {
    /// Render the user-facing failure message: the fixed prefix followed by
    /// the underlying cause.
    pub fn failure_message(&self) -> String {
        format!("{FAILURE_MESSAGE_PREFIX}{self}")
    }
}
