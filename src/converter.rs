//! The external-converter seam.
//!
//! All actual parsing and text extraction happens behind [`DocumentConverter`].
//! This crate treats it as an opaque, single-call collaborator: one method,
//! bytes in, Markdown out, any boxed error on failure. Implementations are
//! expected to be stateless — the pipeline shares one behind an `Arc` and may
//! be called from many requests, so nothing session-specific belongs inside.
//!
//! The call is *blocking* by contract. Document parsers are CPU-bound and
//! rarely async-safe, so the pipeline runs the call under
//! `tokio::task::spawn_blocking` rather than forcing every backend to fake an
//! async signature.

use crate::error::ConverterError;
use crate::input::UploadedFile;

/// A black-box document-to-Markdown converter.
///
/// The pipeline makes exactly one call per uploaded file and wraps whatever
/// comes back: `Ok(text)` is trusted verbatim as UTF-8 Markdown, `Err` (or a
/// panic) becomes a [`crate::output::ConversionOutcome::Failed`]. The whole
/// [`UploadedFile`] is passed so backends can use the declared filename as a
/// format hint.
pub trait DocumentConverter: Send + Sync {
    /// Convert the uploaded file's bytes to Markdown text.
    fn convert_document(&self, file: &UploadedFile) -> Result<String, ConverterError>;
}

/// Plain functions and closures are converters.
///
/// Keeps small hosts and tests free of one-off wrapper structs:
///
/// ```rust
/// use docs2md::{ConverterError, DocumentConverter, UploadedFile};
/// use std::sync::Arc;
///
/// let passthrough: Arc<dyn DocumentConverter> = Arc::new(
///     |file: &UploadedFile| -> Result<String, ConverterError> {
///         Ok(String::from_utf8_lossy(file.bytes()).into_owned())
///     },
/// );
/// # let _ = passthrough;
/// ```
impl<F> DocumentConverter for F
where
    F: for<'a> Fn(&'a UploadedFile) -> Result<String, ConverterError> + Send + Sync,
{
    fn convert_document(&self, file: &UploadedFile) -> Result<String, ConverterError> {
        self(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_converters() {
        let file = UploadedFile::new("notes.txt", b"hello".to_vec()).unwrap();
        let c = |f: &UploadedFile| -> Result<String, ConverterError> {
            Ok(format!("# {}", f.name()))
        };
        assert_eq!(c.convert_document(&file).unwrap(), "# notes.txt");
    }

    #[test]
    fn converter_errors_are_boxed() {
        let file = UploadedFile::new("corrupt.pdf", vec![0u8; 8]).unwrap();
        let c = |_: &UploadedFile| -> Result<String, ConverterError> {
            Err("invalid PDF header".into())
        };
        let err = c.convert_document(&file).unwrap_err();
        assert_eq!(err.to_string(), "invalid PDF header");
    }
}
