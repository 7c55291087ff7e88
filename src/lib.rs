//! # docs2md
//!
//! A small file-to-Markdown conversion pipeline: hand it an upload (declared
//! filename + raw bytes), it invokes a pluggable external converter exactly
//! once and gives back a value — either the Markdown text or a user-facing
//! failure message — plus the download artifact named after the original
//! file.
//!
//! ## Why this crate?
//!
//! Document parsing belongs in a dedicated backend (PDF extractor, Office
//! reader, OCR service). What every host around such a backend re-invents is
//! the glue: catching whatever the backend throws, bounding a hung call,
//! deriving the `.md` download name, and guaranteeing that a failure is shown
//! rather than crashing the request. This crate is exactly that glue and
//! nothing else — it owns no format-specific logic.
//!
//! ## Pipeline Overview
//!
//! ```text
//! upload (name + bytes)
//!  │
//!  ├─ 1. Input    gate empty payloads, advisory extension allow-list
//!  ├─ 2. Convert  one blocking call to the injected DocumentConverter
//!  │              (spawn_blocking + timeout + panic containment)
//!  └─ 3. Outcome  Converted { markdown } | Failed { error }
//!                 └─ download artifact: <base-name>.md, text/markdown
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use docs2md::{
//!     convert, ConverterError, DocumentConverter, PipelineConfig, UploadedFile,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Any backend goes here; a passthrough stands in for one.
//!     let converter: Arc<dyn DocumentConverter> = Arc::new(
//!         |file: &UploadedFile| -> Result<String, ConverterError> {
//!             Ok(String::from_utf8_lossy(file.bytes()).into_owned())
//!         },
//!     );
//!
//!     let Some(file) = UploadedFile::new("notes.txt", b"hello world".to_vec()) else {
//!         return; // empty upload: nothing to do
//!     };
//!
//!     let outcome = convert(&file, &converter, &PipelineConfig::default()).await;
//!     match outcome.markdown() {
//!         Some(md) => {
//!             let artifact = outcome.download_artifact(file.name()).unwrap();
//!             assert_eq!(artifact.filename(), "notes.md");
//!             println!("{md}");
//!         }
//!         None => eprintln!("{}", outcome.failure_message().unwrap()),
//!     }
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **No-throw**: [`convert`] always returns a [`ConversionOutcome`];
//!   converter errors, panics, and timeouts resolve to `Failed`, never to a
//!   fault the caller must catch.
//! - **All-or-nothing**: there is no partial success per file.
//! - **Downloads only from success**: a [`DownloadArtifact`] is constructible
//!   only from a `Converted` outcome.
//! - **Verbatim output**: successful Markdown is the converter's text
//!   byte-for-byte; the pipeline applies no post-processing.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod converter;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use convert::{convert, convert_sync};
pub use converter::DocumentConverter;
pub use error::{ConvertError, ConverterError, FAILURE_MESSAGE_PREFIX};
pub use input::{extension, is_supported_extension, UploadedFile, SUPPORTED_EXTENSIONS};
pub use output::{derive_output_name, ConversionOutcome, DownloadArtifact, MARKDOWN_MIME};
pub use progress::ConversionProgress;
