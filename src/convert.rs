//! The conversion pipeline: one upload in, one outcome out.
//!
//! ## State machine
//!
//! Each call walks `Idle → Converting → {Converted | Failed}`. The terminal
//! states are final: no retries, no intermediate states, no cancellation once
//! the converter has been invoked. A second upload is a fresh walk with a
//! fresh [`UploadedFile`].
//!
//! ## The no-throw boundary
//!
//! This module is the single place where the external converter's failure
//! signalling — an `Err`, a panic, or simply never returning — is translated
//! into a value. `convert` therefore returns [`ConversionOutcome`] directly,
//! not a `Result`: the caller observes a value in 100% of cases. The panic
//! containment comes for free from `spawn_blocking`, whose `JoinError`
//! carries the panic payload instead of unwinding into the caller.

use crate::config::PipelineConfig;
use crate::converter::DocumentConverter;
use crate::error::ConvertError;
use crate::input::UploadedFile;
use crate::output::ConversionOutcome;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinError;
use tracing::{debug, info, warn};

/// Convert an uploaded file to Markdown.
///
/// This is the primary entry point for the library. The converter is called
/// exactly once, on a blocking worker thread; a single attempt is definitive.
///
/// # Arguments
/// * `file`      — The upload (non-empty by construction)
/// * `converter` — The external converter backend
/// * `config`    — Pipeline configuration
///
/// # Returns
/// Always a [`ConversionOutcome`] — converter errors, panics, and timeouts
/// all resolve to [`ConversionOutcome::Failed`], never to a fault.
pub async fn convert(
    file: &UploadedFile,
    converter: &Arc<dyn DocumentConverter>,
    config: &PipelineConfig,
) -> ConversionOutcome {
    let start = Instant::now();
    info!(name = %file.name(), size = file.bytes().len(), "starting conversion");

    if let Some(ref cb) = config.progress_callback {
        cb.on_conversion_start(file.name());
    }

    let outcome = match run_converter(file, converter, config).await {
        Ok(markdown) => {
            info!(
                name = %file.name(),
                bytes = markdown.len(),
                elapsed_ms = start.elapsed().as_millis() as u64,
                "conversion complete"
            );
            ConversionOutcome::Converted { markdown }
        }
        Err(error) => {
            warn!(name = %file.name(), %error, "conversion failed");
            ConversionOutcome::Failed { error }
        }
    };

    if let Some(ref cb) = config.progress_callback {
        match &outcome {
            ConversionOutcome::Converted { markdown } => {
                cb.on_conversion_complete(file.name(), markdown.len());
            }
            ConversionOutcome::Failed { error } => {
                cb.on_conversion_failed(file.name(), &error.failure_message());
            }
        }
    }

    outcome
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally; returns `Failed` if the
/// runtime itself cannot be built (the no-throw property holds here too).
pub fn convert_sync(
    file: &UploadedFile,
    converter: &Arc<dyn DocumentConverter>,
    config: &PipelineConfig,
) -> ConversionOutcome {
    match tokio::runtime::Runtime::new() {
        Ok(rt) => rt.block_on(convert(file, converter, config)),
        Err(e) => ConversionOutcome::Failed {
            error: ConvertError::ConversionFailed {
                detail: format!("failed to create tokio runtime: {e}"),
            },
        },
    }
}

/// Run the single external conversion call, bounded and panic-contained.
async fn run_converter(
    file: &UploadedFile,
    converter: &Arc<dyn DocumentConverter>,
    config: &PipelineConfig,
) -> Result<String, ConvertError> {
    if config.enforce_allow_list && !file.has_supported_extension() {
        return Err(ConvertError::UnsupportedFormat {
            name: file.name().to_string(),
            extension: file.extension().unwrap_or_default(),
        });
    }

    let converter = Arc::clone(converter);
    let task_file = file.clone();
    debug!(name = %file.name(), "invoking external converter");
    let handle =
        tokio::task::spawn_blocking(move || converter.convert_document(&task_file));

    let joined = match config.converter_timeout_secs {
        Some(secs) => match tokio::time::timeout(Duration::from_secs(secs), handle).await {
            Ok(joined) => joined,
            // The worker thread keeps running to completion; its result is
            // discarded. The request itself is unblocked.
            Err(_) => return Err(ConvertError::Timeout { secs }),
        },
        None => handle.await,
    };

    match joined {
        Ok(Ok(markdown)) => Ok(markdown),
        Ok(Err(e)) => Err(ConvertError::ConversionFailed {
            detail: e.to_string(),
        }),
        Err(join_err) => Err(ConvertError::ConverterPanicked {
            detail: panic_detail(join_err),
        }),
    }
}

/// Extract a human-readable detail from a panicked blocking task.
fn panic_detail(err: JoinError) -> String {
    match err.try_into_panic() {
        Ok(payload) => {
            if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "non-string panic payload".to_string()
            }
        }
        Err(e) => e.to_string(),
    }
}
