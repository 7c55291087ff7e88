//! Progress-callback trait for conversion lifecycle events.
//!
//! Inject an `Arc<dyn ConversionProgress>` via
//! [`crate::config::PipelineConfigBuilder::progress_callback`] to observe the
//! per-request state machine (`Idle → Converting → {Converted | Failed}`) as
//! it runs.
//!
//! # Why callbacks instead of channels?
//!
//! The callback approach is the least-invasive integration point: a host can
//! drive a spinner, push a WebSocket event, or update a status row without
//! the library knowing anything about how it communicates. The trait is
//! `Send + Sync` so independent requests sharing one callback work correctly.

/// Called by the pipeline as a conversion moves through its states.
///
/// All methods have default no-op implementations so callers only override
/// what they care about. Exactly one of `on_conversion_complete` /
/// `on_conversion_failed` fires per conversion, always after
/// `on_conversion_start`.
pub trait ConversionProgress: Send + Sync {
    /// Called once, just before the external converter is invoked.
    fn on_conversion_start(&self, filename: &str) {
        let _ = filename;
    }

    /// Called when the converter returned Markdown.
    ///
    /// `markdown_len` is the byte length of the produced text.
    fn on_conversion_complete(&self, filename: &str, markdown_len: usize) {
        let _ = (filename, markdown_len);
    }

    /// Called when the conversion resolved to a failure.
    ///
    /// `message` is the user-facing failure message, prefix included.
    fn on_conversion_failed(&self, filename: &str, message: &str) {
        let _ = (filename, message);
    }
}
