//! Configuration for the conversion pipeline.
//!
//! Everything tunable lives in [`PipelineConfig`], built via its
//! [`PipelineConfigBuilder`]. Keeping the knobs in one struct makes it
//! trivial to share one config across requests and to diff two runs to
//! understand why their outcomes differ.

use crate::error::ConvertError;
use crate::progress::ConversionProgress;
use std::fmt;
use std::sync::Arc;

/// Configuration for a file-to-Markdown conversion.
///
/// Built via [`PipelineConfig::builder()`] or [`PipelineConfig::default()`].
///
/// # Example
/// ```rust
/// use docs2md::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .converter_timeout_secs(Some(30))
///     .enforce_allow_list(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct PipelineConfig {
    /// Upper bound on the external converter call, in seconds. Default: 60.
    ///
    /// The converter is a black box; without a bound a hung backend blocks
    /// the request indefinitely. `None` removes the bound for hosts that
    /// genuinely want to wait forever.
    pub converter_timeout_secs: Option<u64>,

    /// Reject files whose extension is off the allow-list before invoking
    /// the converter. Default: false.
    ///
    /// The allow-list is advisory and normally enforced by the presentation
    /// layer's file picker; turn this on when the pipeline is exposed to
    /// callers that bypass that picker (e.g. a raw HTTP endpoint).
    pub enforce_allow_list: bool,

    /// Lifecycle event callback. Default: none.
    pub progress_callback: Option<Arc<dyn ConversionProgress>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            converter_timeout_secs: Some(60),
            enforce_allow_list: false,
            progress_callback: None,
        }
    }
}

impl fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("converter_timeout_secs", &self.converter_timeout_secs)
            .field("enforce_allow_list", &self.enforce_allow_list)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<dyn ConversionProgress>"),
            )
            .finish()
    }
}

impl PipelineConfig {
    /// Create a new builder with the default settings.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Bound the external converter call; `None` disables the bound.
    pub fn converter_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.config.converter_timeout_secs = secs;
        self
    }

    /// Enforce the extension allow-list inside the pipeline.
    pub fn enforce_allow_list(mut self, v: bool) -> Self {
        self.config.enforce_allow_list = v;
        self
    }

    /// Receive lifecycle events for each conversion.
    pub fn progress_callback(mut self, cb: Arc<dyn ConversionProgress>) -> Self {
        self.config.progress_callback = Some(cb);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<PipelineConfig, ConvertError> {
        if self.config.converter_timeout_secs == Some(0) {
            return Err(ConvertError::InvalidConfig(
                "converter timeout must be ≥ 1s (use None to disable)".into(),
            ));
        }
        Ok(self.config)
    }
}
