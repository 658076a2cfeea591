//! Logging configuration for the rendering pipeline
//!
//! Verbosity is an explicit option handed to [`init`] rather than an
//! implicit environment read; the CLI maps `--log-level` onto it.

use log::LevelFilter;

/// Logging configuration passed to the pipeline entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::Info,
        }
    }
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }
}

/// Initialize the process-wide logger; repeated calls are no-ops so tests
/// can initialize freely
pub fn init(config: &LogConfig) {
    let _ = env_logger::Builder::new()
        .filter_level(config.level)
        .format_timestamp(None)
        .try_init();
}
