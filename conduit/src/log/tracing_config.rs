// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Where log output goes, and how verbose it is. Anything that converts into this can
/// be handed to [`crate::log::try_initialize_logging_global`].
///
/// ```no_run
/// use conduit::log::{DisplayPreference, TracingConfig, WriterConfig};
///
/// let config_1: TracingConfig = tracing_core::LevelFilter::DEBUG.into();
/// let config_2: TracingConfig = WriterConfig::File("conduit.log".to_string()).into();
/// let config_3: TracingConfig = DisplayPreference::Stderr.into();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    /// Path to the log file. It is created (or appended to) on init.
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

pub const DEFAULT_LOG_FILE_NAME: &str = "conduit.log";

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::DEBUG,
            writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Self::default()
        }
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            ..Self::default()
        }
    }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        WriterConfig::Display(display_preference).into()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_conversions() {
        let it: TracingConfig = LevelFilter::WARN.into();
        assert_eq!(it.get_level_filter(), LevelFilter::WARN);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );

        let it: TracingConfig = DisplayPreference::Stderr.into();
        assert_eq!(it.get_level_filter(), LevelFilter::DEBUG);
        assert_eq!(
            it.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );
    }
}
