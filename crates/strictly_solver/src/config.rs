//! Solver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::Mark;

/// Configuration for the solver CLI, read from a TOML file.
///
/// Every key is optional; missing keys take their default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Mark the human plays in `play` mode.
    human: Mark,

    /// Print the value of every move before the human's turn.
    show_analysis: bool,

    /// Log filter used when `RUST_LOG` is not set.
    log_filter: String,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            human: Mark::X,
            show_analysis: false,
            log_filter: "warn".to_string(),
        }
    }
}

impl SolverConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from `path`, or the defaults if there is no such file.
    ///
    /// Runs before logging is set up (the log filter is part of the config),
    /// so the caller reports the returned [`ConfigSource`] once it is.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let config = Self::from_file(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        } else {
            Ok((Self::default(), ConfigSource::Defaults))
        }
    }

    /// Overrides the human's mark.
    pub fn with_human(mut self, human: Mark) -> Self {
        self.human = human;
        self
    }
}

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// Read from this file.
    #[display("{}", _0.display())]
    File(PathBuf),
    /// No config file; built-in defaults.
    #[display("defaults")]
    Defaults,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let (config, source) =
            SolverConfig::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, SolverConfig::default());
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(source.to_string(), "defaults");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "human = \"o\"\nshow_analysis = true").expect("write config");

        let (config, source) = SolverConfig::load(file.path()).expect("valid config");
        assert_eq!(source, ConfigSource::File(file.path().to_path_buf()));
        assert_eq!(*config.human(), Mark::O);
        assert!(*config.show_analysis());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "human = \"z\"").expect("write config");

        let err = SolverConfig::load(file.path()).unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.to_string().contains("config.rs"));
    }

    #[test]
    fn test_with_human_overrides() {
        let config = SolverConfig::default().with_human(Mark::O);
        assert_eq!(*config.human(), Mark::O);
    }
}
