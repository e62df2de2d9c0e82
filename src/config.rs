//! Split view configuration.
//!
//! Two binding surfaces produce the same [`SplitterConfig`]: command-line
//! flags parsed with `clap`, and markup-style attributes (`direction`,
//! `is-fixed`) for hosts that describe the view declaratively.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

use crate::constants::{DEFAULT_SEPARATOR_SIZE, MAX_SEPARATOR_SIZE};
use crate::splitter::SplitDirection;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid direction `{0}` (expected `horizontal` or `vertical`)")]
    InvalidDirection(String),
    #[error("separator size must be between 1 and {max} cells, got {0}", max = MAX_SEPARATOR_SIZE)]
    InvalidSeparatorSize(u16),
    #[error("separator size `{0}` is not a number of cells")]
    InvalidSeparatorSizeValue(String),
    #[error("invalid log level `{0}`")]
    InvalidLogLevel(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "term-splitter",
    version = env!("CARGO_PKG_VERSION"),
    about = "Resizable two-pane split view for the terminal"
)]
pub struct Cli {
    /// Layout axis of the two panes.
    #[arg(long, value_name = "DIRECTION", default_value_t = SplitDirection::Horizontal)]
    pub direction: SplitDirection,

    /// Disable moving the separator with the mouse and arrow keys.
    #[arg(long = "fixed")]
    pub is_fixed: bool,

    /// Thickness of the separator, in cells.
    #[arg(long, value_name = "CELLS", default_value_t = DEFAULT_SEPARATOR_SIZE)]
    pub separator_size: u16,

    /// Write diagnostics to this file. Logging is discarded otherwise.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Maximum level written to the log file.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Cli {
    pub fn log_level(&self) -> Result<Level, ConfigError> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterConfig {
    pub direction: SplitDirection,
    pub is_fixed: bool,
    pub separator_size: u16,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            direction: SplitDirection::Horizontal,
            is_fixed: false,
            separator_size: DEFAULT_SEPARATOR_SIZE,
        }
    }
}

impl SplitterConfig {
    pub fn with_direction(mut self, direction: SplitDirection) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_fixed(mut self, is_fixed: bool) -> Self {
        self.is_fixed = is_fixed;
        self
    }

    pub fn with_separator_size(mut self, size: u16) -> Result<Self, ConfigError> {
        validate_separator_size(size)?;
        self.separator_size = size;
        Ok(self)
    }

    /// Build from markup-style attributes.
    ///
    /// `direction` takes a value; `is-fixed` (or `isFixed`) is a presence
    /// flag whose value is ignored. Unknown attributes are skipped.
    pub fn from_attributes<'a, I>(attributes: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let mut config = Self::default();
        for (name, value) in attributes {
            match name {
                "direction" => {
                    config.direction = value.unwrap_or_default().parse()?;
                }
                "is-fixed" | "isFixed" => config.is_fixed = true,
                "separator-size" => {
                    let raw = value.unwrap_or_default();
                    let size = raw
                        .trim()
                        .parse::<u16>()
                        .map_err(|_| ConfigError::InvalidSeparatorSizeValue(raw.to_string()))?;
                    config = config.with_separator_size(size)?;
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

impl TryFrom<&Cli> for SplitterConfig {
    type Error = ConfigError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        Self::default()
            .with_direction(cli.direction)
            .with_fixed(cli.is_fixed)
            .with_separator_size(cli.separator_size)
    }
}

fn validate_separator_size(size: u16) -> Result<(), ConfigError> {
    if (1..=MAX_SEPARATOR_SIZE).contains(&size) {
        Ok(())
    } else {
        Err(ConfigError::InvalidSeparatorSize(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::parse_from(["term-splitter"]);
        let config = SplitterConfig::try_from(&cli).unwrap();
        assert_eq!(config, SplitterConfig::default());
        assert_eq!(cli.log_level().unwrap(), Level::INFO);
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::parse_from([
            "term-splitter",
            "--direction",
            "vertical",
            "--fixed",
            "--separator-size",
            "2",
            "--log-level",
            "trace",
        ]);
        let config = SplitterConfig::try_from(&cli).unwrap();
        assert_eq!(config.direction, SplitDirection::Vertical);
        assert!(config.is_fixed);
        assert_eq!(config.separator_size, 2);
        assert_eq!(cli.log_level().unwrap(), Level::TRACE);
    }

    #[test]
    fn cli_rejects_bad_values() {
        assert!(Cli::try_parse_from(["term-splitter", "--direction", "sideways"]).is_err());
        let cli = Cli::parse_from(["term-splitter", "--separator-size", "0"]);
        assert_eq!(
            SplitterConfig::try_from(&cli),
            Err(ConfigError::InvalidSeparatorSize(0))
        );
        let cli = Cli::parse_from(["term-splitter", "--log-level", "loud"]);
        assert!(cli.log_level().is_err());
    }

    #[test]
    fn attributes_bind_direction_and_presence_flag() {
        let config = SplitterConfig::from_attributes([
            ("direction", Some("vertical")),
            ("is-fixed", Some("")),
            ("class", Some("ignored")),
        ])
        .unwrap();
        assert_eq!(config.direction, SplitDirection::Vertical);
        assert!(config.is_fixed);

        let config = SplitterConfig::from_attributes([("isFixed", None)]).unwrap();
        assert!(config.is_fixed);
        assert_eq!(config.direction, SplitDirection::Horizontal);
    }

    #[test]
    fn attributes_reject_unknown_direction() {
        let err = SplitterConfig::from_attributes([("direction", Some("both"))]).unwrap_err();
        assert_eq!(err, ConfigError::InvalidDirection("both".into()));
        assert!(SplitterConfig::from_attributes([("direction", None)]).is_err());
    }

    #[test]
    fn attributes_separator_size() {
        let config = SplitterConfig::from_attributes([("separator-size", Some("3"))]).unwrap();
        assert_eq!(config.separator_size, 3);
        assert_eq!(
            SplitterConfig::from_attributes([("separator-size", Some("wide"))]),
            Err(ConfigError::InvalidSeparatorSizeValue("wide".into()))
        );
        assert_eq!(
            SplitterConfig::from_attributes([("separator-size", Some("9"))]),
            Err(ConfigError::InvalidSeparatorSize(9))
        );
    }
}
