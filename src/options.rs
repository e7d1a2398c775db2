//! Game configuration options.

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;
use std::path::PathBuf;

/// Where the game's log lines go.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum LogOption {
    /// Discard every line.
    Muted,
    /// Print lines to stdout.
    #[default]
    Print,
    /// Forward lines to the [`log`] facade at info level.
    Facade,
    /// Write lines to a file, truncated when the game is created.
    File(PathBuf),
}

impl FromStr for LogOption {
    type Err = Infallible;

    /// Parses `muted`, `print` or `log` (any case); anything else is taken
    /// as a file path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "muted" => Self::Muted,
            "print" => Self::Print,
            "log" => Self::Facade,
            _ => Self::File(PathBuf::from(s)),
        })
    }
}

impl fmt::Display for LogOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Muted => f.write_str("muted"),
            Self::Print => f.write_str("print"),
            Self::Facade => f.write_str("log"),
            Self::File(_) => f.write_str("file output"),
        }
    }
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjenv::{GameOptions, LogOption};
///
/// let options = GameOptions::default()
///     .with_auto_reset(false)
///     .with_log_option(LogOption::Muted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Whether a finished round immediately deals a new one.
    pub auto_reset: bool,
    /// Log sink selection.
    pub log_option: LogOption,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            auto_reset: true,
            log_option: LogOption::Print,
        }
    }
}

impl GameOptions {
    /// Sets whether a finished round immediately deals a new one.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::GameOptions;
    ///
    /// let options = GameOptions::default().with_auto_reset(false);
    /// assert!(!options.auto_reset);
    /// ```
    #[must_use]
    pub const fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    /// Sets the log sink.
    ///
    /// # Example
    ///
    /// ```
    /// use bjenv::{GameOptions, LogOption};
    ///
    /// let options = GameOptions::default().with_log_option(LogOption::Muted);
    /// assert_eq!(options.log_option, LogOption::Muted);
    /// ```
    #[must_use]
    pub fn with_log_option(mut self, log_option: LogOption) -> Self {
        self.log_option = log_option;
        self
    }
}
