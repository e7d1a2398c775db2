//! Timestamped log lines and the sinks that receive them.

use core::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::error::LogError;
use crate::options::LogOption;

/// Receives finished log lines.
///
/// Any `FnMut(&str)` closure is a sink, which is handy for capturing the
/// log in tests.
pub trait LogSink {
    /// Writes one line.
    fn write_line(&mut self, line: &str);
}

impl<F: FnMut(&str)> LogSink for F {
    fn write_line(&mut self, line: &str) {
        self(line);
    }
}

/// Discards every line.
#[derive(Debug, Clone, Copy, Default)]
pub struct MutedSink;

impl LogSink for MutedSink {
    fn write_line(&mut self, _line: &str) {}
}

/// Prints lines to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintSink;

impl LogSink for PrintSink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Forwards lines to the [`log`] facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct FacadeSink;

impl LogSink for FacadeSink {
    fn write_line(&mut self, line: &str) {
        log::info!(target: "bjenv", "{line}");
    }
}

/// Appends lines to a file.
#[derive(Debug)]
pub struct FileSink {
    file: File,
}

impl FileSink {
    /// Creates (or truncates) the file and writes the banner line.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn create(path: &Path) -> Result<Self, LogError> {
        let io_err = |source| LogError::Io {
            path: path.display().to_string(),
            source,
        };
        let mut file = File::create(path).map_err(io_err)?;
        writeln!(file, "###################Logger Initialized###################").map_err(io_err)?;
        Ok(Self { file })
    }
}

impl LogSink for FileSink {
    fn write_line(&mut self, line: &str) {
        // Write failures after setup must not interrupt a round.
        let _ = writeln!(self.file, "{line}");
    }
}

/// A named logger that timestamps messages before handing them to a sink.
pub struct Logger {
    name: String,
    sink: Box<dyn LogSink>,
}

impl Logger {
    /// Creates a logger writing to the given sink.
    pub fn new(name: impl Into<String>, sink: impl LogSink + 'static) -> Self {
        Self {
            name: name.into(),
            sink: Box::new(sink),
        }
    }

    /// Creates a logger for the configured option and logs its start.
    ///
    /// # Errors
    ///
    /// Returns an error if a file sink cannot be set up.
    pub fn from_option(name: impl Into<String>, option: &LogOption) -> Result<Self, LogError> {
        let name = name.into();
        let mut logger = match option {
            LogOption::Muted => Self::new(name, MutedSink),
            LogOption::Print => Self::new(name, PrintSink),
            LogOption::Facade => Self::new(name, FacadeSink),
            LogOption::File(path) => Self::new(name, FileSink::create(path)?),
        };
        let banner = format!("Logger Initialized - Name: {} Mode: {option}", logger.name);
        logger.log(banner);
        Ok(logger)
    }

    /// Returns the logger name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logs a message stamped with the current local time.
    pub fn log(&mut self, message: impl fmt::Display) {
        self.log_at(now(), message);
    }

    /// Logs a message stamped with the given time.
    pub fn log_at(&mut self, at: OffsetDateTime, message: impl fmt::Display) {
        let stamp = at
            .format(&Rfc3339)
            .unwrap_or_else(|_| at.unix_timestamp().to_string());
        self.sink.write_line(&format!("[{stamp}] {message}"));
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.name).finish_non_exhaustive()
    }
}

fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}
