//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur while a round is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// No round has been dealt yet.
    #[error("game not started")]
    NotStarted,
}

/// Errors that can occur when counting rank labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountError {
    /// The input is not a card label.
    #[error("count() got unexpected input: {0:?}")]
    InvalidCountInput(String),
    /// The total does not fit in a `u16`.
    #[error("count() total overflowed")]
    Overflow,
}

/// Errors that can occur while setting up the log sink.
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be created or written.
    #[error("failed to open log file {path}: {source}")]
    Io {
        /// Path of the log file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// A string that is not a card rank label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid card label: {0:?}")]
pub struct ParseCardError(pub String);

/// A string that is not a driver action name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action: {0:?}")]
pub struct ParseActionError(pub String);
