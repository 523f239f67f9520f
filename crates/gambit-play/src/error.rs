//! Protocol errors.

use gambit_core::{FenError, MoveError};

/// Errors that can occur while handling protocol input.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        fen: String,
        #[source]
        source: FenError,
    },

    /// Text that is not coordinate notation (`e2e4`, `e7e8q`).
    #[error("invalid move text: {text}")]
    InvalidMove { text: String },

    /// A well-formed move that the rules reject.
    #[error("illegal move {text}: {source}")]
    IllegalMove {
        text: String,
        #[source]
        source: MoveError,
    },

    /// A square argument that is not algebraic notation.
    #[error("invalid square: {text}")]
    InvalidSquare { text: String },

    /// A command was given without a required argument.
    #[error("{command} requires an argument")]
    MissingArgument { command: &'static str },

    /// `setoption` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption { name: String },

    /// `setoption` value could not be parsed for the named option.
    #[error("invalid value for option {name}: {value}")]
    InvalidOptionValue { name: String, value: String },

    /// An I/O error occurred while reading input or writing replies.
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}
