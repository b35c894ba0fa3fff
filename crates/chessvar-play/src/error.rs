//! Front-end errors.

use chessvar_core::{LayoutError, SquareError};

/// Errors that can occur while reading or running commands.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    /// The `move` command does not carry two squares.
    #[error("malformed move command: expected `move <from> <to>`")]
    MalformedMove,

    /// A square in a `move` command could not be parsed.
    #[error("invalid square: {source}")]
    InvalidSquare {
        /// The underlying coordinate error.
        #[from]
        source: SquareError,
    },

    /// The `position` command has no layout.
    #[error("malformed position command: missing layout")]
    MissingLayout,

    /// The layout in a `position` command could not be parsed.
    #[error("invalid layout \"{layout}\": {source}")]
    InvalidLayout {
        /// The layout string that failed to parse.
        layout: String,
        /// Why it failed.
        source: LayoutError,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as given.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
