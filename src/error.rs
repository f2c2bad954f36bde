use thiserror::Error;

use crate::command::Parameter;

/// Errors raised while reading, normalizing or interpolating path definitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    /// Unknown command letter or stray character in the path data
    #[error("unexpected character '{character}' at position {position}")]
    Grammar { character: char, position: usize },

    /// Number of parameters does not fit the command's segment arity
    #[error("command '{command}' expects {expected} parameters per segment, found {found}")]
    Arity {
        command: char,
        expected: usize,
        found: usize,
    },

    /// Parameter requested from a command kind which does not carry it
    #[error("command '{command}' has no {parameter:?} parameter")]
    MissingParameter { command: char, parameter: Parameter },

    /// Parameter text that is not a decimal number (eg. a lone `-` or `.`)
    #[error("invalid number '{value}' in command '{command}'")]
    InvalidNumber { command: char, value: String },

    /// The path data does not start with a move command
    #[error("path data must start with a move command, found '{command}'")]
    MissingMove { command: char },

    /// The path data contains no command at all
    #[error("path data is empty")]
    Empty,

    /// Two definitions with different point counts were interpolated
    #[error("cannot interpolate definitions of {from} and {to} points")]
    ShapeMismatch { from: usize, to: usize },

    /// Unknown name given for a timing function
    #[error("unknown timing function '{0}'")]
    UnknownTiming(String),

    /// Invalid value in the morph options
    #[error("invalid option: {0}")]
    InvalidOption(String),
}
