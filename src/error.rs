//! Error types for argument parsing and dialog presentation
//!
//! User cancellation is not an error: it is reported as
//! [`PickOutcome::Cancelled`](crate::common::PickOutcome).

use std::fmt;
use std::io;

use thiserror::Error;

use crate::config;

/// Un canal de couleur / One color channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Position du canal dans "RRGGBBAA" / Position of the channel in "RRGGBBAA"
    pub const fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Alpha => "alpha",
        };
        f.write_str(name)
    }
}

/// Errors produced while decoding a color argument
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Wrong number of hex digits after the optional '#'
    #[error("invalid color {input:?}: expected 6 or 8 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A channel pair is not two hexadecimal digits
    #[error("invalid color {input:?}: {channel} channel {digits:?} is not hexadecimal")]
    InvalidChannel {
        input: String,
        channel: Channel,
        digits: String,
    },
}

/// Errors raised by a color dialog backend
#[derive(Debug, Error)]
pub enum PickerError {
    /// The platform cannot present a dialog (headless, missing helper, wrong thread, native failure)
    #[error("color dialog unavailable: {0}")]
    Unavailable(String),

    /// The dialog reported something that is not a color
    #[error("color dialog returned unexpected output: {0:?}")]
    UnexpectedOutput(String),
}

/// Top level error of one invocation
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ColorParseError),

    #[error(transparent)]
    Picker(#[from] PickerError),

    #[error("failed to write the result: {0}")]
    Io(#[from] io::Error),
}

impl AppError {
    /// Code de sortie du processus pour cette erreur
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Parse(_) => config::EXIT_PARSE_ERROR,
            AppError::Picker(_) => config::EXIT_DIALOG_UNAVAILABLE,
            AppError::Io(_) => config::EXIT_IO_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_nonzero() {
        let parse = AppError::from(ColorParseError::InvalidLength {
            input: "1234567".to_string(),
            len: 7,
        });
        let picker = AppError::from(PickerError::Unavailable("no display".to_string()));

        assert_eq!(parse.exit_code(), 1);
        assert_eq!(picker.exit_code(), 3);
    }

    #[test]
    fn test_messages() {
        let err = ColorParseError::InvalidChannel {
            input: "#GG0000".to_string(),
            channel: Channel::Red,
            digits: "GG".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid color \"#GG0000\": red channel \"GG\" is not hexadecimal"
        );
        assert_eq!(
            AppError::from(err.clone()).to_string(),
            err.to_string()
        );
    }
}
