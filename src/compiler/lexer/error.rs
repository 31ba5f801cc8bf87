use std::num::ParseIntError;

use crate::compiler::{source::Source, CompilerDisplay, CompilerDisplayError};

/// Errors which can be encountered while tokenizing a compilation unit
#[derive(Clone, PartialEq, Debug)]
pub enum LexerError {
    /// The character cannot start any token
    InvalidCharacter(char),

    /// A run of digits which does not fit in a 64 bit signed integer
    InvalidNumber(ParseIntError),
}

impl CompilerDisplay for LexerError {
    fn fmt(&self, _: &Source) -> Result<String, CompilerDisplayError> {
        use LexerError::*;
        let msg = match self {
            InvalidCharacter(c) => format!("Invalid token: '{}'", c),
            InvalidNumber(e) => format!("Invalid integer literal: {}", e),
        };

        Ok(msg)
    }
}

impl From<ParseIntError> for LexerError {
    fn from(e: ParseIntError) -> Self {
        Self::InvalidNumber(e)
    }
}
