use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
#[cfg_attr(test, derive(PartialEq))]
#[error("invalid puzzle: {}", msg)]
pub struct InvalidPuzzle {
    msg: String,
}

impl InvalidPuzzle {
    pub(crate) fn new(msg: String) -> Self {
        Self { msg }
    }
}

#[derive(Error, Debug)]
pub enum PuzzleFromFileError {
    #[error("error reading puzzle file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

impl From<ParsePuzzleError> for PuzzleFromFileError {
    fn from(error: ParsePuzzleError) -> Self {
        match error {
            ParsePuzzleError::Parse(e) => PuzzleFromFileError::Parse(e),
            ParsePuzzleError::InvalidPuzzle(e) => PuzzleFromFileError::InvalidPuzzle(e),
        }
    }
}

pub const UNEXPECTED_END: ParseError = ParseError::from_type(ParsePuzzleErrorType::UnexpectedEnd);

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum ParsePuzzleError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    InvalidPuzzle(#[from] InvalidPuzzle),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParsePuzzleErrorType,
    token: Option<String>,
    index: Option<usize>,
}

impl ParseError {
    pub(crate) fn new(error_type: ParsePuzzleErrorType, token: impl Display, index: usize) -> Self {
        Self {
            error_type,
            token: Some(token.to_string()),
            index: Some(index),
        }
    }

    pub(crate) const fn from_type(error_type: ParsePuzzleErrorType) -> Self {
        Self {
            error_type,
            token: None,
            index: None,
        }
    }

    pub fn error_type(&self) -> ParsePuzzleErrorType {
        self.error_type
    }

    /// The character position of the offending token, if any
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParsePuzzleErrorType {
    InvalidNumber,
    InvalidToken,
    UnexpectedEnd,
    UnexpectedToken,
}

impl Display for ParsePuzzleErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParsePuzzleErrorType::InvalidNumber => "Invalid number",
            ParsePuzzleErrorType::InvalidToken => "Invalid token",
            ParsePuzzleErrorType::UnexpectedEnd => "Unexpected end",
            ParsePuzzleErrorType::UnexpectedToken => "Unexpected token",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(token) = &self.token {
            write!(f, ": \"{}\"", token)?;
        }
        if let Some(index) = &self.index {
            write!(f, " at {}", index)?;
        }
        Ok(())
    }
}
