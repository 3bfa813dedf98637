//! Parser-facing error type.
//!
//! Mirrors the shape of the teacher's `ast::ParseError`: a human message plus
//! a position, wrapping the underlying `pest::error::Error` so `Display`
//! keeps pest's caret-pointing rendering for free.

use std::fmt;

use pest::error::{Error as PestError, ErrorVariant, LineColLocation};

use crate::parser::Rule;

/// Location of a parse failure (or, inside a successful parse, of a captured
/// span) within the source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// A single parse failure. The parser either returns a complete `ConfigFile`
/// or exactly one `ParseError` pinpointing the first unrecoverable mismatch;
/// there is no partial/recovered result.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub position: Position,
    pub expected: Vec<String>,
    inner: PestError<Rule>,
}

impl ParseError {
    pub(crate) fn from_pest(err: PestError<Rule>) -> Self {
        let (line, column) = match err.line_col {
            LineColLocation::Pos((line, col)) => (line, col),
            LineColLocation::Span((line, col), _) => (line, col),
        };
        let offset = match &err.location {
            pest::error::InputLocation::Pos(pos) => *pos,
            pest::error::InputLocation::Span((start, _)) => *start,
        };

        let expected = match &err.variant {
            ErrorVariant::ParsingError {
                positives,
                negatives: _,
            } => positives.iter().map(|rule| format!("{rule:?}")).collect(),
            ErrorVariant::CustomError { .. } => Vec::new(),
        };

        ParseError {
            message: err.variant.message().to_string(),
            position: Position {
                offset,
                line,
                column,
            },
            expected,
            inner: err,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl std::error::Error for ParseError {}
