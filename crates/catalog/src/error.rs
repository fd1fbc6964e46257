//! Error types for the catalog crate.
//!
//! Two layers:
//! - [`RecordParseError`] describes what is wrong with a single record line,
//!   independent of where the line came from.
//! - [`InvalidMediaDataError`] is what a catalog load reports: either the file
//!   itself could not be read, or a line failed, in which case the file name and
//!   1-based line number are attached.
//!
//! Keeping the line-level error separate lets the watch-history loader reuse the
//! same parser and decide for itself whether a bad line is fatal.

use crate::types::MediaKind;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

/// A media record was given a value outside its allowed domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Rating must be between 0.0 and 10.0, got {0}")]
    RatingOutOfRange(f64),
}

/// The numeric conversion that failed while parsing a record field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberFormatError {
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    #[error(transparent)]
    Integer(#[from] ParseIntError),
}

/// Why a single `Type,ID,Title,Genre,Rating,Duration,Extra` line was rejected.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordParseError {
    #[error("Insufficient data fields. Expected at least {expected}, got {found}")]
    TooFewFields { expected: usize, found: usize },

    #[error("Unknown media type '{0}'. Expected 'Series', 'Documentary', or 'Movie'")]
    UnknownMediaType(String),

    #[error("{kind} requires {expected} fields ({})", .kind.field_layout())]
    MissingExtraField { kind: MediaKind, expected: usize },

    #[error("Invalid number format in {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: NumberFormatError,
    },

    #[error("Invalid data values: {0}")]
    InvalidValue(#[from] ValidationError),
}

/// Errors raised while loading a catalog file.
///
/// Every variant names the file; line-level failures also carry the line number
/// so the user can find the offending record.
#[derive(Error, Debug)]
pub enum InvalidMediaDataError {
    /// The file could not be opened or read
    #[error("Error reading file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A record line could not be turned into a media record
    #[error("{file}, line {line}: {source}")]
    Line {
        file: String,
        line: usize,
        #[source]
        source: RecordParseError,
    },
}

impl InvalidMediaDataError {
    /// The 1-based line number of the offending record, if the failure was
    /// tied to a line.
    pub fn line(&self) -> Option<usize> {
        match self {
            InvalidMediaDataError::Io { .. } => None,
            InvalidMediaDataError::Line { line, .. } => Some(*line),
        }
    }
}

/// Convenience type alias for catalog loading results
pub type Result<T> = std::result::Result<T, InvalidMediaDataError>;
