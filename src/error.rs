//! Error enum
use std::fmt;
use std::num::ParseFloatError;
use std::ops::Range;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Serde(serde_json::Error),
    ParseFloat(ParseFloatError),
    /// Timestamp that can't be mapped to a calendar date.
    Timestamp(f64),
    /// A line of a record that has no `key: value` shape.
    MalformedRecord { lines: Range<usize>, line: String },
    /// A record that lacks one of the fields needed for reduction.
    MissingField {
        lines: Range<usize>,
        field: &'static str,
    },
    /// Score that isn't a finite number.
    Score(f64),
    UnknownLanguage(String),
}

impl Error {
    /// Errors that only concern a single record.
    ///
    /// These are reported and skipped unless the pipeline runs in strict mode.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            Error::MalformedRecord { .. } | Error::MissingField { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {}", e),
            Error::Serde(e) => write!(f, "serialization error: {}", e),
            Error::ParseFloat(e) => write!(f, "invalid number: {}", e),
            Error::Timestamp(ts) => write!(f, "timestamp out of range: {}", ts),
            Error::Score(s) => write!(f, "score is not a finite number: {}", s),
            Error::MalformedRecord { lines, line } => write!(
                f,
                "malformed record (lines {}..{}): {:?}",
                lines.start, lines.end, line
            ),
            Error::MissingField { lines, field } => write!(
                f,
                "record (lines {}..{}) has no {} field",
                lines.start, lines.end, field
            ),
            Error::UnknownLanguage(l) => write!(f, "no stopword list for language {:?}", l),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serde(e)
    }
}

impl From<ParseFloatError> for Error {
    fn from(e: ParseFloatError) -> Error {
        Error::ParseFloat(e)
    }
}
