use std::error::Error;
use std::fmt;

use crate::utils::constants::FIELDS_PER_RECORD;

/// A malformed input record. Recovered locally by the loader: the record is
/// reported and skipped, never fatal to the run.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadError {
    WrongFieldCount {
        line: usize,
        record: String,
        found: usize,
    },
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::WrongFieldCount {
                line,
                record,
                found,
            } => write!(
                f,
                "line {}: '{}' has {} field(s), expected {}",
                line, record, found, FIELDS_PER_RECORD
            ),
            LoadError::InvalidField { line, field, value } => {
                write!(f, "line {}: invalid {} '{}'", line, field, value)
            }
        }
    }
}

impl Error for LoadError {}
