//! Output-related errors

use std::fmt;
use std::error::Error;

pub enum OutputError {
    Conversion(String, String),
    Write(String),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OutputError::Conversion(s, t) => write!(f, "'{}' does not specify a valid {}", s, t),
            OutputError::Write(s) => write!(f, "failed to write table to '{}'", s),
        }
    }
}

impl fmt::Debug for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Error for OutputError {}

impl OutputError {
    pub fn conversion(field: &str, target: &str) -> Self {
        Self::Conversion(field.to_owned(), target.to_owned())
    }

    pub fn write(path: &std::path::Path) -> Self {
        Self::Write(path.display().to_string())
    }
}
