//! Errors raised while loading a table of quasi-normal modes

use std::fmt;
use std::error::Error;

/// Why was a QNM table rejected?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum TableErrorKind {
    File,
    Parse,
    Length,
    TooShort,
    Ordering,
    NonFinite,
}

/// Error returned when a QNM table cannot be read, or does
/// not describe a valid interpolant.
pub struct TableError {
    kind: TableErrorKind,
    path: String,
    cause: String,
}

impl fmt::Debug for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            TableErrorKind::File => write!(f, "Unable to read QNM data file \"{}\".", self.path),
            TableErrorKind::Parse => write!(f, "Failed to parse \"{}\" in QNM data file \"{}\" as a number.", self.cause, self.path),
            TableErrorKind::Length => write!(f, "QNM table columns have unequal lengths: {}.", self.cause),
            TableErrorKind::TooShort => write!(f, "QNM table has {} rows, at least two are required.", self.cause),
            TableErrorKind::Ordering => write!(f, "QNM table spins must be strictly increasing: {}.", self.cause),
            TableErrorKind::NonFinite => write!(f, "QNM table contains a non-finite value in row {}.", self.cause),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for TableError {}

impl TableError {
    pub fn file(path: &str) -> Self {
        Self {
            kind: TableErrorKind::File,
            path: path.to_owned(),
            cause: String::new(),
        }
    }

    pub fn parse(path: &str, token: &str) -> Self {
        Self {
            kind: TableErrorKind::Parse,
            path: path.to_owned(),
            cause: token.to_owned(),
        }
    }

    pub fn length(spins: usize, ringdown: usize, damping: usize) -> Self {
        Self {
            kind: TableErrorKind::Length,
            path: String::new(),
            cause: format!("{} spins, {} ringdown and {} damping frequencies", spins, ringdown, damping),
        }
    }

    pub fn too_short(rows: usize) -> Self {
        Self {
            kind: TableErrorKind::TooShort,
            path: String::new(),
            cause: rows.to_string(),
        }
    }

    pub fn ordering(row: usize, prev: f64, next: f64) -> Self {
        Self {
            kind: TableErrorKind::Ordering,
            path: String::new(),
            cause: format!("row {} has a = {:e} after a = {:e}", row, next, prev),
        }
    }

    pub fn non_finite(row: usize) -> Self {
        Self {
            kind: TableErrorKind::NonFinite,
            path: String::new(),
            cause: row.to_string(),
        }
    }

    pub fn kind(&self) -> TableErrorKind {
        self.kind
    }
}
