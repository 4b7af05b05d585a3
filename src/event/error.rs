//! Errors raised by malformed event batches and frequency grids

use std::fmt;
use std::error::Error;

/// Why was a batch of events, or a frequency grid, rejected?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum ParameterErrorKind {
    Length,
    Domain,
    Shape,
}

/// Error returned when the parameters of an event batch are
/// inconsistent, unphysical, or do not fit the frequency grid.
pub struct ParameterError {
    kind: ParameterErrorKind,
    name: String,
    cause: String,
}

impl fmt::Debug for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParameterErrorKind::Length => write!(f, "Parameter \"{}\" has the wrong length: {}.", self.name, self.cause),
            ParameterErrorKind::Domain => write!(f, "Parameter \"{}\" is outside its physical domain: {}.", self.name, self.cause),
            ParameterErrorKind::Shape => write!(f, "Frequency grid does not match the event batch: {}.", self.cause),
        }
    }
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ParameterError {}

impl ParameterError {
    pub fn length(name: &str, expected: usize, found: usize) -> Self {
        Self {
            kind: ParameterErrorKind::Length,
            name: name.to_owned(),
            cause: format!("expected {} values, found {}", expected, found),
        }
    }

    pub fn domain(name: &str, index: usize, value: f64, bounds: &str) -> Self {
        Self {
            kind: ParameterErrorKind::Domain,
            name: name.to_owned(),
            cause: format!("event {} has {} = {:e}, require {}", index, name, value, bounds),
        }
    }

    pub fn shape(cause: &str) -> Self {
        Self {
            kind: ParameterErrorKind::Shape,
            name: String::new(),
            cause: cause.to_owned(),
        }
    }

    pub fn kind(&self) -> ParameterErrorKind {
        self.kind
    }
}
