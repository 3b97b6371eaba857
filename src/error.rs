//! Error types shared by the scalar and array layers.

use std::fmt;
use std::io;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, QuatError>;

/// Errors surfaced by quaternion construction, parsing, arithmetic and
/// array manipulation.
///
/// Operand-kind and keyword-combination errors of the reference surface
/// have no runtime representation here: an unsupported operand or a
/// missing constructor argument simply does not type-check. What remains
/// are the value-shaped failures.
#[derive(Debug)]
#[non_exhaustive]
pub enum QuatError {
    /// Operand has the right type but the wrong shape or content:
    /// malformed literal, byte length not a multiple of the slot size,
    /// stepped-slice length mismatch, degenerate rotation axis, element
    /// not present.
    Value(String),
    /// Index out of range for the current length.
    Index {
        /// The index as given, before negative-index normalisation.
        index: isize,
        /// Array length at the time of the access.
        len: usize,
    },
    /// A file read ended before the requested number of whole slots.
    Eof {
        /// Slots requested.
        requested: usize,
        /// Whole slots actually available.
        got: usize,
    },
    /// Input outside the mathematical domain of the function.
    Domain(&'static str),
    /// Division or inversion of the zero quaternion.
    DivisionByZero,
    /// An underlying stream failed during `to_file`/`from_file`.
    Io(io::Error),
}

impl QuatError {
    /// Builds a [`QuatError::Value`] from any message fragment.
    pub fn value(msg: impl Into<String>) -> Self {
        QuatError::Value(msg.into())
    }

    /// Builds a [`QuatError::Index`] for `index` against `len`.
    pub fn index(index: isize, len: usize) -> Self {
        QuatError::Index { index, len }
    }
}

impl fmt::Display for QuatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuatError::Value(msg) => write!(f, "invalid value: {msg}"),
            QuatError::Index { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            QuatError::Eof { requested, got } => {
                write!(f, "requested {requested} quaternions but only {got} available")
            }
            QuatError::Domain(what) => write!(f, "math domain error: {what}"),
            QuatError::DivisionByZero => write!(f, "division by zero quaternion"),
            QuatError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for QuatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuatError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for QuatError {
    fn from(err: io::Error) -> Self {
        QuatError::Io(err)
    }
}
