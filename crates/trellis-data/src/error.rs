//! Error types for keyed value tables.

use std::fmt;

/// One of the three axes of a keyed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Series,
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::Series => "series",
            Axis::Row => "row",
            Axis::Column => "column",
        };
        f.write_str(name)
    }
}

/// Errors raised when reading from a keyed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// An integer index was outside `0..len` for its axis.
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        len: usize,
    },

    /// A key lookup did not resolve on its axis.
    KeyNotFound {
        axis: Axis,
        /// Debug rendering of the missing key.
        key: String,
    },

    /// Serialized table data violated the table invariants.
    Malformed(String),
}

impl DataError {
    pub(crate) fn key_not_found(axis: Axis, key: &impl fmt::Debug) -> Self {
        DataError::KeyNotFound {
            axis,
            key: format!("{:?}", key),
        }
    }

    /// Check `index` against `len`, producing `IndexOutOfRange` on failure.
    pub(crate) fn check_index(axis: Axis, index: usize, len: usize) -> DataResult<usize> {
        if index < len {
            Ok(index)
        } else {
            Err(DataError::IndexOutOfRange { axis, index, len })
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::IndexOutOfRange { axis, index, len } => write!(
                f,
                "{} index {} out of range (count: {})",
                axis, index, len
            ),
            DataError::KeyNotFound { axis, key } => {
                write!(f, "{} key not found: {}", axis, key)
            }
            DataError::Malformed(reason) => write!(f, "Malformed table data: {}", reason),
        }
    }
}

impl std::error::Error for DataError {}

/// Result type for table access.
pub type DataResult<T> = Result<T, DataError>;
