//! Error types for table elements.

use std::fmt;

/// Errors raised when configuring table elements.
#[derive(Debug, Clone, PartialEq)]
pub enum TableError {
    /// An argument was rejected at construction or configuration time.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl TableError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::warn!(argument = name, %reason, "rejected table element argument");
        TableError::InvalidArgument { name, reason }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument { name, reason } => {
                write!(f, "Invalid argument '{}': {}", name, reason)
            }
        }
    }
}

impl std::error::Error for TableError {}

/// Result type for table element configuration.
pub type TableResult<T> = Result<T, TableError>;
