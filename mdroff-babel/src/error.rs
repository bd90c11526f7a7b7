//! Error types for conversion operations

use std::io;
use thiserror::Error;

/// Errors that can occur while loading or converting a document
#[derive(Debug, Error)]
pub enum ConvertError {
    /// An input source could not be opened or read.
    ///
    /// `operation` names what was attempted (e.g. "Unable to open 'doc.md'"),
    /// `source` carries the OS-level description.
    #[error("{operation} [{source}]")]
    Load {
        operation: String,
        #[source]
        source: io::Error,
    },

    /// An inline code span was still open when the input ended.
    #[error("inline code (`) opened at line {line}, column {column} is never closed")]
    UnterminatedCodeSpan { line: usize, column: usize },
}

/// A dialect name that does not match any supported macro package
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Dialect '{0}' not found")]
pub struct UnknownDialect(pub String);

impl ConvertError {
    pub(crate) fn load(operation: impl Into<String>, source: io::Error) -> Self {
        ConvertError::Load {
            operation: operation.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_operation_and_os_error() {
        let err = ConvertError::load(
            "Unable to open 'missing.md'",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "Unable to open 'missing.md' [No such file or directory]"
        );
    }

    #[test]
    fn unterminated_code_span_reports_position() {
        let err = ConvertError::UnterminatedCodeSpan { line: 3, column: 7 };
        assert_eq!(
            err.to_string(),
            "inline code (`) opened at line 3, column 7 is never closed"
        );
    }
}
