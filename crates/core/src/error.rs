//! Error types for the pagination core.
//!
//! There is deliberately only one failure mode: a negative `first` or
//! `last` argument. Cursor decode failures are NOT errors - a malformed or
//! foreign cursor silently falls back to the default offset (see
//! [`crate::cursor::CursorCodec::decode`]), so that stale bookmarks degrade
//! to a default page instead of breaking the client.

use thiserror::Error;

/// Pagination argument violations.
///
/// Raised before any window arithmetic happens; a caller receiving this
/// should surface it as a client-facing bad-request condition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// A directional limit (`first` or `last`) was negative.
    #[error("argument \"{name}\" must be a non-negative integer, got {value}")]
    InvalidArgument {
        /// Which argument was rejected (`"first"` or `"last"`).
        name: &'static str,
        /// The offending value.
        value: i64,
    },
}

/// Result type for pagination operations.
pub type PaginationResult<T> = Result<T, PaginationError>;

#[cfg(test)]
mod tests {
    use super::*;

    // Test critique: le message d'erreur nomme l'argument fautif
    #[test]
    fn test_error_names_offending_argument() {
        let err = PaginationError::InvalidArgument {
            name: "first",
            value: -3,
        };
        let msg = err.to_string();
        assert!(msg.contains("first"));
        assert!(msg.contains("-3"));
    }
}
