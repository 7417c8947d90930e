//! Error types.
//!
//! Every error here is a caller-contract violation detected at the offending
//! call. Malformed elements and malformed visitors are ruled out by the type
//! system, so configuration is the only thing that can be rejected at runtime.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// Chunk capacity is zero, negative or does not fit in `usize`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Always false: every error is a programming error in the caller.
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Error::InvalidConfiguration(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_reason() {
        let err = Error::InvalidConfiguration("chunk capacity must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: chunk capacity must be positive, got 0"
        );
        assert!(err.is_invalid_configuration());
        assert!(!err.is_retryable());
    }
}
