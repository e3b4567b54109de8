use thiserror::Error;

/// Errors reported by sequence construction and iteration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// A bad value was handed to a constructor or chain method. Always reported
    /// by the call that received it, never deferred to iteration.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// `advance` was called on a cursor with no elements left.
    #[error("no elements remain in the sequence")]
    Exhausted,
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;

impl SeqError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        SeqError::InvalidArgument(message.into())
    }
}
