//! Error types.

use thiserror::Error;

/// Errors returned by the queue operations.
///
/// Every failing call leaves the queue untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    /// A `CyclicQueue` was asked for a backing store that cannot hold anything.
    #[error("invalid capacity: {0}, a queue needs room for at least one element")]
    InvalidCapacity(usize),
    /// `dequeue` or `peek` was called on a queue with no elements.
    #[error("the queue is empty")]
    EmptyQueue,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(QueueError::EmptyQueue.to_string(), "the queue is empty");
        assert_eq!(
            QueueError::InvalidCapacity(0).to_string(),
            "invalid capacity: 0, a queue needs room for at least one element"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(QueueError::EmptyQueue);
    }
}
