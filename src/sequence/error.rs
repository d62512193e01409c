//! Error types for sequence access.
//!
//! All sequence errors are fail-fast programmer errors: the structures are
//! immutable, so a failed operation never leaves partial state behind, and
//! nothing is retried or recovered internally.

/// Represents an access to an index outside a sequence's bounds.
///
/// Returned by [`Seq::get`](super::Seq::get) when the requested index is
/// greater than or equal to the sequence length. The transform chain is
/// never invoked for a rejected index.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::IndexOutOfRangeError;
///
/// let error = IndexOutOfRangeError { index: 4, length: 4 };
/// assert_eq!(
///     format!("{}", error),
///     "index 4 out of range for sequence of length 4"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRangeError {
    /// The rejected index.
    pub index: usize,
    /// The length of the sequence at the time of the call.
    pub length: usize,
}

impl std::fmt::Display for IndexOutOfRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "index {} out of range for sequence of length {}",
            self.index, self.length
        )
    }
}

impl std::error::Error for IndexOutOfRangeError {}

/// Represents errors that can occur when accessing a sequence.
///
/// This enum provides a unified error type for all sequence access errors.
/// Currently it only contains `IndexOutOfRange`, but it is designed to be
/// extensible for future error types.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::{IndexOutOfRangeError, SequenceError};
///
/// let error = SequenceError::IndexOutOfRange(IndexOutOfRangeError {
///     index: 2,
///     length: 0,
/// });
/// println!("{}", error);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested index was outside the sequence bounds.
    IndexOutOfRange(IndexOutOfRangeError),
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SequenceError {}

impl From<IndexOutOfRangeError> for SequenceError {
    fn from(error: IndexOutOfRangeError) -> Self {
        Self::IndexOutOfRange(error)
    }
}
