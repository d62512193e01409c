//! Lazily-transformed immutable sequences.
//!
//! This module provides [`Seq`], a read-only sequence over a defensively
//! copied snapshot of values, together with its traversal adapters:
//!
//! - [`Seq`]: the sequence itself (construction, random access, `map`)
//! - [`SeqIterator`] / [`SeqIntoIterator`]: sequential cursors
//! - [`Partition`]: a splittable index-range cursor for divide-and-conquer
//!   consumption
//!
//! # Snapshot Semantics
//!
//! Construction copies the source elements exactly once into an immutable
//! backing store. The store is shared, read-only, by the original sequence,
//! by every sequence derived from it via [`Seq::map`], and by every
//! [`Partition`] created from any of them.
//!
//! ```rust
//! use lazyseq::sequence::Seq;
//!
//! let mut source = vec![4, 5, 8];
//! let sequence = Seq::from_slice(&source);
//!
//! // Mutating the source afterwards does not affect the snapshot.
//! source.push(10);
//! assert_eq!(sequence.len(), 3);
//! ```
//!
//! # Laziness
//!
//! [`Seq::map`] composes a new function onto the transform chain in O(1)
//! and invokes nothing. The full chain runs exactly once per element, at
//! the moment that element is materialized through `get`, `first`,
//! iteration, `for_each`, or partition consumption. Transformed values are
//! never cached.
//!
//! ```rust
//! use lazyseq::seq;
//!
//! let sequence = seq!["1", "2"].map(|text| text.parse::<i32>().unwrap());
//!
//! // `map` ran nothing; `len` still runs nothing.
//! assert_eq!(sequence.len(), 2);
//!
//! let parsed: Vec<i32> = sequence.iter().collect();
//! assert_eq!(parsed, vec![1, 2]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

// =============================================================================
// Transform Chain Type Alias
// =============================================================================

/// The composed transform chain stored by a sequence: a pure function from
/// a stored element to the exposed element type.
///
/// Under the `arc` feature the chain crosses thread boundaries together
/// with the backing store, so it must additionally be `Send + Sync`.
#[cfg(feature = "arc")]
pub(crate) type TransformChain<Source, Output> = dyn Fn(&Source) -> Output + Send + Sync;

#[cfg(not(feature = "arc"))]
pub(crate) type TransformChain<Source, Output> = dyn Fn(&Source) -> Output;

// =============================================================================
// Shared Bound Marker
// =============================================================================

/// Marker bound for functions a sequence stores in its transform chain.
///
/// With the `arc` feature enabled this requires `Send + Sync`, so that
/// sequences and partitions holding the function can cross thread
/// boundaries. Without `arc` the bound is empty and sequences stay
/// single-threaded.
///
/// The trait is implemented blanket-wise; callers never implement it by
/// hand.
#[cfg(feature = "arc")]
pub trait SharedBound: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync> SharedBound for T {}

/// Marker bound for functions a sequence stores in its transform chain.
///
/// With the `arc` feature enabled this requires `Send + Sync`, so that
/// sequences and partitions holding the function can cross thread
/// boundaries. Without `arc` the bound is empty and sequences stay
/// single-threaded.
///
/// The trait is implemented blanket-wise; callers never implement it by
/// hand.
#[cfg(not(feature = "arc"))]
pub trait SharedBound {}

#[cfg(not(feature = "arc"))]
impl<T> SharedBound for T {}

mod error;
mod iter;
mod partition;
mod seq;

#[cfg(feature = "rayon")]
mod parallel;

pub use error::IndexOutOfRangeError;
pub use error::SequenceError;
pub use iter::SeqIntoIterator;
pub use iter::SeqIterator;
pub use partition::Characteristics;
pub use partition::Partition;
pub use seq::Seq;

// Rayon parallel iterator re-export
#[cfg(feature = "rayon")]
pub use parallel::SeqParallelIterator;

// =============================================================================
// Tests
// =============================================================================
