//! # lazyseq
//!
//! Lazily-transformed immutable sequences for Rust.
//!
//! ## Overview
//!
//! This library provides [`Seq`](sequence::Seq), a read-only sequence over a
//! fixed snapshot of values. Transformations attached with `map` are composed
//! into a single chain and applied only at the moment an element is observed:
//!
//! - **Defensive snapshots**: construction copies the source elements once;
//!   later changes to the source never affect the sequence.
//! - **Lazy transform chains**: `map` is O(1) and invokes nothing; the
//!   composed chain runs exactly once per materialized element.
//! - **Splittable partitions**: traversal can be decomposed into balanced,
//!   disjoint index ranges for divide-and-conquer consumption.
//!
//! ## Feature Flags
//!
//! - `arc`: share the backing store and transform chain with `Arc` instead
//!   of `Rc`, making sequences `Send + Sync` when their contents are
//! - `rayon`: parallel consumption through rayon (implies `arc`)
//!
//! ## Example
//!
//! ```rust
//! use lazyseq::seq;
//!
//! let sequence = seq![1, 2, 3].map(|value| value * 2);
//!
//! // Nothing has been computed yet; materialize through traversal.
//! let doubled: Vec<i32> = sequence.iter().collect();
//! assert_eq!(doubled, vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazyseq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;
}

pub mod sequence;
