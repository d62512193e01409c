//! Lazily-transformed immutable sequence.
//!
//! This module provides [`Seq`], a read-only sequence pairing an immutable
//! snapshot of source elements with a composed transform chain that runs
//! only at materialization time.

use std::fmt;
use std::iter::FromIterator;

use super::error::{IndexOutOfRangeError, SequenceError};
use super::iter::{SeqIntoIterator, SeqIterator};
use super::partition::Partition;
use super::{ReferenceCounter, SharedBound, TransformChain};

// =============================================================================
// Seq Definition
// =============================================================================

/// A lazily-transformed immutable sequence.
///
/// `Seq<S, T>` pairs a defensively copied backing store of source elements
/// `S` with a composed transform chain producing exposed elements `T`.
/// Freshly constructed sequences expose their source elements unchanged,
/// so the exposed type defaults to the source type: `Seq<i32>` is
/// `Seq<i32, i32>`.
///
/// # Time Complexity
///
/// | Operation   | Complexity          |
/// |-------------|---------------------|
/// | construction| O(n)                |
/// | `get`       | O(1) + chain        |
/// | `len`       | O(1)                |
/// | `map`       | O(1), invokes nothing |
/// | traversal   | O(n), chain once per element |
///
/// # Sharing
///
/// The backing store is shared read-only between the original sequence,
/// every sequence derived from it via [`map`](Self::map), and every
/// [`Partition`] created from any of them. Cloning a sequence is cheap:
/// only reference counts change.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Seq;
///
/// let sequence = Seq::from_collection(vec![101, 201, 301]);
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.get(1), Ok(201));
///
/// let doubled = sequence.map(|value| value * 2);
/// assert_eq!(doubled.get(1), Ok(402));
///
/// // The original sequence is untouched by `map`.
/// assert_eq!(sequence.get(1), Ok(201));
/// ```
pub struct Seq<S, T = S> {
    /// Immutable snapshot of the source elements.
    pub(crate) store: ReferenceCounter<[S]>,
    /// Number of elements; fixed for the lifetime of the sequence.
    pub(crate) length: usize,
    /// Composed transform chain applied at materialization time.
    pub(crate) chain: ReferenceCounter<TransformChain<S, T>>,
}

// =============================================================================
// Construction
// =============================================================================

impl<S: Clone + 'static> Seq<S> {
    /// Creates an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence: Seq<i32> = Seq::new();
    /// assert!(sequence.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::from_collection(std::iter::empty())
    }

    /// Creates a sequence containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::singleton(42);
    /// assert_eq!(sequence.len(), 1);
    /// assert_eq!(sequence.first(), Some(42));
    /// ```
    #[must_use]
    pub fn singleton(element: S) -> Self {
        Self::from_collection(std::iter::once(element))
    }

    /// Creates a sequence by copying every element of `collection` into a
    /// new immutable backing store.
    ///
    /// The copy is a snapshot: the sequence takes ownership of the
    /// elements, so nothing the caller does afterwards can change the
    /// sequence's size or contents. The transform chain starts as the
    /// identity and nothing is transformed during construction.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec!["78", "56", "34", "23"]);
    /// assert_eq!(sequence.len(), 4);
    /// ```
    pub fn from_collection<I>(collection: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let store: ReferenceCounter<[S]> = collection.into_iter().collect();
        let length = store.len();
        Self {
            store,
            length,
            chain: ReferenceCounter::new(|element: &S| element.clone()),
        }
    }

    /// Creates a sequence by cloning the elements of a borrowed slice.
    ///
    /// Subsequent mutation of the source collection leaves the sequence
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let mut source = vec![4, 5, 8];
    /// let sequence = Seq::from_slice(&source);
    ///
    /// source.push(10);
    /// assert_eq!(sequence.len(), 3);
    /// ```
    pub fn from_slice(slice: &[S]) -> Self {
        Self::from_collection(slice.iter().cloned())
    }
}

// =============================================================================
// Element Access
// =============================================================================

impl<S: 'static, T: 'static> Seq<S, T> {
    /// Returns the number of elements in the sequence.
    ///
    /// The length is fixed at construction time and never changed by
    /// [`map`](Self::map). The transform chain is not invoked.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the sequence contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Materializes the element at `index` through the transform chain.
    ///
    /// The chain is invoked exactly once per call, even for repeated calls
    /// on the same index; transformed values are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::IndexOutOfRange`] if `index >= len()`. The
    /// chain is not invoked for a rejected index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec![24, 36]);
    /// assert_eq!(sequence.get(0), Ok(24));
    /// assert!(sequence.get(2).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<T, SequenceError> {
        match self.store.get(index) {
            Some(element) => Ok((self.chain)(element)),
            None => Err(SequenceError::IndexOutOfRange(IndexOutOfRangeError {
                index,
                length: self.length,
            })),
        }
    }

    /// Materializes the first element, or returns `None` if the sequence
    /// is empty.
    ///
    /// The chain is invoked exactly once when an element exists, and never
    /// on an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec![11, 13]);
    /// assert_eq!(sequence.first(), Some(11));
    ///
    /// let empty: Seq<i32> = Seq::new();
    /// assert_eq!(empty.first(), None);
    /// ```
    #[must_use]
    pub fn first(&self) -> Option<T> {
        self.store.first().map(|element| (self.chain)(element))
    }

    /// Applies `consumer` to every element in original order.
    ///
    /// The transform chain and the consumer run exactly once per element.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec![1, 2, 3]);
    /// let mut collected = Vec::new();
    /// sequence.for_each(|value| collected.push(value));
    /// assert_eq!(collected, vec![1, 2, 3]);
    /// ```
    pub fn for_each<F>(&self, mut consumer: F)
    where
        F: FnMut(T),
    {
        for element in self.store.iter() {
            consumer((self.chain)(element));
        }
    }

    /// Returns a borrowing iterator materializing one element per step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec![25, 52]);
    /// let collected: Vec<i32> = sequence.iter().collect();
    /// assert_eq!(collected, vec![25, 52]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> SeqIterator<'_, S, T> {
        SeqIterator::new(self)
    }

    /// Creates a partition covering the whole sequence.
    ///
    /// The partition shares the backing store and transform chain with the
    /// sequence and can be recursively divided with
    /// [`Partition::try_split`] before being consumed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec![1, 2, 3, 4]);
    /// let mut partition = sequence.partition();
    /// assert_eq!(partition.len(), 4);
    ///
    /// let front = partition.try_split().unwrap();
    /// assert_eq!(front.len(), 2);
    /// assert_eq!(partition.len(), 2);
    /// ```
    #[must_use]
    pub fn partition(&self) -> Partition<S, T> {
        Partition::from_parts(
            ReferenceCounter::clone(&self.store),
            ReferenceCounter::clone(&self.chain),
            0,
            self.length,
        )
    }
}

// =============================================================================
// Transform Composition
// =============================================================================

impl<S: 'static, T: 'static> Seq<S, T> {
    /// Returns a new sequence with `function` composed onto the transform
    /// chain.
    ///
    /// The new sequence shares the backing store with `self`; only the
    /// chain grows. This call performs no iteration and invokes neither
    /// the existing chain nor `function`: the composed chain runs only
    /// when an element is materialized. Composition is associative:
    /// `sequence.map(f).map(g)` materializes every element exactly as
    /// `sequence.map(|value| g(f(value)))` does.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::sequence::Seq;
    ///
    /// let sequence = Seq::from_collection(vec!["1", "2"]);
    /// let parsed = sequence.map(|text| text.parse::<i32>().unwrap());
    ///
    /// let collected: Vec<i32> = parsed.iter().collect();
    /// assert_eq!(collected, vec![1, 2]);
    /// ```
    #[must_use]
    pub fn map<U, F>(&self, function: F) -> Seq<S, U>
    where
        U: 'static,
        F: Fn(T) -> U + SharedBound + 'static,
    {
        let chain = ReferenceCounter::clone(&self.chain);
        Seq {
            store: ReferenceCounter::clone(&self.store),
            length: self.length,
            chain: ReferenceCounter::new(move |element: &S| function(chain(element))),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<S: Clone + 'static> Default for Seq<S> {
    /// Creates an empty sequence.
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + 'static> FromIterator<S> for Seq<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_collection(iter)
    }
}

impl<S, T> Clone for Seq<S, T> {
    /// Clones the sequence by bumping reference counts; no element is
    /// copied and the chain is not invoked.
    fn clone(&self) -> Self {
        Self {
            store: ReferenceCounter::clone(&self.store),
            length: self.length,
            chain: ReferenceCounter::clone(&self.chain),
        }
    }
}

impl<S: 'static, T: fmt::Debug + 'static> fmt::Debug for Seq<S, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<S: 'static, T: fmt::Display + 'static> fmt::Display for Seq<S, T> {
    /// Renders the materialized elements as `"<e0, e1, ..., en-1>"`, or
    /// `"<>"` for an empty sequence (the chain is not invoked then).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::seq;
    ///
    /// assert_eq!(seq![8, 5, 3].to_string(), "<8, 5, 3>");
    ///
    /// let empty: lazyseq::sequence::Seq<i32> = seq![];
    /// assert_eq!(empty.to_string(), "<>");
    /// ```
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ">")
    }
}

// =============================================================================
// Macros
// =============================================================================

/// Creates a [`Seq`](crate::sequence::Seq) from literal values.
///
/// `seq![a, b, c]` builds a sequence containing `a`, `b`, `c` in order;
/// `seq![]` builds an empty sequence (the element type must be inferable
/// or annotated).
///
/// # Examples
///
/// ```rust
/// use lazyseq::seq;
///
/// let sequence = seq![8, 5, 3];
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.to_string(), "<8, 5, 3>");
///
/// let empty: lazyseq::sequence::Seq<i32> = seq![];
/// assert_eq!(empty.to_string(), "<>");
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::sequence::Seq::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::sequence::Seq::from_collection([$($element),+])
    };
}

// =============================================================================
// Send/Sync Surface
// =============================================================================

// Sequences share their store and chain by reference counting; whether they
// may cross threads is decided by the `arc` feature.
#[cfg(feature = "arc")]
mod send_sync_verification {
    use super::Seq;
    static_assertions::assert_impl_all!(Seq<i32>: Send, Sync);
    static_assertions::assert_impl_all!(Seq<String, usize>: Send, Sync);
}

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Seq<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[rstest]
    fn test_from_collection_size() {
        let sequence = Seq::from_collection(vec!["78", "56", "34", "23"]);
        assert_eq!(sequence.len(), 4);
    }

    #[rstest]
    fn test_from_collection_empty() {
        let sequence: Seq<i32> = Seq::from_collection(Vec::new());
        assert_eq!(sequence.len(), 0);
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_from_collection_get() {
        let sequence = Seq::from_collection(vec![101, 201, 301]);
        assert_eq!(sequence.get(0), Ok(101));
        assert_eq!(sequence.get(1), Ok(201));
        assert_eq!(sequence.get(2), Ok(301));
    }

    #[rstest]
    fn test_get_out_of_bounds() {
        let sequence = Seq::from_collection(vec![24, 36]);
        assert_eq!(
            sequence.get(2),
            Err(SequenceError::IndexOutOfRange(IndexOutOfRangeError {
                index: 2,
                length: 2,
            }))
        );
    }

    #[rstest]
    fn test_get_not_called_if_out_of_bounds() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sequence = Seq::from_collection(vec![24, 36]).map(move |value| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert!(sequence.get(2).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_from_slice_snapshot_is_independent() {
        let mut source = vec![4, 5, 8];
        let sequence = Seq::from_slice(&source);

        source.push(10);
        source[0] = 99;

        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.get(0), Ok(4));
    }

    #[rstest]
    fn test_singleton() {
        let sequence = Seq::singleton("hello");
        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence.first(), Some("hello"));
    }

    #[rstest]
    fn test_seq_macro() {
        let sequence = seq![8, 5, 3];
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.get(0), Ok(8));
        assert_eq!(sequence.get(2), Ok(3));
    }

    #[rstest]
    fn test_seq_macro_empty() {
        let sequence: Seq<i32> = seq![];
        assert!(sequence.is_empty());
    }

    #[rstest]
    fn test_collect_into_seq() {
        let sequence: Seq<i32> = (0..5).collect();
        assert_eq!(sequence.len(), 5);
        assert_eq!(sequence.get(4), Ok(4));
    }

    // map

    #[rstest]
    fn test_map_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sequence = seq![42, 777].map(move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert_eq!(sequence.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_map_chain_stays_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let first_counter = Arc::clone(&calls);
        let second_counter = Arc::clone(&calls);
        let sequence = seq![42, 777]
            .map(move |value: i32| {
                first_counter.fetch_add(1, Ordering::SeqCst);
                value
            })
            .map(move |value: i32| {
                second_counter.fetch_add(1, Ordering::SeqCst);
                value
            });

        assert_eq!(sequence.len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn test_map_get() {
        let sequence = seq![101, 201, 301].map(|value| 2 * value);
        assert_eq!(sequence.get(0), Ok(202));
        assert_eq!(sequence.get(1), Ok(402));
        assert_eq!(sequence.get(2), Ok(602));
    }

    #[rstest]
    fn test_map_does_not_memoize() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sequence = seq![7].map(move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert_eq!(sequence.get(0), Ok(7));
        assert_eq!(sequence.get(0), Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_map_preserves_original() {
        let sequence = seq![1, 2];
        let doubled = sequence.map(|value| value * 2);

        assert_eq!(sequence.get(0), Ok(1));
        assert_eq!(doubled.get(0), Ok(2));
    }

    #[rstest]
    fn test_map_composition_matches_composed_function() {
        let chained = seq![3, 4].map(|value| value + 1).map(|value| value * 10);
        let composed = seq![3, 4].map(|value| (value + 1) * 10);

        for index in 0..2 {
            assert_eq!(chained.get(index), composed.get(index));
        }
    }

    #[rstest]
    fn test_map_changes_type() {
        let sequence = seq![1, 2, 3].map(|value| value.to_string());
        assert_eq!(sequence.get(1), Ok("2".to_string()));
    }

    // first

    #[rstest]
    fn test_first_simple() {
        assert_eq!(seq!["1", "2"].first(), Some("1"));
        assert_eq!(seq![11, 13].first(), Some(11));
    }

    #[rstest]
    fn test_first_empty() {
        let empty: Seq<i32> = seq![];
        assert_eq!(empty.first(), None);
    }

    #[rstest]
    fn test_first_invokes_chain_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sequence = seq![1, 8, 45].map(move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert_eq!(sequence.first(), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_first_not_called_on_empty_mapped_sequence() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let empty: Seq<i32> = seq![];
        let sequence = empty.map(move |value: i32| {
            counter.fetch_add(1, Ordering::SeqCst);
            value
        });

        assert_eq!(sequence.first(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    // for_each

    #[rstest]
    fn test_for_each_visits_in_order() {
        let sequence = seq!["1", "2", "3"].map(|text| text.parse::<i32>().unwrap());
        let mut collected = Vec::new();
        sequence.for_each(|value| collected.push(value));
        assert_eq!(collected, vec![1, 2, 3]);
    }

    #[rstest]
    fn test_for_each_empty_never_calls_consumer() {
        let empty: Seq<i32> = seq![];
        empty.for_each(|_| panic!("consumer must not run on an empty sequence"));
    }

    // rendering

    #[rstest]
    fn test_display() {
        assert_eq!(seq![8, 5, 3].to_string(), "<8, 5, 3>");
    }

    #[rstest]
    fn test_display_one_element() {
        assert_eq!(seq!["hello"].to_string(), "<hello>");
    }

    #[rstest]
    fn test_display_empty() {
        let empty: Seq<i32> = seq![];
        assert_eq!(empty.to_string(), "<>");
    }

    #[rstest]
    fn test_display_mapped() {
        let sequence = seq![10, 20].map(|value| value * 2);
        assert_eq!(sequence.to_string(), "<20, 40>");
    }

    #[rstest]
    fn test_display_empty_never_invokes_chain() {
        let empty: Seq<i32> = seq![];
        let sequence = empty.map(|_: i32| -> i32 { panic!("chain must not run") });
        assert_eq!(sequence.to_string(), "<>");
    }

    #[rstest]
    fn test_debug_renders_like_a_list() {
        let sequence = seq![1, 2].map(|value| value + 1);
        assert_eq!(format!("{sequence:?}"), "[2, 3]");
    }

    // clone / sharing

    #[rstest]
    fn test_clone_shares_store() {
        let sequence = seq![1, 2, 3];
        let cloned = sequence.clone();
        assert!(ReferenceCounter::ptr_eq(&sequence.store, &cloned.store));
    }

    #[rstest]
    fn test_map_shares_store() {
        let sequence = seq![1, 2, 3];
        let mapped = sequence.map(|value| value * 2);
        assert!(ReferenceCounter::ptr_eq(&sequence.store, &mapped.store));
    }

    #[rstest]
    fn test_default_is_empty() {
        let sequence: Seq<String> = Seq::default();
        assert!(sequence.is_empty());
    }
}
