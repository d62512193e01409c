//! Parallel consumption of sequences through rayon.
//!
//! Requires the `rayon` feature (which implies `arc`). The bridge hands
//! rayon a producer wrapping a [`Partition`]; rayon's scheduler splits the
//! producer recursively and drains the resulting tiles on its worker
//! threads. Because the indexed bridge is used, order-sensitive consumers
//! such as `collect` see the elements in their original order.

use rayon::iter::plumbing::{Consumer, Producer, ProducerCallback, UnindexedConsumer, bridge};
use rayon::iter::{IndexedParallelIterator, IntoParallelIterator, ParallelIterator};

use super::partition::Partition;
use super::seq::Seq;

// =============================================================================
// SeqParallelIterator
// =============================================================================

/// A parallel iterator over a lazily-transformed sequence.
///
/// Created by [`Seq::par_iter`] or by converting a sequence with
/// `into_par_iter`. Each element is materialized through the transform
/// chain exactly once, on whichever worker thread drains its tile.
///
/// # Examples
///
/// ```rust
/// use lazyseq::sequence::Seq;
/// use rayon::prelude::*;
///
/// let sequence = Seq::from_collection(0..1_000).map(|value| value * 2);
/// let collected: Vec<i32> = sequence.par_iter().collect();
///
/// assert_eq!(collected.len(), 1_000);
/// assert_eq!(collected[10], 20);
/// ```
pub struct SeqParallelIterator<S, T> {
    partition: Partition<S, T>,
}

impl<S, T> Seq<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    /// Returns a parallel iterator over the sequence.
    ///
    /// The iterator shares the backing store and transform chain with the
    /// sequence; no element is copied or transformed until a worker thread
    /// drains it.
    #[must_use]
    pub fn par_iter(&self) -> SeqParallelIterator<S, T> {
        SeqParallelIterator {
            partition: self.partition(),
        }
    }
}

impl<S, T> ParallelIterator for SeqParallelIterator<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    type Item = T;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn opt_len(&self) -> Option<usize> {
        Some(self.partition.len())
    }
}

impl<S, T> IndexedParallelIterator for SeqParallelIterator<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    fn len(&self) -> usize {
        self.partition.len()
    }

    fn drive<C>(self, consumer: C) -> C::Result
    where
        C: Consumer<Self::Item>,
    {
        bridge(self, consumer)
    }

    fn with_producer<CB>(self, callback: CB) -> CB::Output
    where
        CB: ProducerCallback<Self::Item>,
    {
        callback.callback(PartitionProducer {
            partition: self.partition,
        })
    }
}

impl<S, T> IntoParallelIterator for Seq<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    type Iter = SeqParallelIterator<S, T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        SeqParallelIterator {
            partition: self.partition(),
        }
    }
}

impl<'a, S, T> IntoParallelIterator for &'a Seq<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    type Iter = SeqParallelIterator<S, T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        self.par_iter()
    }
}

// =============================================================================
// Producer
// =============================================================================

/// Rayon producer wrapping a [`Partition`].
///
/// `split_at` tiles the remaining range at the index rayon chooses;
/// `into_iter` is the partition itself, drained front-to-back (and
/// back-to-front when rayon consumes in reverse).
struct PartitionProducer<S, T> {
    partition: Partition<S, T>,
}

impl<S, T> Producer for PartitionProducer<S, T>
where
    S: Send + Sync + 'static,
    T: Send + 'static,
{
    type Item = T;
    type IntoIter = Partition<S, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.partition
    }

    fn split_at(self, index: usize) -> (Self, Self) {
        let (front, back) = self.partition.split_at(index);
        (
            Self { partition: front },
            Self { partition: back },
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
