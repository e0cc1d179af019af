//! Reservoir sampling.
//!
//! Maintains a uniform random sample of at most `k` items from a stream of
//! unknown length, using O(k) memory regardless of how many items flow past.
//!
//! Uses **Algorithm R** (Vitter, 1985): the first `k` items fill the
//! reservoir unconditionally; each later item `i` (1-based) replaces a
//! uniformly random slot with probability `k / i`. After any number of adds
//! the buffer is a uniform sample without replacement of size `min(seen, k)`.
//!
//! ## References
//!
//! - Vitter (1985): reservoir sampling “Algorithm R”.
//!
//! Notes:
//! - This module provides `*_with_rng` entrypoints for deterministic testing/benchmarking.
//! - The reservoir holds no lock. Concurrent `add` calls (or `add` racing a
//!   read) need external synchronization; one critical section per call suffices.

use rand::prelude::*;

/// Errors for reservoir construction and sample extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservoirError {
    /// Capacity must be at least 1.
    ZeroCapacity,
    /// Destination slice is shorter than the reservoir capacity.
    ShortDestination {
        /// The reservoir's capacity.
        capacity: usize,
        /// Length of the destination the caller supplied.
        len: usize,
    },
}

impl std::fmt::Display for ReservoirError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroCapacity => write!(f, "capacity must be at least 1"),
            Self::ShortDestination { capacity, len } => {
                write!(f, "destination too short (need {capacity}, got {len})")
            }
        }
    }
}

impl std::error::Error for ReservoirError {}

/// A fixed-capacity container holding a uniform random sample of a stream.
///
/// Items are folded in one at a time with [`add`](Reservoir::add); at any
/// point the reservoir holds a uniform sample of size `min(seen, k)` of
/// everything added so far.
#[derive(Debug, Clone)]
pub struct Reservoir<T> {
    capacity: usize,
    seen: usize,
    slots: Vec<T>,
}

impl<T> Reservoir<T> {
    /// Create a reservoir that keeps at most `capacity` items.
    ///
    /// Fails with [`ReservoirError::ZeroCapacity`] if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, ReservoirError> {
        if capacity == 0 {
            return Err(ReservoirError::ZeroCapacity);
        }
        Ok(Self {
            capacity,
            seen: 0,
            slots: Vec::with_capacity(capacity),
        })
    }

    /// Add an item from the stream.
    #[inline]
    pub fn add(&mut self, item: T) {
        let mut rng = rand::rng();
        self.add_with_rng(item, &mut rng);
    }

    /// Add an item from the stream, using a caller-supplied RNG.
    ///
    /// This exists primarily for deterministic testing/benchmarking.
    #[inline]
    pub fn add_with_rng<R: Rng + ?Sized>(&mut self, item: T, rng: &mut R) {
        self.seen += 1;

        // Phase 1: filling. The first `capacity` items are kept
        // unconditionally, in arrival order.
        if self.slots.len() < self.capacity {
            self.slots.push(item);
            return;
        }

        // Phase 2: Algorithm R. `seen` already counts this item, so the draw
        // ranges over [0, seen) and the item survives with probability k/seen.
        let j = rng.random_range(0..self.seen);
        if j < self.capacity {
            self.slots[j] = item;
        }
    }

    /// The capacity `k` fixed at construction.
    pub fn cap(&self) -> usize {
        self.capacity
    }

    /// Number of items observed so far.
    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Current sample size, `min(seen, k)`.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no items have been added yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Whether the reservoir has reached its capacity.
    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Read-only view of the current sample (size ≤ k).
    ///
    /// Slot order is an artifact of replacement and carries no meaning.
    pub fn samples(&self) -> &[T] {
        &self.slots
    }

    /// Consume the reservoir and return the sample.
    pub fn into_samples(self) -> Vec<T> {
        self.slots
    }
}

impl<T: Clone> Reservoir<T> {
    /// Copy the current sample into the prefix of `dest`, returning the
    /// number of elements written (`min(seen, k)`).
    ///
    /// `dest` must be at least [`cap`](Reservoir::cap) long so that a full
    /// reservoir always fits; shorter destinations fail with
    /// [`ReservoirError::ShortDestination`]. Read-only: calling this twice
    /// with no intervening `add` yields identical output.
    pub fn sample_into(&self, dest: &mut [T]) -> Result<usize, ReservoirError> {
        if dest.len() < self.capacity {
            return Err(ReservoirError::ShortDestination {
                capacity: self.capacity,
                len: dest.len(),
            });
        }
        dest[..self.slots.len()].clone_from_slice(&self.slots);
        Ok(self.slots.len())
    }

    /// Copy of the current sample.
    pub fn to_vec(&self) -> Vec<T> {
        self.slots.clone()
    }
}

impl<T> Extend<T> for Reservoir<T> {
    /// Fold every item of `iter` into the reservoir with the process RNG.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut rng = rand::rng();
        for item in iter {
            self.add_with_rng(item, &mut rng);
        }
    }
}
