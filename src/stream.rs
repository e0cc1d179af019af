//! One-shot sampling of iterators.
//!
//! Convenience wrappers for the common case where the whole stream is already
//! an iterator: drain it through a fresh [`Reservoir`] and hand back the
//! final sample.

use rand::prelude::*;

use crate::reservoir::{Reservoir, ReservoirError};

/// Draw a uniform sample of at most `k` items from `iter`.
///
/// Returns fewer than `k` items only when the iterator itself yields fewer.
/// Fails with [`ReservoirError::ZeroCapacity`] if `k == 0`.
pub fn sample_iter<I>(iter: I, k: usize) -> Result<Vec<I::Item>, ReservoirError>
where
    I: IntoIterator,
{
    let mut rng = rand::rng();
    sample_iter_with_rng(iter, k, &mut rng)
}

/// Draw a uniform sample of at most `k` items from `iter`, using a
/// caller-supplied RNG.
///
/// This exists primarily for deterministic testing/benchmarking.
pub fn sample_iter_with_rng<I, R>(
    iter: I,
    k: usize,
    rng: &mut R,
) -> Result<Vec<I::Item>, ReservoirError>
where
    I: IntoIterator,
    R: Rng + ?Sized,
{
    let mut reservoir = Reservoir::new(k)?;
    for item in iter {
        reservoir.add_with_rng(item, rng);
    }
    Ok(reservoir.into_samples())
}
