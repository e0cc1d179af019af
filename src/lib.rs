//! `taru`: fixed-capacity uniform reservoir sampling.
//!
//! Given an unbounded stream of items presented one at a time, a
//! [`Reservoir`] maintains a uniform random sample of at most `k` of the
//! items seen so far, in O(k) memory. This crate is meant to be a small
//! building block other crates can depend on without pulling in
//! domain-specific machinery.
//!
//! Exposed modules:
//! - `reservoir`: the [`Reservoir`] container (Algorithm R).
//! - `stream`: one-shot helpers for sampling whole iterators.
//!
//! ## Example
//!
//! ```
//! use taru::Reservoir;
//!
//! let mut reservoir = Reservoir::new(3)?;
//! for i in 0..10_000 {
//!     reservoir.add(i);
//! }
//!
//! let mut sample = vec![0; reservoir.cap()];
//! let n = reservoir.sample_into(&mut sample)?;
//! assert_eq!(n, 3);
//! # Ok::<(), taru::ReservoirError>(())
//! ```

#![forbid(unsafe_code)]

pub mod reservoir;
pub mod stream;

pub use reservoir::{Reservoir, ReservoirError};
pub use stream::{sample_iter, sample_iter_with_rng};
