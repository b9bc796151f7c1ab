//! # Lazy pull-based iterators
//!
//! This library implements a small lazy iterator engine over three kinds of
//! data source: in-memory sequences, blocking queues, and arbitrary pull
//! functions.
//!
//! ## Pull Model
//!
//! 1. **Source adapters** build an [`Iter`] from a sequence, a queue or a closure
//! 2. **Combinators** wrap an iterator into a new one without doing any work
//! 3. **Terminal operations** drain an iterator into a concrete value
//!
//! No stage runs ahead of demand: a combinator only pulls from its upstream
//! when it is itself pulled from downstream.
//!
//! ## Exhaustion
//!
//! [`Iter::next`] returns `Some(value)` while elements remain and `None` once
//! the iterator is exhausted. Exhaustion is terminal: every pull after the
//! first `None` returns `None` again.
//!
//! ## Hazards
//!
//! Iterators may be infinite, and a queue-backed iterator blocks until its
//! producer sends a value or closes the queue. Draining terminal operations
//! such as [`to_vec`] and [`reduce`] never return on such sources. Bound them
//! with [`take`] first. Nothing here detects or times out a hang.
//!
//! ## Usage Example
//!
//! ```
//! use pulliter::{from_sequence, Iter};
//!
//! let evens = from_sequence(vec![1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .take(2)
//!     .to_vec();
//! assert_eq!(evens, vec![20, 40]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - one per stage of a pipeline
pub mod iter;       // Pull protocol and std bridge
pub mod source;     // Source adapters
pub mod combinator; // Lazy combinators
pub mod terminal;   // Draining operations

// Re-exports for convenience
pub use iter::{BoxIter, IntoStd, Iter};
pub use source::{
    empty, from_function, from_queue, from_sequence, from_std, BlockingQueue, Empty,
    FromFunction, FromQueue, FromSequence, FromStd, Sequence,
};
pub use combinator::{chunk_every, filter, map, skip, take, ChunkEvery, Filter, Map, Skip, Take};
pub use terminal::{
    all, any, count, count_of, each, max, min, reduce, sum, to_vec, to_vec_bounded,
};

use thiserror::Error;

/// Errors reported by the operations that have a genuine failure mode
///
/// The pull protocol itself never fails: absence of a value is `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IterError {
    /// Chunk size was zero, negative, or not representable as `usize`
    #[error("chunk size must be a positive integer")]
    NonPositiveSize,

    /// Iterator produced no elements where at least one was required
    #[error("iterator is empty")]
    Empty,

    /// Bounded collection saw more elements than allowed
    #[error("iterator yielded more than {limit} elements")]
    LimitExceeded {
        /// Maximum number of elements that was allowed
        limit: usize,
    },
}
