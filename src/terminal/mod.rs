//! Terminal operations
//!
//! These consume an iterator and produce a concrete value. Everything here
//! except the short-circuiting [`any`] and [`all`] drains its input, and
//! will not return on an infinite iterator or on a queue that is never
//! closed. Bound such sources with [`take`](crate::take) first.

mod collect;
mod fold;
mod predicate;

pub use collect::{to_vec, to_vec_bounded};
pub use fold::{count, count_of, max, min, reduce, sum};
pub use predicate::{all, any, each};
