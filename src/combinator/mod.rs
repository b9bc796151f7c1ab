//! Lazy combinators
//!
//! Each combinator owns its upstream iterator and does no work until it is
//! pulled. None of them buffer ahead of demand, except [`ChunkEvery`], which
//! holds at most one partially filled chunk while it is being pulled.

mod chunk;
mod filter;
mod map;
mod take;

pub use chunk::{chunk_every, ChunkEvery};
pub use filter::{filter, Filter};
pub use map::{map, Map};
pub use take::{skip, take, Skip, Take};

/// Convert a caller-supplied count: negatives become zero, positives too
/// large for `usize` saturate to `usize::MAX`
pub(crate) fn clamp_count<N>(n: N) -> usize
where
    N: TryInto<usize> + PartialOrd + Default,
{
    let positive = n > N::default();
    n.try_into().unwrap_or(if positive { usize::MAX } else { 0 })
}
