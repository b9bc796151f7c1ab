//! Pull protocol
//!
//! Every source and combinator implements [`Iter`]: a single `next` method
//! that either produces the next element or reports exhaustion.
//! There is no peek; a pull always consumes.

mod bridge;

pub use bridge::IntoStd;

use crate::combinator::{self, ChunkEvery, Filter, Map, Skip, Take};
use crate::terminal;
use crate::IterError;

/// Type-erased iterator, for pipelines whose concrete type depends on runtime choices
pub type BoxIter<'a, T> = Box<dyn Iter<Item = T> + 'a>;

/// A lazy, pull-based iterator
///
/// `next` returns `Some(value)` while elements are available and `None` once
/// the iterator is exhausted. Exhaustion must be stable: after the first
/// `None`, every later call returns `None`. The trait cannot enforce this, so
/// custom implementations (including closures given to
/// [`from_function`](crate::from_function)) have to keep it themselves.
///
/// An iterator may be infinite. It is not guaranteed to be driven to
/// exhaustion either: [`take`](Iter::take) stops pulling once it has enough.
/// Don't rely on `next` for releasing resources.
///
/// The provided methods mirror the free functions of the crate and exist for
/// chaining. Note the argument order: [`map`](Iter::map) takes the element
/// alone, while [`reduce`](Iter::reduce) takes `(element, accumulator)`,
/// element first.
pub trait Iter {
    /// Type of the produced elements
    type Item;

    /// Pull the next element, or `None` when exhausted
    fn next(&mut self) -> Option<Self::Item>;

    /// Keep only elements matching `predicate`. See [`filter`](crate::filter).
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        combinator::filter(self, predicate)
    }

    /// Transform every element. See [`map`](crate::map).
    fn map<R, F>(self, transform: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> R,
    {
        combinator::map(self, transform)
    }

    /// Yield at most `n` elements. See [`take`](crate::take).
    fn take<N>(self, n: N) -> Take<Self>
    where
        Self: Sized,
        N: TryInto<usize> + PartialOrd + Default,
    {
        combinator::take(self, n)
    }

    /// Discard the first `n` elements. See [`skip`](crate::skip).
    fn skip<N>(self, n: N) -> Skip<Self>
    where
        Self: Sized,
        N: TryInto<usize> + PartialOrd + Default,
    {
        combinator::skip(self, n)
    }

    /// Group elements into vectors of `size`. See [`chunk_every`](crate::chunk_every).
    fn chunk_every<N>(self, size: N) -> Result<ChunkEvery<Self>, IterError>
    where
        Self: Sized,
        N: TryInto<usize> + PartialOrd + Default,
    {
        combinator::chunk_every(self, size)
    }

    /// Drain into a vector. Never returns on an infinite iterator.
    fn to_vec(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        terminal::to_vec(self)
    }

    /// Fold with `combine(element, accumulator)`. Never returns on an infinite iterator.
    fn reduce<R, F>(self, seed: R, combine: F) -> R
    where
        Self: Sized,
        F: FnMut(Self::Item, R) -> R,
    {
        terminal::reduce(self, seed, combine)
    }

    /// Number of remaining elements. Never returns on an infinite iterator.
    fn count(self) -> usize
    where
        Self: Sized,
    {
        terminal::count(self)
    }

    /// Number of remaining elements equal to `value`.
    fn count_of(self, value: &Self::Item) -> usize
    where
        Self: Sized,
        Self::Item: PartialEq,
    {
        terminal::count_of(self, value)
    }

    /// Whether any element matches, stopping at the first match.
    fn any<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::any(self, predicate)
    }

    /// Whether every element matches, stopping at the first mismatch.
    fn all<P>(self, predicate: P) -> bool
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        terminal::all(self, predicate)
    }

    /// Call `f` on every element.
    fn each<F>(self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item),
    {
        terminal::each(self, f)
    }

    /// Largest element, or [`IterError::Empty`].
    fn max(self) -> Result<Self::Item, IterError>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        terminal::max(self)
    }

    /// Smallest element, or [`IterError::Empty`].
    fn min(self) -> Result<Self::Item, IterError>
    where
        Self: Sized,
        Self::Item: Ord,
    {
        terminal::min(self)
    }

    /// Sum of all elements.
    fn sum<S>(self) -> S
    where
        Self: Sized,
        S: std::iter::Sum<Self::Item>,
    {
        terminal::sum(self)
    }

    /// Adapt into a fused [`std::iter::Iterator`].
    fn into_std(self) -> IntoStd<Self>
    where
        Self: Sized,
    {
        IntoStd::new(self)
    }

    /// Erase the concrete type.
    fn boxed<'a>(self) -> BoxIter<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

impl<I: Iter + ?Sized> Iter for &mut I {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}

impl<I: Iter + ?Sized> Iter for Box<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        (**self).next()
    }
}
