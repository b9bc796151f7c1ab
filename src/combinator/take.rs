//! Count-based combinators
//!
//! `Take` is what makes infinite sources safe to drain: once its budget is
//! spent it never pulls upstream again.

use crate::Iter;

use super::clamp_count;

/// Iterator yielding at most a fixed number of upstream elements
#[derive(Debug, Clone)]
pub struct Take<I> {
    upstream: I,
    remaining: usize,
}

impl<I: Iter> Iter for Take<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            Some(item) => {
                self.remaining -= 1;
                Some(item)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

/// Yield at most the first `n` elements of `it`
///
/// After the `n`-th element, `it` is never pulled again, so it may be left
/// unexhausted. A non-positive `n` gives an iterator that is exhausted from
/// the start and never touches `it`. A positive `n` too large for `usize`
/// saturates to `usize::MAX`. If `it` has fewer than `n` elements, `Take`
/// simply stops early.
pub fn take<I, N>(it: I, n: N) -> Take<I>
where
    I: Iter,
    N: TryInto<usize> + PartialOrd + Default,
{
    Take {
        upstream: it,
        remaining: clamp_count(n),
    }
}

/// Iterator discarding a fixed number of leading upstream elements
#[derive(Debug, Clone)]
pub struct Skip<I> {
    upstream: I,
    pending: usize,
}

impl<I: Iter> Iter for Skip<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while self.pending > 0 {
            self.pending -= 1;
            if self.upstream.next().is_none() {
                self.pending = 0;
                return None;
            }
        }
        self.upstream.next()
    }
}

/// Drop the first `n` elements of `it` and yield the rest
///
/// The discarding happens on the first pull, not at construction.
/// A non-positive `n` forwards every element; a positive `n` too large for
/// `usize` saturates to `usize::MAX`.
pub fn skip<I, N>(it: I, n: N) -> Skip<I>
where
    I: Iter,
    N: TryInto<usize> + PartialOrd + Default,
{
    Skip {
        upstream: it,
        pending: clamp_count(n),
    }
}
