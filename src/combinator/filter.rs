use std::fmt;

use crate::Iter;

/// Iterator yielding only the upstream elements that match a predicate
#[derive(Clone)]
pub struct Filter<I, P> {
    upstream: I,
    predicate: P,
}

impl<I: fmt::Debug, P> fmt::Debug for Filter<I, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<I, P> Iter for Filter<I, P>
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // Sparse matches mean many upstream pulls per downstream pull
        loop {
            let item = self.upstream.next()?;
            if (self.predicate)(&item) {
                return Some(item);
            }
        }
    }
}

/// Keep the elements of `it` for which `predicate` returns true, in order
///
/// A single pull may pull upstream any number of times; it returns as soon
/// as a match is found or upstream is exhausted. On an infinite upstream
/// with no further matches it never returns.
pub fn filter<I, P>(it: I, predicate: P) -> Filter<I, P>
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    Filter {
        upstream: it,
        predicate,
    }
}
