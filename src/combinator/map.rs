use std::fmt;

use crate::Iter;

/// Iterator applying a transform to every upstream element
#[derive(Clone)]
pub struct Map<I, F> {
    upstream: I,
    transform: F,
}

impl<I: fmt::Debug, F> fmt::Debug for Map<I, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

impl<R, I, F> Iter for Map<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.upstream.next().map(&mut self.transform)
    }
}

/// Apply `transform` to each element of `it`
///
/// Exactly one upstream pull per downstream pull. `transform` runs once per
/// produced element and is never called once upstream is exhausted.
///
/// The transform takes the element alone. Compare [`reduce`](crate::reduce),
/// whose combine function takes `(element, accumulator)`.
pub fn map<R, I, F>(it: I, transform: F) -> Map<I, F>
where
    I: Iter,
    F: FnMut(I::Item) -> R,
{
    Map {
        upstream: it,
        transform,
    }
}
