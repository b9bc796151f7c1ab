//! Bridge to `std::iter::Iterator`

use std::iter::FusedIterator;

use super::Iter;

/// Adapts an [`Iter`] into a fused [`Iterator`]
///
/// Once the inner iterator reports exhaustion it is never pulled again, so
/// the adapter stays fused even if a custom source breaks the exhaustion
/// contract.
#[derive(Debug, Clone)]
pub struct IntoStd<I> {
    inner: I,
    exhausted: bool,
}

impl<I: Iter> IntoStd<I> {
    /// Wrap an iterator
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            exhausted: false,
        }
    }
}

impl<I: Iter> Iterator for IntoStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let item = self.inner.next();
        self.exhausted = item.is_none();
        item
    }
}

impl<I: Iter> FusedIterator for IntoStd<I> {}
