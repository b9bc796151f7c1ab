//! Function-backed sources

use std::fmt;
use std::iter::Fuse;
use std::marker::PhantomData;

use crate::Iter;

/// Iterator whose pulls are calls to a closure
#[derive(Clone)]
pub struct FromFunction<F> {
    pull: F,
}

impl<F> fmt::Debug for FromFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFunction").finish_non_exhaustive()
    }
}

impl<T, F: FnMut() -> Option<T>> Iter for FromFunction<F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        (self.pull)()
    }
}

/// Use `pull` directly as the iterator's `next`
///
/// The closure is called once per pull and nothing else. It must keep the
/// exhaustion contract on its own: once it returns `None`, it has to keep
/// returning `None`.
///
/// ```
/// use pulliter::{from_function, Iter};
///
/// let mut n = 0;
/// let naturals = from_function(move || {
///     n += 1;
///     Some(n)
/// });
/// assert_eq!(naturals.take(3).to_vec(), vec![1, 2, 3]);
/// ```
pub fn from_function<T, F>(pull: F) -> FromFunction<F>
where
    F: FnMut() -> Option<T>,
{
    FromFunction { pull }
}

/// Iterator over a std iterator
#[derive(Debug, Clone)]
pub struct FromStd<I> {
    inner: Fuse<I>,
}

impl<I: Iterator> Iter for FromStd<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

/// Wrap anything iterable, fused so exhaustion is stable
///
/// Handy for infinite ranges: `from_std(0..)`.
pub fn from_std<I: IntoIterator>(iter: I) -> FromStd<I::IntoIter> {
    FromStd {
        inner: iter.into_iter().fuse(),
    }
}

/// Iterator that is exhausted from the start
pub struct Empty<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        empty()
    }
}

impl<T> Iter for Empty<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        None
    }
}

/// An iterator with no elements
pub fn empty<T>() -> Empty<T> {
    Empty {
        marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_called_once_per_pull() {
        let mut calls = 0;
        let mut it = from_function(|| {
            calls += 1;
            if calls <= 2 { Some(calls) } else { None }
        });

        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next(), None);
        drop(it);
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_from_std_infinite_range() {
        assert_eq!(from_std(10..).take(3).to_vec(), vec![10, 11, 12]);
    }

    #[test]
    fn test_empty() {
        let mut it = empty::<String>();
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }
}
