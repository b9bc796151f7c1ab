//! Sequence-backed source
//!
//! Cursor starts at 0 and advances one slot per pull.
//! An absent (`None`) or empty sequence yields nothing.

use std::collections::VecDeque;

use crate::Iter;

/// A finite collection with indexed access and a known length
///
/// Must not change while an iterator is reading it; owning or borrowing it
/// immutably inside [`FromSequence`] guarantees that.
pub trait Sequence {
    /// Element type handed out by the iterator
    type Item;

    /// Number of elements
    fn len(&self) -> usize;

    /// Element at `index`, or `None` past the end
    fn at(&self, index: usize) -> Option<Self::Item>;

    /// Whether the sequence has no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Clone> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn at(&self, index: usize) -> Option<T> {
        self.get(index).cloned()
    }
}

/// An absent sequence behaves exactly like an empty one
impl<S: Sequence> Sequence for Option<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.as_ref().map_or(0, Sequence::len)
    }

    fn at(&self, index: usize) -> Option<S::Item> {
        self.as_ref().and_then(|seq| seq.at(index))
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    type Item = S::Item;

    fn len(&self) -> usize {
        (**self).len()
    }

    fn at(&self, index: usize) -> Option<S::Item> {
        (**self).at(index)
    }
}

/// Iterator over a [`Sequence`]
#[derive(Debug, Clone)]
pub struct FromSequence<S> {
    seq: S,
    cursor: usize,
}

impl<S: Sequence> Iter for FromSequence<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        if self.cursor >= self.seq.len() {
            return None;
        }
        let item = self.seq.at(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}

/// Iterate over the elements of `seq` in index order
///
/// Elements are cloned out of the sequence. Pass a reference (`&vec`,
/// `&slice[..]`) to keep ownership of the collection.
pub fn from_sequence<S: Sequence>(seq: S) -> FromSequence<S> {
    FromSequence { seq, cursor: 0 }
}
