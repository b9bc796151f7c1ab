//! Shared sources for integration tests

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use pulliter::{from_function, Iter};

/// Wraps an iterator and records how many times it was pulled
#[derive(Debug)]
pub struct Counting<I> {
    inner: I,
    pulls: Rc<Cell<usize>>,
}

impl<I: Iter> Iter for Counting<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.pulls.set(self.pulls.get() + 1);
        self.inner.next()
    }
}

/// Wrap `inner`, returning the wrapper and a handle to its pull counter
pub fn counting<I: Iter>(inner: I) -> (Counting<I>, Rc<Cell<usize>>) {
    let pulls = Rc::new(Cell::new(0));
    let source = Counting {
        inner,
        pulls: Rc::clone(&pulls),
    };
    (source, pulls)
}

/// Infinite source 0, 1, 2, ...
pub fn naturals() -> impl Iter<Item = u64> {
    let mut n = 0;
    from_function(move || {
        let current = n;
        n += 1;
        Some(current)
    })
}
