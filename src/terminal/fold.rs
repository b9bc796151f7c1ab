use std::iter::Sum;

use tracing::trace;

use crate::{Iter, IterError};

/// Fold `it` into a single value
///
/// For each element, `acc = combine(element, acc)`. The element comes first
/// and the accumulator second, which is the reverse of [`Iterator::fold`].
/// For non-commutative folds this matters:
///
/// ```
/// use pulliter::{from_sequence, reduce};
///
/// let total = reduce(from_sequence([3, 4, 5]), 0, |x, acc| acc + x);
/// assert_eq!(total, 12);
///
/// let reversed = reduce(from_sequence(['a', 'b', 'c']), String::new(), |c, acc| {
///     format!("{c}{acc}")
/// });
/// assert_eq!(reversed, "cba");
/// ```
///
/// Returns `seed` for an empty iterator. Never returns on an infinite one.
pub fn reduce<I, R, F>(mut it: I, seed: R, mut combine: F) -> R
where
    I: Iter,
    F: FnMut(I::Item, R) -> R,
{
    let mut acc = seed;
    let mut pulled = 0usize;
    while let Some(item) = it.next() {
        acc = combine(item, acc);
        pulled += 1;
    }
    trace!(pulled, "reduced iterator");
    acc
}

/// Number of elements left in `it`
pub fn count<I: Iter>(it: I) -> usize {
    reduce(it, 0, |_, n| n + 1)
}

/// Number of elements in `it` equal to `value`
pub fn count_of<I>(it: I, value: &I::Item) -> usize
where
    I: Iter,
    I::Item: PartialEq,
{
    reduce(it, 0, |item, n| if item == *value { n + 1 } else { n })
}

/// Sum of the elements of `it`
pub fn sum<I, S>(it: I) -> S
where
    I: Iter,
    S: Sum<I::Item>,
{
    it.into_std().sum()
}

/// Largest element; the last one wins among equals
///
/// # Errors
///
/// [`IterError::Empty`] if `it` has no elements.
pub fn max<I>(mut it: I) -> Result<I::Item, IterError>
where
    I: Iter,
    I::Item: Ord,
{
    let first = it.next().ok_or(IterError::Empty)?;
    Ok(reduce(it, first, |item, best| if item >= best { item } else { best }))
}

/// Smallest element; the first one wins among equals
///
/// # Errors
///
/// [`IterError::Empty`] if `it` has no elements.
pub fn min<I>(mut it: I) -> Result<I::Item, IterError>
where
    I: Iter,
    I::Item: Ord,
{
    let first = it.next().ok_or(IterError::Empty)?;
    Ok(reduce(it, first, |item, best| if item < best { item } else { best }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{empty, from_sequence};

    #[test]
    fn test_reduce_sum() {
        assert_eq!(reduce(from_sequence([3, 4, 5]), 0, |x, acc| acc + x), 12);
        assert_eq!(reduce(empty::<i32>(), 7, |x, acc| acc + x), 7);
    }

    #[test]
    fn test_reduce_argument_order() {
        // acc - x versus x - acc tells the order apart
        assert_eq!(reduce(from_sequence([1, 2]), 10, |x, acc| acc - x), 7);
        assert_eq!(reduce(from_sequence([1, 2]), 10, |x, acc| x - acc), 11);
    }

    #[test]
    fn test_count_and_sum() {
        assert_eq!(count(from_sequence([1, 2, 3, 1, 4])), 5);
        assert_eq!(count_of(from_sequence([1, 2, 3, 1, 4]), &1), 2);
        assert_eq!(sum::<_, i64>(from_sequence([1i64, 2, 3])), 6);
    }

    #[test]
    fn test_max_min() {
        assert_eq!(max(from_sequence([4, 10, 8])), Ok(10));
        assert_eq!(min(from_sequence([4, 10, 8])), Ok(4));
        assert_eq!(max(empty::<i32>()), Err(IterError::Empty));
        assert_eq!(min(empty::<i32>()), Err(IterError::Empty));
    }

    #[test]
    fn test_max_min_ties() {
        let keyed = [(1, 'a'), (1, 'b')].map(Tied);
        assert_eq!(max(from_sequence(keyed)).map(|t| t.0 .1), Ok('b'));
        assert_eq!(min(from_sequence(keyed)).map(|t| t.0 .1), Ok('a'));
    }

    /// Compares on the first field only
    #[derive(Debug, Clone, Copy)]
    struct Tied((i32, char));

    impl PartialEq for Tied {
        fn eq(&self, other: &Self) -> bool {
            self.0 .0 == other.0 .0
        }
    }

    impl Eq for Tied {}

    impl PartialOrd for Tied {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tied {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0 .0.cmp(&other.0 .0)
        }
    }
}
