use tracing::trace;

use crate::{Iter, IterError};

/// Pull `it` to exhaustion, collecting the elements in arrival order
///
/// Never returns on an infinite iterator or an unclosed queue. See
/// [`to_vec_bounded`] for an explicit cap.
pub fn to_vec<I: Iter>(mut it: I) -> Vec<I::Item> {
    let mut items = Vec::new();
    while let Some(item) = it.next() {
        items.push(item);
    }
    trace!(len = items.len(), "collected iterator");
    items
}

/// Like [`to_vec`], but give up once more than `limit` elements show up
///
/// Pulls at most `limit + 1` elements. This does not help with a pull that
/// blocks or a filter that never finds a match.
///
/// # Errors
///
/// [`IterError::LimitExceeded`] if `it` has more than `limit` elements. The
/// extra element is consumed and lost.
pub fn to_vec_bounded<I: Iter>(mut it: I, limit: usize) -> Result<Vec<I::Item>, IterError> {
    let mut items = Vec::new();
    while let Some(item) = it.next() {
        if items.len() == limit {
            return Err(IterError::LimitExceeded { limit });
        }
        items.push(item);
    }
    trace!(len = items.len(), limit, "collected bounded iterator");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_sequence, from_std};

    #[test]
    fn test_to_vec() {
        assert_eq!(to_vec(from_sequence(vec![3, 4, 5])), vec![3, 4, 5]);
        assert_eq!(to_vec(from_sequence(Vec::<u8>::new())), Vec::<u8>::new());
    }

    #[test]
    fn test_bounded_within_limit() {
        assert_eq!(to_vec_bounded(from_sequence([1, 2]), 2), Ok(vec![1, 2]));
        assert_eq!(to_vec_bounded(from_sequence([0u8; 0]), 0), Ok(vec![]));
    }

    #[test]
    fn test_bounded_rejects_infinite_source() {
        assert_eq!(
            to_vec_bounded(from_std(0..), 5),
            Err(IterError::LimitExceeded { limit: 5 })
        );
    }
}
