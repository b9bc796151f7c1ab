use crate::{Iter, IterError};

use super::clamp_count;

/// Iterator grouping upstream elements into fixed-size vectors
#[derive(Debug, Clone)]
pub struct ChunkEvery<I> {
    upstream: I,
    size: usize,
}

impl<I: Iter> Iter for ChunkEvery<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let mut chunk = Vec::new();
        while chunk.len() < self.size {
            match self.upstream.next() {
                Some(item) => chunk.push(item),
                None => break,
            }
        }
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

/// Split `it` into consecutive chunks of `size` elements
///
/// The last chunk holds whatever is left and may be shorter. Empty chunks are
/// never produced. Each pull fills one chunk, pulling upstream up to `size`
/// times.
///
/// # Errors
///
/// [`IterError::NonPositiveSize`] if `size` is zero or negative. A positive
/// size too large for `usize` is accepted and saturates to `usize::MAX`.
pub fn chunk_every<I, N>(it: I, size: N) -> Result<ChunkEvery<I>, IterError>
where
    I: Iter,
    N: TryInto<usize> + PartialOrd + Default,
{
    let size = clamp_count(size);
    if size == 0 {
        return Err(IterError::NonPositiveSize);
    }
    Ok(ChunkEvery { upstream: it, size })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_sequence;

    #[test]
    fn test_chunks_with_remainder() {
        let chunks = chunk_every(from_sequence(vec![1, 2, 3, 4, 5]), 2).unwrap();
        assert_eq!(chunks.to_vec(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn test_oversized_size_is_one_chunk() {
        let chunks = chunk_every(from_sequence([1, 2, 3]), i128::MAX).unwrap();
        assert_eq!(chunks.to_vec(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert_eq!(
            chunk_every(from_sequence([1]), 0).unwrap_err(),
            IterError::NonPositiveSize
        );
        assert_eq!(
            chunk_every(from_sequence([1]), -2).unwrap_err(),
            IterError::NonPositiveSize
        );
    }
}
