use crate::Iter;

/// Whether any element of `it` satisfies `predicate`
///
/// Stops pulling at the first match. False for an empty iterator.
pub fn any<I, P>(mut it: I, mut predicate: P) -> bool
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    while let Some(item) = it.next() {
        if predicate(&item) {
            return true;
        }
    }
    false
}

/// Whether every element of `it` satisfies `predicate`
///
/// Stops pulling at the first mismatch. True for an empty iterator.
pub fn all<I, P>(it: I, mut predicate: P) -> bool
where
    I: Iter,
    P: FnMut(&I::Item) -> bool,
{
    !any(it, |item| !predicate(item))
}

/// Call `f` with every element of `it`, in order
pub fn each<I, F>(mut it: I, mut f: F)
where
    I: Iter,
    F: FnMut(I::Item),
{
    while let Some(item) = it.next() {
        f(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{from_sequence, from_std};

    #[test]
    fn test_any_short_circuits_on_infinite_source() {
        assert!(any(from_std(1..), |x: &u32| *x == 50));
    }

    #[test]
    fn test_all_short_circuits_on_infinite_source() {
        assert!(!all(from_std(1..), |x: &u32| *x < 50));
    }

    #[test]
    fn test_each_visits_in_order() {
        let mut seen = Vec::new();
        each(from_sequence(vec![3, 1, 2]), |x| seen.push(x));
        assert_eq!(seen, vec![3, 1, 2]);
    }
}
