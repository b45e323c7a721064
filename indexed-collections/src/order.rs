//! Priority relations for [`IndexedPriorityQueue`](crate::IndexedPriorityQueue).
//!
//! The relation is picked at the type level, so a min-queue and a max-queue
//! compile to the same code with the comparison flipped.

use std::cmp::Ordering;

/// Decides which of two values is served first.
///
/// Implementations must be pure and consistent with a total order on `T`.
pub trait Order<T: ?Sized> {
    /// Compares `a` against `b`; `Less` means `a` is served before `b`.
    fn compare(a: &T, b: &T) -> Ordering;

    /// Returns `true` if `a` must be served strictly before `b`.
    #[inline]
    fn precedes(a: &T, b: &T) -> bool {
        Self::compare(a, b).is_lt()
    }
}

/// Smallest value first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

/// Largest value first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Order<T> for MinOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T: Ord + ?Sized> Order<T> for MaxOrder {
    #[inline]
    fn compare(a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_order_prefers_smaller() {
        assert!(<MinOrder as Order<i32>>::precedes(&1, &2));
        assert!(!<MinOrder as Order<i32>>::precedes(&2, &1));
        assert!(!<MinOrder as Order<i32>>::precedes(&2, &2));
    }

    #[test]
    fn max_order_prefers_larger() {
        assert!(<MaxOrder as Order<i32>>::precedes(&2, &1));
        assert!(!<MaxOrder as Order<i32>>::precedes(&1, &2));
        assert!(!<MaxOrder as Order<i32>>::precedes(&2, &2));
    }

    #[test]
    fn works_with_unsized() {
        assert!(<MinOrder as Order<str>>::precedes("abc", "abd"));
    }
}
