//! Array layout of a complete binary tree.
//!
//! Slot `i` has its parent at `(i - 1) / 2` and children at `2i + 1` and
//! `2i + 2`. The array itself knows nothing about ordering; the priority queue
//! owns the comparisons and keeps its position index in step with every
//! mutation made here.

use core::slice;

/// Heap-ordered storage for an [`IndexedPriorityQueue`](crate::IndexedPriorityQueue).
///
/// Read access is public so callers can inspect the tree shape. Mutation is
/// crate-private: the only code allowed to move slots is the queue, which
/// mirrors every move into its position index.
///
/// # Example
///
/// ```
/// use indexed_collections::IndexedPriorityQueue;
///
/// let pq: IndexedPriorityQueue<u32> = [4, 1, 3].into_iter().collect();
/// let heap = pq.heap();
///
/// assert_eq!(heap.get(0), Some(&1));
/// assert_eq!(heap.left(0), Some(1));
/// assert_eq!(heap.right(0), Some(2));
/// assert_eq!(heap.parent(2), Some(0));
/// assert_eq!(heap.parent(0), None);
/// ```
#[derive(Debug, Clone)]
pub struct HeapArray<T> {
    items: Vec<T>,
}

impl<T> Default for HeapArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HeapArray<T> {
    /// Creates an empty array.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` slots.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of slots available without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Parent slot of `i`, or `None` for the root.
    #[inline]
    pub fn parent(&self, i: usize) -> Option<usize> {
        if i == 0 { None } else { Some((i - 1) / 2) }
    }

    /// Left child slot of `i`, or `None` if it lies past the last slot.
    #[inline]
    pub fn left(&self, i: usize) -> Option<usize> {
        self.occupied(i.checked_mul(2)?.checked_add(1)?)
    }

    /// Right child slot of `i`, or `None` if it lies past the last slot.
    #[inline]
    pub fn right(&self, i: usize) -> Option<usize> {
        self.occupied(i.checked_mul(2)?.checked_add(2)?)
    }

    /// Value at slot `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    /// All occupied slots in array order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates values in array (not priority) order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    // ========================================================================
    // Crate-private mutation; callers must update the position index too.
    // ========================================================================

    #[inline]
    pub(crate) fn append(&mut self, value: T) -> usize {
        self.items.push(value);
        self.items.len() - 1
    }

    #[inline]
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub(crate) fn exchange(&mut self, i: usize, j: usize) {
        self.items.swap(i, j);
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    fn occupied(&self, i: usize) -> Option<usize> {
        if i < self.items.len() { Some(i) } else { None }
    }
}

impl<T> From<Vec<T>> for HeapArray<T> {
    /// Adopts `items` as-is. The caller restores heap order afterwards.
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> core::ops::Index<usize> for HeapArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<'a, T> IntoIterator for &'a HeapArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: usize) -> HeapArray<usize> {
        HeapArray::from((0..n).collect::<Vec<_>>())
    }

    #[test]
    fn new_is_empty() {
        let heap: HeapArray<u32> = HeapArray::new();
        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);
        assert_eq!(heap.get(0), None);
        assert_eq!(heap.left(0), None);
        assert_eq!(heap.right(0), None);
    }

    #[test]
    fn parent_arithmetic() {
        let heap = filled(7);
        assert_eq!(heap.parent(0), None);
        assert_eq!(heap.parent(1), Some(0));
        assert_eq!(heap.parent(2), Some(0));
        assert_eq!(heap.parent(3), Some(1));
        assert_eq!(heap.parent(4), Some(1));
        assert_eq!(heap.parent(5), Some(2));
        assert_eq!(heap.parent(6), Some(2));
    }

    #[test]
    fn children_bounded_by_len() {
        let heap = filled(5);
        assert_eq!(heap.left(0), Some(1));
        assert_eq!(heap.right(0), Some(2));
        assert_eq!(heap.left(1), Some(3));
        assert_eq!(heap.right(1), Some(4));
        // Slot 2 would have children 5 and 6, both past len
        assert_eq!(heap.left(2), None);
        assert_eq!(heap.right(2), None);
    }

    #[test]
    fn left_without_right() {
        let heap = filled(4);
        assert_eq!(heap.left(1), Some(3));
        assert_eq!(heap.right(1), None);
    }

    #[test]
    fn child_arithmetic_does_not_overflow() {
        let heap = filled(3);
        assert_eq!(heap.left(usize::MAX), None);
        assert_eq!(heap.right(usize::MAX / 2), None);
    }

    #[test]
    fn append_pop_exchange() {
        let mut heap = HeapArray::with_capacity(4);
        assert_eq!(heap.append('a'), 0);
        assert_eq!(heap.append('b'), 1);
        heap.exchange(0, 1);
        assert_eq!(heap.as_slice(), &['b', 'a']);
        assert_eq!(heap.pop_last(), Some('a'));
        assert_eq!(heap[0], 'b');
        heap.clear();
        assert!(heap.is_empty());
    }
}
