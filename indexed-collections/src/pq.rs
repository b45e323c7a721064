//! Binary-heap priority queue with a value to position index.
//!
//! The heap array gives O(log n) push and poll. The position index maps every
//! value to the slots holding it, which turns `contains` into an O(1) lookup
//! and removal of an arbitrary value into O(log n).
//!
//! # Invariants
//!
//! Between public calls:
//! - every non-root slot is served no earlier than its parent;
//! - the position sets partition `[0, len)` exactly, and each recorded slot
//!   holds the value it is recorded under.
//!
//! All slot movement goes through a single private `swap`, which updates the
//! array and the index in one step.

use core::fmt;
use core::marker::PhantomData;
use std::borrow::Borrow;
use std::hash::Hash;

use crate::heap::HeapArray;
use crate::order::{MinOrder, Order};
use crate::positions::PositionIndex;
use crate::Error;

/// A priority queue supporting removal and membership tests by value.
///
/// `O` selects the priority relation; [`MinOrder`] (the default) serves the
/// smallest value first, [`MaxOrder`](crate::MaxOrder) the largest. Duplicate
/// values are allowed and each occurrence is tracked separately.
///
/// # Example
///
/// ```
/// use indexed_collections::{Error, IndexedPriorityQueue};
///
/// let mut pq: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new();
/// for value in [23, 5, 40, -2, 0] {
///     pq.push(value);
/// }
///
/// assert_eq!(pq.peek(), Ok(&-2));
/// assert!(pq.contains(&40));
///
/// // Remove by value in O(log n)
/// assert_eq!(pq.remove(&5), Ok(5));
/// assert_eq!(pq.remove(&5), Err(Error::NotFound));
///
/// assert_eq!(pq.poll(), Ok(-2));
/// assert_eq!(pq.poll(), Ok(0));
/// assert_eq!(pq.poll(), Ok(23));
/// assert_eq!(pq.poll(), Ok(40));
/// assert_eq!(pq.poll(), Err(Error::Empty));
/// ```
///
/// # Max-first
///
/// ```
/// use indexed_collections::{IndexedPriorityQueue, MaxOrder};
///
/// let mut pq: IndexedPriorityQueue<u32, MaxOrder> = [3, 9, 1].into_iter().collect();
/// assert_eq!(pq.poll(), Ok(9));
/// ```
pub struct IndexedPriorityQueue<T, O = MinOrder> {
    heap: HeapArray<T>,
    positions: PositionIndex<T>,
    _order: PhantomData<fn() -> O>,
}

impl<T: Clone, O> Clone for IndexedPriorityQueue<T, O> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            positions: self.positions.clone(),
            _order: PhantomData,
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for IndexedPriorityQueue<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndexedPriorityQueue")
            .field("heap", &self.heap.as_slice())
            .finish()
    }
}

impl<T, O> Default for IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, O> IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            heap: HeapArray::new(),
            positions: PositionIndex::new(),
            _order: PhantomData,
        }
    }

    /// Creates an empty queue with room for `capacity` values.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: HeapArray::with_capacity(capacity),
            positions: PositionIndex::with_capacity(capacity),
            _order: PhantomData,
        }
    }

    /// Returns the number of values in the queue, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the heap array's capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    /// Read-only view of the underlying heap array.
    #[inline]
    pub fn heap(&self) -> &HeapArray<T> {
        &self.heap
    }

    /// Iterates values in heap-array order, which is not priority order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.heap.iter()
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the value that would be polled next.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, Error> {
        self.heap.get(0).ok_or(Error::Empty)
    }

    /// Returns `true` if at least one occurrence of `value` is queued. O(1).
    #[inline]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.present(value)
    }

    /// Returns how many occurrences of `value` are queued.
    #[inline]
    pub fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.count(value)
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Adds a value to the queue. O(log n) amortized.
    ///
    /// # Panics
    ///
    /// Panics if the position index has diverged from the heap array, which
    /// can only happen through a defect in this type or a non-total `Ord`.
    pub fn push(&mut self, value: T) {
        let pos = self.heap.append(value.clone());
        self.positions.record(value, pos);
        if let Err(err) = self.swim(pos) {
            panic!("push: {}", err);
        }
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes and returns the value with the highest priority.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    #[inline]
    pub fn poll(&mut self) -> Result<T, Error> {
        if self.heap.is_empty() {
            return Err(Error::Empty);
        }
        self.remove_at(0)
    }

    /// Removes one occurrence of `value`.
    ///
    /// With duplicates, which occurrence goes is unspecified; since they
    /// compare equal, callers cannot observe the difference through ordering.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `value` is not queued. The queue is left
    /// untouched.
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, Error>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let pos = self.positions.any_position(value)?;
        self.remove_at(pos)
    }

    /// Removes and returns the value in heap slot `index`.
    ///
    /// The last slot is swapped into `index`, then sunk; if it did not move
    /// down it is swum up instead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`, before anything is
    /// modified.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.heap.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }

        let last = len - 1;
        if index != last {
            self.swap(index, last)?;
        }

        let removed = self
            .heap
            .pop_last()
            .ok_or(Error::Inconsistent { position: last })?;
        self.positions.forget(&removed, last)?;

        if index != last {
            let sank = self.sink(index)?;
            // A slot that moved down already satisfies its parent.
            let swam = !sank && self.swim(index)?;
            log::trace!(
                "remove_at({}): len {} -> {}, sank={} swam={}",
                index,
                len,
                last,
                sank,
                swam
            );
        }

        Ok(removed)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        log::debug!(
            "clearing {} values ({} distinct)",
            self.heap.len(),
            self.positions.distinct()
        );
        self.heap.clear();
        self.positions.clear();
    }

    /// Drains the queue into a vector in priority order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inconsistent`] if a defect is detected mid-drain.
    pub fn into_sorted_vec(mut self) -> Result<Vec<T>, Error> {
        let mut sorted = Vec::with_capacity(self.heap.len());
        while !self.heap.is_empty() {
            sorted.push(self.remove_at(0)?);
        }
        Ok(sorted)
    }

    /// Checks the heap and partition invariants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inconsistent`] naming the first slot that breaks an
    /// invariant. A slot equal to `len()` means the index holds stray entries.
    pub fn verify(&self) -> Result<(), Error> {
        let len = self.heap.len();

        for i in 1..len {
            let parent = (i - 1) / 2;
            if O::precedes(&self.heap[i], &self.heap[parent]) {
                log::error!("heap order broken between slots {} and {}", parent, i);
                return Err(Error::Inconsistent { position: i });
            }
        }

        for (i, value) in self.heap.iter().enumerate() {
            if !self.positions.holds(value, i) {
                log::error!("slot {} missing from position index", i);
                return Err(Error::Inconsistent { position: i });
            }
        }

        // Every slot is recorded, so any surplus is a stray position.
        if self.positions.total() != len {
            log::error!(
                "position index tracks {} slots, heap has {}",
                self.positions.total(),
                len
            );
            return Err(Error::Inconsistent { position: len });
        }

        Ok(())
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    /// Exchanges slots `i` and `j` in both the array and the position index.
    fn swap(&mut self, i: usize, j: usize) -> Result<(), Error> {
        if i == j {
            return Ok(());
        }

        let a = &self.heap[i];
        let b = &self.heap[j];
        // Equal values share one position set; swapping them changes nothing.
        if a != b {
            self.positions.relocate(a, i, j)?;
            self.positions.relocate(b, j, i)?;
        }
        self.heap.exchange(i, j);
        Ok(())
    }

    /// Moves slot `pos` towards the root until its parent precedes or ties it.
    ///
    /// Returns `true` if the value moved.
    fn swim(&mut self, mut pos: usize) -> Result<bool, Error> {
        let mut moved = false;
        while let Some(parent) = self.heap.parent(pos) {
            if !O::precedes(&self.heap[pos], &self.heap[parent]) {
                break;
            }
            self.swap(parent, pos)?;
            pos = parent;
            moved = true;
        }
        Ok(moved)
    }

    /// Moves slot `pos` towards the leaves until it precedes or ties its
    /// children. Ties between children go left.
    ///
    /// Returns `true` if the value moved.
    fn sink(&mut self, mut pos: usize) -> Result<bool, Error> {
        let mut moved = false;
        while let Some(left) = self.heap.left(pos) {
            let child = match self.heap.right(pos) {
                Some(right) if O::precedes(&self.heap[right], &self.heap[left]) => right,
                _ => left,
            };
            if !O::precedes(&self.heap[child], &self.heap[pos]) {
                break;
            }
            self.swap(pos, child)?;
            pos = child;
            moved = true;
        }
        Ok(moved)
    }

    /// Restores heap order over the whole array in O(n).
    fn heapify(&mut self) -> Result<(), Error> {
        let len = self.heap.len();
        if len < 2 {
            return Ok(());
        }
        for pos in (0..len / 2).rev() {
            self.sink(pos)?;
        }
        log::debug!("heapified {} values", len);
        Ok(())
    }
}

impl<T, O> From<Vec<T>> for IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    /// Builds a queue from `items` in O(n).
    ///
    /// # Panics
    ///
    /// Panics if heap maintenance detects a divergence (see [`push`](Self::push)).
    fn from(items: Vec<T>) -> Self {
        let mut positions = PositionIndex::with_capacity(items.len());
        for (pos, value) in items.iter().enumerate() {
            positions.record(value.clone(), pos);
        }

        let mut pq = Self {
            heap: HeapArray::from(items),
            positions,
            _order: PhantomData,
        };
        if let Err(err) = pq.heapify() {
            panic!("heapify: {}", err);
        }
        pq
    }
}

impl<T, O> FromIterator<T> for IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> Extend<T> for IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, O> IntoIterator for &'a IndexedPriorityQueue<T, O>
where
    T: Ord + Hash + Clone,
    O: Order<T>,
{
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod bench_indexed_pq {
    use super::*;
    use hdrhistogram::Histogram;

    #[inline]
    fn rdtscp() -> u64 {
        #[cfg(target_arch = "x86_64")]
        unsafe {
            core::arch::x86_64::__rdtscp(&mut 0)
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            std::time::Instant::now().elapsed().as_nanos() as u64
        }
    }

    fn print_histogram(name: &str, hist: &Histogram<u64>) {
        println!(
            "{:24} p50: {:4} cycles | p99: {:4} cycles | p999: {:5} cycles | min: {:4} | max: {:5}",
            name,
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.99),
            hist.value_at_quantile(0.999),
            hist.min(),
            hist.max(),
        );
    }

    const HEAP_SIZE: u64 = 1024;
    const ITERATIONS: u64 = 100_000;

    fn filled() -> IndexedPriorityQueue<u64> {
        (0..HEAP_SIZE).map(|i| (i * 7 + 13) % HEAP_SIZE).collect()
    }

    #[test]
    #[ignore]
    fn bench_push_poll() {
        let mut pq = filled();
        let mut push_hist = Histogram::<u64>::new(3).unwrap();
        let mut poll_hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..ITERATIONS {
            let start = rdtscp();
            let value = std::hint::black_box(pq.poll().unwrap());
            poll_hist.record(rdtscp() - start).unwrap();

            let start = rdtscp();
            pq.push(std::hint::black_box(value + (i % HEAP_SIZE)));
            push_hist.record(rdtscp() - start).unwrap();
        }

        print_histogram("push", &push_hist);
        print_histogram("poll", &poll_hist);
    }

    #[test]
    #[ignore]
    fn bench_remove_by_value() {
        let mut pq = filled();
        let mut hist = Histogram::<u64>::new(3).unwrap();

        for i in 0..ITERATIONS {
            let victim = (i * 31) % HEAP_SIZE;
            let start = rdtscp();
            let removed = std::hint::black_box(pq.remove(&victim).unwrap());
            hist.record(rdtscp() - start).unwrap();
            pq.push(removed);
        }

        print_histogram("remove", &hist);
    }
}
