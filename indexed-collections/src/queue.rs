//! FIFO queue over [`DoublyLinkedList`].

use core::fmt;

use crate::{DoublyLinkedList, Error};

/// First-in, first-out queue.
///
/// New values enter at the front of the backing list and leave from the back,
/// so the oldest value is always `last()`.
///
/// # Example
///
/// ```
/// use indexed_collections::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.peek(), Some(&1));
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// ```
#[derive(Debug, Clone)]
pub struct Queue<T> {
    storage: DoublyLinkedList<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    #[inline]
    pub fn new() -> Self {
        Self {
            storage: DoublyLinkedList::new(),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Adds `value` behind every queued value.
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.storage.prepend(value);
    }

    /// Removes and returns the oldest value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    #[inline]
    pub fn dequeue(&mut self) -> Result<T, Error> {
        self.storage.remove_last()
    }

    /// Returns the oldest value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }
}

impl<T: fmt::Display> fmt::Display for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}
