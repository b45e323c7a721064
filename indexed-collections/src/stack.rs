//! LIFO stack over [`DoublyLinkedList`].

use core::fmt;

use crate::{DoublyLinkedList, Error};

/// Last-in, first-out stack. The top is the back of the backing list.
///
/// # Example
///
/// ```
/// use indexed_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push('a');
/// stack.push('b');
///
/// assert_eq!(stack.peek(), Some(&'b'));
/// assert_eq!(stack.pop(), Ok('b'));
/// assert_eq!(stack.pop(), Ok('a'));
/// assert!(stack.pop().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Stack<T> {
    storage: DoublyLinkedList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
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

    /// Places `value` on top.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.storage.append(value);
    }

    /// Removes and returns the top value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        self.storage.remove_last()
    }

    /// Returns the top value without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.storage.last()
    }
}

impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.storage, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifo_order() {
        let mut stack = Stack::default();
        for i in 0..5u32 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.to_string(), "[0, 1, 2, 3, 4]");

        for i in (0..5u32).rev() {
            assert_eq!(stack.peek(), Some(&i));
            assert_eq!(stack.pop(), Ok(i));
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn pop_empty() {
        let mut stack: Stack<u32> = Stack::new();
        assert_eq!(stack.pop(), Err(Error::Empty));
        assert_eq!(stack.peek(), None);
    }
}
