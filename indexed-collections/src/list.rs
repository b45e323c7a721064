//! Doubly-linked list with slab-backed nodes.
//!
//! Nodes live in a [`slab::Slab`] and link to each other by slab key. The slab
//! is the only owner of every node; `prev` and `next` are navigation only, so
//! there is no ownership cycle to manage.
//!
//! # Example
//!
//! ```
//! use indexed_collections::DoublyLinkedList;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(2);
//! list.append(3);
//! list.prepend(1);
//!
//! assert_eq!(list.to_string(), "[1, 2, 3]");
//! assert_eq!(list.first(), Some(&1));
//! assert_eq!(list.last(), Some(&3));
//!
//! // Positional removal walks from the nearer end
//! assert_eq!(list.remove(1), Ok(2));
//! assert_eq!(list.remove_last(), Ok(3));
//! assert_eq!(list.remove_first(), Ok(1));
//! assert!(list.is_empty());
//! ```

use core::fmt;

use slab::Slab;

use crate::{Error, Key};

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    prev: usize,
    next: usize,
}

/// A doubly-ended sequence with O(1) insertion and removal at both ends.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Slab<Node<T>>,
    head: usize,
    tail: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: Slab::new(),
            head: usize::NONE,
            tail: usize::NONE,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: usize::NONE,
            tail: usize::NONE,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Inserts `value` at the front.
    pub fn prepend(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            data: value,
            prev: usize::NONE,
            next: self.head,
        });

        if self.head.is_some() {
            self.nodes[self.head].prev = key;
        } else {
            self.tail = key;
        }
        self.head = key;
    }

    /// Inserts `value` at the back.
    pub fn append(&mut self, value: T) {
        let key = self.nodes.insert(Node {
            data: value,
            prev: self.tail,
            next: usize::NONE,
        });

        if self.tail.is_some() {
            self.nodes[self.tail].next = key;
        } else {
            self.head = key;
        }
        self.tail = key;
    }

    // ========================================================================
    // Access
    // ========================================================================

    /// Returns the front element.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.head.get().map(|key| &self.nodes[key].data)
    }

    /// Returns the back element.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.tail.get().map(|key| &self.nodes[key].data)
    }

    /// Returns the element at position `index`, counting from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.key_at(index).map(|key| &self.nodes[key].data)
    }

    /// Iterates from front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes and returns the front element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn remove_first(&mut self) -> Result<T, Error> {
        let key = self.head.get().ok_or(Error::Empty)?;
        Ok(self.unlink(key))
    }

    /// Removes and returns the back element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn remove_last(&mut self) -> Result<T, Error> {
        let key = self.tail.get().ok_or(Error::Empty)?;
        Ok(self.unlink(key))
    }

    /// Removes and returns the element at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        let key = self.key_at(index).ok_or(Error::OutOfRange {
            index,
            len: self.len(),
        })?;
        Ok(self.unlink(key))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = usize::NONE;
        self.tail = usize::NONE;
    }

    /// Slab key of the node at `index`, walking from whichever end is nearer.
    fn key_at(&self, index: usize) -> Option<usize> {
        let len = self.len();
        if index >= len {
            return None;
        }

        if index <= len / 2 {
            let mut key = self.head;
            for _ in 0..index {
                key = self.nodes[key].next;
            }
            Some(key)
        } else {
            let mut key = self.tail;
            for _ in 0..(len - 1 - index) {
                key = self.nodes[key].prev;
            }
            Some(key)
        }
    }

    /// Detaches `key` from its neighbours and frees its slot.
    fn unlink(&mut self, key: usize) -> T {
        let node = self.nodes.remove(key);

        if node.prev.is_some() {
            self.nodes[node.prev].next = node.next;
        } else {
            self.head = node.next;
        }

        if node.next.is_some() {
            self.nodes[node.next].prev = node.prev;
        } else {
            self.tail = node.prev;
        }

        node.data
    }
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for value in iter {
            list.append(value);
        }
        list
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Front-to-back iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    nodes: &'a Slab<Node<T>>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.data)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.data)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
