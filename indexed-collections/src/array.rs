//! Growable contiguous array with index-checked access.

use core::fmt;
use core::slice;

use crate::Error;

/// A contiguous, growable sequence.
///
/// Growth is delegated to `Vec`. Removal shifts later elements left, so
/// `remove_at` and `remove` are O(n).
///
/// # Example
///
/// ```
/// use indexed_collections::DynamicArray;
///
/// let mut numbers = DynamicArray::new();
/// for i in 0..20 {
///     numbers.add(i);
/// }
///
/// assert!(numbers.remove(&15));
/// assert_eq!(numbers.len(), 19);
/// assert_eq!(numbers.get(15), Some(&16));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicArray<T> {
    items: Vec<T>,
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DynamicArray<T> {
    /// Creates an empty array.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty array with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, Error> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len })?;
        Ok(core::mem::replace(slot, value))
    }

    /// Appends `value`.
    #[inline]
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the element at `index`, shifting the rest left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, Error> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::OutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Removes all elements.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates elements in order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: PartialEq> DynamicArray<T> {
    /// Removes the first element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_get() {
        let mut array = DynamicArray::with_capacity(2);
        array.add(10);
        array.add(20);
        array.add(30);

        assert_eq!(array.len(), 3);
        assert_eq!(array.get(0), Some(&10));
        assert_eq!(array.get(2), Some(&30));
        assert_eq!(array.get(3), None);
    }

    #[test]
    fn set_replaces() {
        let mut array: DynamicArray<u32> = (0..3).collect();
        assert_eq!(array.set(1, 9), Ok(1));
        assert_eq!(array.to_string(), "[0, 9, 2]");
        assert_eq!(array.set(3, 0), Err(Error::OutOfRange { index: 3, len: 3 }));
    }

    #[test]
    fn remove_at_shifts_left() {
        let mut array: DynamicArray<u32> = (0..5).collect();
        assert_eq!(array.remove_at(1), Ok(1));
        assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![0, 2, 3, 4]);

        // Index equal to len is rejected
        assert_eq!(array.remove_at(4), Err(Error::OutOfRange { index: 4, len: 4 }));
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn remove_first_match_only() {
        let mut array: DynamicArray<u32> = [1, 2, 1].into_iter().collect();
        assert!(array.remove(&1));
        assert_eq!(array.to_string(), "[2, 1]");
        assert!(!array.remove(&7));
    }

    #[test]
    fn clear() {
        let mut array: DynamicArray<u32> = (0..3).collect();
        array.clear();
        assert!(array.is_empty());
        assert_eq!(array, DynamicArray::new());
    }
}
