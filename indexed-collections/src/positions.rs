//! Value to heap-slot multimap backing O(1) `contains` and O(log n) removal.
//!
//! A value may occupy several slots at once, so each entry holds a set of
//! positions rather than a single one. An entry exists only while its set is
//! nonempty.

use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::Error;

/// Tracks which heap slots currently hold each value.
#[derive(Debug, Clone)]
pub(crate) struct PositionIndex<T> {
    map: HashMap<T, HashSet<usize>>,
}

impl<T: Hash + Eq> PositionIndex<T> {
    #[inline]
    pub(crate) fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Adds `position` to `value`'s set, creating the entry on first use.
    #[inline]
    pub(crate) fn record(&mut self, value: T, position: usize) {
        self.map.entry(value).or_default().insert(position);
    }

    /// Removes `position` from `value`'s set, dropping the entry once empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inconsistent`] if `position` was not recorded for `value`.
    pub(crate) fn forget<Q>(&mut self, value: &Q, position: usize) -> Result<(), Error>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let set = self
            .map
            .get_mut(value)
            .ok_or_else(|| inconsistent(position))?;
        if !set.remove(&position) {
            return Err(inconsistent(position));
        }
        if set.is_empty() {
            self.map.remove(value);
        }
        Ok(())
    }

    /// Moves one occurrence of `value` from slot `from` to slot `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Inconsistent`] if `from` was not recorded for `value`.
    pub(crate) fn relocate<Q>(&mut self, value: &Q, from: usize, to: usize) -> Result<(), Error>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let set = self.map.get_mut(value).ok_or_else(|| inconsistent(from))?;
        if !set.remove(&from) {
            return Err(inconsistent(from));
        }
        set.insert(to);
        Ok(())
    }

    /// Returns one of the slots holding `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `value` is not tracked.
    #[inline]
    pub(crate) fn any_position<Q>(&self, value: &Q) -> Result<usize, Error>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map
            .get(value)
            .and_then(|set| set.iter().next().copied())
            .ok_or(Error::NotFound)
    }

    #[inline]
    pub(crate) fn present<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(value)
    }

    /// Number of slots holding `value`.
    #[inline]
    pub(crate) fn count<Q>(&self, value: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(value).map_or(0, HashSet::len)
    }

    /// Returns `true` if slot `position` is recorded for `value`.
    #[inline]
    pub(crate) fn holds(&self, value: &T, position: usize) -> bool {
        self.map
            .get(value)
            .is_some_and(|set| set.contains(&position))
    }

    /// Total number of recorded positions across all values.
    pub(crate) fn total(&self) -> usize {
        self.map.values().map(HashSet::len).sum()
    }

    #[inline]
    pub(crate) fn distinct(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

#[cold]
fn inconsistent(position: usize) -> Error {
    log::error!("position index has no record for heap slot {}", position);
    Error::Inconsistent { position }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_present() {
        let mut index = PositionIndex::new();
        assert!(!index.present(&5));

        index.record(5, 0);
        assert!(index.present(&5));
        assert_eq!(index.any_position(&5), Ok(0));
        assert_eq!(index.count(&5), 1);
    }

    #[test]
    fn duplicates_tracked_separately() {
        let mut index = PositionIndex::new();
        index.record(5, 0);
        index.record(5, 3);

        assert_eq!(index.count(&5), 2);
        assert_eq!(index.total(), 2);
        assert_eq!(index.distinct(), 1);

        index.forget(&5, 0).unwrap();
        assert!(index.present(&5));
        assert_eq!(index.any_position(&5), Ok(3));

        index.forget(&5, 3).unwrap();
        assert!(!index.present(&5));
        assert_eq!(index.distinct(), 0);
    }

    #[test]
    fn forget_unknown_position_is_inconsistent() {
        let mut index = PositionIndex::new();
        index.record(1, 0);

        assert_eq!(index.forget(&1, 4), Err(Error::Inconsistent { position: 4 }));
        assert_eq!(index.forget(&2, 0), Err(Error::Inconsistent { position: 0 }));
        // Failed forget leaves the entry alone
        assert_eq!(index.any_position(&1), Ok(0));
    }

    #[test]
    fn any_position_missing_is_not_found() {
        let index: PositionIndex<u32> = PositionIndex::new();
        assert_eq!(index.any_position(&9), Err(Error::NotFound));
    }

    #[test]
    fn relocate_moves_one_occurrence() {
        let mut index = PositionIndex::new();
        index.record("a".to_string(), 1);
        index.record("a".to_string(), 2);

        index.relocate("a", 1, 0).unwrap();
        assert!(index.holds(&"a".to_string(), 0));
        assert!(index.holds(&"a".to_string(), 2));
        assert!(!index.holds(&"a".to_string(), 1));

        assert_eq!(
            index.relocate("a", 7, 8),
            Err(Error::Inconsistent { position: 7 })
        );
    }

    #[test]
    fn clear_drops_everything() {
        let mut index = PositionIndex::with_capacity(4);
        index.record(1, 0);
        index.record(2, 1);
        index.clear();

        assert_eq!(index.total(), 0);
        assert!(!index.present(&1));
    }
}
