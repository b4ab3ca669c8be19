//! Dense entity storage with O(1) unordered removal.
//!
//! Entity order carries no meaning, so removal swaps the last element into the
//! vacated slot instead of shifting. Any index previously held for the old
//! last slot is invalidated by a removal; cross-references between stores are
//! plain indices and must tolerate this (see the bullet system).

use std::ops::{Index, IndexMut};

/// A dense, order-irrelevant sequence of entity records.
#[derive(Debug, Clone, PartialEq)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Store<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its index.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        self.items.len() - 1
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Remove the record at `index`, moving the last record into its slot.
    ///
    /// Panics if `index` is out of bounds.
    pub fn swap_remove(&mut self, index: usize) -> T {
        self.items.swap_remove(index)
    }

    /// Compaction pass: keep records for which `keep` returns true.
    ///
    /// Rejected records are swap-removed and the same slot is examined again,
    /// since it now holds the element that used to be last. Every record is
    /// visited exactly once. `keep` may mutate the record it is given.
    /// Returns the number of removed records.
    pub fn swap_retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&mut T) -> bool,
    {
        let mut index = 0;
        let mut removed = 0;
        while index < self.items.len() {
            if keep(&mut self.items[index]) {
                index += 1;
            } else {
                self.items.swap_remove(index);
                removed += 1;
            }
        }
        removed
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Index<usize> for Store<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Store<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_index() {
        let mut store = Store::new();
        assert_eq!(store.push('a'), 0);
        assert_eq!(store.push('b'), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store[1], 'b');
    }

    #[test]
    fn test_swap_remove_moves_last_into_slot() {
        let mut store: Store<u32> = [10, 20, 30, 40].into_iter().collect();
        let removed = store.swap_remove(1);
        assert_eq!(removed, 20);
        assert_eq!(store.as_slice(), &[10, 40, 30]);
    }

    #[test]
    fn test_swap_remove_last_element() {
        let mut store: Store<u32> = [1, 2].into_iter().collect();
        assert_eq!(store.swap_remove(1), 2);
        assert_eq!(store.as_slice(), &[1]);
    }

    #[test]
    fn test_swap_retain_reexamines_swapped_slot() {
        // Slot 0 and the element swapped into it are both rejected.
        let mut store: Store<u32> = [1, 2, 3, 5].into_iter().collect();
        let mut visited = Vec::new();
        let removed = store.swap_retain(|v| {
            visited.push(*v);
            *v % 2 == 0
        });
        assert_eq!(removed, 3);
        assert_eq!(store.as_slice(), &[2]);
        visited.sort_unstable();
        assert_eq!(visited, vec![1, 2, 3, 5], "every element visited exactly once");
    }

    #[test]
    fn test_swap_retain_preserves_survivors_exactly_once() {
        let mut store: Store<u32> = (0..100).collect();
        let removed = store.swap_retain(|v| *v % 3 != 0);
        assert_eq!(removed, 34);
        assert_eq!(store.len(), 100 - 34);

        let mut survivors: Vec<u32> = store.iter().copied().collect();
        survivors.sort_unstable();
        let expected: Vec<u32> = (0..100).filter(|v| v % 3 != 0).collect();
        assert_eq!(survivors, expected);
    }

    #[test]
    fn test_swap_retain_can_mutate() {
        let mut store: Store<i32> = [1, 2, 3].into_iter().collect();
        let removed = store.swap_retain(|v| {
            *v -= 2;
            *v > 0
        });
        assert_eq!(removed, 2);
        assert_eq!(store.as_slice(), &[1]);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store: Store<u8> = [1, 2, 3].into_iter().collect();
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.push(9), 0);
    }

    #[test]
    fn test_swap_retain_remove_all_and_none() {
        let mut store: Store<u8> = [1, 2, 3].into_iter().collect();
        assert_eq!(store.swap_retain(|_| true), 0);
        assert_eq!(store.len(), 3);
        assert_eq!(store.swap_retain(|_| false), 3);
        assert!(store.is_empty());
        assert_eq!(store.swap_retain(|_| false), 0);
    }
}
