use super::ArrayList;
use crate::core::{CapacityPolicy, ListError};
use log::*;
use parking_lot::RwLock;
use std::fmt;

/// Thread safe [`ArrayList`].
///
/// Writes (append, insert, delete, extend, retain, clear) take the lock exclusively,
/// reads (get, len, capacity, range, to_vec) take it shared. The guard is dropped
/// before each method returns, on error as well.
///
/// Not reentrant. Calling this list from within a `range` visitor may deadlock.
pub struct ConcurrentArrayList<T> {
    list: RwLock<ArrayList<T>>,
}

impl<T> ConcurrentArrayList<T> {
    pub fn new(capacity: usize) -> Self {
        Self::from(ArrayList::with_capacity(capacity))
    }

    pub fn with_policy(capacity: usize, policy: CapacityPolicy) -> Self {
        Self::from(ArrayList::with_policy(capacity, policy))
    }

    pub fn into_inner(self) -> ArrayList<T> {
        self.list.into_inner()
    }

    // ************************ Writes ************************ //

    pub fn append(&self, value: T) {
        self.list.write().append(value);
    }

    pub fn insert(&self, index: usize, value: T) -> Result<(), ListError> {
        self.list.write().insert(index, value)
    }

    pub fn delete(&self, index: usize) -> Result<T, ListError> {
        self.list.write().delete(index)
    }

    /// Appends all values in order under a single exclusive hold.
    /// Returns number of appended values.
    pub fn extend(&self, values: impl IntoIterator<Item = T>) -> usize {
        let mut list = self.list.write();
        let before = list.len();
        list.extend(values);
        let loaded = list.len() - before;
        debug!("Loaded {} elements, list now has {}", loaded, list.len());
        loaded
    }

    pub fn retain(&self, keep: impl FnMut(&T) -> bool) {
        self.list.write().retain(keep);
    }

    pub fn clear(&self) {
        self.list.write().clear();
    }

    // ************************ Reads ************************ //

    pub fn get(&self, index: usize) -> Result<T, ListError>
    where
        T: Clone,
    {
        self.list.read().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.list.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.read().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.list.read().capacity()
    }

    /// Shared lock is held for the whole traversal.
    pub fn range<E>(&self, visit: impl FnMut(usize, &T) -> Result<(), E>) -> Result<(), E> {
        self.list.read().range(visit)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.list.read().to_vec()
    }
}

impl<T> From<ArrayList<T>> for ConcurrentArrayList<T> {
    fn from(list: ArrayList<T>) -> Self {
        Self {
            list: RwLock::new(list),
        }
    }
}

impl<T> Default for ConcurrentArrayList<T> {
    fn default() -> Self {
        Self::from(ArrayList::new())
    }
}

impl<T: fmt::Debug> fmt::Debug for ConcurrentArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentArrayList")
            .field("list", &*self.list.read())
            .finish()
    }
}
