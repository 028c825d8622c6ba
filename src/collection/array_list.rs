use crate::core::{CapacityPolicy, ListError};
use log::*;
use std::{fmt, ops::Index};

// Backing buffer is a boxed slice of slots so that its length *is* the capacity,
// and reallocations happen only where the policy says so.
//
// Layout:
// - [0, len) are live and always Some.
// - [len, capacity) are empty, always None.
//
// Removal takes the value out of its slot and rotates the hole to the end,
// so no moved-out value is ever retained past len.

/// Growable array list with explicit capacity policy.
///
/// Not synchronized, see [`super::ConcurrentArrayList`] for shared use.
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
    policy: CapacityPolicy,
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity, CapacityPolicy::default())
    }

    pub fn with_policy(capacity: usize, policy: CapacityPolicy) -> Self {
        Self {
            slots: empty_slots(capacity),
            len: 0,
            policy,
        }
    }

    /// Takes over values with capacity equal to their count.
    pub fn from_vec(values: Vec<T>) -> Self {
        Self::from_vec_with_policy(values, CapacityPolicy::default())
    }

    pub fn from_vec_with_policy(values: Vec<T>, policy: CapacityPolicy) -> Self {
        let slots: Box<[Option<T>]> = values.into_iter().map(Some).collect();
        Self {
            len: slots.len(),
            slots,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index, "get"));
        }
        Ok(self.slots[index].as_ref().expect("Live slot is filled"))
    }

    /// Adds value at the end, growing if full.
    pub fn append(&mut self, value: T) {
        let len = self.len;
        if len == self.capacity() {
            self.grow(len + 1);
        }

        self.slots[len] = Some(value);
        self.len = len + 1;
    }

    /// Index equal to len is the same as append.
    /// Shifts everything from index to the right.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), ListError> {
        let len = self.len;
        if index > len {
            return Err(self.out_of_range(index, "insert"));
        }
        if len == self.capacity() {
            self.grow(len + 1);
        }

        // Place at the end and rotate it into position.
        self.slots[len] = Some(value);
        self.slots[index..=len].rotate_right(1);
        self.len = len + 1;
        Ok(())
    }

    /// Removes element at index and returns it.
    /// Following elements are shifted to the left to fill the gap.
    pub fn delete(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len;
        if index >= len {
            return Err(self.out_of_range(index, "delete"));
        }

        let value = self.slots[index].take().expect("Live slot is filled");
        // Hole travels to len - 1.
        self.slots[index..len].rotate_left(1);
        self.len = len - 1;

        self.shrink();
        Ok(value)
    }

    /// Visits elements in index order.
    /// First error returned by visit stops the traversal and is returned.
    pub fn range<E>(&self, mut visit: impl FnMut(usize, &T) -> Result<(), E>) -> Result<(), E> {
        for (index, value) in self.iter().enumerate() {
            visit(index, value)?;
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn into_vec(self) -> Vec<T> {
        let len = self.len;
        self.slots.into_vec().into_iter().take(len).flatten().collect()
    }

    /// Drops all elements. Capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Keeps only elements for which keep returns true, preserving their order.
    /// Afterwards the shrink policy is applied until it is satisfied.
    pub fn retain(&mut self, mut keep: impl FnMut(&T) -> bool) {
        let len = self.len;
        let mut kept = 0;
        for i in 0..len {
            if self.slots[i].as_ref().map_or(false, &mut keep) {
                // [kept, i) are all empty at this point.
                self.slots.swap(kept, i);
                kept += 1;
            } else {
                self.slots[i] = None;
            }
        }
        self.len = kept;

        self.shrink();
    }

    /// New list of mapped elements with the same capacity and policy.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> ArrayList<U> {
        let mut list = ArrayList::with_policy(self.capacity(), self.policy);
        for value in self.iter() {
            list.append(f(value));
        }
        list
    }

    fn grow(&mut self, min_capacity: usize) {
        let capacity = self.capacity();
        let new_capacity = self.policy.grown(capacity, min_capacity);
        debug!(
            "Growing list from {} to {} slots with {} elements",
            capacity, new_capacity, self.len
        );
        self.reallocate(new_capacity);
    }

    /// Halves capacity for as long as the policy asks, then reallocates once.
    fn shrink(&mut self) {
        let capacity = self.capacity();
        let mut new_capacity = capacity;
        while let Some(shrunk) = self.policy.shrunk(new_capacity, self.len) {
            new_capacity = shrunk;
        }
        if new_capacity != capacity {
            debug!(
                "Shrinking list from {} to {} slots with {} elements",
                capacity, new_capacity, self.len
            );
            self.reallocate(new_capacity);
        }
    }

    /// Moves live elements into a fresh buffer of exactly new_capacity slots.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len);
        let mut slots = empty_slots(new_capacity);
        for (to, from) in slots.iter_mut().zip(self.slots[..self.len].iter_mut()) {
            *to = from.take();
        }
        self.slots = slots;
    }

    fn out_of_range(&self, index: usize, op: &'static str) -> ListError {
        trace!("Rejected {} at {} with len {}", op, index, self.len);
        ListError::out_of_range(index, self.len, op)
    }
}

fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            len: self.len,
            policy: self.policy,
        }
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

// Indexing
impl<T> Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Ok(value) => value,
            Err(error) => panic!("{}", error),
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        list.extend(iter);
        list
    }
}
