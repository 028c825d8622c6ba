//! # Goal
//! Growable array list whose memory use follows an explicit, inspectable policy,
//! and a reader/writer locked wrapper for sharing it between threads.
//!
//! # Architecture
//! - Core - errors and capacity policy, shared by everything else.
//! - [`ArrayList`] - unsynchronized list. Owns its buffer and decides when it grows or shrinks.
//! - [`ConcurrentArrayList`] - owns one [`ArrayList`] behind a `RwLock`.
//!   Behind the `concurrent` feature, on by default.
//!
//! # Capacity
//! - Full list grows by [`CapacityPolicy::growth_factor`], at least doubling.
//! - After a removal, list with capacity above [`CapacityPolicy::shrink_floor`]
//!   and less than a quarter of it in use halves its capacity.
//!
//! ```
//! use seqlist::ArrayList;
//!
//! let mut list = ArrayList::with_capacity(10);
//! list.append(10);
//! list.append(30);
//! list.insert(1, 20).unwrap();
//! assert_eq!(list.get(1), Ok(&20));
//! assert_eq!(list.delete(0), Ok(10));
//! assert!(list.get(2).is_err());
//! ```

//? Important decisions:
//? - Indices are usize, so negative indices are rejected by the type system.
//? - Element slots past len are None, so removal never keeps a moved out value alive.
//? - Locking is left to ConcurrentArrayList, ArrayList takes &mut self for writes.

pub mod collection;
pub mod core;

pub use crate::collection::*;
pub use crate::core::{CapacityPolicy, ListError};
