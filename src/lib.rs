//! Priority queues over a binary heap, and a stack.
//!
//! Two queue flavors share one heap engine ([`heap::Heap`]):
//!
//! -   [`PriorityQueue`] pairs each element with an unsigned rank supplied at insertion.
//! -   [`PriorityMultiset`] stores elements that rank themselves through [`Ranked`], and counts
//!     comparator-equal elements so it can answer [`PriorityMultiset::count_of()`] and
//!     [`PriorityMultiset::contains()`].
//!
//! Both are constructed with an [`Order`] that decides whether the smallest
//! ([`Order::Ascending`]) or the largest ([`Order::Descending`]) rank is dequeued first. The order
//! cannot change afterwards.
//!
//! [`Stack`] is a plain LIFO container.
//!
//! ## Empty containers
//!
//! Dequeuing, popping or peeking an empty container is not an error. These operations return
//! `None`.
//!
//! ## Equal ranks
//!
//! The heap is not stable: elements that rank equally are dequeued in an unspecified order, which
//! need not be insertion order.
//!
//! ## Threads
//!
//! None of these containers synchronize internally. They are [`Send`] and [`Sync`] when their
//! elements are, and all mutation goes through `&mut self`; to share one between threads, wrap it
//! in a lock such as [`std::sync::Mutex`].
//!
//! ## Logging
//!
//! Events are emitted through the [`log`] facade at `trace` level, plus a `warn` when a
//! [`PriorityMultiset`] notices that an element's key changed while it was stored. Install any
//! logger to see them.

// Lets `#[derive(Ranked)]` name this crate from inside it.
extern crate self as ranked_collections;

mod error;
pub mod heap;
pub mod multiset;
mod order;
pub mod queue;
pub mod stack;

pub use error::{Error, Result};
pub use multiset::PriorityMultiset;
pub use order::Order;
pub use queue::PriorityQueue;
pub use ranked_collections_macros::Ranked;
pub use stack::Stack;

use std::cmp::Ordering;
use std::hash::Hash;

/// Elements that can rank themselves against one another.
///
/// `key()` is the canonical value an element is ranked and counted by; two elements are
/// comparator-equal exactly when their keys are equal. [`Ranked::compare()`] defaults to comparing
/// keys, and may be overridden to avoid building them, as long as it stays consistent with key
/// equality and remains a total preorder. Breaking that contract, or changing an element's key
/// while it sits in a queue, gives an unspecified order and unreliable counts, but never undefined
/// behavior.
///
/// Usually derived: each field marked `#[rank]` takes part, compared in declaration order.
///
/// ```rust
/// # use ranked_collections::Ranked;
/// # use std::cmp::Ordering;
/// #[derive(Ranked)]
/// struct Task {
///     #[rank]
///     deadline: u64,
///     description: String,
/// }
///
/// let a = Task { deadline: 10, description: "write".into() };
/// let b = Task { deadline: 10, description: "review".into() };
/// assert_eq!(a.compare(&b), Ordering::Equal);
/// assert_eq!(a.key(), 10);
/// ```
pub trait Ranked {
    /// Canonical ranking and equality key.
    type Key: Ord + Hash + Clone;

    fn key(&self) -> Self::Key;

    fn compare(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T: Ranked + ?Sized> Ranked for &T {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }

    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(*other)
    }
}

impl<T: Ranked + ?Sized> Ranked for Box<T> {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }

    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}

impl<T: Ranked + ?Sized> Ranked for std::rc::Rc<T> {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }

    fn compare(&self, other: &Self) -> Ordering {
        (**self).compare(other)
    }
}
