//! Array-backed binary heap shared by both priority queue flavors.
//!
//! The heap is parameterized by a [`Compare`] rule, which says how two entries rank against each
//! other, and an [`Order`], which says whether the smaller or the larger rank wins.
//!
//! Entries that compare equal come out in an unspecified (but heap-valid) order: the heap is not
//! stable, and nothing here preserves insertion order between equal entries. During sift-down,
//! when both children rank equally, the left child is chosen.
use crate::Order;
use log::trace;
use std::cmp::Ordering;

/// Ranking rule for heap entries.
pub trait Compare<T> {
    /// Compare `a` to `b`. Must be a total preorder.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Ranks entries by their [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord> Compare<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Ranks entries with a closure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FnCompare<F>(pub F);

impl<T, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0(a, b)
    }
}

/// A binary heap over a `Vec`.
///
/// For every non-root index `i`, the entry at `(i - 1) / 2` is never worse than the entry at `i`
/// under the configured [`Order`]. This holds whenever a public method returns.
///
/// ## Usage
///
/// ```rust
/// # use ranked_collections::{heap::{Heap, Natural}, Order};
/// let mut heap = Heap::new(Order::Descending, Natural);
/// heap.push(5);
/// heap.push(1);
/// heap.push(3);
///
/// assert_eq!(heap.pop(), Some(5));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Heap<T, C> {
    data: Vec<T>,
    cmp: C,
    order: Order,
}

impl<T, C: Compare<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new(Order::default(), C::default())
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Create an empty heap.
    pub fn new(order: Order, cmp: C) -> Self {
        Self {
            data: Vec::new(),
            cmp,
            order,
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    pub fn with_capacity(order: Order, cmp: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
            order,
        }
    }

    /// Build a heap out of an arbitrary vector in `O(n)`.
    pub fn from_vec(order: Order, cmp: C, data: Vec<T>) -> Self {
        let mut heap = Self { data, cmp, order };
        heap.rebuild();
        heap
    }

    /// The order this heap was constructed with.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// The root entry, i.e., the one [`Heap::pop()`] would return next.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Entry at storage index `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Entries in storage order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Entries in storage order, as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Insert an entry. `O(log n)`.
    pub fn push(&mut self, entry: T) {
        self.data.push(entry);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the root entry. `O(log n)`.
    ///
    /// Returns `None` if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.data.pop()?;
        if self.data.is_empty() {
            return Some(last);
        }
        let root = std::mem::replace(&mut self.data[0], last);
        self.sift_down(0);
        Some(root)
    }

    /// Modify the entry at storage index `index` in place, then restore the heap invariant in
    /// whichever direction the change requires.
    ///
    /// Returns `false` without calling `f` if `index` is out of bounds.
    pub fn update(&mut self, index: usize, f: impl FnOnce(&mut T)) -> bool {
        let Some(entry) = self.data.get_mut(index) else {
            return false;
        };
        f(entry);
        let index = self.sift_up(index);
        self.sift_down(index);
        true
    }

    /// Remove and return the entry at storage index `index`. `O(log n)`.
    ///
    /// The last entry takes its slot and is moved to wherever it belongs. Returns `None` if
    /// `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.get(index)?;
        let entry = self.data.swap_remove(index);
        if index < self.data.len() {
            let index = self.sift_down(index);
            self.sift_up(index);
        }
        Some(entry)
    }

    /// Remove every entry, keeping the allocation.
    pub fn clear(&mut self) {
        trace!("clearing heap of {} entries", self.data.len());
        self.data.clear();
    }

    /// Consume the heap, returning its entries in the order they would be popped.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(entry) = self.pop() {
            sorted.push(entry);
        }
        sorted
    }

    /// Check the heap invariant over the whole storage. `O(n)`.
    pub fn is_heap(&self) -> bool {
        (1..self.data.len()).all(|i| !self.better(&self.data[i], &self.data[(i - 1) / 2]))
    }

    /// Whether `a` ranks strictly better than `b`.
    #[inline]
    fn better(&self, a: &T, b: &T) -> bool {
        self.order.prefers(self.cmp.compare(a, b))
    }

    /// Move the entry at `pos` towards the root; returns its final position.
    fn sift_up(&mut self, mut pos: usize) -> usize {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.better(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
        pos
    }

    /// Move the entry at `pos` towards the leaves; returns its final position.
    fn sift_down(&mut self, mut pos: usize) -> usize {
        let len = self.data.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }

            // The right child only wins if it is strictly better, so ties go left.
            let right = left + 1;
            let child = if right < len && self.better(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };

            if !self.better(&self.data[child], &self.data[pos]) {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
        pos
    }

    /// Heapify the whole storage bottom-up.
    fn rebuild(&mut self) {
        trace!("heapifying {} entries", self.data.len());
        for pos in (0..self.data.len() / 2).rev() {
            self.sift_down(pos);
        }
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
