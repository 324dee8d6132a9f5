//! Priority queue whose elements are ranked by a caller-supplied number.
use crate::heap::{Compare, Heap};
use crate::{Error, Order, Result};
use log::trace;
use num::Unsigned;
use std::cmp::Ordering;

/// An element paired with the rank it was enqueued with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<T, R> {
    element: T,
    rank: R,
}

/// Ranks entries by their rank alone; the element is never inspected.
#[derive(Debug, Clone, Copy, Default)]
struct ByRank;

impl<T, R: Ord> Compare<Entry<T, R>> for ByRank {
    fn compare(&self, a: &Entry<T, R>, b: &Entry<T, R>) -> Ordering {
        a.rank.cmp(&b.rank)
    }
}

/// A priority queue of elements ranked by an unsigned integer given at insertion.
///
/// With [`Order::Ascending`] the smallest rank is dequeued first, with [`Order::Descending`] the
/// largest. Elements with equal rank come out in an unspecified order; in particular, it is not
/// necessarily the order they were enqueued in.
///
/// ## Usage
///
/// ```rust
/// # use ranked_collections::{Order, PriorityQueue};
/// let mut q: PriorityQueue<&str> = PriorityQueue::new(Order::Ascending);
/// q.enqueue("five", 5);
/// q.enqueue("one", 1);
/// q.enqueue("three", 3);
///
/// assert_eq!(q.len(), 3);
/// assert_eq!(q.dequeue(), Some("one"));
/// assert_eq!(q.dequeue(), Some("three"));
/// assert_eq!(q.dequeue(), Some("five"));
/// assert_eq!(q.dequeue(), None);
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T, R = u32> {
    heap: Heap<Entry<T, R>, ByRank>,
}

impl<T, R: Unsigned + Ord + Copy> Default for PriorityQueue<T, R> {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

impl<T, R: Unsigned + Ord + Copy> PriorityQueue<T, R> {
    pub fn new(order: Order) -> Self {
        Self {
            heap: Heap::new(order, ByRank),
        }
    }

    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Self {
            heap: Heap::with_capacity(order, ByRank, capacity),
        }
    }

    /// Build a queue from `(element, rank)` pairs in `O(n)`.
    pub fn from_vec(order: Order, entries: Vec<(T, R)>) -> Self {
        let entries = entries
            .into_iter()
            .map(|(element, rank)| Entry { element, rank })
            .collect();
        Self {
            heap: Heap::from_vec(order, ByRank, entries),
        }
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.heap.order()
    }

    /// Number of enqueued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn enqueue(&mut self, element: T, rank: R) {
        self.heap.push(Entry { element, rank });
    }

    /// Remove and return the best-ranked element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|e| e.element)
    }

    /// Like [`PriorityQueue::dequeue()`], but also returns the element's rank.
    pub fn dequeue_with_rank(&mut self) -> Option<(T, R)> {
        self.heap.pop().map(|e| (e.element, e.rank))
    }

    /// The element [`PriorityQueue::dequeue()`] would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|e| &e.element)
    }

    /// Rank of the element [`PriorityQueue::dequeue()`] would return next.
    pub fn peek_rank(&self) -> Option<R> {
        self.heap.peek().map(|e| e.rank)
    }

    /// Give the entry at storage index `index` a new rank, and move it to where that rank
    /// belongs.
    ///
    /// Storage indices come from [`PriorityQueue::index_of()`] or the position in
    /// [`PriorityQueue::iter()`], and are invalidated by any other mutation.
    pub fn change_priority(&mut self, index: usize, rank: R) -> Result<()> {
        let len = self.heap.len();
        if self.heap.update(index, |e| e.rank = rank) {
            trace!("changed priority of entry {index}");
            Ok(())
        } else {
            Err(Error::IndexOutOfBounds { index, len })
        }
    }

    /// Storage index of the first entry equal to `element`.
    pub fn index_of(&self, element: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.heap.iter().position(|e| e.element == *element)
    }

    /// Remove and return the element at storage index `index`, or `None` if it is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let entry = self.heap.remove(index)?;
        trace!("removed entry {index}, {} left", self.heap.len());
        Some(entry.element)
    }

    /// Remove the first entry equal to `element`, returning the stored element.
    pub fn remove_element(&mut self, element: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.index_of(element)?;
        self.remove(index)
    }

    /// `(element, rank)` pairs in storage order, which is not priority order.
    pub fn iter(&self) -> Iter<'_, T, R> {
        Iter {
            inner: self.heap.iter(),
        }
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Consume the queue, returning its elements in dequeue order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|e| e.element)
            .collect()
    }

    /// Check the heap invariant over the whole queue. `O(n)`.
    pub fn is_heap(&self) -> bool {
        self.heap.is_heap()
    }
}

impl<T, R: Unsigned + Ord + Copy> Extend<(T, R)> for PriorityQueue<T, R> {
    fn extend<I: IntoIterator<Item = (T, R)>>(&mut self, iter: I) {
        for (element, rank) in iter {
            self.enqueue(element, rank);
        }
    }
}

/// Iterator over a [`PriorityQueue`] in storage order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T, R> {
    inner: std::slice::Iter<'a, Entry<T, R>>,
}

impl<'a, T, R: Copy> Iterator for Iter<'a, T, R> {
    type Item = (&'a T, R);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.element, e.rank))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, R: Copy> ExactSizeIterator for Iter<'_, T, R> {}

impl<'a, T, R: Unsigned + Ord + Copy> IntoIterator for &'a PriorityQueue<T, R> {
    type Item = (&'a T, R);
    type IntoIter = Iter<'a, T, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
