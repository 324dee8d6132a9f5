//! Priority queue of self-ranking elements with multiset bookkeeping.
use crate::heap::{Compare, Heap};
use crate::{Order, Ranked};
use log::{trace, warn};
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt::{self, Debug};

/// Ranks entries through their [`Ranked::compare()`] implementation.
#[derive(Debug, Clone, Copy, Default)]
struct ByComparator;

impl<T: Ranked> Compare<T> for ByComparator {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare(b)
    }
}

/// A priority queue of [`Ranked`] elements that also behaves as a multiset.
///
/// Besides dequeuing in rank order, it counts how many stored elements are comparator-equal to
/// any given element. Comparator-equal elements are stored individually, never merged.
///
/// Elements that compare equal come out in an unspecified order.
///
/// ## Usage
///
/// ```rust
/// # use ranked_collections::{Order, PriorityMultiset, Ranked};
/// #[derive(Debug, Ranked)]
/// struct Job {
///     #[rank]
///     priority: u32,
///     #[rank]
///     name: &'static str,
/// }
///
/// let a = Job { priority: 2, name: "a" };
/// let mut q = PriorityMultiset::new(Order::Ascending);
/// q.enqueue(Job { priority: 2, name: "a" });
/// q.enqueue(Job { priority: 2, name: "b" });
/// q.enqueue(Job { priority: 5, name: "c" });
///
/// assert_eq!(q.len(), 3);
/// assert_eq!(q.count_of(&a), 1);
/// assert!(q.contains(&a));
///
/// q.dequeue();
/// q.dequeue();
/// assert_eq!(q.len(), 1);
/// assert_eq!(q.peek().map(|j| j.name), Some("c"));
/// ```
///
/// ## Traversal
///
/// [`PriorityMultiset::iter()`] and [`PriorityMultiset::for_each()`] visit every stored element in
/// storage order, which is not priority order. Both borrow the queue, so it cannot be modified
/// until the traversal is over.
#[derive(Clone)]
pub struct PriorityMultiset<T: Ranked> {
    heap: Heap<T, ByComparator>,
    /// Number of stored elements per key; never holds a zero count.
    counts: FxHashMap<T::Key, usize>,
}

impl<T: Ranked> Default for PriorityMultiset<T> {
    fn default() -> Self {
        Self::new(Order::default())
    }
}

impl<T: Ranked + Debug> Debug for PriorityMultiset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityMultiset")
            .field("order", &self.order())
            .field("elements", &self.heap.as_slice())
            .finish()
    }
}

impl<T: Ranked> PriorityMultiset<T> {
    pub fn new(order: Order) -> Self {
        Self {
            heap: Heap::new(order, ByComparator),
            counts: FxHashMap::default(),
        }
    }

    pub fn with_capacity(order: Order, capacity: usize) -> Self {
        Self {
            heap: Heap::with_capacity(order, ByComparator, capacity),
            counts: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Build a queue from a vector of elements in `O(n)`.
    pub fn from_vec(order: Order, elements: Vec<T>) -> Self {
        let mut counts = FxHashMap::default();
        for element in &elements {
            *counts.entry(element.key()).or_insert(0) += 1;
        }
        Self {
            heap: Heap::from_vec(order, ByComparator, elements),
            counts,
        }
    }

    #[inline]
    pub fn order(&self) -> Order {
        self.heap.order()
    }

    /// Total number of stored elements, duplicates included.
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of distinct keys among the stored elements.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    pub fn enqueue(&mut self, element: T) {
        *self.counts.entry(element.key()).or_insert(0) += 1;
        self.heap.push(element);
    }

    /// Remove and return the best-ranked element, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let element = self.heap.pop()?;
        self.forget(&element);
        Some(element)
    }

    /// Remove and return one stored element comparator-equal to `element`, or `None` if there is
    /// none.
    ///
    /// Which of several comparator-equal elements is removed is unspecified.
    pub fn remove(&mut self, element: &T) -> Option<T> {
        let index = self.heap.iter().position(|x| x.compare(element).is_eq())?;
        let removed = self.heap.remove(index)?;
        self.forget(&removed);
        Some(removed)
    }

    /// The element [`PriorityMultiset::dequeue()`] would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Number of stored elements comparator-equal to `element`.
    pub fn count_of(&self, element: &T) -> usize {
        self.counts.get(&element.key()).copied().unwrap_or(0)
    }

    /// Whether any stored element is comparator-equal to `element`.
    pub fn contains(&self, element: &T) -> bool {
        self.count_of(element) > 0
    }

    /// Call `visitor` once for every stored element, in storage order.
    pub fn for_each(&self, mut visitor: impl FnMut(&T)) {
        for element in self.heap.iter() {
            visitor(element);
        }
    }

    /// Stored elements in storage order, which is not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.counts.clear();
    }

    /// Consume the queue, returning its elements in dequeue order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.heap.into_sorted_vec()
    }

    /// Check the heap invariant over the whole queue. `O(n)`.
    pub fn is_heap(&self) -> bool {
        self.heap.is_heap()
    }

    /// Drop one occurrence of `element`'s key from the counts.
    fn forget(&mut self, element: &T) {
        let key = element.key();
        match self.counts.get_mut(&key) {
            Some(1) => {
                self.counts.remove(&key);
                trace!("last occurrence of a key removed, {} keys left", self.counts.len());
            }
            Some(count) => *count -= 1,
            None => {
                // The element's key changed while it was stored.
                warn!("removed element has no recorded key; its rank was mutated in the queue");
            }
        }
        if self.heap.is_empty() && !self.counts.is_empty() {
            // Stale keys left behind by mutated elements.
            warn!("queue is empty but {} keys are still counted, dropping them", self.counts.len());
            self.counts.clear();
        }
    }
}

impl<T: Ranked> Extend<T> for PriorityMultiset<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.enqueue(element);
        }
    }
}

impl<'a, T: Ranked> IntoIterator for &'a PriorityMultiset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
