use std::cmp::Ordering;

/// Which end of the ranking is dequeued first.
///
/// Fixed when a queue is constructed; there is no way to flip it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    /// Smallest rank first (min-heap).
    #[default]
    Ascending,
    /// Largest rank first (max-heap).
    Descending,
}

impl Order {
    /// Whether `a` should sit closer to the root than `b`, given `ordering = a.cmp(b)`.
    ///
    /// Equal elements are never preferred over one another.
    #[inline]
    pub fn prefers(self, ordering: Ordering) -> bool {
        match self {
            Order::Ascending => ordering == Ordering::Less,
            Order::Descending => ordering == Ordering::Greater,
        }
    }
}
