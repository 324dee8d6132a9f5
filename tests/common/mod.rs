//! Helpers shared by the integration tests.
//!
//! Both priority queue flavors are driven through the [`Queue`] trait, so the same test bodies in
//! [`tests`] and [`quickcheck`] run against each of them.
#![allow(dead_code)]

pub mod tests;

use ranked_collections::{Order, PriorityMultiset, PriorityQueue, Ranked};

/// Minimal queue interface over `u32` ranks.
pub trait Queue {
    fn new(order: Order) -> Self;
    fn push(&mut self, rank: u32);
    fn pop(&mut self) -> Option<u32>;
    /// Remove one element of rank `rank`, returning its rank.
    fn remove(&mut self, rank: u32) -> Option<u32>;
    fn len(&self) -> usize;
    fn is_heap(&self) -> bool;
}

impl Queue for PriorityQueue<u32> {
    fn new(order: Order) -> Self {
        PriorityQueue::new(order)
    }

    fn push(&mut self, rank: u32) {
        self.enqueue(rank, rank);
    }

    fn pop(&mut self) -> Option<u32> {
        self.dequeue_with_rank().map(|(element, rank)| {
            assert_eq!(element, rank, "element separated from its rank");
            rank
        })
    }

    fn remove(&mut self, rank: u32) -> Option<u32> {
        self.remove_element(&rank)
    }

    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn is_heap(&self) -> bool {
        PriorityQueue::is_heap(self)
    }
}

/// Ranked by `rank` alone; `serial` tells comparator-equal items apart.
#[derive(Debug, Clone, Ranked)]
pub struct Item {
    #[rank]
    pub rank: u32,
    pub serial: usize,
}

impl Item {
    pub fn new(rank: u32) -> Self {
        Self { rank, serial: 0 }
    }
}

impl Queue for PriorityMultiset<Item> {
    fn new(order: Order) -> Self {
        PriorityMultiset::new(order)
    }

    fn push(&mut self, rank: u32) {
        let serial = PriorityMultiset::len(self);
        self.enqueue(Item { rank, serial });
    }

    fn pop(&mut self) -> Option<u32> {
        self.dequeue().map(|item| item.rank)
    }

    fn remove(&mut self, rank: u32) -> Option<u32> {
        PriorityMultiset::remove(self, &Item::new(rank)).map(|item| item.rank)
    }

    fn len(&self) -> usize {
        PriorityMultiset::len(self)
    }

    fn is_heap(&self) -> bool {
        PriorityMultiset::is_heap(self)
    }
}

/// Install `env_logger` once per test binary so `RUST_LOG=trace` shows library events.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
