//! Tests for priority queue implementations.
//!
//! All the tests here are helpers defined for some implementation of the `Queue` trait, run once
//! per `Order`.
use super::Queue;
use ranked_collections::Order;

const SOME: usize = 500;
const MANY: usize = 2000;

fn drain<Q: Queue>(q: &mut Q) -> Vec<u32> {
    let mut out = vec![];
    while let Some(r) = q.pop() {
        assert!(q.is_heap(), "heap invariant broken after dequeue");
        out.push(r);
    }
    out
}

fn assert_monotone(order: Order, ranks: &[u32]) {
    for (i, w) in ranks.windows(2).enumerate() {
        assert!(
            !order.prefers(w[1].cmp(&w[0])),
            "{order:?}: ranks[{}] = {} then ranks[{}] = {}",
            i,
            w[0],
            i + 1,
            w[1]
        );
    }
}

/// Enqueue `n` ranks from `next_rank`, then check everything comes back out in order.
fn do_fill_drain<Q: Queue>(order: Order, n: usize, mut next_rank: impl FnMut(usize) -> u32) {
    let mut q = Q::new(order);
    let mut expected = vec![];
    for i in 0..n {
        let r = next_rank(i);
        q.push(r);
        expected.push(r);
    }
    assert!(q.is_heap());
    assert_eq!(q.len(), n);

    let out = drain(&mut q);
    assert_monotone(order, &out);

    expected.sort_unstable();
    if order == Order::Descending {
        expected.reverse();
    }
    assert_eq!(out, expected);
}

pub fn five_one_three<Q: Queue>(order: Order) {
    let mut q = Q::new(order);
    for r in [5, 1, 3] {
        q.push(r);
    }
    let expected = match order {
        Order::Ascending => vec![1, 3, 5],
        Order::Descending => vec![5, 3, 1],
    };
    assert_eq!(drain(&mut q), expected);
}

pub fn empty_dequeue<Q: Queue>(order: Order) {
    let mut q = Q::new(order);
    assert_eq!(q.pop(), None);
    assert_eq!(q.len(), 0);

    q.push(7);
    assert_eq!(q.pop(), Some(7));
    assert_eq!(q.pop(), None);
    assert_eq!(q.pop(), None);
    assert_eq!(q.len(), 0);
}

pub fn count_tracks_operations<Q: Queue>(order: Order) {
    let mut q = Q::new(order);
    for k in 0..SOME {
        q.push((k % 17) as u32);
        assert_eq!(q.len(), k + 1);
    }
    for j in 0..SOME {
        assert!(q.pop().is_some());
        assert_eq!(q.len(), SOME - j - 1);
    }
}

pub fn invariant_after_each_enqueue<Q: Queue>(order: Order) {
    let mut q = Q::new(order);
    for i in 0..SOME {
        q.push(((i * 7919) % 251) as u32);
        assert!(q.is_heap(), "heap invariant broken after enqueue {i}");
    }
}

pub fn all_equal_ranks<Q: Queue>(order: Order) {
    // Equal ranks dequeue in some order; only their number and the invariant are guaranteed.
    do_fill_drain::<Q>(order, SOME, |_| 4);
}

pub fn few_distinct_ranks<Q: Queue>(order: Order) {
    do_fill_drain::<Q>(order, SOME, |i| (i % 3) as u32);
}

pub fn sorted_input<Q: Queue>(order: Order) {
    do_fill_drain::<Q>(order, MANY, |i| i as u32);
}

pub fn reverse_sorted_input<Q: Queue>(order: Order) {
    do_fill_drain::<Q>(order, MANY, |i| (MANY - i) as u32);
}

pub fn many_random<Q: Queue>(order: Order) {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(42);
    do_fill_drain::<Q>(order, MANY, |_| rng.gen_range(0..1000));
}

pub fn interleaved_random<Q: Queue>(order: Order) {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    let mut rng = StdRng::seed_from_u64(42);
    let mut q = Q::new(order);
    let mut model: Vec<u32> = vec![];

    for _ in 0..MANY {
        if !model.is_empty() && rng.gen_bool(0.4) {
            let best = match order {
                Order::Ascending => *model.iter().min().unwrap(),
                Order::Descending => *model.iter().max().unwrap(),
            };
            let pos = model.iter().position(|&r| r == best).unwrap();
            model.swap_remove(pos);
            assert_eq!(q.pop(), Some(best));
        } else {
            let r = rng.gen_range(0..100);
            model.push(r);
            q.push(r);
        }
        assert_eq!(q.len(), model.len());
        assert!(q.is_heap());
    }
}
