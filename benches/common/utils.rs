use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy)]
pub enum Decision {
    Enqueue(u32),
    Dequeue,
}

/// `len` uniformly random ranks below `domain`.
pub fn random_ranks(len: usize, domain: u32) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.gen_range(0..domain)).collect()
}

/// A random mix of enqueues and dequeues, enqueuing with probability `enqueue_percentage`.
pub fn random_decisions(len: usize, enqueue_percentage: f64) -> Vec<Decision> {
    assert!((0.0..=1.0).contains(&enqueue_percentage));
    let mut rng = StdRng::seed_from_u64(42);
    (0..len)
        .map(|_| {
            if rng.gen_bool(enqueue_percentage) {
                Decision::Enqueue(rng.gen_range(0..1_000))
            } else {
                Decision::Dequeue
            }
        })
        .collect()
}
