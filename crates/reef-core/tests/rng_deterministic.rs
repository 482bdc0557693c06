use reef_core::rng::{derive_substream_seed, RngHandle};
use reef_core::HealthSampler;
use rand::RngCore;

#[test]
fn rng_emits_reproducible_sequence() {
    let mut rng_a = RngHandle::from_seed(1234);
    let mut rng_b = RngHandle::from_seed(1234);

    let seq_a: Vec<u64> = (0..100).map(|_| rng_a.next_u64()).collect();
    let seq_b: Vec<u64> = (0..100).map(|_| rng_b.next_u64()).collect();

    assert_eq!(seq_a, seq_b);
}

#[test]
fn health_draws_stay_in_range() {
    let mut rng = RngHandle::from_seed(7);
    for _ in 0..2_000 {
        let value = rng.sample_inclusive(0, 100);
        assert!(value <= 100);
        let low = rng.sample_inclusive(0, 14);
        assert!(low <= 14);
    }
}

#[test]
fn health_draws_cover_both_bounds() {
    let mut rng = RngHandle::from_seed(99);
    let draws: Vec<u8> = (0..5_000).map(|_| rng.sample_inclusive(0, 14)).collect();
    assert!(draws.contains(&0));
    assert!(draws.contains(&14));
}

#[test]
fn substream_seeds_are_stable_and_distinct() {
    let a = derive_substream_seed(42, 0);
    let b = derive_substream_seed(42, 1);
    assert_ne!(a, b);
    assert_eq!(a, derive_substream_seed(42, 0));
}
