use ironchain::utils::SplitMix64;

#[test]
fn same_seed_same_stream() {
    let mut a = SplitMix64::new(7);
    let mut b = SplitMix64::new(7);
    for _ in 0..100 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn different_seeds_diverge() {
    let mut a = SplitMix64::new(1);
    let mut b = SplitMix64::new(2);
    assert_ne!(a.next_u64(), b.next_u64());
}

#[test]
fn below_stays_in_bounds() {
    let mut rng = SplitMix64::new(99);
    for bound in 1..64 {
        for _ in 0..32 {
            assert!(rng.below(bound) < bound);
        }
    }
}

#[test]
fn below_one_is_always_zero() {
    let mut rng = SplitMix64::new(5);
    assert!((0..100).all(|_| rng.below(1) == 0));
}
