//! Unit tests for the shared derived-quantity logic.
//!
//! Covers:
//! - `randf` / `randb` derivation from a sibling's `randi`
//! - batch helpers against repeated single draws
//! - determinism and divergence across instances
//! - the non-normalised `randf` of the 64-bit source
//!
//! The process-wide legacy source is exercised in `tests/legacy_shared_state.rs`
//! instead, where its tests can be serialised.

use super::*;
use crate::{SystemEntropy, XorShift128Plus, XorShift32};
use approx::{assert_relative_eq, relative_eq};
use proptest::prelude::*;

#[test]
fn test_randb_matches_sibling_parity() {
    let mut a = XorShift32::default();
    let mut b = XorShift32::default();
    for _ in 0..1_000 {
        assert_eq!(a.randb(), b.randi() % 2 == 1);
    }

    let mut a = XorShift128Plus::default();
    let mut b = XorShift128Plus::default();
    for _ in 0..1_000 {
        assert_eq!(a.randb(), b.randi() % 2 == 1);
    }
}

#[test]
fn test_randf_matches_sibling_ratio() {
    let mut a = XorShift32::default();
    let mut b = XorShift32::default();
    for _ in 0..1_000 {
        let expected = f64::from(b.randi()) / 4_294_967_295.0;
        assert_relative_eq!(f64::from(a.randf()), expected, max_relative = 1e-6);
    }
}

#[test]
fn test_randf_first_default_value() {
    let mut rng = XorShift32::default();
    assert_relative_eq!(rng.randf(), 723_471_715.0 / RANDF_DIVISOR);
}

#[test]
fn test_randf_divisor_is_u32_max() {
    assert_eq!(RANDF_DIVISOR, u32::MAX as f32);
    assert_relative_eq!(f64::from(RANDF_DIVISOR), 4_294_967_295.0, max_relative = 1e-9);
}

#[test]
fn test_randf_not_normalised_for_64_bit_source() {
    let mut rng = XorShift128Plus::default();
    let value = rng.randf();
    // 0xCCF7CE0251E21EDB / (2^32 - 1) is roughly 3.44e9.
    assert!(value > 1.0, "expected an unnormalised value, got {}", value);
    assert_relative_eq!(
        f64::from(value),
        14_769_500_012_343_860_955.0 / 4_294_967_295.0,
        max_relative = 1e-6
    );
}

#[test]
fn test_derived_calls_consume_one_draw() {
    let mut rng = XorShift32::default();
    rng.randf();
    rng.randb();
    let mut reference = XorShift32::default();
    reference.randi();
    reference.randi();
    assert_eq!(rng.randi(), reference.randi());
}

#[test]
fn test_fill_helpers_match_single_draws() {
    let mut batch = XorShift32::new(42);
    let mut single = XorShift32::new(42);

    let mut ints = [0u32; 16];
    batch.fill_randi(&mut ints);
    for &value in &ints {
        assert_eq!(value, single.randi());
    }

    let mut floats = [0.0f32; 16];
    batch.fill_randf(&mut floats);
    for &value in &floats {
        assert_eq!(value, single.randf());
    }

    let mut bools = [false; 16];
    batch.fill_randb(&mut bools);
    for &value in &bools {
        assert_eq!(value, single.randb());
    }
}

#[test]
fn test_empty_buffer_does_not_advance() {
    let mut rng = XorShift128Plus::default();
    let mut empty: [u64; 0] = [];
    rng.fill_randi(&mut empty);
    rng.fill_randf(&mut []);
    rng.fill_randb(&mut []);
    assert_eq!(rng, XorShift128Plus::default());
}

#[test]
fn test_mut_ref_forwards_to_source() {
    fn draw_twice<R: RandomSource>(mut rng: R) -> (R::Output, R::Output) {
        (rng.randi(), rng.randi())
    }

    let mut rng = XorShift32::default();
    let (first, second) = draw_twice(&mut rng);
    assert_eq!(first, 723_471_715);
    assert_eq!(second, 2_497_366_906);
    assert_eq!(rng.state(), second);
}

#[test]
fn test_non_degenerate_from_default_seeds() {
    let mut rng32 = XorShift32::default();
    let mut rng128 = XorShift128Plus::default();
    let mut zeros32 = 0usize;
    let mut zeros128 = 0usize;
    for _ in 0..10_000 {
        if rng32.randi() == 0 {
            zeros32 += 1;
        }
        if rng128.randi() == 0 {
            zeros128 += 1;
        }
    }
    assert!(zeros32 < 10_000 && rng32.state() != 0);
    assert!(zeros128 < 10_000 && rng128.state() != (0, 0));
}

#[test]
fn test_distinct_seeds_diverge() {
    let pairs = [(1u32, 2u32), (7, 11), (2_463_534_242, 88_675_123), (u32::MAX, 1)];
    let diverged = pairs
        .iter()
        .any(|&(s1, s2)| XorShift32::new(s1).randi() != XorShift32::new(s2).randi());
    assert!(diverged);
}

#[test]
fn test_static_dispatch_types_are_sized() {
    fn assert_sized<T: Sized>() {}
    assert_sized::<XorShift32>();
    assert_sized::<XorShift128Plus>();
    assert_sized::<SystemEntropy>();

    fn accepts_reproducible<T: Reproducible>(_: &T) {}
    accepts_reproducible(&XorShift32::default());
    accepts_reproducible(&XorShift128Plus::default());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same seed, same sequence.
    #[test]
    fn prop_xorshift32_determinism(seed in any::<u32>(), count in 1..1000usize) {
        let mut a = XorShift32::new(seed);
        let mut b = XorShift32::new(seed);
        for i in 0..count {
            let (va, vb) = (a.randi(), b.randi());
            prop_assert_eq!(va, vb, "mismatch at index {} for seed {}", i, seed);
        }
    }

    #[test]
    fn prop_xorshift128plus_determinism(s0 in any::<u64>(), s1 in any::<u64>(), count in 1..1000usize) {
        let mut a = XorShift128Plus::new(s0, s1);
        let mut b = XorShift128Plus::new(s0, s1);
        for _ in 0..count {
            prop_assert_eq!(a.randi(), b.randi());
        }
    }

    /// Nonzero seeds never collapse to the zero state.
    #[test]
    fn prop_xorshift32_nonzero_stays_nonzero(seed in 1..=u32::MAX) {
        let mut rng = XorShift32::new(seed);
        for _ in 0..1000 {
            prop_assert_ne!(rng.randi(), 0);
        }
    }

    #[test]
    fn prop_randb_is_low_bit(s0 in any::<u64>(), s1 in any::<u64>()) {
        let mut a = XorShift128Plus::new(s0, s1);
        let mut b = XorShift128Plus::new(s0, s1);
        prop_assert_eq!(a.randb(), b.randi() & 1 == 1);
    }

    #[test]
    fn prop_randf_in_unit_interval_for_32_bit(seed in 1..=u32::MAX) {
        let mut rng = XorShift32::new(seed);
        for _ in 0..100 {
            let v = rng.randf();
            prop_assert!((0.0..=1.0).contains(&v), "randf out of range: {} (seed={})", v, seed);
        }
    }

    /// `randf` is the sibling's `randi` over `u32::MAX`, within `f32` rounding.
    #[test]
    fn prop_randf_ratio(seed in 1..=u32::MAX) {
        let mut a = XorShift32::new(seed);
        let mut b = XorShift32::new(seed);
        for _ in 0..100 {
            let got = f64::from(a.randf());
            let expected = f64::from(b.randi()) / 4_294_967_295.0;
            prop_assert!(
                relative_eq!(got, expected, max_relative = 1e-6),
                "randf {} vs ratio {} (seed={})", got, expected, seed
            );
        }
    }

    /// Batch helpers match the same number of single draws.
    #[test]
    fn prop_fill_matches_single(s0 in any::<u64>(), s1 in any::<u64>(), len in 0..256usize) {
        let mut batch = XorShift128Plus::new(s0, s1);
        let mut single = XorShift128Plus::new(s0, s1);

        let mut ints = vec![0u64; len];
        batch.fill_randi(&mut ints);
        let mut floats = vec![0.0f32; len];
        batch.fill_randf(&mut floats);
        let mut bools = vec![false; len];
        batch.fill_randb(&mut bools);

        for &v in &ints {
            prop_assert_eq!(v, single.randi());
        }
        for &v in &floats {
            prop_assert_eq!(v, single.randf());
        }
        for &v in &bools {
            prop_assert_eq!(v, single.randb());
        }
        prop_assert_eq!(batch.randi(), single.randi());
    }
}
