use std::collections::HashMap;

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use taru::{sample_iter_with_rng, Reservoir, ReservoirError};

proptest! {
    #[test]
    fn prop_reservoir_size_invariant(
        k in 1usize..20,
        items in prop::collection::vec(0u32..1000, 0..50)
    ) {
        let mut r = Reservoir::new(k).expect("capacity ok");
        for &item in &items {
            r.add(item);
        }

        let n = items.len();
        prop_assert_eq!(r.samples().len(), std::cmp::min(n, k));
        prop_assert_eq!(r.seen(), n);
        prop_assert_eq!(r.cap(), k);
    }

    #[test]
    fn prop_filling_phase_preserves_multiset(
        k in 1usize..30,
        seed in any::<u64>()
    ) {
        // No more adds than capacity: the sample is the input, exactly.
        let items: Vec<u32> = (0..k as u32).map(|i| i % 7).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut r = Reservoir::new(k).expect("capacity ok");
        for &item in &items {
            r.add_with_rng(item, &mut rng);
        }

        let mut histogram = HashMap::new();
        for &item in r.samples() {
            *histogram.entry(item).or_insert(0usize) += 1;
        }
        let mut expected = HashMap::new();
        for &item in &items {
            *expected.entry(item).or_insert(0usize) += 1;
        }
        prop_assert_eq!(histogram, expected);
    }

    #[test]
    fn prop_sample_elements_come_from_stream(
        k in 1usize..20,
        items in prop::collection::vec(0u32..1000, 0..200),
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut r = Reservoir::new(k).expect("capacity ok");
        for &item in &items {
            r.add_with_rng(item, &mut rng);
        }

        for sampled in r.samples() {
            prop_assert!(items.contains(sampled));
        }
    }

    #[test]
    fn prop_sample_into_agrees_with_samples(
        k in 1usize..20,
        items in prop::collection::vec(0i64..1000, 0..100),
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut r = Reservoir::new(k).expect("capacity ok");
        for &item in &items {
            r.add_with_rng(item, &mut rng);
        }

        let mut dest = vec![0i64; k];
        let n = r.sample_into(&mut dest).expect("destination sized to cap");
        prop_assert_eq!(n, r.len());
        prop_assert_eq!(&dest[..n], r.samples());
    }

    #[test]
    fn prop_short_destination_always_rejected(
        k in 2usize..20,
        shortfall in 1usize..10
    ) {
        let r = Reservoir::<u8>::new(k).expect("capacity ok");
        let len = k.saturating_sub(shortfall);
        let mut dest = vec![0u8; len];
        let err = r.sample_into(&mut dest).expect_err("short dest rejected");
        prop_assert_eq!(err, ReservoirError::ShortDestination { capacity: k, len });
    }

    #[test]
    fn prop_sample_iter_size_invariant(
        k in 1usize..20,
        n in 0usize..200,
        seed in any::<u64>()
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let sample = sample_iter_with_rng(0..n, k, &mut rng).expect("capacity ok");
        prop_assert_eq!(sample.len(), std::cmp::min(n, k));
        for v in sample {
            prop_assert!(v < n);
        }
    }
}
