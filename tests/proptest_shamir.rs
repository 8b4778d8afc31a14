use proptest::prelude::*;
use proptest::sample::subsequence;
use std::collections::BTreeSet;
use threshold_sss::{default_prime, generate_shares, recover_secret, BigUint, Share, SharingError};

/// (threshold, total_shares) with 2 <= k <= n <= 50.
fn params() -> impl Strategy<Value = (u32, u32)> {
    (2u32..=50).prop_flat_map(|n| (2u32..=n, Just(n)))
}

/// Nonzero secret below 2^521 - 1.
fn secret() -> impl Strategy<Value = BigUint> {
    proptest::collection::vec(any::<u8>(), 1..=65).prop_filter_map("zero secret", |bytes| {
        let v = BigUint::from_bytes_be(&bytes);
        if v == BigUint::from(0u32) {
            None
        } else {
            Some(v)
        }
    })
}

/// Threshold, total, and a shuffled threshold-sized subset of share indices.
fn subset() -> impl Strategy<Value = (u32, u32, Vec<usize>)> {
    params().prop_flat_map(|(k, n)| {
        let picks = subsequence((0..n as usize).collect::<Vec<_>>(), k as usize).prop_shuffle();
        (Just(k), Just(n), picks)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn roundtrip_first_threshold_shares(s in secret(), (k, n) in params()) {
        let prime = default_prime();
        let shares = generate_shares(&s, k, n, &prime).unwrap();
        let recovered = recover_secret(&shares[..k as usize], &prime).unwrap();
        prop_assert_eq!(recovered, s);
    }

    #[test]
    fn any_threshold_subset_recovers(s in secret(), (k, n, picks) in subset()) {
        let prime = default_prime();
        let shares = generate_shares(&s, k, n, &prime).unwrap();
        let chosen: Vec<Share> = picks.iter().map(|&i| shares[i].clone()).collect();
        prop_assert_eq!(recover_secret(&chosen, &prime).unwrap(), s);
    }

    #[test]
    fn x_values_are_one_through_n(s in secret(), (k, n) in params()) {
        let shares = generate_shares(&s, k, n, &default_prime()).unwrap();
        let xs: Vec<u32> = shares.iter().map(|sh| sh.x).collect();
        prop_assert_eq!(xs, (1..=n).collect::<Vec<_>>());
        let distinct: BTreeSet<u32> = shares.iter().map(|sh| sh.x).collect();
        prop_assert_eq!(distinct.len(), n as usize);
    }

    #[test]
    fn below_threshold_returns_field_element(s in secret(), (k, n) in params()) {
        prop_assume!(k >= 3);
        let prime = default_prime();
        let shares = generate_shares(&s, k, n, &prime).unwrap();
        let value = recover_secret(&shares[..(k - 1) as usize], &prime).unwrap();
        prop_assert!(value < prime);
    }

    #[test]
    fn duplicate_x_is_rejected(x in 1u32..100, y1 in any::<u64>(), y2 in any::<u64>(), other in 100u32..200) {
        let shares = vec![
            Share::new(x, BigUint::from(y1)).unwrap(),
            Share::new(other, BigUint::from(7u32)).unwrap(),
            Share::new(x, BigUint::from(y2)).unwrap(),
        ];
        prop_assert_eq!(recover_secret(&shares, &default_prime()), Err(SharingError::DuplicatePoint(x)));
    }

    #[test]
    fn threshold_above_total_emits_nothing(s in secret(), n in 2u32..20, extra in 1u32..10) {
        let result = generate_shares(&s, n + extra, n, &default_prime());
        prop_assert!(matches!(result, Err(SharingError::Config(_))));
    }
}
