// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The sparse engine must agree exactly with the dense power-set table,
//! and both with a brute-force subset check.

mod common;

use num_bigint::BigUint;
use subset_lattice::encoding::{codes_of_cardinality, GroundSet, SubsetCode};
use subset_lattice::{binomial, DenseLattice, SparseLattice};

fn sparse_counts(n: usize, k: usize, seeds: &[SubsetCode]) -> Vec<(BigUint, BigUint)> {
    let mut sparse = SparseLattice::new(GroundSet::indexed(n).unwrap(), k).unwrap();
    sparse.seed_codes(seeds.iter().copied()).unwrap();
    advance_to_top(&mut sparse)
}

/// Count every layer from the current one up to the full set.
fn advance_to_top(sparse: &mut SparseLattice<usize>) -> Vec<(BigUint, BigUint)> {
    let mut counts = Vec::new();
    loop {
        let count = sparse.count_current_layer();
        counts.push((count.numerator, count.denominator));
        if sparse.current_layer() == sparse.ground_size() {
            break;
        }
        sparse.advance().unwrap();
    }
    counts
}

fn dense_counts(dense: &DenseLattice<usize>, k: usize) -> Vec<(BigUint, BigUint)> {
    (k..=dense.ground_size())
        .map(|c| {
            let count = dense.count_property_by_layer(c).unwrap();
            (count.numerator, count.denominator)
        })
        .collect()
}

#[test]
fn test_exhaustive_small_ground_sets() {
    // Every seed set of 2-subsets for n = 4 (6 codes, 64 seed sets).
    let n = 4;
    let k = 2;
    let layer: Vec<_> = codes_of_cardinality(n, k).collect();
    let mut dense = DenseLattice::new(GroundSet::indexed(n).unwrap()).unwrap();

    for mask in 0u32..(1 << layer.len()) {
        let seeds: Vec<_> = layer
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &code)| code)
            .collect();

        dense.clear_property();
        dense.fill_in_codes(seeds.iter().copied()).unwrap();
        assert_eq!(
            sparse_counts(n, k, &seeds),
            dense_counts(&dense, k),
            "seed mask {:#b}",
            mask
        );
    }
}

#[test]
fn test_random_seeds_up_to_fourteen() {
    let mut rng = common::rng(0x5eed);
    for n in 1..=14 {
        let mut dense = DenseLattice::new(GroundSet::indexed(n).unwrap()).unwrap();
        for k in 0..=n {
            let seeds = common::random_seed_codes(&mut rng, n, k, 6);
            dense.clear_property();
            dense.fill_in_codes(seeds.iter().copied()).unwrap();

            let sparse = sparse_counts(n, k, &seeds);
            assert_eq!(sparse, dense_counts(&dense, k), "n={} k={}", n, k);

            for (offset, (numerator, denominator)) in sparse.iter().enumerate() {
                let c = k + offset;
                assert_eq!(*denominator, binomial(n, c));
                assert_eq!(
                    *numerator,
                    BigUint::from(common::brute_force_count(n, c, &seeds)),
                    "n={} k={} c={}",
                    n,
                    k,
                    c
                );
            }
        }
    }
}

#[test]
fn test_sixteen_items() {
    common::init_logging();
    let n = 16;
    let k = 3;
    let mut rng = common::rng(16);
    let seeds = common::random_seed_codes(&mut rng, n, k, 40);

    let mut dense = DenseLattice::new(GroundSet::indexed(n).unwrap()).unwrap();
    dense.fill_in_codes(seeds.iter().copied()).unwrap();
    assert_eq!(sparse_counts(n, k, &seeds), dense_counts(&dense, k));
}

#[test]
fn test_fifteen_and_sixteen_items_edge_layers() {
    let mut rng = common::rng(0x1516);
    for n in 15..=16 {
        let mut dense = DenseLattice::new(GroundSet::indexed(n).unwrap()).unwrap();
        for k in [0, 1, n - 1, n] {
            let seeds = common::random_seed_codes(&mut rng, n, k, 6);
            dense.clear_property();
            dense.fill_in_codes(seeds.iter().copied()).unwrap();

            let sparse = sparse_counts(n, k, &seeds);
            assert_eq!(sparse, dense_counts(&dense, k), "n={} k={}", n, k);
            for (offset, (numerator, _)) in sparse.iter().enumerate() {
                let c = k + offset;
                assert_eq!(
                    *numerator,
                    BigUint::from(common::brute_force_count(n, c, &seeds)),
                    "n={} k={} c={}",
                    n,
                    k,
                    c
                );
            }
        }
    }
}

#[test]
fn test_seed_codes_after_reset_to_higher_layer() {
    let mut rng = common::rng(0x7e5e7);
    for n in [6, 11, 15] {
        let mut sparse = SparseLattice::new(GroundSet::indexed(n).unwrap(), 1).unwrap();
        sparse.seed_codes([SubsetCode::empty().with(0)]).unwrap();
        sparse.advance().unwrap();
        sparse.advance().unwrap();

        let mut dense = DenseLattice::new(GroundSet::indexed(n).unwrap()).unwrap();
        for k in [2, n / 2, n - 1] {
            sparse.reset(k).unwrap();
            // Old start-layer seeds no longer fit.
            assert!(sparse.seed_codes([SubsetCode::empty().with(0)]).is_err());

            let seeds = common::random_seed_codes(&mut rng, n, k, 8);
            sparse.seed_codes(seeds.iter().copied()).unwrap();
            dense.clear_property();
            dense.fill_in_codes(seeds.iter().copied()).unwrap();
            assert_eq!(
                advance_to_top(&mut sparse),
                dense_counts(&dense, k),
                "n={} k={}",
                n,
                k
            );
        }
    }
}
