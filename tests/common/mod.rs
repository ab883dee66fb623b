// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use subset_lattice::encoding::{codes_of_cardinality, SubsetCode};

/// A reproducible random source for seed sets.
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Up to `max_count` distinct random `k`-subsets of `0..n`, as codes.
pub fn random_seed_codes(rng: &mut StdRng, n: usize, k: usize, max_count: usize) -> Vec<SubsetCode> {
    let count = rng.gen_range(0..=max_count);
    let mut codes = Vec::with_capacity(count);
    for _ in 0..count {
        let indices = sample(rng, n, k).into_vec();
        let code = SubsetCode::try_from_indices(&indices, n).unwrap();
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes
}

/// Brute force: how many `c`-subsets of `0..n` contain one of `seeds`.
pub fn brute_force_count(n: usize, c: usize, seeds: &[SubsetCode]) -> usize {
    codes_of_cardinality(n, c)
        .filter(|code| seeds.iter().any(|seed| seed.is_subset_of(*code)))
        .count()
}

/// Initialize logging for tests that want to see engine output.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
