// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact per-layer counts.
//!
//! A [`LayerCount`] is the triple `(numerator, denominator, fraction)` for one
//! cardinality, with `denominator = C(n, c)`. Fractions are big-integer ratios
//! in lowest terms; downstream code compares them against 0 and 1 exactly.

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{One, Zero};
use std::fmt;

/// Compute the binomial coefficient C(n, k), zero when `k > n`.
///
/// Uses the recurrence C(n, i+1) = C(n, i) * (n - i) / (i + 1), starting
/// from C(n, 0) = 1; every intermediate quotient is exact.
pub fn binomial(n: usize, k: usize) -> BigUint {
    if k > n {
        return BigUint::zero();
    }
    let k = k.min(n - k);
    let mut coefficient = BigUint::one();
    for i in 0..k {
        coefficient = coefficient * BigUint::from(n - i) / BigUint::from(i + 1);
    }
    coefficient
}

/// How many subsets of one cardinality carry the property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerCount {
    /// The layer (subset size).
    pub cardinality: usize,

    /// Subsets of this size with the property.
    pub numerator: BigUint,

    /// All subsets of this size, C(n, cardinality).
    pub denominator: BigUint,

    /// `numerator / denominator` in lowest terms.
    pub fraction: BigRational,
}

impl LayerCount {
    /// Build the count for a layer of a ground set of `ground_size` items.
    ///
    /// # Panics
    ///
    /// Panics if `cardinality > ground_size` (the denominator would be zero).
    pub fn new(ground_size: usize, cardinality: usize, numerator: BigUint) -> Self {
        let denominator = binomial(ground_size, cardinality);
        assert!(
            !denominator.is_zero(),
            "Layer {} does not exist in a {}-element ground set",
            cardinality,
            ground_size
        );
        let fraction = BigRational::new(
            BigInt::from(numerator.clone()),
            BigInt::from(denominator.clone()),
        );
        Self {
            cardinality,
            numerator,
            denominator,
            fraction,
        }
    }

    /// Every subset of the layer has the property.
    pub fn full(ground_size: usize, cardinality: usize) -> Self {
        Self::new(ground_size, cardinality, binomial(ground_size, cardinality))
    }

    /// No subset of the layer has the property.
    pub fn none(ground_size: usize, cardinality: usize) -> Self {
        Self::new(ground_size, cardinality, BigUint::zero())
    }

    /// Fraction is exactly 1.
    pub fn is_full(&self) -> bool {
        self.fraction.is_one()
    }

    /// Fraction is exactly 0.
    pub fn is_none(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Render the fraction as a fixed-point percentage with `decimals` places,
    /// rounding half up. E.g. 1/6 with 3 decimals is "16.667%".
    pub fn percentage(&self, decimals: u32) -> String {
        let scale = BigUint::from(100u32) * BigUint::from(10u32).pow(decimals);
        let scaled = &self.numerator * scale * 2u32 + &self.denominator;
        let rounded = scaled / (&self.denominator * 2u32);

        let digits = rounded.to_string();
        let decimals = decimals as usize;
        if decimals == 0 {
            return format!("{}%", digits);
        }
        let padded = format!("{:0>width$}", digits, width = decimals + 1);
        let (whole, frac) = padded.split_at(padded.len() - decimals);
        format!("{}.{}%", whole, frac)
    }
}

impl fmt::Display for LayerCount {
    /// Format as `cardinality, fraction, numerator, denominator`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}, {}, {}, {}",
            self.cardinality, self.fraction, self.numerator, self.denominator
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial() {
        let row: Vec<_> = (0..=6).map(|k| binomial(6, k)).collect();
        let expected: Vec<BigUint> = [1u32, 6, 15, 20, 15, 6, 1]
            .iter()
            .map(|&x| BigUint::from(x))
            .collect();
        assert_eq!(row, expected);
        assert_eq!(binomial(3, 4), BigUint::zero());
        assert_eq!(binomial(0, 0), BigUint::one());
        assert_eq!(binomial(52, 26), BigUint::from(495_918_532_948_104u64));
    }

    #[test]
    fn test_fraction_in_lowest_terms() {
        let count = LayerCount::new(4, 3, BigUint::from(2u32));
        assert_eq!(count.denominator, BigUint::from(4u32));
        assert_eq!(
            count.fraction,
            BigRational::new(BigInt::from(1), BigInt::from(2))
        );
        assert!(!count.is_full());
        assert!(!count.is_none());
    }

    #[test]
    fn test_full_and_none() {
        assert!(LayerCount::full(5, 3).is_full());
        assert!(LayerCount::none(5, 3).is_none());
        assert!(LayerCount::full(5, 5).is_full());
    }

    #[test]
    fn test_display_order() {
        let count = LayerCount::new(4, 2, BigUint::one());
        assert_eq!(format!("{}", count), " 2, 1/6, 1, 6");
        assert_eq!(format!("{}", LayerCount::full(4, 4)), " 4, 1, 1, 1");
        assert_eq!(format!("{}", LayerCount::none(13, 11)), "11, 0, 0, 78");
    }

    #[test]
    fn test_percentage() {
        let sixth = LayerCount::new(4, 2, BigUint::one());
        assert_eq!(sixth.percentage(3), "16.667%");
        assert_eq!(sixth.percentage(0), "17%");
        assert_eq!(LayerCount::full(4, 4).percentage(5), "100.00000%");
        assert_eq!(LayerCount::none(4, 2).percentage(2), "0.00%");
        assert_eq!(LayerCount::new(10, 3, BigUint::one()).percentage(4), "0.8333%");
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_layer_above_ground_set() {
        let _ = LayerCount::none(3, 4);
    }
}
