// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pairwise overlaps among the minimal subsets.
//!
//! For a sub-subset size `s`, every `s`-element subset of the ground set is
//! checked against the minimal subsets: if `m` of them contain it, it
//! contributes `C(m, 2)` overlapping pairs. The total over all sub-subsets is
//! the pair term of an inclusion-exclusion estimate of the layer counts.
//!
//! # Example
//!
//! ```
//! use subset_lattice::encoding::GroundSet;
//! use subset_lattice::lattice::OverlapCounter;
//!
//! let ground = GroundSet::indexed(4).unwrap();
//! let counter = OverlapCounter::new(ground, &[[0, 1, 2], [0, 1, 3], [0, 2, 3]]).unwrap();
//!
//! let (total, overlaps) = counter.count_overlaps(2).unwrap();
//! assert_eq!(total, 3u32.into());
//! assert_eq!(overlaps.len(), 6);
//! ```

use crate::encoding::{codes_of_cardinality, GroundSet, SubsetCode};
use crate::error::{LatticeError, Result};
use crate::lattice::binomial;
use num_bigint::BigUint;

/// How often one sub-subset is shared among the minimal subsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlap {
    pub sub_subset: SubsetCode,
    /// Minimal subsets containing `sub_subset`.
    pub containing: BigUint,
    /// `C(containing, 2)`.
    pub pairs: BigUint,
}

/// Counts shared sub-subsets among equal-sized minimal subsets.
#[derive(Debug, Clone)]
pub struct OverlapCounter<T> {
    ground: GroundSet<T>,
    subset_size: usize,
    subsets: Vec<SubsetCode>,
}

impl<T: PartialEq + Clone> OverlapCounter<T> {
    /// Build from minimal subsets given as ground-set members.
    pub fn new<I>(ground: GroundSet<T>, minimal_subsets: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        let codes = minimal_subsets
            .into_iter()
            .map(|members| ground.encode(members.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::from_codes(ground, codes)
    }

    /// Build from minimal subsets given as codes.
    ///
    /// The first subset fixes the size; every other one must match it.
    /// Repeated subsets are counted once per occurrence.
    pub fn from_codes<I>(ground: GroundSet<T>, codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = SubsetCode>,
    {
        let n = ground.len();
        let subsets = codes
            .into_iter()
            .map(|code| code.check_range(n))
            .collect::<Result<Vec<_>>>()?;
        let subset_size = subsets.first().map_or(0, |code| code.len());
        if let Some(odd) = subsets.iter().find(|code| code.len() != subset_size) {
            return Err(LatticeError::WrongCardinality {
                expected: subset_size,
                found: odd.len(),
            });
        }
        Ok(Self {
            ground,
            subset_size,
            subsets,
        })
    }

    /// Size shared by every minimal subset; 0 when there are none.
    pub fn subset_size(&self) -> usize {
        self.subset_size
    }

    pub fn subsets(&self) -> &[SubsetCode] {
        &self.subsets
    }

    pub fn ground_set(&self) -> &GroundSet<T> {
        &self.ground
    }

    /// Count, for every `overlap_size`-element sub-subset of the ground set,
    /// how many minimal subsets contain it and how many pairs of them share
    /// it. Returns the total number of pairs and one [`Overlap`] per
    /// sub-subset, in ascending code order.
    ///
    /// `overlap_size` must lie in `1..=subset_size`, so a counter with no
    /// subsets accepts no size at all.
    pub fn count_overlaps(&self, overlap_size: usize) -> Result<(BigUint, Vec<Overlap>)> {
        if overlap_size < 1 || overlap_size > self.subset_size {
            return Err(LatticeError::OverlapSizeOutOfRange {
                size: overlap_size,
                subset_size: self.subset_size,
            });
        }

        let mut total = BigUint::default();
        let overlaps: Vec<_> = codes_of_cardinality(self.ground.len(), overlap_size)
            .map(|sub_subset| {
                let containing = self
                    .subsets
                    .iter()
                    .filter(|subset| sub_subset.is_subset_of(**subset))
                    .count();
                let pairs = binomial(containing, 2);
                total += &pairs;
                Overlap {
                    sub_subset,
                    containing: BigUint::from(containing),
                    pairs,
                }
            })
            .collect();
        log::debug!(
            "{} pairs of minimal subsets share a {}-element subset",
            total,
            overlap_size
        );
        Ok((total, overlaps))
    }
}
