// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SubsetCode type for identifying subsets of a ground set as bitsets.
//!
//! A SubsetCode is the canonical identity of a lattice node: bit i is set
//! iff ground-set item i is a member.
//!
//! # Examples
//!
//! ```
//! use subset_lattice::encoding::SubsetCode;
//!
//! let mut code = SubsetCode::empty();
//! code.insert(0);
//! code.insert(1);
//!
//! assert_eq!(code.len(), 2);
//! assert_eq!(code.bits(), 0b11);
//! assert_eq!(format!("{}", code), "{0,1}");
//!
//! // Parents add exactly one missing element.
//! let parents: Vec<u64> = code.parents(4).map(|p| p.bits()).collect();
//! assert_eq!(parents, vec![0b0111, 0b1011]);
//! ```

use crate::error::{LatticeError, Result};
use std::fmt;

/// Largest supported ground set; codes must fit in `u64` with `2^n` representable.
pub const MAX_GROUND_SET: usize = 63;

/// A subset of a ground set, represented as a bitset.
///
/// Bit i (counting from LSB) is set if item i is in the subset.
/// Codes are never mutated once they identify a node, only looked up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubsetCode(u64);

impl SubsetCode {
    /// The empty subset.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The whole ground set of `n` items.
    ///
    /// # Panics
    ///
    /// Panics if `n > MAX_GROUND_SET`.
    pub fn full(n: usize) -> Self {
        assert!(n <= MAX_GROUND_SET, "Ground set too large: {}", n);
        Self((1u64 << n) - 1)
    }

    /// Create a code from a raw bit value.
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Create a code from ground-set indices, checking range and repeats.
    pub fn try_from_indices(indices: &[usize], ground_size: usize) -> Result<Self> {
        let mut code = Self::empty();
        for (position, &index) in indices.iter().enumerate() {
            if index >= ground_size {
                return Err(LatticeError::IndexOutOfRange { index, ground_size });
            }
            if code.contains(index) {
                return Err(LatticeError::DuplicateMember { position });
            }
            code.insert(index);
        }
        Ok(code)
    }

    /// Check that this code lies in `[0, 2^ground_size)`.
    pub fn check_range(self, ground_size: usize) -> Result<Self> {
        if ground_size > MAX_GROUND_SET || (self.0 >> ground_size) != 0 {
            return Err(LatticeError::CodeOutOfRange {
                code: self.0,
                ground_size,
            });
        }
        Ok(self)
    }

    /// Check if the subset contains item `index`.
    pub fn contains(self, index: usize) -> bool {
        index < 64 && (self.0 >> index) & 1 != 0
    }

    /// Insert item `index` into the subset.
    pub fn insert(&mut self, index: usize) {
        self.0 |= 1 << index;
    }

    /// The subset with item `index` added.
    pub fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    /// Number of members (population count); the node's layer.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the subset is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u64 {
        self.0
    }

    /// Check whether every member of `self` is a member of `other`.
    pub fn is_subset_of(self, other: SubsetCode) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterate over member indices in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        BitIter(self.0)
    }

    /// Iterate over the parents: every superset formed by adding one of
    /// the `ground_size` items not already present, in ascending order of
    /// the added item. There are exactly `ground_size - len()` of them.
    pub fn parents(self, ground_size: usize) -> impl Iterator<Item = SubsetCode> {
        let missing = !self.0 & SubsetCode::full(ground_size).0;
        BitIter(missing).map(move |index| self.with(index))
    }

    /// Iterate over the children: every subset formed by removing one member.
    pub fn children(self) -> impl Iterator<Item = SubsetCode> {
        BitIter(self.0).map(move |index| Self(self.0 & !(1 << index)))
    }
}

/// Iterator over set bit positions, lowest first.
struct BitIter(u64);

impl Iterator for BitIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl fmt::Display for SubsetCode {
    /// Format a code as its member indices, e.g. "{0,1,3}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, index) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", index)?;
        }
        write!(f, "}}")
    }
}

/// Enumerate every code of population count `cardinality` over a ground set
/// of `ground_size` items, in increasing numeric order.
///
/// Uses Gosper's hack, so the cost is proportional to C(n, k) rather than 2^n.
pub fn codes_of_cardinality(ground_size: usize, cardinality: usize) -> CardinalityCodes {
    assert!(ground_size <= MAX_GROUND_SET, "Ground set too large: {}", ground_size);
    CardinalityCodes {
        next: (cardinality <= ground_size).then(|| (1u64 << cardinality) - 1),
        limit: 1u64 << ground_size,
    }
}

/// Iterator returned by [`codes_of_cardinality`].
#[derive(Debug, Clone)]
pub struct CardinalityCodes {
    next: Option<u64>,
    limit: u64,
}

impl Iterator for CardinalityCodes {
    type Item = SubsetCode;

    fn next(&mut self) -> Option<Self::Item> {
        let x = self.next?;
        self.next = if x == 0 {
            None
        } else {
            let lowest = x & x.wrapping_neg();
            let ripple = x + lowest;
            let y = (((ripple ^ x) >> 2) / lowest) | ripple;
            (y < self.limit).then_some(y)
        };
        Some(SubsetCode(x))
    }
}
