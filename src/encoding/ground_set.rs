// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The ground set: a fixed, ordered sequence of distinguishable items.
//!
//! Equal-valued entries (two cards of the same rank, say) must be told apart
//! before they reach this layer, typically by working with their positions.
//! [`GroundSet::indexed`] builds exactly that: the ground set `0..n`.

use crate::encoding::subset_code::{SubsetCode, MAX_GROUND_SET};
use crate::error::{LatticeError, Result};

/// An ordered ground set of at most [`MAX_GROUND_SET`] pairwise-distinct items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroundSet<T> {
    items: Vec<T>,
}

impl GroundSet<usize> {
    /// The ground set of indices `0..n`.
    pub fn indexed(n: usize) -> Result<Self> {
        Self::new((0..n).collect())
    }
}

impl<T: PartialEq + Clone> GroundSet<T> {
    /// Create a ground set, rejecting repeated items.
    pub fn new(items: Vec<T>) -> Result<Self> {
        if items.len() > MAX_GROUND_SET {
            return Err(LatticeError::GroundSetTooLarge {
                size: items.len(),
                max: MAX_GROUND_SET,
            });
        }
        for (position, item) in items.iter().enumerate() {
            if items[..position].contains(item) {
                return Err(LatticeError::DuplicateGroundItem { position });
            }
        }
        Ok(Self { items })
    }

    /// Number of items, `n`.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the ground set has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items in ground-set order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Position of `item`, if present.
    pub fn position(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item)
    }

    /// Encode a sub-collection of items as its subset code.
    ///
    /// Fails if a member is absent from the ground set or repeated.
    pub fn encode(&self, members: &[T]) -> Result<SubsetCode> {
        let mut code = SubsetCode::empty();
        for (position, member) in members.iter().enumerate() {
            let index = self
                .position(member)
                .ok_or(LatticeError::UnknownMember { position })?;
            if code.contains(index) {
                return Err(LatticeError::DuplicateMember { position });
            }
            code.insert(index);
        }
        Ok(code)
    }

    /// Decode a code into its members, in ground-set order.
    pub fn decode(&self, code: SubsetCode) -> Result<Vec<T>> {
        let code = code.check_range(self.len())?;
        Ok(code.iter().map(|i| self.items[i].clone()).collect())
    }

    /// Encode a list of ground-set positions.
    pub fn encode_indices(&self, indices: &[usize]) -> Result<SubsetCode> {
        SubsetCode::try_from_indices(indices, self.len())
    }

    /// Decode a code into ascending ground-set positions.
    pub fn decode_indices(&self, code: SubsetCode) -> Result<Vec<usize>> {
        Ok(code.check_range(self.len())?.iter().collect())
    }
}
