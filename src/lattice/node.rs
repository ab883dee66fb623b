// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single materialized node of the subset lattice.

use crate::encoding::SubsetCode;

/// One subset and whether it has the upward-closed property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatticeNode {
    /// The subset's code.
    pub code: SubsetCode,

    /// Population count of `code`; the layer the node lives in.
    pub cardinality: usize,

    /// Every superset with exactly one more element, ascending by the added item.
    pub parents: Vec<SubsetCode>,

    /// Monotone: once true here, true at every superset.
    pub has_property: bool,
}

impl LatticeNode {
    /// Create the node for `code` in a ground set of `ground_size` items.
    pub fn new(code: SubsetCode, ground_size: usize, has_property: bool) -> Self {
        let parents: Vec<_> = code.parents(ground_size).collect();
        debug_assert_eq!(parents.len(), ground_size - code.len());
        Self {
            code,
            cardinality: code.len(),
            parents,
            has_property,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_shape() {
        let node = LatticeNode::new(SubsetCode::from_bits(0b0011), 4, false);
        assert_eq!(node.cardinality, 2);
        assert_eq!(
            node.parents,
            vec![SubsetCode::from_bits(0b0111), SubsetCode::from_bits(0b1011)]
        );
        assert!(!node.has_property);

        let top = LatticeNode::new(SubsetCode::full(4), 4, true);
        assert!(top.parents.is_empty());
        assert_eq!(top.cardinality, 4);
    }
}
