// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dense lattice: the whole power set in one table.
//!
//! Every code in `[0, 2^n)` gets a node up front, with its parent list
//! computed once. Closing the property is a single pass in increasing
//! cardinality: parents always sit strictly higher, so by the time a node is
//! visited every child that could make it true has already been visited.
//!
//! Memory is `O(n * 2^n)` regardless of the seed, so this is a reference
//! implementation for small ground sets, used to cross-check
//! [`SparseLattice`](crate::lattice::SparseLattice).

use crate::config::{LatticeConfig, Progress};
use crate::encoding::{codes_of_cardinality, GroundSet, SubsetCode};
use crate::error::{LatticeError, Result};
use crate::lattice::{LatticeNode, LayerCount};
use num_bigint::BigUint;

/// Largest ground set the dense table accepts.
pub const MAX_DENSE_GROUND_SET: usize = 20;

/// Full power-set table with permanent parent links.
#[derive(Debug, Clone)]
pub struct DenseLattice<T> {
    ground: GroundSet<T>,
    config: LatticeConfig,
    /// Indexed by code.
    nodes: Vec<LatticeNode>,
    /// All codes, grouped by ascending cardinality.
    order: Vec<SubsetCode>,
}

impl<T: PartialEq + Clone> DenseLattice<T> {
    pub fn new(ground: GroundSet<T>) -> Result<Self> {
        Self::with_config(ground, LatticeConfig::default())
    }

    pub fn with_config(ground: GroundSet<T>, config: LatticeConfig) -> Result<Self> {
        let n = ground.len();
        if n > MAX_DENSE_GROUND_SET {
            return Err(LatticeError::GroundSetTooLarge {
                size: n,
                max: MAX_DENSE_GROUND_SET,
            });
        }

        let mut progress = Progress::new(&config, "dense");
        let nodes: Vec<_> = (0..1u64 << n)
            .map(|bits| {
                progress.tick();
                LatticeNode::new(SubsetCode::from_bits(bits), n, false)
            })
            .collect();
        let order: Vec<_> = (0..=n).flat_map(|k| codes_of_cardinality(n, k)).collect();
        log::info!("Built dense lattice of {} subsets of {} items", nodes.len(), n);

        Ok(Self {
            ground,
            config,
            nodes,
            order,
        })
    }

    /// Mark the given subsets (as ground-set members) and close upward.
    ///
    /// Subsets may have any cardinality. All are validated before any is marked.
    pub fn fill_in_property<I>(&mut self, valid_subsets: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        let codes = valid_subsets
            .into_iter()
            .map(|members| self.ground.encode(members.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.fill_in_codes(codes)
    }

    /// Mark the given subsets (as codes) and close upward.
    pub fn fill_in_codes<I>(&mut self, codes: I) -> Result<()>
    where
        I: IntoIterator<Item = SubsetCode>,
    {
        let n = self.ground.len();
        let codes = codes
            .into_iter()
            .map(|code| code.check_range(n))
            .collect::<Result<Vec<_>>>()?;
        for code in codes {
            self.nodes[code.bits() as usize].has_property = true;
        }

        let mut progress = Progress::new(&self.config, "fill");
        for &code in &self.order {
            let index = code.bits() as usize;
            if self.nodes[index].has_property {
                let parents = std::mem::take(&mut self.nodes[index].parents);
                for parent in &parents {
                    self.nodes[parent.bits() as usize].has_property = true;
                }
                self.nodes[index].parents = parents;
            }
            progress.tick();
        }
        Ok(())
    }

    /// Count the subsets of size `cardinality` that have the property.
    pub fn count_property_by_layer(&self, cardinality: usize) -> Result<LayerCount> {
        let n = self.ground.len();
        if cardinality > n {
            return Err(LatticeError::CardinalityOutOfRange {
                cardinality,
                ground_size: n,
            });
        }
        let numerator = codes_of_cardinality(n, cardinality)
            .filter(|code| self.nodes[code.bits() as usize].has_property)
            .count();
        Ok(LayerCount::new(n, cardinality, BigUint::from(numerator)))
    }

    /// Reset every property flag, keeping the table and parent links.
    pub fn clear_property(&mut self) {
        for node in &mut self.nodes {
            node.has_property = false;
        }
    }

    pub fn has_property(&self, code: SubsetCode) -> Result<bool> {
        let code = code.check_range(self.ground.len())?;
        Ok(self.nodes[code.bits() as usize].has_property)
    }

    pub fn node(&self, code: SubsetCode) -> Option<&LatticeNode> {
        self.nodes.get(code.bits() as usize)
    }

    pub fn ground_set(&self) -> &GroundSet<T> {
        &self.ground
    }

    pub fn ground_size(&self) -> usize {
        self.ground.len()
    }
}
