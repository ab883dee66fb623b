// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparse, layer-at-a-time lattice engine.
//!
//! The engine holds only the layer it is currently resolving (and, during
//! [`SparseLattice::advance`], the layer it is building). Because the
//! property is upward-closed, truth only ever needs to move from a subset
//! to its immediate supersets, so each layer can be discarded as soon as
//! its outgoing edges have been processed. Live memory is bounded by two
//! adjacent binomial coefficients instead of `2^n`.
//!
//! # Lifecycle
//!
//! ```text
//! new/reset ──> Created ──seed──> Seeded ──advance──> Advancing ──...──> Done
//! ```
//!
//! An engine whose start layer is the full ground set is `Done` from the
//! moment it is created, and seeding leaves it there. There is no way back
//! to a lower layer except [`SparseLattice::reset`].
//!
//! # Example
//!
//! ```
//! use subset_lattice::encoding::GroundSet;
//! use subset_lattice::lattice::SparseLattice;
//!
//! let ground = GroundSet::indexed(4).unwrap();
//! let mut lattice = SparseLattice::new(ground, 2).unwrap();
//! lattice.seed(&[vec![0, 1]]).unwrap();
//!
//! assert_eq!(lattice.count_current_layer().to_string(), " 2, 1/6, 1, 6");
//! lattice.advance().unwrap();
//! assert_eq!(lattice.count_current_layer().to_string(), " 3, 1/2, 2, 4");
//! lattice.advance().unwrap();
//! assert_eq!(lattice.count_current_layer().to_string(), " 4, 1, 1, 1");
//! assert!(lattice.advance().is_err());
//! ```

use crate::config::{LatticeConfig, Progress};
use crate::encoding::{codes_of_cardinality, GroundSet, SubsetCode};
use crate::error::{LatticeError, Result};
use crate::lattice::{LatticeNode, LayerCount};
use num_bigint::BigUint;
use rustc_hash::FxHashMap;

/// Where the engine is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatticeState {
    /// Start layer materialized, nothing seeded yet.
    Created,
    /// Minimal subsets marked at the start layer.
    Seeded,
    /// Raised above the start layer, below the full set.
    Advancing { layer: usize },
    /// Current layer is the full ground set; nothing left to advance.
    Done,
}

/// Layer-at-a-time propagation engine over the subsets of a ground set.
#[derive(Debug)]
pub struct SparseLattice<T> {
    ground: GroundSet<T>,
    config: LatticeConfig,
    start_cardinality: usize,
    current_layer: usize,
    state: LatticeState,
    /// Nodes of `current_layer`, keyed by code. Absent codes are unmaterialized.
    nodes: FxHashMap<SubsetCode, LatticeNode>,
}

impl<T: PartialEq + Clone> SparseLattice<T> {
    /// Create an engine with one node per subset of size `start_cardinality`,
    /// none of them carrying the property.
    pub fn new(ground: GroundSet<T>, start_cardinality: usize) -> Result<Self> {
        Self::with_config(ground, start_cardinality, LatticeConfig::default())
    }

    /// As [`SparseLattice::new`], with explicit configuration.
    pub fn with_config(
        ground: GroundSet<T>,
        start_cardinality: usize,
        config: LatticeConfig,
    ) -> Result<Self> {
        let mut lattice = Self {
            ground,
            config,
            start_cardinality,
            current_layer: start_cardinality,
            state: LatticeState::Created,
            nodes: FxHashMap::default(),
        };
        lattice.reset(start_cardinality)?;
        Ok(lattice)
    }

    /// Discard every node and property, and rebuild at `start_cardinality`.
    ///
    /// On error the engine is left untouched.
    pub fn reset(&mut self, start_cardinality: usize) -> Result<()> {
        let n = self.ground.len();
        if start_cardinality > n {
            return Err(LatticeError::CardinalityOutOfRange {
                cardinality: start_cardinality,
                ground_size: n,
            });
        }

        let mut progress = Progress::new(&self.config, "create");
        let mut nodes = FxHashMap::default();
        for code in codes_of_cardinality(n, start_cardinality) {
            nodes.insert(code, LatticeNode::new(code, n, false));
            progress.tick();
        }
        log::info!(
            "Materialized {} {}-element subsets of {} items",
            nodes.len(),
            start_cardinality,
            n
        );

        self.nodes = nodes;
        self.start_cardinality = start_cardinality;
        self.current_layer = start_cardinality;
        self.state = if start_cardinality == n {
            LatticeState::Done
        } else {
            LatticeState::Created
        };
        Ok(())
    }

    /// Mark each minimal subset, given as ground-set members, as having the property.
    ///
    /// Every subset is validated before any is marked, so a failed call
    /// changes nothing.
    pub fn seed<I>(&mut self, minimal_subsets: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[T]>,
    {
        let codes = minimal_subsets
            .into_iter()
            .map(|members| self.ground.encode(members.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.seed_codes(codes)
    }

    /// Mark each minimal subset, given as ground-set indices.
    pub fn seed_indices<I>(&mut self, minimal_subsets: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<[usize]>,
    {
        let codes = minimal_subsets
            .into_iter()
            .map(|indices| self.ground.encode_indices(indices.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.seed_codes(codes)
    }

    /// Mark each minimal subset, given as codes.
    ///
    /// Moves a `Created` engine to `Seeded`; a `Done` engine stays `Done`.
    pub fn seed_codes<I>(&mut self, codes: I) -> Result<()>
    where
        I: IntoIterator<Item = SubsetCode>,
    {
        let n = self.ground.len();
        let codes = codes.into_iter().collect::<Vec<_>>();
        for &code in &codes {
            let code = code.check_range(n)?;
            if code.len() != self.start_cardinality {
                return Err(LatticeError::WrongCardinality {
                    expected: self.start_cardinality,
                    found: code.len(),
                });
            }
            if !self.nodes.contains_key(&code) {
                return Err(LatticeError::NotMaterialized { code: code.bits() });
            }
        }

        for code in &codes {
            if let Some(node) = self.nodes.get_mut(code) {
                node.has_property = true;
            }
        }
        log::debug!(
            "Seeded {} minimal subsets at layer {}",
            codes.len(),
            self.start_cardinality
        );
        if self.state == LatticeState::Created {
            self.state = LatticeState::Seeded;
        }
        Ok(())
    }

    /// Count the current layer's subsets that have the property.
    pub fn count_current_layer(&self) -> LayerCount {
        let numerator = self.nodes.values().filter(|node| node.has_property).count();
        LayerCount::new(
            self.ground.len(),
            self.current_layer,
            BigUint::from(numerator),
        )
    }

    /// Count at `cardinality`, which must be the current layer.
    pub fn count_layer(&self, cardinality: usize) -> Result<LayerCount> {
        if cardinality != self.current_layer {
            return Err(LatticeError::LayerNotMaterialized {
                requested: cardinality,
                current: self.current_layer,
            });
        }
        Ok(self.count_current_layer())
    }

    /// Raise the engine one layer.
    ///
    /// Every node of the current layer pushes its property into each of its
    /// parents (creating the parent on first touch, OR-ing afterwards) and is
    /// then dropped. Fails without changing anything if the current layer is
    /// already the full ground set.
    pub fn advance(&mut self) -> Result<()> {
        let n = self.ground.len();
        if self.current_layer >= n {
            return Err(LatticeError::AdvancePastTop { ground_size: n });
        }

        let mut progress = Progress::new(&self.config, "advance");
        let mut next: FxHashMap<SubsetCode, LatticeNode> = FxHashMap::default();
        for (_, child) in self.nodes.drain() {
            for &parent in &child.parents {
                next.entry(parent)
                    .and_modify(|node| node.has_property |= child.has_property)
                    .or_insert_with(|| LatticeNode::new(parent, n, child.has_property));
            }
            progress.tick();
        }

        self.nodes = next;
        self.current_layer += 1;
        self.state = if self.current_layer == n {
            LatticeState::Done
        } else {
            LatticeState::Advancing {
                layer: self.current_layer,
            }
        };
        log::info!(
            "We are now considering {}-element subsets.",
            self.current_layer
        );
        Ok(())
    }

    /// Whether `code` has the property, or `None` if it is not materialized.
    pub fn has_property(&self, code: SubsetCode) -> Option<bool> {
        self.nodes.get(&code).map(|node| node.has_property)
    }

    /// Codes in the current layer that have the property, ascending.
    pub fn property_codes(&self) -> Vec<SubsetCode> {
        let mut codes: Vec<_> = self
            .nodes
            .values()
            .filter(|node| node.has_property)
            .map(|node| node.code)
            .collect();
        codes.sort_unstable();
        codes
    }

    /// Nodes currently materialized, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = &LatticeNode> {
        self.nodes.values()
    }

    /// Number of materialized nodes.
    pub fn materialized_len(&self) -> usize {
        self.nodes.len()
    }

    pub fn ground_set(&self) -> &GroundSet<T> {
        &self.ground
    }

    pub fn ground_size(&self) -> usize {
        self.ground.len()
    }

    pub fn start_cardinality(&self) -> usize {
        self.start_cardinality
    }

    pub fn current_layer(&self) -> usize {
        self.current_layer
    }

    pub fn state(&self) -> LatticeState {
        self.state
    }
}
