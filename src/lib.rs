// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Propagation of upward-closed properties through the subset lattice.
//!
//! Given a ground set of `n` items and the minimal subsets of size `k` that
//! have some property (found elsewhere, e.g. by searching a deck of cards for
//! selections that solve an equation), this crate counts, for every larger
//! size `c`, how many `c`-element subsets contain at least one minimal subset.
//! Results are exact fractions over `C(n, c)`.
//!
//! # Architecture
//!
//! ## Encoding
//!
//! A subset is identified by its [`SubsetCode`]: bit i is set iff ground-set
//! item i is a member. [`GroundSet`] converts between member lists and codes;
//! a characteristic bit-string form is available for display.
//!
//! ## Sparse engine
//!
//! [`SparseLattice`] holds only the current layer of the lattice. Each
//! [`SparseLattice::advance`] pushes the property from every node into its
//! one-larger supersets and drops the node, so at most two adjacent layers
//! are ever alive.
//!
//! ## Dense engine
//!
//! [`DenseLattice`] builds the full power set once and closes the property in
//! a single ascending pass. It is the reference the sparse engine is tested
//! against.
//!
//! ## Sweep
//!
//! [`sweep()`] raises a seeded sparse engine layer by layer and collects a
//! [`SweepReport`], skipping layers whose outcome is already forced.
//!
//! ## Overlaps
//!
//! [`OverlapCounter`] counts, for each small sub-subset, how many pairs of
//! minimal subsets share it.
//!
//! # Example
//!
//! ```
//! use subset_lattice::{sweep, GroundSet, SparseLattice, SweepConfig};
//!
//! let mut lattice = SparseLattice::new(GroundSet::indexed(4).unwrap(), 2).unwrap();
//! lattice.seed_indices(&[[0, 1]]).unwrap();
//!
//! let report = sweep(&mut lattice, SweepConfig::up_to(4)).unwrap();
//! let fractions: Vec<String> = report.rows().iter().map(|r| r.fraction.to_string()).collect();
//! assert_eq!(fractions, vec!["1/6", "1/2", "1"]);
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod lattice;
pub mod sweep;

// Re-export commonly used types
pub use config::{LatticeConfig, SweepConfig};
pub use encoding::{GroundSet, SubsetCode};
pub use error::{ErrorKind, LatticeError, Result};
pub use lattice::{
    binomial, DenseLattice, LatticeState, LayerCount, OverlapCounter, SparseLattice,
};
pub use sweep::{sweep, sweep_dense, SweepReport};
