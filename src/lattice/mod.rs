// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Upward-closed property propagation over the subset lattice.
//!
//! Two engines share one contract:
//! - [`SparseLattice`]: holds one or two adjacent layers at a time and is
//!   raised layer by layer. This is the engine for real ground sets.
//! - [`DenseLattice`]: materializes the whole power set and closes the
//!   property in one pass. Only for small ground sets; it is the oracle the
//!   sparse engine must agree with exactly.
//!
//! Both report per-layer results as [`LayerCount`] values.
//! [`OverlapCounter`] measures how much the minimal subsets themselves
//! overlap.

pub mod count;
pub mod dense;
pub mod node;
pub mod overlap;
pub mod sparse;

pub use count::{binomial, LayerCount};
pub use dense::{DenseLattice, MAX_DENSE_GROUND_SET};
pub use node::LatticeNode;
pub use overlap::{Overlap, OverlapCounter};
pub use sparse::{LatticeState, SparseLattice};
