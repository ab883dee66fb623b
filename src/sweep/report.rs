// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Per-layer results of a sweep.

use crate::lattice::LayerCount;
use std::fmt;

/// The counts of a sweep, one row per cardinality, ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepReport {
    pub(crate) ground_size: usize,
    pub(crate) rows: Vec<LayerCount>,
    /// First layer reported without advancing the engine, if any.
    pub(crate) free_from: Option<usize>,
}

impl SweepReport {
    pub fn ground_size(&self) -> usize {
        self.ground_size
    }

    pub fn rows(&self) -> &[LayerCount] {
        &self.rows
    }

    /// The row for `cardinality`, if the sweep covered it.
    pub fn get(&self, cardinality: usize) -> Option<&LayerCount> {
        self.rows.iter().find(|row| row.cardinality == cardinality)
    }

    pub fn free_from(&self) -> Option<usize> {
        self.free_from
    }

    /// Compare numerators and denominators row by row, ignoring how each
    /// row was obtained.
    pub fn same_counts(&self, other: &SweepReport) -> bool {
        self.ground_size == other.ground_size && self.rows == other.rows
    }
}

impl fmt::Display for SweepReport {
    /// One `cardinality, fraction, numerator, denominator` line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
