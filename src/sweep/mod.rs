// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layer-by-layer sweep driver.
//!
//! A sweep starts from a seeded engine and collects one [`LayerCount`] per
//! cardinality up to [`SweepConfig::final_cardinality`]. With short-circuiting
//! enabled, layers above a fully-covered layer are reported as full and
//! layers above an empty layer as empty, without advancing the engine:
//! upward closure forces both.
//!
//! # Example
//!
//! ```
//! use subset_lattice::config::SweepConfig;
//! use subset_lattice::encoding::GroundSet;
//! use subset_lattice::lattice::SparseLattice;
//! use subset_lattice::sweep::sweep;
//!
//! let mut lattice = SparseLattice::new(GroundSet::indexed(5).unwrap(), 3).unwrap();
//! lattice.seed(Vec::<Vec<usize>>::new()).unwrap();
//!
//! let report = sweep(&mut lattice, SweepConfig::up_to(5)).unwrap();
//! assert_eq!(report.to_string(), " 3, 0, 0, 10\n 4, 0, 0, 5\n 5, 0, 0, 1\n");
//! assert_eq!(report.free_from(), Some(4));
//! ```

pub mod report;

pub use report::SweepReport;

use crate::config::SweepConfig;
use crate::error::{LatticeError, Result};
use crate::lattice::{DenseLattice, LayerCount, SparseLattice};

/// Raise `engine` from its current layer up to the configured final
/// cardinality, counting each layer.
///
/// Short-circuited layers leave the engine where it stopped. Lower-layer
/// rows need an engine still at its start layer: the layers it has already
/// advanced through are gone, so asking for them on an advanced engine is
/// [`LatticeError::LayerNotMaterialized`].
pub fn sweep<T: PartialEq + Clone>(
    engine: &mut SparseLattice<T>,
    config: SweepConfig,
) -> Result<SweepReport> {
    let n = engine.ground_size();
    let start = engine.current_layer();
    check_final(n, start, config.final_cardinality)?;

    let mut rows = Vec::with_capacity(config.final_cardinality + 1);
    if config.include_lower_layers {
        let seeded_at = engine.start_cardinality();
        if start > seeded_at {
            return Err(LatticeError::LayerNotMaterialized {
                requested: seeded_at,
                current: start,
            });
        }
        rows.extend((0..seeded_at).map(|c| LayerCount::none(n, c)));
    }
    let mut last = engine.count_current_layer();
    let mut free_from = None;

    for cardinality in start + 1..=config.final_cardinality {
        let next = if config.short_circuit && last.is_full() {
            log::info!("{} comes for free!", cardinality);
            free_from.get_or_insert(cardinality);
            LayerCount::full(n, cardinality)
        } else if config.short_circuit && last.is_none() {
            log::info!("{} has no solving subsets", cardinality);
            free_from.get_or_insert(cardinality);
            LayerCount::none(n, cardinality)
        } else {
            engine.advance()?;
            engine.count_current_layer()
        };
        log::debug!("{}", last);
        rows.push(std::mem::replace(&mut last, next));
    }
    rows.push(last);

    Ok(SweepReport {
        ground_size: n,
        rows,
        free_from,
    })
}

/// Read the same rows off a filled dense lattice, from `start` up to the
/// configured final cardinality.
pub fn sweep_dense<T: PartialEq + Clone>(
    engine: &DenseLattice<T>,
    start: usize,
    config: SweepConfig,
) -> Result<SweepReport> {
    let n = engine.ground_size();
    check_final(n, start, config.final_cardinality)?;
    let first = if config.include_lower_layers { 0 } else { start };
    let rows = (first..=config.final_cardinality)
        .map(|c| engine.count_property_by_layer(c))
        .collect::<Result<Vec<_>>>()?;
    Ok(SweepReport {
        ground_size: n,
        rows,
        free_from: None,
    })
}

/// A final cardinality past the ground set is invalid input; one below the
/// current layer names a layer the engine no longer holds.
fn check_final(n: usize, start: usize, final_cardinality: usize) -> Result<()> {
    if final_cardinality > n {
        return Err(LatticeError::CardinalityOutOfRange {
            cardinality: final_cardinality,
            ground_size: n,
        });
    }
    if final_cardinality < start {
        return Err(LatticeError::LayerNotMaterialized {
            requested: final_cardinality,
            current: start,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::GroundSet;

    fn seeded(n: usize, start: usize, seeds: &[&[usize]]) -> SparseLattice<usize> {
        let mut lattice = SparseLattice::new(GroundSet::indexed(n).unwrap(), start).unwrap();
        lattice.seed_indices(seeds).unwrap();
        lattice
    }

    #[test]
    fn test_concrete_scenario() {
        let mut lattice = seeded(4, 2, &[&[0, 1]]);
        let report = sweep(&mut lattice, SweepConfig::up_to(4)).unwrap();
        assert_eq!(report.to_string(), " 2, 1/6, 1, 6\n 3, 1/2, 2, 4\n 4, 1, 1, 1\n");
        assert_eq!(report.free_from(), None);
        assert_eq!(lattice.current_layer(), 4);
    }

    #[test]
    fn test_full_layer_short_circuits() {
        // Every singleton solves, so layer 1 is already full.
        let seeds: Vec<[usize; 1]> = (0..6).map(|i| [i]).collect();
        let mut lattice = SparseLattice::new(GroundSet::indexed(6).unwrap(), 1).unwrap();
        lattice.seed_indices(&seeds).unwrap();

        let report = sweep(&mut lattice, SweepConfig::up_to(6)).unwrap();
        assert_eq!(report.free_from(), Some(2));
        assert_eq!(lattice.current_layer(), 1);
        assert!(report.rows().iter().all(LayerCount::is_full));
        assert_eq!(report.rows().len(), 6);
    }

    #[test]
    fn test_short_circuit_matches_full_advance() {
        let seeds: &[&[usize]] = &[&[0, 1, 2], &[1, 3, 5], &[2, 4, 6], &[0, 5, 6]];
        let mut fast = seeded(7, 3, seeds);
        let mut slow = seeded(7, 3, seeds);

        let fast = sweep(&mut fast, SweepConfig::up_to(7)).unwrap();
        let slow = sweep(&mut slow, SweepConfig::up_to(7).short_circuit(false)).unwrap();
        assert!(fast.same_counts(&slow));
        assert_eq!(slow.free_from(), None);
    }

    #[test]
    fn test_lower_layers() {
        let mut lattice = seeded(4, 2, &[&[0, 1]]);
        let report = sweep(&mut lattice, SweepConfig::up_to(3).include_lower_layers(true)).unwrap();
        let lines: Vec<_> = report.rows().iter().map(|r| r.to_string()).collect();
        assert_eq!(lines, vec![" 0, 0, 0, 1", " 1, 0, 0, 4", " 2, 1/6, 1, 6", " 3, 1/2, 2, 4"]);
        assert_eq!(report.get(3).map(|r| r.cardinality), Some(3));
        assert!(report.get(4).is_none());
    }

    #[test]
    fn test_lower_layers_after_advance() {
        let mut lattice = seeded(4, 2, &[&[0, 1]]);
        lattice.advance().unwrap();
        assert_eq!(
            sweep(&mut lattice, SweepConfig::up_to(4).include_lower_layers(true)).unwrap_err(),
            LatticeError::LayerNotMaterialized {
                requested: 2,
                current: 3
            }
        );
        // Nothing moved, and the rows from the current layer are still real.
        assert_eq!(lattice.current_layer(), 3);
        let report = sweep(&mut lattice, SweepConfig::up_to(4)).unwrap();
        assert_eq!(report.to_string(), " 3, 1/2, 2, 4\n 4, 1, 1, 1\n");
        assert!(report.get(2).is_none());
    }

    #[test]
    fn test_dense_agrees() {
        let seeds: &[&[usize]] = &[&[0, 3], &[1, 2], &[4, 5]];
        let mut sparse = seeded(6, 2, seeds);
        let mut dense = DenseLattice::new(GroundSet::indexed(6).unwrap()).unwrap();
        dense.fill_in_property(seeds).unwrap();

        let config = SweepConfig::up_to(6).include_lower_layers(true);
        let from_sparse = sweep(&mut sparse, config).unwrap();
        let from_dense = sweep_dense(&dense, 2, config).unwrap();
        assert!(from_sparse.same_counts(&from_dense));
    }

    #[test]
    fn test_bad_final_cardinality() {
        let mut lattice = seeded(4, 2, &[]);
        assert_eq!(
            sweep(&mut lattice, SweepConfig::up_to(5)).unwrap_err(),
            LatticeError::CardinalityOutOfRange {
                cardinality: 5,
                ground_size: 4
            }
        );
        assert_eq!(
            sweep(&mut lattice, SweepConfig::up_to(1)).unwrap_err(),
            LatticeError::LayerNotMaterialized {
                requested: 1,
                current: 2
            }
        );
    }
}
