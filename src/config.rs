// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Configuration values for the lattice engines and the layer sweep.
//!
//! Nothing here is global: each engine and each sweep is handed its own value.

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatticeConfig {
    /// Emit an `info` progress line every this many processed nodes while
    /// building or advancing a layer. `None` disables progress lines.
    pub progress_interval: Option<usize>,
}

impl LatticeConfig {
    /// Configuration with progress lines every `interval` nodes.
    pub fn with_progress(interval: usize) -> Self {
        Self {
            progress_interval: Some(interval.max(1)),
        }
    }
}

/// Counts processed nodes and logs every `interval` of them.
#[derive(Debug)]
pub(crate) struct Progress {
    interval: Option<usize>,
    count: usize,
    groups: usize,
    what: &'static str,
}

impl Progress {
    pub(crate) fn new(config: &LatticeConfig, what: &'static str) -> Self {
        Self {
            interval: config.progress_interval,
            count: 0,
            groups: 0,
            what,
        }
    }

    pub(crate) fn tick(&mut self) {
        let Some(interval) = self.interval else {
            return;
        };
        self.count += 1;
        if self.count >= interval {
            self.groups += 1;
            self.count = 0;
            log::info!(
                "{}: finished {} groups of size {}",
                self.what,
                self.groups,
                interval
            );
        }
    }
}

/// Layer sweep configuration.
///
/// # Example
///
/// ```
/// use subset_lattice::config::SweepConfig;
///
/// let config = SweepConfig::up_to(10).short_circuit(false);
/// assert_eq!(config.final_cardinality, 10);
/// assert!(!config.short_circuit);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Last cardinality to report (inclusive).
    pub final_cardinality: usize,

    /// Report layers above a fully-covered (or empty) layer without advancing.
    pub short_circuit: bool,

    /// Also report the layers below the starting cardinality, all zero.
    pub include_lower_layers: bool,
}

impl SweepConfig {
    /// Sweep up to and including `final_cardinality`, short-circuiting.
    pub fn up_to(final_cardinality: usize) -> Self {
        Self {
            final_cardinality,
            short_circuit: true,
            include_lower_layers: false,
        }
    }

    pub fn short_circuit(mut self, enabled: bool) -> Self {
        self.short_circuit = enabled;
        self
    }

    pub fn include_lower_layers(mut self, enabled: bool) -> Self {
        self.include_lower_layers = enabled;
        self
    }
}
