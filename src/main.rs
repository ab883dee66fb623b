// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver: seed a lattice with minimal subsets given as index
//! lists and print the per-layer counts.
//!
//! ```bash
//! subset-lattice --ground-size 4 --start 2 --seed 0,1
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use subset_lattice::{
    sweep, sweep_dense, DenseLattice, GroundSet, LatticeConfig, OverlapCounter, SparseLattice,
    SweepConfig,
};

#[derive(Parser, Debug)]
#[command(about = "Count subsets containing a minimal solving subset, layer by layer")]
struct Args {
    /// Number of items in the ground set (items are the indices 0..N).
    #[arg(long)]
    ground_size: usize,

    /// Cardinality of the minimal solving subsets.
    #[arg(long)]
    start: usize,

    /// A minimal subset as comma-separated indices; repeat for each subset.
    #[arg(long = "seed")]
    seeds: Vec<String>,

    /// Last cardinality to report (defaults to the ground-set size).
    #[arg(long)]
    up_to: Option<usize>,

    /// Advance through every layer even when the outcome is forced.
    #[arg(long)]
    no_short_circuit: bool,

    /// Also report the all-zero layers below the start cardinality.
    #[arg(long)]
    lower_layers: bool,

    /// Log progress every this many nodes.
    #[arg(long)]
    progress_interval: Option<usize>,

    /// Cross-check against the dense power-set table.
    #[arg(long)]
    check_dense: bool,

    /// Also print how many pairs of seeds share a subset of this size.
    #[arg(long)]
    overlaps: Option<usize>,

    /// Decimal places for the percentage column.
    #[arg(long, default_value_t = 5)]
    decimals: u32,
}

impl Args {
    /// Engine configuration; an interval of 0 is clamped to 1.
    fn lattice_config(&self) -> LatticeConfig {
        self.progress_interval
            .map(LatticeConfig::with_progress)
            .unwrap_or_default()
    }
}

fn parse_seeds(raw: &[String]) -> anyhow::Result<Vec<Vec<usize>>> {
    raw.iter()
        .map(|group| {
            group
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| {
                    s.parse::<usize>()
                        .with_context(|| format!("bad index {:?} in seed {:?}", s, group))
                })
                .collect::<anyhow::Result<Vec<usize>>>()
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();
    let args = Args::parse();

    let seeds = parse_seeds(&args.seeds)?;
    let ground = GroundSet::indexed(args.ground_size)?;
    let config = args.lattice_config();
    let sweep_config = SweepConfig::up_to(args.up_to.unwrap_or(args.ground_size))
        .short_circuit(!args.no_short_circuit)
        .include_lower_layers(args.lower_layers);

    let mut lattice = SparseLattice::with_config(ground.clone(), args.start, config)?;
    lattice.seed_indices(&seeds)?;
    let report = sweep(&mut lattice, sweep_config)?;

    if args.check_dense {
        let mut dense = DenseLattice::with_config(ground, config)?;
        dense.fill_in_property(&seeds)?;
        let reference = sweep_dense(&dense, args.start, sweep_config)?;
        if !report.same_counts(&reference) {
            bail!("sparse and dense lattices disagree:\n{}\nvs\n{}", report, reference);
        }
        log::info!("dense lattice agrees on {} layers", reference.rows().len());
    }

    for row in report.rows() {
        println!("{}, {}", row, row.percentage(args.decimals));
    }
    if let Some(size) = args.overlaps {
        let counter = OverlapCounter::new(lattice.ground_set().clone(), &seeds)?;
        let (total, _) = counter.count_overlaps(size)?;
        println!("overlapping pairs on {}-element subsets: {}", size, total);
    }
    Ok(())
}
