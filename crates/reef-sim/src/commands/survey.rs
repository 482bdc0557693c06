use std::error::Error;

use clap::Args;
use reef_core::derive_substream_seed;
use reef_grid::{canonical_grid_hash, GridSize, GridStats, GridStore};
use serde::Serialize;
use tracing::debug;

use super::print_json;

#[derive(Args, Debug)]
pub struct SurveyArgs {
    /// Number of reefs to generate.
    #[arg(long, default_value_t = 8)]
    pub count: usize,
    /// Master seed from which every reef seed is derived.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Grid size (10 or 20).
    #[arg(long, default_value_t = GridSize::Ten)]
    pub size: GridSize,
    /// Random dead zones inserted into each reef.
    #[arg(long = "dead-zones", default_value_t = 0)]
    pub dead_zones: usize,
}

#[derive(Debug, Serialize)]
struct SurveyEntry {
    index: usize,
    seed: u64,
    grid_hash: String,
    stats: Option<GridStats>,
}

pub fn run(args: &SurveyArgs) -> Result<(), Box<dyn Error>> {
    let entries: Vec<SurveyEntry> = (0..args.count)
        .map(|index| {
            let seed = derive_substream_seed(args.seed, index as u64);
            let mut store = GridStore::seeded(seed);
            store.generate(args.size);
            for _ in 0..args.dead_zones {
                store.insert_random_dead_zone();
            }
            debug!(index, seed, "surveyed reef");
            SurveyEntry {
                index,
                seed,
                grid_hash: canonical_grid_hash(store.grid()),
                stats: store.stats(),
            }
        })
        .collect();
    print_json(&entries)
}
