use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use reef_core::SessionProvenance;
use reef_grid::{
    canonical_grid_hash, CellRef, DeadZone, EngineConfig, ExportArtifact, GridSize, GridStats,
    GridStore, Sector,
};
use serde::Serialize;
use tracing::info;

use super::{parse_anchor, print_json};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Optional YAML engine configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Grid size (10 or 20); overrides the configuration.
    #[arg(long)]
    pub size: Option<GridSize>,
    /// Master seed; overrides the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Dead zone anchor as `ROW,COL`; may be repeated.
    #[arg(long = "dead-zone", value_name = "ROW,COL", value_parser = parse_anchor)]
    pub dead_zones: Vec<CellRef>,
    /// Number of additional dead zones at random anchors.
    #[arg(long = "random-dead-zones", default_value_t = 0)]
    pub random_dead_zones: usize,
    /// Skip the neighbourhood scan.
    #[arg(long)]
    pub skip_scan: bool,
    /// Number of priority sectors listed in the summary.
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// Directory receiving the exports and `summary.json`.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    provenance: SessionProvenance,
    size: GridSize,
    dead_zones: Vec<DeadZone>,
    scanned: bool,
    ranked: bool,
    ranking_converged: bool,
    stats: Option<GridStats>,
    priority: Vec<Sector>,
    files: Vec<String>,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    if let Some(size) = args.size {
        config.size = size;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut store = GridStore::from_config(&config);
    store.generate(config.size);

    let mut dead_zones = Vec::with_capacity(args.dead_zones.len() + args.random_dead_zones);
    for anchor in &args.dead_zones {
        dead_zones.push(store.insert_dead_zone(anchor.row, anchor.col));
    }
    for _ in 0..args.random_dead_zones {
        dead_zones.extend(store.insert_random_dead_zone());
    }

    if !args.skip_scan {
        store.run_neighborhood_scan();
    }
    store.sort_sectors();

    let mut files = Vec::new();
    if let Some(out) = &args.out {
        fs::create_dir_all(out)?;
        if let Some(artifact) = store.export_health_map() {
            files.push(write_artifact(out, &artifact)?);
        }
        if let Some(artifact) = store.export_priority_csv()? {
            files.push(write_artifact(out, &artifact)?);
        }
    }

    let summary = RunSummary {
        provenance: SessionProvenance {
            seed: store.seed(),
            grid_hash: canonical_grid_hash(store.grid()),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
        },
        size: store.size(),
        dead_zones,
        scanned: store.is_scanned(),
        ranked: store.is_ranked(),
        ranking_converged: store.ranking_converged(),
        stats: store.stats(),
        priority: store.priority_sectors(args.top).to_vec(),
        files,
    };

    if let Some(out) = &args.out {
        fs::write(out.join("summary.json"), serde_json::to_vec_pretty(&summary)?)?;
        info!(out = %out.display(), "wrote reef artefacts");
    }
    print_json(&summary)
}

fn write_artifact(dir: &Path, artifact: &ExportArtifact) -> Result<String, Box<dyn Error>> {
    fs::write(dir.join(artifact.file_name), &artifact.contents)?;
    Ok(artifact.file_name.to_string())
}
