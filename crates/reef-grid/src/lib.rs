#![deny(missing_docs)]

//! Deterministic reef health grid engine.
//!
//! The engine generates a synthetic square grid of health scores, degrades
//! local dead zones, smooths the grid over Moore neighbourhoods, ranks sectors
//! with a traced bubble sort, aggregates band statistics and renders the two
//! text exports. [`GridStore`] owns the state and exposes the operations a
//! presentation layer drives; the free functions are the pure transforms it
//! is built from.

mod config;
mod export;
mod generate;
mod grid;
mod hash;
mod rank;
mod scan;
mod snapshot;
mod stats;
mod store;

pub use config::EngineConfig;
pub use export::{
    export_health_map, export_priority_csv, health_map_text, priority_csv, ExportArtifact,
    HEALTH_MAP_FILE, HEALTH_MAP_TITLE, PRIORITY_CSV_FILE, PRIORITY_CSV_HEADER,
};
pub use generate::{
    generate_grid, inject_dead_zone, random_dead_zone_anchor, DeadZone, DEAD_ZONE_EXTENT,
    DEAD_ZONE_MAX_HEALTH,
};
pub use grid::{CellRef, Grid, GridSize};
pub use hash::canonical_grid_hash;
pub use rank::{flatten_sectors, is_ranked, rank_sectors, RankOutcome, Sector, SortStep, TraceCaps};
pub use scan::{neighborhood, neighborhood_mean, neighborhood_scan};
pub use snapshot::{snapshot_from_json, snapshot_to_json, ReefSnapshot, SNAPSHOT_SCHEMA};
pub use stats::{grid_stats, CriticalCell, Distribution, GridStats, HealthBand};
pub use store::GridStore;
