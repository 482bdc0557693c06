use reef_core::errors::{ErrorInfo, ReefError};
use reef_core::{SchemaVersion, SessionProvenance};
use serde::{Deserialize, Serialize};

use crate::grid::{CellRef, Grid, GridSize};
use crate::rank::{Sector, SortStep};
use crate::stats::GridStats;

/// Schema version written into every snapshot.
pub const SNAPSHOT_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Serializable view of a [`GridStore`](crate::GridStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReefSnapshot {
    /// Snapshot schema version.
    pub schema_version: SchemaVersion,
    /// Seed, grid hash and engine version.
    pub provenance: SessionProvenance,
    /// Size of the most recent generation.
    pub size: GridSize,
    /// Current grid.
    pub grid: Grid,
    /// Most recent neighbourhood averages.
    pub neighborhood_avgs: Grid,
    /// Most recent ranking.
    pub sorted_sectors: Vec<Sector>,
    /// Trace of the most recent ranking.
    pub sort_trace: Vec<SortStep>,
    /// Whether the averages match the grid.
    pub scanned: bool,
    /// Whether the ranking matches the grid.
    pub ranked: bool,
    /// Caller-owned selection.
    pub selected: Option<CellRef>,
    /// Statistics of the current grid.
    pub stats: Option<GridStats>,
}

fn map_err(err: serde_json::Error, code: &str) -> ReefError {
    ReefError::Serde(ErrorInfo::new(code, err.to_string()))
}

/// Serialises a snapshot to pretty-printed JSON.
pub fn snapshot_to_json(snapshot: &ReefSnapshot) -> Result<String, ReefError> {
    serde_json::to_string_pretty(snapshot).map_err(|err| map_err(err, "snapshot-serialize"))
}

/// Restores a snapshot from JSON, validating every embedded grid.
pub fn snapshot_from_json(json: &str) -> Result<ReefSnapshot, ReefError> {
    serde_json::from_str(json).map_err(|err| map_err(err, "snapshot-deserialize"))
}
