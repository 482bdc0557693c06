use reef_core::errors::ReefError;
use reef_core::{HealthSampler, RngHandle, SessionProvenance};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::export::{self, ExportArtifact};
use crate::generate::{generate_grid, inject_dead_zone, random_dead_zone_anchor, DeadZone};
use crate::grid::{CellRef, Grid, GridSize};
use crate::hash::canonical_grid_hash;
use crate::rank::{is_ranked, rank_sectors, Sector, SortStep, TraceCaps};
use crate::scan::neighborhood_scan;
use crate::snapshot::{ReefSnapshot, SNAPSHOT_SCHEMA};
use crate::stats::{grid_stats, GridStats};

/// Owner of the current reef grid and everything derived from it.
///
/// Every mutation of the grid clears the `scanned` and `ranked` flags in the
/// same call, so a flag is only ever set while its artefact matches the grid.
/// A dead-zone injection leaves the previous averages and ranking in place as
/// stale data; a fresh generation discards them.
#[derive(Debug, Clone)]
pub struct GridStore<S = RngHandle> {
    size: GridSize,
    grid: Grid,
    neighborhood_avgs: Grid,
    sorted_sectors: Vec<Sector>,
    sort_trace: Vec<SortStep>,
    selected: Option<CellRef>,
    scanned: bool,
    ranked: bool,
    caps: TraceCaps,
    seed: Option<u64>,
    sampler: S,
}

impl GridStore<RngHandle> {
    /// Creates an empty store driven by a seeded RNG.
    pub fn seeded(seed: u64) -> Self {
        let mut store = Self::with_sampler(RngHandle::from_seed(seed));
        store.seed = Some(seed);
        store
    }

    /// Creates an empty store driven by OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_sampler(RngHandle::from_entropy())
    }

    /// Creates an empty store from a session configuration.
    pub fn from_config(config: &EngineConfig) -> Self {
        let store = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        };
        let mut store = store.with_trace_caps(config.trace);
        store.size = config.size;
        store
    }
}

impl<S: HealthSampler> GridStore<S> {
    /// Creates an empty store drawing all randomness from `sampler`.
    pub fn with_sampler(sampler: S) -> Self {
        Self {
            size: GridSize::default(),
            grid: Grid::empty(),
            neighborhood_avgs: Grid::empty(),
            sorted_sectors: Vec::new(),
            sort_trace: Vec::new(),
            selected: None,
            scanned: false,
            ranked: false,
            caps: TraceCaps::default(),
            seed: None,
            sampler,
        }
    }

    /// Replaces the ranking caps.
    pub fn with_trace_caps(mut self, caps: TraceCaps) -> Self {
        self.caps = caps;
        self
    }

    /// Replaces the grid with a fresh random one and discards all derived state.
    pub fn generate(&mut self, size: GridSize) {
        let grid = generate_grid(size, &mut self.sampler);
        self.size = size;
        self.grid = grid;
        self.neighborhood_avgs = Grid::empty();
        self.sorted_sectors.clear();
        self.sort_trace.clear();
        self.selected = None;
        self.scanned = false;
        self.ranked = false;
        info!(size = size.dimension(), "generated reef grid");
    }

    /// Degrades the 3×3 block anchored at `(row, col)`, clipped to the grid.
    pub fn insert_dead_zone(&mut self, row: usize, col: usize) -> DeadZone {
        let zone = inject_dead_zone(&mut self.grid, row, col, &mut self.sampler);
        self.scanned = false;
        self.ranked = false;
        info!(
            row,
            col,
            cells = zone.cells_touched(),
            "inserted dead zone"
        );
        zone
    }

    /// Degrades a block at a random anchor that keeps it fully inside the grid.
    ///
    /// Returns `None` without drawing when no grid has been generated.
    pub fn insert_random_dead_zone(&mut self) -> Option<DeadZone> {
        if self.grid.is_empty() {
            return None;
        }
        let anchor = random_dead_zone_anchor(self.grid.dimension(), &mut self.sampler);
        Some(self.insert_dead_zone(anchor.row, anchor.col))
    }

    /// Computes neighbourhood averages for the current grid.
    pub fn run_neighborhood_scan(&mut self) {
        if self.grid.is_empty() {
            debug!("neighborhood scan skipped: no grid");
            return;
        }
        self.neighborhood_avgs = neighborhood_scan(&self.grid);
        self.scanned = true;
        debug!(size = self.grid.dimension(), "neighborhood scan complete");
    }

    /// Ranks every sector by ascending health and records the sort trace.
    pub fn sort_sectors(&mut self) {
        if self.grid.is_empty() {
            debug!("sector ranking skipped: no grid");
            return;
        }
        let outcome = rank_sectors(&self.grid, &self.caps);
        self.sorted_sectors = outcome.sectors;
        self.sort_trace = outcome.trace;
        self.ranked = true;
    }

    /// Marks a cell as selected. The coordinates are not validated.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        self.selected = Some(CellRef::new(row, col));
    }

    /// Clears the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

impl<S> GridStore<S> {
    /// Summary statistics for the current grid, or `None` before generation.
    pub fn stats(&self) -> Option<GridStats> {
        grid_stats(&self.grid)
    }

    /// Health map text export, or `None` before generation.
    pub fn export_health_map(&self) -> Option<ExportArtifact> {
        export::export_health_map(&self.grid)
    }

    /// Priority CSV export, or `None` before ranking.
    pub fn export_priority_csv(&self) -> Result<Option<ExportArtifact>, ReefError> {
        export::export_priority_csv(&self.sorted_sectors)
    }

    /// The first `limit` ranked sectors.
    pub fn priority_sectors(&self, limit: usize) -> &[Sector] {
        &self.sorted_sectors[..limit.min(self.sorted_sectors.len())]
    }

    /// Configured or most recently generated size.
    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Current grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Most recent neighbourhood averages; stale unless [`Self::is_scanned`].
    pub fn neighborhood_averages(&self) -> &Grid {
        &self.neighborhood_avgs
    }

    /// Most recent ranking; stale unless [`Self::is_ranked`].
    pub fn sorted_sectors(&self) -> &[Sector] {
        &self.sorted_sectors
    }

    /// Trace of the most recent ranking.
    pub fn sort_trace(&self) -> &[SortStep] {
        &self.sort_trace
    }

    /// Whether the averages match the current grid.
    pub fn is_scanned(&self) -> bool {
        self.scanned
    }

    /// Whether the ranking matches the current grid.
    pub fn is_ranked(&self) -> bool {
        self.ranked
    }

    /// Whether the most recent ranking is fully ordered.
    ///
    /// A ranking can stop at the pass cap before converging on 20×20 grids.
    pub fn ranking_converged(&self) -> bool {
        is_ranked(&self.sorted_sectors)
    }

    /// Currently selected cell, if any.
    pub fn selected_cell(&self) -> Option<CellRef> {
        self.selected
    }

    /// Ranking caps in effect.
    pub fn trace_caps(&self) -> TraceCaps {
        self.caps
    }

    /// Seed the store was created with, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Serializable copy of the full store state.
    pub fn snapshot(&self) -> ReefSnapshot {
        ReefSnapshot {
            schema_version: SNAPSHOT_SCHEMA,
            provenance: SessionProvenance {
                seed: self.seed,
                grid_hash: canonical_grid_hash(&self.grid),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
            },
            size: self.size,
            grid: self.grid.clone(),
            neighborhood_avgs: self.neighborhood_avgs.clone(),
            sorted_sectors: self.sorted_sectors.clone(),
            sort_trace: self.sort_trace.clone(),
            scanned: self.scanned,
            ranked: self.ranked,
            selected: self.selected,
            stats: self.stats(),
        }
    }
}
