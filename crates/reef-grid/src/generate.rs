use reef_core::{HealthSampler, HEALTH_MAX, HEALTH_MIN};
use serde::{Deserialize, Serialize};

use crate::grid::{CellRef, Grid, GridSize};

/// Side length of an unclipped dead zone.
pub const DEAD_ZONE_EXTENT: usize = 3;

/// Highest health score written into a dead zone.
pub const DEAD_ZONE_MAX_HEALTH: u8 = 14;

/// Generates a fresh grid with independently drawn scores in `0..=100`.
pub fn generate_grid<S: HealthSampler + ?Sized>(size: GridSize, sampler: &mut S) -> Grid {
    let dimension = size.dimension();
    let rows = (0..dimension)
        .map(|_| {
            (0..dimension)
                .map(|_| sampler.sample_inclusive(HEALTH_MIN, HEALTH_MAX))
                .collect()
        })
        .collect();
    Grid::from_rows_unchecked(rows)
}

/// Cells overwritten by a dead-zone injection.
///
/// Spans are half-open and already clipped to the grid, so a zone anchored
/// near an edge (or entirely outside the grid) reports a smaller or empty
/// block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadZone {
    /// Requested top-left corner.
    pub anchor: CellRef,
    /// Overwritten rows as `[start, end)`.
    pub rows: (usize, usize),
    /// Overwritten columns as `[start, end)`.
    pub cols: (usize, usize),
}

impl DeadZone {
    fn clipped(anchor: CellRef, dimension: usize) -> Self {
        let span = |start: usize| {
            let end = start.saturating_add(DEAD_ZONE_EXTENT).min(dimension);
            (start.min(end), end)
        };
        Self {
            anchor,
            rows: span(anchor.row),
            cols: span(anchor.col),
        }
    }

    /// Number of cells overwritten.
    pub fn cells_touched(&self) -> usize {
        (self.rows.1 - self.rows.0) * (self.cols.1 - self.cols.0)
    }

    /// Returns `true` when `(row, col)` lies inside the overwritten block.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.rows.0..self.rows.1).contains(&row) && (self.cols.0..self.cols.1).contains(&col)
    }
}

/// Overwrites the 3×3 block anchored at `(start_row, start_col)` with scores in `0..=14`.
///
/// The block is clipped to the grid bounds; cells outside it are untouched.
/// Draws happen in row-major order within the block.
pub fn inject_dead_zone<S: HealthSampler + ?Sized>(
    grid: &mut Grid,
    start_row: usize,
    start_col: usize,
    sampler: &mut S,
) -> DeadZone {
    let zone = DeadZone::clipped(CellRef::new(start_row, start_col), grid.dimension());
    for row in zone.rows.0..zone.rows.1 {
        for col in zone.cols.0..zone.cols.1 {
            grid.set(row, col, sampler.sample_inclusive(HEALTH_MIN, DEAD_ZONE_MAX_HEALTH));
        }
    }
    zone
}

/// Draws a dead-zone anchor that keeps the full block inside the grid.
///
/// Both coordinates are uniform over `[0, N - 3)`; grids too small for that
/// range anchor at the origin.
pub fn random_dead_zone_anchor<S: HealthSampler + ?Sized>(
    dimension: usize,
    sampler: &mut S,
) -> CellRef {
    let span = dimension.saturating_sub(DEAD_ZONE_EXTENT);
    if span == 0 {
        return CellRef::new(0, 0);
    }
    let high = u8::try_from(span - 1).unwrap_or(u8::MAX);
    let row = sampler.sample_inclusive(0, high) as usize;
    let col = sampler.sample_inclusive(0, high) as usize;
    CellRef::new(row, col)
}
