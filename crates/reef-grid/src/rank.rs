use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::grid::Grid;

/// Snapshot of one sector at the moment it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sector {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
    /// Health score at capture time.
    pub health: u8,
}

/// One recorded comparison of the ranking sort.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortStep {
    /// Leading prefix of the in-progress ordering, after this comparison.
    pub array: Vec<Sector>,
    /// Indices of the compared adjacent pair.
    pub comparing: (usize, usize),
    /// Whether the pair was swapped.
    pub swapped: bool,
}

/// Bounds on ranking work and on the recorded trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceCaps {
    /// Maximum number of recorded comparisons.
    pub max_steps: usize,
    /// Number of leading sectors copied into each step.
    pub snapshot_len: usize,
    /// Maximum number of outer bubble-sort passes.
    pub max_passes: usize,
}

impl Default for TraceCaps {
    fn default() -> Self {
        Self {
            max_steps: 50,
            snapshot_len: 20,
            max_passes: 200,
        }
    }
}

/// Result of ranking a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOutcome {
    /// Sectors ordered by ascending health.
    pub sectors: Vec<Sector>,
    /// Bounded trace of the sort.
    pub trace: Vec<SortStep>,
    /// Outer passes actually executed.
    pub passes: usize,
    /// Whether `sectors` is fully ordered.
    pub converged: bool,
}

/// Flattens the grid into sector snapshots in row-major order.
pub fn flatten_sectors(grid: &Grid) -> Vec<Sector> {
    grid.cells()
        .map(|(row, col, health)| Sector { row, col, health })
        .collect()
}

/// Ranks every sector by ascending health with a traced bubble sort.
///
/// The outer loop runs at most `min(N² - 1, caps.max_passes)` passes and stops
/// early after a pass without swaps. Comparisons are recorded until
/// `caps.max_steps` steps exist; sorting continues unrecorded afterwards.
/// Equal healths are never swapped, so ties keep row-major order.
pub fn rank_sectors(grid: &Grid, caps: &TraceCaps) -> RankOutcome {
    let mut sectors = flatten_sectors(grid);
    let mut trace = Vec::with_capacity(caps.max_steps.min(64));
    let len = sectors.len();
    let pass_limit = len.saturating_sub(1).min(caps.max_passes);

    let mut passes = 0;
    for pass in 0..pass_limit {
        passes += 1;
        let mut swapped_any = false;
        for idx in 0..len - pass - 1 {
            let swapped = sectors[idx].health > sectors[idx + 1].health;
            if swapped {
                sectors.swap(idx, idx + 1);
                swapped_any = true;
            }
            if trace.len() < caps.max_steps {
                trace.push(SortStep {
                    array: sectors.iter().take(caps.snapshot_len).copied().collect(),
                    comparing: (idx, idx + 1),
                    swapped,
                });
            }
        }
        if !swapped_any {
            break;
        }
    }

    let converged = is_ranked(&sectors);
    if !converged {
        warn!(
            passes,
            max_passes = caps.max_passes,
            "sector ranking stopped at the pass cap before converging"
        );
    }
    debug!(sectors = len, passes, steps = trace.len(), "ranked sectors");

    RankOutcome {
        sectors,
        trace,
        passes,
        converged,
    }
}

/// Returns `true` when `sectors` is non-decreasing in health.
pub fn is_ranked(sectors: &[Sector]) -> bool {
    sectors.windows(2).all(|pair| pair[0].health <= pair[1].health)
}
