use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::scan::round_half_up;

/// Severity band of a health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthBand {
    /// `0..=20`.
    Critical,
    /// `21..=40`.
    Warning,
    /// `41..=60`.
    Moderate,
    /// `61..=80`.
    Healthy,
    /// Above 80.
    Pristine,
}

impl HealthBand {
    /// Every band from most to least severe.
    pub const ALL: [HealthBand; 5] = [
        HealthBand::Critical,
        HealthBand::Warning,
        HealthBand::Moderate,
        HealthBand::Healthy,
        HealthBand::Pristine,
    ];

    /// Places a health score in its band.
    pub fn classify(value: u8) -> Self {
        match value {
            0..=20 => HealthBand::Critical,
            21..=40 => HealthBand::Warning,
            41..=60 => HealthBand::Moderate,
            61..=80 => HealthBand::Healthy,
            _ => HealthBand::Pristine,
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            HealthBand::Critical => "Critical",
            HealthBand::Warning => "Warning",
            HealthBand::Moderate => "Moderate",
            HealthBand::Healthy => "Healthy",
            HealthBand::Pristine => "Pristine",
        }
    }
}

/// Number of cells per severity band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Distribution {
    /// Cells scoring `0..=20`.
    pub critical: usize,
    /// Cells scoring `21..=40`.
    pub warning: usize,
    /// Cells scoring `41..=60`.
    pub moderate: usize,
    /// Cells scoring `61..=80`.
    pub healthy: usize,
    /// Cells scoring above 80.
    pub pristine: usize,
}

impl Distribution {
    fn record(&mut self, value: u8) {
        match HealthBand::classify(value) {
            HealthBand::Critical => self.critical += 1,
            HealthBand::Warning => self.warning += 1,
            HealthBand::Moderate => self.moderate += 1,
            HealthBand::Healthy => self.healthy += 1,
            HealthBand::Pristine => self.pristine += 1,
        }
    }

    /// Count for a single band.
    pub fn count(&self, band: HealthBand) -> usize {
        match band {
            HealthBand::Critical => self.critical,
            HealthBand::Warning => self.warning,
            HealthBand::Moderate => self.moderate,
            HealthBand::Healthy => self.healthy,
            HealthBand::Pristine => self.pristine,
        }
    }

    /// Sum over every band.
    pub fn total(&self) -> usize {
        HealthBand::ALL.iter().map(|band| self.count(*band)).sum()
    }
}

/// Location and value of the lowest-scoring cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalCell {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
    /// Health score of the cell.
    pub value: u8,
}

/// Summary statistics over a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    /// Mean health rounded half-up.
    pub avg: u8,
    /// First row-major occurrence of the minimum.
    pub most_critical: CriticalCell,
    /// Band counts, summing to the cell count.
    pub distribution: Distribution,
}

/// Computes summary statistics, or `None` for an empty grid.
pub fn grid_stats(grid: &Grid) -> Option<GridStats> {
    let mut cells = grid.cells();
    let (row, col, value) = cells.next()?;
    let mut most_critical = CriticalCell { row, col, value };
    let mut distribution = Distribution::default();
    distribution.record(value);
    let mut sum = u32::from(value);
    let mut count = 1u32;

    for (row, col, value) in cells {
        if value < most_critical.value {
            most_critical = CriticalCell { row, col, value };
        }
        distribution.record(value);
        sum += u32::from(value);
        count += 1;
    }

    Some(GridStats {
        avg: round_half_up(sum, count),
        most_critical,
        distribution,
    })
}
