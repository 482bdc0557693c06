use std::fmt;
use std::str::FromStr;

use reef_core::errors::{ErrorInfo, ReefError};
use reef_core::HEALTH_MAX;
use serde::{Deserialize, Serialize};

/// Supported reef dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum GridSize {
    /// A 10×10 reef.
    #[default]
    Ten,
    /// A 20×20 reef.
    Twenty,
}

impl GridSize {
    /// Every supported size, smallest first.
    pub const ALL: [GridSize; 2] = [GridSize::Ten, GridSize::Twenty];

    /// Side length of the square grid.
    pub const fn dimension(self) -> usize {
        match self {
            GridSize::Ten => 10,
            GridSize::Twenty => 20,
        }
    }

    /// Number of sectors in a grid of this size.
    pub const fn cell_count(self) -> usize {
        self.dimension() * self.dimension()
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.dimension()
    }
}

impl TryFrom<usize> for GridSize {
    type Error = ReefError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            10 => Ok(GridSize::Ten),
            20 => Ok(GridSize::Twenty),
            other => Err(ReefError::Grid(
                ErrorInfo::new("unsupported-size", "grid size must be 10 or 20")
                    .with_context("size", other.to_string()),
            )),
        }
    }
}

impl FromStr for GridSize {
    type Err = ReefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s.trim().parse().map_err(|_| {
            ReefError::Grid(
                ErrorInfo::new("unsupported-size", "grid size must be an integer")
                    .with_context("size", s),
            )
        })?;
        GridSize::try_from(value)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dimension())
    }
}

/// Coordinates of a single sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellRef {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based column index.
    pub col: usize,
}

impl CellRef {
    /// Creates a new cell reference.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square, row-major grid of health scores in `0..=100`.
///
/// Construction through [`Grid::from_rows`] (and deserialization) validates
/// squareness and the value range; engine-internal constructors only ever
/// produce valid grids.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    rows: Vec<Vec<u8>>,
}

impl Grid {
    /// Returns the zero-dimension grid held by a store before generation.
    pub fn empty() -> Self {
        Self { rows: Vec::new() }
    }

    /// Builds a grid from caller-supplied rows.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, ReefError> {
        let dimension = rows.len();
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(ReefError::Grid(
                    ErrorInfo::new("non-square", "every row must have as many cells as there are rows")
                        .with_context("row", row_idx.to_string())
                        .with_context("expected", dimension.to_string())
                        .with_context("found", row.len().to_string()),
                ));
            }
            if let Some((col_idx, value)) = row
                .iter()
                .enumerate()
                .find(|(_, value)| **value > HEALTH_MAX)
            {
                return Err(ReefError::Grid(
                    ErrorInfo::new("health-out-of-range", "health scores must lie in 0..=100")
                        .with_cell(row_idx, col_idx)
                        .with_context("value", value.to_string()),
                ));
            }
        }
        Ok(Self { rows })
    }

    /// Builds a grid of the given dimension with every cell set to `value`.
    pub fn filled(dimension: usize, value: u8) -> Self {
        Self {
            rows: vec![vec![value.min(HEALTH_MAX); dimension]; dimension],
        }
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Vec<u8>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Side length of the grid.
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.dimension() * self.dimension()
    }

    /// Health score at `(row, col)`, if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: u8) {
        self.rows[row][col] = value.min(HEALTH_MAX);
    }

    /// Borrows a single row.
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every value in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u8> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Iterates over `(row, col, value)` triples in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row_idx, row)| {
            row.iter()
                .enumerate()
                .map(move |(col_idx, value)| (row_idx, col_idx, *value))
        })
    }

    /// Copies the grid out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.rows.clone()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = ReefError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}
