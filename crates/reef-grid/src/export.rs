use std::fmt::Write as _;

use reef_core::errors::{ErrorInfo, ReefError};

use crate::grid::Grid;
use crate::rank::Sector;

/// Conventional file name for the health map export.
pub const HEALTH_MAP_FILE: &str = "reef_health_map.txt";

/// Conventional file name for the priority CSV export.
pub const PRIORITY_CSV_FILE: &str = "restoration_priority.csv";

/// First line of the health map export.
pub const HEALTH_MAP_TITLE: &str = "Reef Health Map";

/// Header row of the priority CSV export.
pub const PRIORITY_CSV_HEADER: [&str; 4] = ["Rank", "Row", "Col", "Health Score"];

const SEPARATOR_WIDTH: usize = 40;
const FIELD_WIDTH: usize = 4;

/// A text blob paired with the file name it is conventionally saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Suggested file name.
    pub file_name: &'static str,
    /// File contents.
    pub contents: String,
}

/// Renders the grid as a fixed-width text table, or `None` for an empty grid.
pub fn health_map_text(grid: &Grid) -> Option<String> {
    if grid.is_empty() {
        return None;
    }
    let mut out = String::with_capacity(64 + grid.cell_count() * FIELD_WIDTH + grid.dimension());
    out.push_str(HEALTH_MAP_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push_str("\n\n");
    for row in grid.rows() {
        for value in row {
            // Writing into a String cannot fail.
            let _ = write!(out, "{:>width$}", value, width = FIELD_WIDTH);
        }
        out.push('\n');
    }
    Some(out)
}

/// Renders ranked sectors as CSV, or `None` when there are no sectors.
pub fn priority_csv(sectors: &[Sector]) -> Result<Option<String>, ReefError> {
    if sectors.is_empty() {
        return Ok(None);
    }
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::with_capacity(sectors.len() * 16));
    wtr.write_record(PRIORITY_CSV_HEADER).map_err(csv_err)?;
    for (idx, sector) in sectors.iter().enumerate() {
        wtr.write_record([
            (idx + 1).to_string(),
            sector.row.to_string(),
            sector.col.to_string(),
            sector.health.to_string(),
        ])
        .map_err(csv_err)?;
    }
    let bytes = wtr.into_inner().map_err(|err| {
        ReefError::Export(ErrorInfo::new("priority-csv-flush", err.to_string()))
    })?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|err| ReefError::Export(ErrorInfo::new("priority-csv-utf8", err.to_string())))
}

/// Health map export with its conventional file name.
pub fn export_health_map(grid: &Grid) -> Option<ExportArtifact> {
    health_map_text(grid).map(|contents| ExportArtifact {
        file_name: HEALTH_MAP_FILE,
        contents,
    })
}

/// Priority CSV export with its conventional file name.
pub fn export_priority_csv(sectors: &[Sector]) -> Result<Option<ExportArtifact>, ReefError> {
    Ok(priority_csv(sectors)?.map(|contents| ExportArtifact {
        file_name: PRIORITY_CSV_FILE,
        contents,
    }))
}

fn csv_err(err: csv::Error) -> ReefError {
    ReefError::Export(ErrorInfo::new("priority-csv-write", err.to_string()))
}
