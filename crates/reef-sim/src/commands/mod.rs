pub mod run;
pub mod survey;

use std::error::Error;

use reef_grid::CellRef;
use serde::Serialize;

/// Parses a `ROW,COL` pair.
pub fn parse_anchor(raw: &str) -> Result<CellRef, String> {
    let (row, col) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL but got `{raw}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in `{raw}`"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in `{raw}`"))?;
    Ok(CellRef::new(row, col))
}

pub fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
