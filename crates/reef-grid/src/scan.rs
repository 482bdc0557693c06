use crate::grid::Grid;

/// Smooths the grid with the mean of each cell's Moore neighbourhood.
///
/// Neighbourhoods shrink at edges and corners rather than wrapping. Means are
/// rounded half-up, so the output stays within `0..=100`. An empty grid yields
/// an empty grid.
pub fn neighborhood_scan(grid: &Grid) -> Grid {
    let dimension = grid.dimension();
    let rows = (0..dimension)
        .map(|row| {
            (0..dimension)
                .map(|col| neighborhood_mean(grid, row, col).unwrap_or_default())
                .collect()
        })
        .collect();
    Grid::from_rows_unchecked(rows)
}

/// Rounded mean over the in-bounds cells of the 3×3 block centred on `(row, col)`.
///
/// Returns `None` when the centre itself is out of bounds.
pub fn neighborhood_mean(grid: &Grid, row: usize, col: usize) -> Option<u8> {
    grid.get(row, col)?;
    let (sum, count) = neighborhood(grid, row, col)
        .fold((0u32, 0u32), |(sum, count), (_, _, value)| {
            (sum + u32::from(value), count + 1)
        });
    Some(round_half_up(sum, count))
}

/// In-bounds members of the Moore neighbourhood of `(row, col)`, centre included.
pub fn neighborhood(
    grid: &Grid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
    let rows = row.saturating_sub(1)..=row.saturating_add(1);
    rows.flat_map(move |r| {
        (col.saturating_sub(1)..=col.saturating_add(1))
            .filter_map(move |c| grid.get(r, c).map(|value| (r, c, value)))
    })
}

pub(crate) fn round_half_up(sum: u32, count: u32) -> u8 {
    if count == 0 {
        return 0;
    }
    ((2 * sum + count) / (2 * count)) as u8
}
