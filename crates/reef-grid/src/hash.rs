use sha2::{Digest, Sha256};

use crate::grid::Grid;

/// Computes the canonical structural hash for the provided grid.
///
/// The digest covers the dimension followed by every cell in row-major order,
/// so equal grids hash equally regardless of how they were produced.
pub fn canonical_grid_hash(grid: &Grid) -> String {
    let mut hasher = Sha256::new();
    hasher.update(b"reef-grid:v1");
    hasher.update((grid.dimension() as u64).to_le_bytes());
    for row in grid.rows() {
        hasher.update(row);
    }
    format!("{:x}", hasher.finalize())
}
