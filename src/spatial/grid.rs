//! Fixed-size tile grid with silently bounds-checked writes
//!
//! The grid is the only shared mutable state during generation. Writes that
//! fall outside the grid are skipped rather than rejected: partially visible
//! shapes near the edges are normal output, so an out-of-range coordinate is
//! an expected occurrence, not an error.

use ndarray::Array2;

use crate::spatial::tiles::Tile;

/// A fixed `width × height` grid of tile kinds, indexed `[x][y]`
///
/// Allocated once, filled with [`Tile::Nothing`], then selectively
/// overwritten by the generator. Handed to a renderer by value after
/// generation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    cells: Array2<Tile>,
}

impl TileGrid {
    /// Allocate a grid of the given dimensions, filled with `Nothing`
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((width, height), Tile::Nothing),
        }
    }

    /// Grid width in columns
    pub fn width(&self) -> usize {
        self.cells.dim().0
    }

    /// Grid height in rows
    pub fn height(&self) -> usize {
        self.cells.dim().1
    }

    /// Read the tile at (x, y), or `None` when the coordinate is off-grid
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.cells.get((x, y)).copied()
    }

    /// Write `tile` at (x, y), silently skipping off-grid coordinates
    ///
    /// This is the sole bounds-safety mechanism for drawing; callers never
    /// pre-clip their shapes.
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        let Ok(x) = usize::try_from(x) else { return };
        let Ok(y) = usize::try_from(y) else { return };
        if let Some(cell) = self.cells.get_mut((x, y)) {
            *cell = tile;
        }
    }

    /// Reset every cell to the given tile
    pub fn fill(&mut self, tile: Tile) {
        self.cells.fill(tile);
    }

    /// Number of cells holding a decorative (non-`Nothing`) tile
    pub fn decorative_count(&self) -> usize {
        self.cells.iter().filter(|t| t.is_decorative()).count()
    }

    /// Iterate over all cells as `(x, y, tile)`
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.cells.indexed_iter().map(|((x, y), &t)| (x, y, t))
    }
}
