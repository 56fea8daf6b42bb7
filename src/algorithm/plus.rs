//! Drawing a single plus shape via recursive row construction
//!
//! A plus is never stored; it is a derived pattern of row writes defined by
//! an origin, a size factor, and a tile kind. The recursion builds the upper
//! arm one row per depth level, emits the full-width horizontal bar at the
//! deepest level, and mirrors each arm row on the way back up, yielding a
//! symmetric shape of total height `3 * size`.

use crate::io::configuration::MIN_DRAWABLE_PLUS_SIZE;
use crate::spatial::{Position, Tile, TileGrid};

/// Write a horizontal run of `length` tiles starting at `start`
///
/// Cells outside the grid are silently skipped; a row may be clipped at
/// either end or vanish entirely without aborting the rest of the shape.
pub fn add_row(grid: &mut TileGrid, start: Position, tile: Tile, length: i32) {
    for x in start.x..start.x.saturating_add(length) {
        grid.set(x, start.y, tile);
    }
}

/// Draw one plus shape of the given size with its origin at `origin`
///
/// The origin sits at the left edge of the bar, level with the top arm row.
/// Shapes with `size` below the drawable minimum are silently skipped; an
/// undersized plus is policy, not an error.
pub fn add_plus(grid: &mut TileGrid, origin: Position, tile: Tile, size: i32) {
    if size < MIN_DRAWABLE_PLUS_SIZE {
        return;
    }
    add_plus_rows(grid, origin, tile, size, 1);
}

// Recursive row builder, depth running from 1 to size.
//
// Each level writes one arm row of width `size` (indented by `size` from the
// bar's left edge). The deepest level writes the `size` bar rows of width
// `3 * size`. On unwind every level writes its mirrored arm row at
// `(size, -((3 * size) - 2 * depth))` relative to the level's cursor, which
// the bar level has already moved `size` rows down.
fn add_plus_rows(grid: &mut TileGrid, p: Position, tile: Tile, size: i32, depth: i32) {
    add_row(grid, p.shift(size, 0), tile, size);

    let mut cursor = p;
    if depth < size {
        add_plus_rows(grid, p.shift(0, -1), tile, size, depth + 1);
    } else {
        for _ in 0..size {
            cursor = cursor.shift(0, -1);
            add_row(grid, cursor, tile, size * 3);
        }
    }

    let mirrored = cursor.shift(size, -((size * 3) - (2 * depth)));
    add_row(grid, mirrored, tile, size);
}
