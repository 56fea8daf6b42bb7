//! Recursive lattice expansion in four directions
//!
//! Starting from a seed position, four mutually symmetric walkers tile the
//! plane with interlocking plus shapes: up-right and down-left steps build a
//! single column, up-left and down-right steps move across columns, drawing a
//! full column at each stop. Each walker terminates independently once its
//! candidate position leaves a deliberately generous bounding region, so
//! shapes that are only partially visible near the grid edge still get drawn.

use crate::algorithm::plus::add_plus;
use crate::algorithm::selection::TileSelector;
use crate::io::configuration::MIN_DRAWABLE_PLUS_SIZE;
use crate::spatial::{Position, Tile, TileGrid};

/// Termination test for lattice expansion
///
/// The region is wider than the grid on purpose: positions up to a full grid
/// dimension past the right edge, `3 * size` plus a dimension past the left
/// edge, and `3 * size` above the top are still drawn (clipped), while
/// anything below row zero is not. Every directional step moves a position by
/// a fixed multiple of `size` toward one of these limits, so each walk is
/// guaranteed to halt.
pub const fn out_of_bound(p: Position, size: i32, width: i32, height: i32) -> bool {
    p.x >= width + height + size || p.x <= -3 * size - height || p.y >= height + size * 3 || p.y < 0
}

/// Draw the full lattice of plus shapes seeded at `origin`
///
/// Draws the seed column, then walks the neighboring columns out to the left
/// and right. The caller chooses the first tile; every subsequent shape gets
/// an independently drawn one.
///
/// Sizes below the drawable minimum are silently skipped: every plus would
/// be a no-op, and a zero size would make every directional step a zero
/// offset that never reaches the bound.
pub fn expand_lattice(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    origin: Position,
    tile: Tile,
    size: i32,
) {
    if size < MIN_DRAWABLE_PLUS_SIZE {
        return;
    }
    expand_column(grid, selector, origin, tile, size);
    let left_tile = selector.next_tile();
    expand_columns_left(grid, selector, origin, left_tile, size);
    let right_tile = selector.next_tile();
    expand_columns_right(grid, selector, origin, right_tile, size);
}

// Draw one full column of pluses anchored at `p`: a plus at `p` itself,
// then up-right and down-left walks until each goes out of bound.
fn expand_column(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    p: Position,
    tile: Tile,
    size: i32,
) {
    add_plus(grid, p, tile, size);
    let up_tile = selector.next_tile();
    expand_up_right(grid, selector, p, up_tile, size);
    let down_tile = selector.next_tile();
    expand_down_left(grid, selector, p, down_tile, size);
}

// Walk columns to the left of `p`, drawing a full column per step.
fn expand_columns_left(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    p: Position,
    tile: Tile,
    size: i32,
) {
    let up_left = p.up_left(size);
    if out_of_bound(up_left, size, grid.width() as i32, grid.height() as i32) {
        return;
    }
    expand_column(grid, selector, up_left, tile, size);
    let next = selector.next_tile();
    expand_columns_left(grid, selector, up_left, next, size);
}

// Walk columns to the right of `p`, drawing a full column per step.
fn expand_columns_right(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    p: Position,
    tile: Tile,
    size: i32,
) {
    let down_right = p.down_right(size);
    if out_of_bound(down_right, size, grid.width() as i32, grid.height() as i32) {
        return;
    }
    expand_column(grid, selector, down_right, tile, size);
    let next = selector.next_tile();
    expand_columns_right(grid, selector, down_right, next, size);
}

// Walk up-right within a column, one plus per step.
fn expand_up_right(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    p: Position,
    tile: Tile,
    size: i32,
) {
    let up_right = p.up_right(size);
    if out_of_bound(up_right, size, grid.width() as i32, grid.height() as i32) {
        return;
    }
    add_plus(grid, up_right, tile, size);
    let next = selector.next_tile();
    expand_up_right(grid, selector, up_right, next, size);
}

// Walk down-left within a column, one plus per step. The candidate position
// is tested before drawing, matching the other three walkers.
fn expand_down_left(
    grid: &mut TileGrid,
    selector: &mut TileSelector,
    p: Position,
    tile: Tile,
    size: i32,
) {
    let down_left = p.down_left(size);
    if out_of_bound(down_left, size, grid.width() as i32, grid.height() as i32) {
        return;
    }
    add_plus(grid, down_left, tile, size);
    let next = selector.next_tile();
    expand_down_left(grid, selector, down_left, next, size);
}
