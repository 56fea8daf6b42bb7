//! ASCII rendering of finished worlds
//!
//! A lightweight display surface for terminals: one glyph per tile, top row
//! of the world first. Used by the CLI's `--ascii` mode and handy in tests.

use crate::spatial::{Tile, TileGrid};

/// Render the grid as lines of glyphs, top row first
pub fn render_ascii(grid: &TileGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());

    for y in (0..grid.height() as i32).rev() {
        for x in 0..grid.width() as i32 {
            let glyph = grid.get(x, y).map_or(' ', Tile::glyph);
            out.push(glyph);
        }
        out.push('\n');
    }

    out
}
