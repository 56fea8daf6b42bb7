//! PNG export for finished worlds
//!
//! Each tile becomes a square block of its catalog color. World rows run
//! bottom-up while image rows run top-down, so the grid is flipped
//! vertically on the way out.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::TILE_PIXEL_SIZE;
use crate::io::error::{GenerationError, Result};
use crate::spatial::TileGrid;

/// Export the grid as a PNG image with transparent empty space
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the given path.
pub fn export_grid_as_png(grid: &TileGrid, output_path: &Path) -> Result<()> {
    let scale = TILE_PIXEL_SIZE;
    let width_px = grid.width() as u32 * scale;
    let height_px = grid.height() as u32 * scale;

    let mut img = ImageBuffer::new(width_px, height_px);

    for (x, y, tile) in grid.iter_cells() {
        let pixel = Rgba(tile.color());
        let base_x = x as u32 * scale;
        let base_y = (grid.height() - 1 - y) as u32 * scale;

        for dy in 0..scale {
            for dx in 0..scale {
                img.put_pixel(base_x + dx, base_y + dy, pixel);
            }
        }
    }

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GenerationError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
