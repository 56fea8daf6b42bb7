//! Procedural generation of a tile world built from interlocking plus shapes
//!
//! A recursive placement algorithm draws a single plus shape of a given size
//! and origin, then tiles the plane with pluses in four directions until the
//! candidate positions leave a bounded region. Empty space keeps the
//! `Nothing` tile, and the finished grid is handed to a renderer (PNG or
//! ASCII). Generation is seeded and fully deterministic.

#![forbid(unsafe_code)]

/// Plus drawing, lattice expansion, tile selection, and orchestration
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Positions, the tile grid, and the tile kind catalog
pub mod spatial;

pub use io::error::{GenerationError, Result};
