//! Spatial data structures for world generation
//!
//! This module contains the spatial primitives:
//! - Immutable positions and the lattice step geometry
//! - The fixed-size tile grid
//! - The tile kind catalog

/// Fixed-size tile grid with silently bounds-checked writes
pub mod grid;
/// Immutable grid coordinates and directional lattice steps
pub mod position;
/// The fixed catalog of renderable tile kinds
pub mod tiles;

pub use grid::TileGrid;
pub use position::Position;
pub use tiles::Tile;
