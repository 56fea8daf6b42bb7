//! Seeded random tile selection
//!
//! Every lattice step that needs a tile for the *next* shape draws it from a
//! single seeded generator owned by the selector, threaded explicitly through
//! the expansion instead of living in a process-wide singleton. A fixed seed
//! therefore makes the whole generation reproducible.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::Tile;
use crate::spatial::tiles::DECORATIVE_TILES;

/// Deterministic selector over the six decorative tile kinds
#[derive(Debug)]
pub struct TileSelector {
    rng: StdRng,
}

impl TileSelector {
    /// Create a selector with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw the next decorative tile uniformly
    ///
    /// `Nothing` is never drawn; empty space only ever comes from the grid's
    /// initial fill. The draw indexes [`DECORATIVE_TILES`], so the catalog
    /// order lives in one place.
    pub fn next_tile(&mut self) -> Tile {
        let index = self.rng.random_range(0..DECORATIVE_TILES.len());
        DECORATIVE_TILES.get(index).copied().unwrap_or(Tile::Floor)
    }
}
