//! World generation orchestration
//!
//! Owns the configuration and the seeded tile selector, allocates the grid,
//! and runs the one-shot lattice expansion. Generation itself is infallible
//! by design; only configuration validation can fail.

use crate::algorithm::expansion::expand_lattice;
use crate::algorithm::selection::TileSelector;
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y, DEFAULT_PLUS_SIZE, DEFAULT_SEED,
    DEFAULT_WIDTH, MAX_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Position, TileGrid};

/// Parameters for one generation run
#[derive(Clone, Copy, Debug)]
pub struct WorldConfig {
    /// Grid width in columns
    pub width: usize,
    /// Grid height in rows
    pub height: usize,
    /// Seed for the tile selector
    pub seed: u64,
    /// Seed position of the lattice
    pub origin: Position,
    /// Size factor of every plus shape
    pub plus_size: i32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: DEFAULT_SEED,
            origin: Position::new(DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y),
            plus_size: DEFAULT_PLUS_SIZE,
        }
    }
}

/// One-shot generator for a plus-lattice world
#[derive(Debug)]
pub struct WorldGenerator {
    config: WorldConfig,
    selector: TileSelector,
}

impl WorldGenerator {
    /// Create a generator after validating the configuration
    ///
    /// The origin and plus size are unrestricted: off-grid origins produce
    /// clipped lattices and undersized pluses are silent no-ops.
    ///
    /// # Errors
    ///
    /// Returns an error if either grid dimension is zero or exceeds
    /// [`MAX_GRID_DIMENSION`].
    pub fn new(config: WorldConfig) -> Result<Self> {
        if config.width == 0 || config.width > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "width",
                &config.width,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
        if config.height == 0 || config.height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "height",
                &config.height,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }

        Ok(Self {
            selector: TileSelector::new(config.seed),
            config,
        })
    }

    /// The validated configuration
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Generate the world and hand the finished grid to the caller
    ///
    /// Allocates a `Nothing`-filled grid, then expands the plus lattice from
    /// the configured origin. The first tile comes from the same seeded
    /// selector as every later one, so the whole grid is a pure function of
    /// the configuration.
    pub fn generate(&mut self) -> TileGrid {
        let mut grid = TileGrid::new(self.config.width, self.config.height);
        let first_tile = self.selector.next_tile();
        expand_lattice(
            &mut grid,
            &mut self.selector,
            self.config.origin,
            first_tile,
            self.config.plus_size,
        );
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::{WorldConfig, WorldGenerator};
    use crate::io::error::GenerationError;

    #[test]
    fn zero_width_is_rejected() {
        let config = WorldConfig {
            width: 0,
            ..WorldConfig::default()
        };
        let err = WorldGenerator::new(config).err();
        assert!(matches!(
            err,
            Some(GenerationError::InvalidParameter { parameter: "width", .. })
        ));
    }

    #[test]
    fn oversized_height_is_rejected() {
        let config = WorldConfig {
            height: 1_000_000,
            ..WorldConfig::default()
        };
        assert!(WorldGenerator::new(config).is_err());
    }

    #[test]
    fn default_config_generates_a_populated_grid() {
        let mut generator =
            WorldGenerator::new(WorldConfig::default()).unwrap_or_else(|_| unreachable!());
        let grid = generator.generate();
        assert_eq!(grid.width(), 50);
        assert_eq!(grid.height(), 50);
        assert!(grid.decorative_count() > 0);
    }
}
