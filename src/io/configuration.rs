//! Generation constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 26869;

/// Default grid width in columns
pub const DEFAULT_WIDTH: usize = 50;

/// Default grid height in rows
pub const DEFAULT_HEIGHT: usize = 50;

/// Default x coordinate of the lattice seed position
pub const DEFAULT_ORIGIN_X: i32 = 20;

/// Default y coordinate of the lattice seed position
pub const DEFAULT_ORIGIN_Y: i32 = 30;

/// Default size factor for every plus shape
pub const DEFAULT_PLUS_SIZE: i32 = 2;

/// Smallest size factor that produces a drawable plus
///
/// Anything below this is silently skipped rather than rejected.
pub const MIN_DRAWABLE_PLUS_SIZE: i32 = 2;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Output settings
/// Side length in pixels of one tile in the exported PNG
pub const TILE_PIXEL_SIZE: u32 = 12;

/// Default output filename
pub const DEFAULT_OUTPUT: &str = "plusworld.png";
