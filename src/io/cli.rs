//! Command-line interface for one-shot world generation

use clap::Parser;
use std::path::PathBuf;

use crate::algorithm::executor::{WorldConfig, WorldGenerator};
use crate::io::configuration::{
    DEFAULT_HEIGHT, DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y, DEFAULT_OUTPUT, DEFAULT_PLUS_SIZE,
    DEFAULT_SEED, DEFAULT_WIDTH,
};
use crate::io::error::Result;
use crate::io::image::export_grid_as_png;
use crate::io::render::render_ascii;
use crate::spatial::Position;

/// Command-line arguments for the world generation tool
#[derive(Parser)]
#[command(name = "plusworld")]
#[command(
    author,
    version,
    about = "Generate a world of interlocking plus-shaped tile regions"
)]
pub struct Cli {
    /// Output PNG path
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in tiles
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Size factor of every plus shape
    #[arg(long, default_value_t = DEFAULT_PLUS_SIZE)]
    pub size: i32,

    /// X coordinate of the lattice seed position
    #[arg(long, default_value_t = DEFAULT_ORIGIN_X)]
    pub origin_x: i32,

    /// Y coordinate of the lattice seed position
    #[arg(long, default_value_t = DEFAULT_ORIGIN_Y)]
    pub origin_y: i32,

    /// Print the world as ASCII to stdout instead of writing a PNG
    #[arg(short, long)]
    pub ascii: bool,

    /// Suppress the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Build a generation config from the parsed arguments
    pub const fn world_config(&self) -> WorldConfig {
        WorldConfig {
            width: self.width,
            height: self.height,
            seed: self.seed,
            origin: Position::new(self.origin_x, self.origin_y),
            plus_size: self.size,
        }
    }
}

/// Generate a world from the CLI arguments and render it
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the PNG cannot be
/// written.
// Allow prints for user-facing output
#[allow(clippy::print_stdout, clippy::print_stderr)]
pub fn run(cli: &Cli) -> Result<()> {
    let mut generator = WorldGenerator::new(cli.world_config())?;
    let grid = generator.generate();

    if cli.ascii {
        print!("{}", render_ascii(&grid));
    } else {
        export_grid_as_png(&grid, &cli.output)?;
    }

    if !cli.quiet {
        eprintln!(
            "Generated {}x{} world (seed {}, {} tiles placed){}",
            grid.width(),
            grid.height(),
            cli.seed,
            grid.decorative_count(),
            if cli.ascii {
                String::new()
            } else {
                format!(" -> {}", cli.output.display())
            }
        );
    }

    Ok(())
}
