//! CLI entry point for the plus-lattice world generator

use clap::Parser;
use plusworld::io::cli::{Cli, run};

fn main() -> plusworld::Result<()> {
    let cli = Cli::parse();
    run(&cli)
}
