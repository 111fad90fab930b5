use clap::Parser;
use miette::Result;
use swatch::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)?;
    Ok(())
}
