//! langcol binary entry point

use clap::Parser;
use langcol_cli::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
