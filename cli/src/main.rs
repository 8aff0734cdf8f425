//! Entry-point for the `pickfill` binary.
use clap::Parser;
use pickfill_cli::Cli;
use pickfill_cli::run_main;

fn main() -> anyhow::Result<()> {
    run_main(Cli::parse())
}
