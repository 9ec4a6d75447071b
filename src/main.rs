mod cli;
mod codegen;
mod display;
mod error;
mod extract;
mod logging;
mod models;
mod pipeline;
mod testgen;
mod writer;

#[cfg(test)]
mod fixtures;

use clap::Parser;
use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    cli::run(cli);
}
