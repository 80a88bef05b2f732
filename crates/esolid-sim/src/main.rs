use std::error::Error;

use clap::{Parser, Subcommand};
use commands::frames::{self, FramesArgs};
use commands::run::{self, RunArgs};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "esolid-sim", about = "Einstein-solid exchange simulator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Thermalize a lattice, sample its energy distribution, and emit artefacts.
    Run(RunArgs),
    /// Stream lattice snapshots frame by frame for an external renderer.
    Frames(FramesArgs),
}

fn main() {
    let cli = Cli::parse();
    let outcome: Result<(), Box<dyn Error>> = match &cli.command {
        Command::Run(args) => run::execute(args),
        Command::Frames(args) => frames::execute(args),
    };
    if let Err(err) = outcome {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
