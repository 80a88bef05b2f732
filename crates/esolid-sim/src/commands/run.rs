use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use esolid_lattice::runner;

use super::load_config;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// YAML configuration describing the run (defaults apply when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed override.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Output directory for run artefacts.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed, args.out.as_ref())?;
    let summary = runner::run(&config)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
