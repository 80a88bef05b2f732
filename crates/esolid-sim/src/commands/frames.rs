use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use esolid_lattice::{FrameStream, Lattice};

use super::load_config;

#[derive(Args, Debug)]
pub struct FramesArgs {
    /// YAML configuration describing the lattice and cadence.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed override.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Number of frames to emit.
    #[arg(long, default_value_t = 100)]
    pub frames: usize,
    /// File to write JSON-lines frames to (stdout when omitted).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn execute(args: &FramesArgs) -> Result<(), Box<dyn Error>> {
    let config = load_config(args.config.as_deref(), args.seed, None)?;
    let lattice = Lattice::new(config.cells, config.initial_quantum)?;
    let stream = FrameStream::new(lattice, config.cadence.clone(), config.seed);

    let mut writer: Box<dyn Write> = match &args.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    for frame in stream.take(args.frames) {
        writeln!(writer, "{}", serde_json::to_string(&frame)?)?;
    }
    writer.flush()?;
    Ok(())
}
