use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use esolid_core::errors::ErrorInfo;
use esolid_core::{RngHandle, SolidError};
use serde::{Deserialize, Serialize};

use crate::boltzmann;
use crate::config::RunConfig;
use crate::determinism;
use crate::lattice::Lattice;
use crate::sample::{self, EnergyDistribution};

/// Summary returned to callers after a thermalize-and-sample run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Master seed the run was executed with.
    pub master_seed: u64,
    /// Temperature implied by the configured mean occupation.
    pub kt: f64,
    /// Total lattice energy (conserved across the whole run).
    pub total_energy: u64,
    /// Number of thermalization sweeps executed.
    pub sweeps: usize,
    /// Exchange iterations performed per sweep.
    pub iterations_per_sweep: usize,
    /// Empirical energy distribution after thermalization.
    pub distribution: EnergyDistribution,
    /// Analytic Boltzmann weights scaled to the empirical peak, one per level.
    pub predicted: Vec<f64>,
    /// Distribution table written during the run.
    pub distribution_path: Option<PathBuf>,
    /// Manifest path, if emitted.
    pub manifest_path: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct RunManifest<'a> {
    config: &'a RunConfig,
    master_seed: u64,
    energy_before: u64,
    energy_after: u64,
    levels: usize,
    distribution_file: Option<PathBuf>,
}

/// Runs the simulation: build the lattice, thermalize it sweep by sweep,
/// sample the energy distribution, and emit artefacts when an output
/// directory is configured.
///
/// Thermalization performs `exchanges_per_cell` sweeps of `cells` exchanges
/// each (the reference budget is 100 exchanges per oscillator). Each sweep
/// draws from its own substream-derived seed so interrupted runs can be
/// replayed sweep for sweep.
pub fn run(config: &RunConfig) -> Result<RunSummary, SolidError> {
    config.validate()?;

    let mut lattice = Lattice::new(config.cells, config.initial_quantum)?;
    let energy_before = lattice.total_energy();

    let sweeps = config.exchanges_per_cell;
    let iterations_per_sweep = config.cells;
    for sweep in 0..sweeps {
        let mut rng = RngHandle::from_seed(determinism::sweep_seed(config.seed, sweep));
        lattice.exchange(iterations_per_sweep, &mut rng);
    }

    let energy_after = lattice.total_energy();
    debug_assert_eq!(energy_before, energy_after);

    let distribution = sample::sample(&lattice)?;
    let kt = boltzmann::temperature_for_mean(config.initial_quantum);
    let peak = distribution
        .probabilities
        .iter()
        .cloned()
        .fold(0.0f64, f64::max);
    let predicted = boltzmann::predicted_weights(kt, distribution.levels, peak);

    let (distribution_path, manifest_path) = write_artefacts(
        config,
        energy_before,
        energy_after,
        &distribution,
        &predicted,
    )?;

    Ok(RunSummary {
        master_seed: config.seed,
        kt,
        total_energy: energy_after,
        sweeps,
        iterations_per_sweep,
        distribution,
        predicted,
        distribution_path,
        manifest_path,
    })
}

fn write_artefacts(
    config: &RunConfig,
    energy_before: u64,
    energy_after: u64,
    distribution: &EnergyDistribution,
    predicted: &[f64],
) -> Result<(Option<PathBuf>, Option<PathBuf>), SolidError> {
    let run_dir = match &config.output.run_directory {
        Some(dir) => dir.clone(),
        None => return Ok((None, None)),
    };
    std::fs::create_dir_all(&run_dir).map_err(|err| io_error("run-dir-create", &run_dir, err))?;

    let distribution_path = run_dir.join(&config.output.distribution_file);
    write_distribution_csv(&distribution_path, distribution, predicted)?;

    let manifest_path = run_dir.join(&config.output.manifest_file);
    let manifest = RunManifest {
        config,
        master_seed: config.seed,
        energy_before,
        energy_after,
        levels: distribution.levels,
        distribution_file: relative_to(&distribution_path, &run_dir),
    };
    let json = serde_json::to_string_pretty(&manifest)
        .map_err(|err| SolidError::Io(ErrorInfo::new("manifest-encode", err.to_string())))?;
    std::fs::write(&manifest_path, json)
        .map_err(|err| io_error("manifest-write", &manifest_path, err))?;

    Ok((Some(distribution_path), Some(manifest_path)))
}

fn write_distribution_csv(
    path: &Path,
    distribution: &EnergyDistribution,
    predicted: &[f64],
) -> Result<(), SolidError> {
    let mut file = File::create(path).map_err(|err| io_error("distribution-create", path, err))?;
    writeln!(file, "level,probability,error,predicted")
        .map_err(|err| io_error("distribution-write", path, err))?;
    for level in 0..distribution.levels {
        writeln!(
            file,
            "{},{:.6},{:.6},{:.6}",
            level,
            distribution.probabilities[level],
            distribution.errors[level],
            predicted.get(level).copied().unwrap_or(0.0)
        )
        .map_err(|err| io_error("distribution-write", path, err))?;
    }
    Ok(())
}

fn relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|rel| rel.to_path_buf())
}

fn io_error(code: &str, path: &Path, err: std::io::Error) -> SolidError {
    SolidError::Io(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}
