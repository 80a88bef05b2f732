use std::path::PathBuf;

use esolid_core::errors::ErrorInfo;
use esolid_core::SolidError;
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of oscillator cells in the lattice.
    #[serde(default = "default_cells")]
    pub cells: usize,
    /// Energy quanta assigned to every cell at construction.
    #[serde(default = "default_initial_quantum")]
    pub initial_quantum: u32,
    /// Thermalization budget: total exchanges = `exchanges_per_cell * cells`.
    #[serde(default = "default_exchanges_per_cell")]
    pub exchanges_per_cell: usize,
    /// Master seed for all random draws.
    #[serde(default = "default_master_seed")]
    pub seed: u64,
    /// Iteration schedule for frame-driven runs.
    #[serde(default)]
    pub cadence: CadencePolicy,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_cells() -> usize {
    400
}

fn default_initial_quantum() -> u32 {
    10
}

fn default_exchanges_per_cell() -> usize {
    100
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cells: default_cells(),
            initial_quantum: default_initial_quantum(),
            exchanges_per_cell: default_exchanges_per_cell(),
            seed: default_master_seed(),
            cadence: CadencePolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Checks the configuration for precondition violations.
    pub fn validate(&self) -> Result<(), SolidError> {
        if self.cells == 0 {
            return Err(SolidError::Config(
                ErrorInfo::new("zero-cells", "lattice must have at least one cell")
                    .with_context("cells", self.cells.to_string()),
            ));
        }
        if self.exchanges_per_cell == 0 {
            return Err(SolidError::Config(
                ErrorInfo::new("zero-budget", "thermalization budget must be positive")
                    .with_context("exchanges_per_cell", self.exchanges_per_cell.to_string())
                    .with_hint("the reference run uses 100 exchanges per cell"),
            ));
        }
        self.cadence.validate()
    }

    /// Loads a configuration from a YAML document.
    pub fn from_yaml(document: &str) -> Result<Self, SolidError> {
        let config: RunConfig = serde_yaml::from_str(document).map_err(|err| {
            SolidError::Config(ErrorInfo::new("config-parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Supported per-frame iteration schedules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CadencePolicy {
    /// Few exchanges per early frame, more once the lattice has loosened up.
    Stepped {
        /// Exchanges per frame before the switch point.
        #[serde(default = "default_early_iterations")]
        early: usize,
        /// Exchanges per frame from the switch point onward.
        #[serde(default = "default_late_iterations")]
        late: usize,
        /// Frame index at which the schedule switches.
        #[serde(default = "default_switch_frame")]
        switch: usize,
    },
    /// The same number of exchanges for every frame.
    Uniform {
        /// Exchanges per frame.
        iterations: usize,
    },
}

fn default_early_iterations() -> usize {
    20
}

fn default_late_iterations() -> usize {
    200
}

fn default_switch_frame() -> usize {
    100
}

impl Default for CadencePolicy {
    fn default() -> Self {
        CadencePolicy::Stepped {
            early: default_early_iterations(),
            late: default_late_iterations(),
            switch: default_switch_frame(),
        }
    }
}

impl CadencePolicy {
    /// Returns the number of exchange iterations for the given frame index.
    pub fn iterations_for(&self, frame: usize) -> usize {
        match self {
            CadencePolicy::Stepped { early, late, switch } => {
                if frame < *switch {
                    *early
                } else {
                    *late
                }
            }
            CadencePolicy::Uniform { iterations } => *iterations,
        }
    }

    fn validate(&self) -> Result<(), SolidError> {
        let degenerate = match self {
            CadencePolicy::Stepped { early, late, .. } => *early == 0 && *late == 0,
            CadencePolicy::Uniform { iterations } => *iterations == 0,
        };
        if degenerate {
            return Err(SolidError::Config(ErrorInfo::new(
                "zero-cadence",
                "cadence policy never performs an exchange",
            )));
        }
        Ok(())
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. Created if it does not exist.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Distribution table filename relative to `run_directory`.
    #[serde(default = "default_distribution_filename")]
    pub distribution_file: PathBuf,
    /// Manifest filename relative to `run_directory`.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_distribution_filename() -> PathBuf {
    PathBuf::from("distribution.csv")
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            distribution_file: default_distribution_filename(),
            manifest_file: default_manifest_filename(),
        }
    }
}
