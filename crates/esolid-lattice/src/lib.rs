#![deny(missing_docs)]

//! Einstein-solid exchange simulation: a lattice of quantum oscillators
//! trading single energy quanta until the empirical energy distribution
//! converges to the Boltzmann prediction.

/// Analytic Boltzmann prediction helpers.
pub mod boltzmann;
/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Lazy frame stream for visualization drivers.
pub mod frames;
/// The oscillator lattice and its exchange kernel.
pub mod lattice;
/// Run orchestration and artefact output.
pub mod runner;
/// Empirical energy-distribution sampler.
pub mod sample;

pub use boltzmann::{predicted_weights, temperature_for_mean};
pub use config::{CadencePolicy, OutputConfig, RunConfig};
pub use frames::{Frame, FrameStream};
pub use lattice::Lattice;
pub use runner::{run, RunSummary};
pub use sample::{sample, EnergyDistribution};
