#![deny(missing_docs)]
#![doc = "Shared infrastructure for the Einstein-solid simulator: the structured error surface and the deterministic RNG handle every sibling crate draws randomness from."]

pub mod errors;
pub mod rng;

pub use errors::{ErrorInfo, SolidError};
pub use rng::{derive_substream_seed, RngHandle};

// Re-export RngCore for convenience
pub use rand::RngCore;
