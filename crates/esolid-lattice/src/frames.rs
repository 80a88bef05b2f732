use esolid_core::RngHandle;
use serde::{Deserialize, Serialize};

use crate::config::CadencePolicy;
use crate::determinism;
use crate::lattice::Lattice;

/// One rendered frame of the simulation: the lattice state after the
/// frame's exchanges have been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based frame index.
    pub index: usize,
    /// Number of exchange iterations applied for this frame.
    pub iterations: usize,
    /// Snapshot of the per-cell energy quanta after the exchanges.
    pub cells: Vec<u32>,
}

impl Frame {
    /// Reshapes the flat cell snapshot into a square row-major grid when the
    /// cell count is a perfect square, for image-style rendering.
    pub fn grid(&self) -> Option<Vec<&[u32]>> {
        let side = (self.cells.len() as f64).sqrt() as usize;
        if side * side != self.cells.len() {
            return None;
        }
        Some(self.cells.chunks(side).collect())
    }
}

/// Lazy, infinite, non-restartable stream of simulation frames.
///
/// Owns the lattice outright; each `next()` advances the simulation by the
/// cadence policy's iteration count for the current frame and yields the
/// resulting snapshot. Each frame's exchanges draw from a seed derived from
/// `(master seed, frame index)`, so replaying any prefix reproduces the same
/// frames. The driver owns the cadence policy; the stream never terminates
/// on its own.
#[derive(Debug)]
pub struct FrameStream {
    lattice: Lattice,
    cadence: CadencePolicy,
    master_seed: u64,
    next_frame: usize,
}

impl FrameStream {
    /// Creates a stream over the given lattice, cadence policy, and seed.
    pub fn new(lattice: Lattice, cadence: CadencePolicy, master_seed: u64) -> Self {
        Self {
            lattice,
            cadence,
            master_seed,
            next_frame: 0,
        }
    }

    /// Consumes the stream, returning the lattice in its current state.
    pub fn into_lattice(self) -> Lattice {
        self.lattice
    }
}

impl Iterator for FrameStream {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let index = self.next_frame;
        self.next_frame += 1;
        let iterations = self.cadence.iterations_for(index);
        let mut rng = RngHandle::from_seed(determinism::frame_seed(self.master_seed, index));
        self.lattice.exchange(iterations, &mut rng);
        Some(Frame {
            index,
            iterations,
            cells: self.lattice.cells().to_vec(),
        })
    }
}
