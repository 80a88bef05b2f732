use esolid_core::errors::ErrorInfo;
use esolid_core::{RngHandle, SolidError};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// A fixed-size set of quantum oscillators, each holding a non-negative
/// number of energy quanta.
///
/// Total energy is conserved across every [`Lattice::exchange`] call: quanta
/// move between cells, they are never created or destroyed. Cell order is
/// arbitrary but fixed once assigned; it is used only for indexed access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lattice {
    cells: Vec<u32>,
}

impl Lattice {
    /// Creates a lattice of `count` cells, each holding `initial_quantum`
    /// energy quanta.
    ///
    /// Rejects a zero cell count: every later operation indexes into the
    /// cell sequence, so an empty lattice has no meaningful behaviour.
    pub fn new(count: usize, initial_quantum: u32) -> Result<Self, SolidError> {
        if count == 0 {
            return Err(SolidError::Lattice(
                ErrorInfo::new("empty-lattice", "cell count must be positive")
                    .with_hint("construct with at least one oscillator"),
            ));
        }
        Ok(Self {
            cells: vec![initial_quantum; count],
        })
    }

    /// Absorbs `donor` into this lattice, appending its cells and summing
    /// the counts.
    ///
    /// Taking the donor by value transfers ownership: the donor cannot be
    /// used independently afterwards, and combining a lattice with itself
    /// is unrepresentable.
    pub fn combine(mut self, donor: Lattice) -> Lattice {
        self.cells.extend(donor.cells);
        self
    }

    /// Performs `iterations` random single-quantum transfers.
    ///
    /// Each iteration draws a source and a destination index independently
    /// and uniformly over the cells; when the source cell is empty, only the
    /// source index is redrawn until a non-empty cell is found. The
    /// destination keeps its original draw and may equal the source, in
    /// which case the transfer is a no-op. A zero-valued cell is therefore
    /// never decremented and no cell can go negative.
    ///
    /// A lattice whose total energy is zero has no quanta to move; every
    /// iteration is then a no-op rather than an endless redraw.
    pub fn exchange(&mut self, iterations: usize, rng: &mut RngHandle) {
        if self.total_energy() == 0 {
            return;
        }
        for _ in 0..iterations {
            let mut source = self.draw_index(rng);
            let destination = self.draw_index(rng);
            while self.cells[source] == 0 {
                source = self.draw_index(rng);
            }
            self.cells[source] -= 1;
            self.cells[destination] += 1;
        }
    }

    fn draw_index(&self, rng: &mut RngHandle) -> usize {
        (rng.next_u64() as usize) % self.cells.len()
    }

    /// Returns the number of oscillator cells.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Returns an immutable view over the per-cell energy quanta.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Returns the total energy held by the lattice.
    pub fn total_energy(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    /// Returns the highest energy level currently occupied by any cell.
    pub fn max_level(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
