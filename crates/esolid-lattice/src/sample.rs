use esolid_core::errors::ErrorInfo;
use esolid_core::SolidError;
use serde::{Deserialize, Serialize};

use crate::lattice::Lattice;

/// Empirical energy-level distribution with counting-statistics error bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyDistribution {
    /// Number of energy levels visited before every cell was accounted for.
    pub levels: usize,
    /// Fraction of cells at each energy level `0..levels`.
    pub probabilities: Vec<f64>,
    /// Poisson error per level: `sqrt(count at level) / total cells`.
    pub errors: Vec<f64>,
}

/// Samples the lattice into an empirical distribution over energy levels.
///
/// Starting at level 0, counts the cells holding exactly that energy and
/// advances one level at a time, stopping as soon as the running total
/// reaches the lattice's cell count. Cells cannot hold negative energy, so
/// the walk terminates after at most `max(cells) + 1` levels.
pub fn sample(lattice: &Lattice) -> Result<EnergyDistribution, SolidError> {
    let total = lattice.count();
    if total == 0 {
        return Err(SolidError::Sample(
            ErrorInfo::new("empty-lattice", "cannot sample a lattice with no cells")
                .with_hint("construct the lattice with a positive cell count"),
        ));
    }

    let mut probabilities = Vec::new();
    let mut errors = Vec::new();
    let mut accounted = 0usize;
    let mut level = 0u32;
    while accounted < total {
        let at_level = lattice.cells().iter().filter(|&&c| c == level).count();
        probabilities.push(at_level as f64 / total as f64);
        errors.push((at_level as f64).sqrt() / total as f64);
        accounted += at_level;
        level += 1;
    }

    Ok(EnergyDistribution {
        levels: probabilities.len(),
        probabilities,
        errors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_distribution_is_a_spike() {
        let lattice = Lattice::new(1, 5).unwrap();
        let dist = sample(&lattice).unwrap();
        assert_eq!(dist.levels, 6);
        assert_eq!(dist.probabilities, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(dist.errors, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn probabilities_account_for_every_cell() {
        let lattice = Lattice::new(400, 10).unwrap();
        let dist = sample(&lattice).unwrap();
        let total: f64 = dist.probabilities.iter().sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(dist.levels, dist.probabilities.len());
        assert_eq!(dist.levels, dist.errors.len());
    }

    #[test]
    fn error_uses_poisson_counting_statistics() {
        // 3 cells at level 0, 1 cell at level 2.
        let low = Lattice::new(3, 0).unwrap();
        let high = Lattice::new(1, 2).unwrap();
        let lattice = low.combine(high);
        let dist = sample(&lattice).unwrap();
        assert_eq!(dist.levels, 3);
        assert!((dist.probabilities[0] - 0.75).abs() < 1e-12);
        assert!((dist.errors[0] - 3.0_f64.sqrt() / 4.0).abs() < 1e-12);
        assert!((dist.errors[1] - 0.0).abs() < 1e-12);
        assert!((dist.errors[2] - 0.25).abs() < 1e-12);
    }
}
