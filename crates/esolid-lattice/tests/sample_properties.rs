use esolid_core::RngHandle;
use esolid_lattice::{sample, Lattice};
use proptest::prelude::*;

#[test]
fn equilibrated_lattice_peaks_at_the_ground_level() {
    // After 100 exchanges per cell the distribution should be close to the
    // Boltzmann shape, whose mode is level 0. Mean occupation 1 keeps the
    // level-0 and level-1 populations far enough apart that the mode is
    // stable against sampling noise.
    let mut lattice = Lattice::new(400, 1).unwrap();
    let mut rng = RngHandle::from_seed(2024);
    lattice.exchange(100 * lattice.count(), &mut rng);

    let dist = sample(&lattice).unwrap();
    let peak = dist
        .probabilities
        .iter()
        .cloned()
        .fold(0.0f64, f64::max);
    assert_eq!(dist.probabilities[0], peak);
}

#[test]
fn levels_never_exceed_max_cell_energy_plus_one() {
    let mut lattice = Lattice::new(50, 4).unwrap();
    let mut rng = RngHandle::from_seed(17);
    lattice.exchange(1000, &mut rng);
    let dist = sample(&lattice).unwrap();
    assert!(dist.levels <= lattice.max_level() as usize + 1);
}

proptest! {
    #[test]
    fn every_cell_is_accounted_for_exactly_once(
        seed in any::<u64>(),
        count in 1usize..64,
        quantum in 0u32..10,
        iterations in 0usize..500,
    ) {
        let mut lattice = Lattice::new(count, quantum).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        lattice.exchange(iterations, &mut rng);

        let dist = sample(&lattice).unwrap();
        let accounted: f64 = dist.probabilities.iter().sum::<f64>() * count as f64;
        prop_assert!((accounted - count as f64).abs() < 1e-9);
    }

    #[test]
    fn errors_match_the_counting_statistics_formula(
        seed in any::<u64>(),
        count in 1usize..64,
        quantum in 0u32..10,
    ) {
        let mut lattice = Lattice::new(count, quantum).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        lattice.exchange(count * 5, &mut rng);

        let dist = sample(&lattice).unwrap();
        for level in 0..dist.levels {
            let raw = dist.probabilities[level] * count as f64;
            let expected = raw.round().sqrt() / count as f64;
            prop_assert!((dist.errors[level] - expected).abs() < 1e-9);
        }
    }
}
