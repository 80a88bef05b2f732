//! Analytic Boltzmann prediction for the equilibrium energy distribution.

/// Returns the temperature `kT` of an Einstein solid whose mean occupation
/// is `initial_quantum` quanta per oscillator: `kT = 1 / ln(1 + 1/q)`.
///
/// A zero mean occupation corresponds to the ground state; the returned
/// temperature is then 0.
pub fn temperature_for_mean(initial_quantum: u32) -> f64 {
    if initial_quantum == 0 {
        return 0.0;
    }
    1.0 / (1.0 + 1.0 / initial_quantum as f64).ln()
}

/// Returns the unnormalised Boltzmann weights `exp(-E/kT)` for energy levels
/// `0..levels`, scaled so the weight at level 0 equals `peak`.
///
/// The empirical distribution peaks at level 0 once equilibrated, so scaling
/// by the observed maximum probability lines the analytic curve up with the
/// sampled points without fitting.
pub fn predicted_weights(kt: f64, levels: usize, peak: f64) -> Vec<f64> {
    if kt <= 0.0 {
        // Ground state: all probability mass at level 0.
        let mut weights = vec![0.0; levels];
        if let Some(first) = weights.first_mut() {
            *first = peak;
        }
        return weights;
    }
    (0..levels)
        .map(|level| (-(level as f64) / kt).exp() * peak)
        .collect()
}
