use esolid_core::derive_substream_seed;

/// Derives the deterministic seed for a thermalization sweep.
pub fn sweep_seed(master_seed: u64, sweep: usize) -> u64 {
    derive_substream_seed(master_seed, sweep as u64)
}

/// Derives the deterministic seed for a frame of the animation stream.
///
/// Frame seeds live in a separate substream domain from sweep seeds so a
/// frame-driven run and a batch run with the same master seed do not share
/// draws.
pub fn frame_seed(master_seed: u64, frame: usize) -> u64 {
    derive_substream_seed(master_seed ^ 0xF0F0_F0F0_F0F0_F0F0, frame as u64)
}
