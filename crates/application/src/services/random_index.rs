use ring::rand::{SecureRandom, SystemRandom};
use tracing::warn;

/// Uniform-ish random index in `0..len`, drawn from the system CSPRNG.
///
/// Falls back to 0 if the random source is unavailable. Returns 0 for an
/// empty range.
pub fn random_start_index(len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let rng = SystemRandom::new();
    let mut buf = [0u8; 8];
    match rng.fill(&mut buf) {
        Ok(()) => (u64::from_le_bytes(buf) % len as u64) as usize,
        Err(_) => {
            warn!("System random source unavailable, starting quorum walk at 0");
            0
        }
    }
}
