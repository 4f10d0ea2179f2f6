//! Operating system entropy source.

use rand::distributions::{Distribution, Uniform};
use rand::rngs::OsRng;

use crate::source::RandomSource;

/// Source backed by the operating system's entropy pool.
///
/// Samples a uniform distribution over the full `u32` range. The sequence is
/// not reproducible and there is no seed. Each draw queries the OS, so any
/// blocking behaviour of the host entropy source applies.
///
/// # Examples
///
/// ```rust
/// use detra_core::{RandomSource, SystemEntropy};
///
/// let mut rng = SystemEntropy::new();
/// let _value: u32 = rng.randi();
/// assert!(rng.randf() <= 1.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SystemEntropy {
    rng: OsRng,
    dist: Uniform<u32>,
}

impl SystemEntropy {
    /// Creates a source sampling `[0, u32::MAX]` from the OS.
    pub fn new() -> Self {
        tracing::trace!("constructing system entropy source");
        Self {
            rng: OsRng,
            dist: Uniform::new_inclusive(0, u32::MAX),
        }
    }
}

impl Default for SystemEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemEntropy {
    type Output = u32;

    #[inline]
    fn randi(&mut self) -> u32 {
        self.dist.sample(&mut self.rng)
    }
}
