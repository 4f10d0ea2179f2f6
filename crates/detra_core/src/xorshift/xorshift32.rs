//! 32-bit xorshift generator (shift triple 13, 17, 5).

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::error::SeedError;
use crate::source::{RandomSource, Reproducible};

/// Marsaglia's 32-bit xorshift generator.
///
/// One word of state, period `2^32 - 1` for any nonzero seed.
///
/// # Precondition
///
/// The seed must be nonzero. [`XorShift32::new`] does not check this; a zero
/// seed yields zeros forever. Use [`XorShift32::try_new`] to have it rejected.
///
/// # Examples
///
/// ```rust
/// use detra_core::{RandomSource, XorShift32};
///
/// let mut rng = XorShift32::default();
/// assert_eq!(rng.randi(), 723_471_715);
/// assert_eq!(rng.randi(), 2_497_366_906);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Seed used by [`Default`].
    pub const DEFAULT_SEED: u32 = 2_463_534_242;

    /// Creates a generator from `seed` without validation.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Creates a generator, rejecting the zero seed.
    pub fn try_new(seed: u32) -> Result<Self, SeedError> {
        if seed == 0 {
            return Err(SeedError::ZeroState {
                generator: "xorshift32",
            });
        }
        Ok(Self::new(seed))
    }

    /// Returns the current state word (the last output, or the seed).
    #[inline]
    pub const fn state(&self) -> u32 {
        self.state
    }
}

impl Default for XorShift32 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl RandomSource for XorShift32 {
    type Output = u32;

    #[inline]
    fn randi(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Reproducible for XorShift32 {}

impl RngCore for XorShift32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.randi()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    /// Little-endian seed word. An all-zero seed is accepted unchanged.
    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
