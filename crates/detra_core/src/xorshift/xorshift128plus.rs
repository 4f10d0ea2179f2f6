//! 128-bit xorshift+ generator (shift triple 23, 17, 26).

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::error::SeedError;
use crate::source::{RandomSource, Reproducible};

/// Xorshift+ generator with two 64-bit words of state and 64-bit output.
///
/// The output is the wrapping sum of the new second word and the previous
/// second word.
///
/// # Precondition
///
/// The seed pair must not be `(0, 0)`. [`XorShift128Plus::new`] does not check
/// this; use [`XorShift128Plus::try_new`] to have it rejected.
///
/// # Note on `randf`
///
/// [`RandomSource::randf`] divides by `u32::MAX` for every source, so floats
/// from this generator range up to roughly `2^32` rather than `1`.
///
/// # Examples
///
/// ```rust
/// use detra_core::{RandomSource, XorShift128Plus};
///
/// let mut rng = XorShift128Plus::default();
/// assert_eq!(rng.randi(), 0xCCF7_CE02_51E2_1EDB);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct XorShift128Plus {
    s0: u64,
    s1: u64,
}

impl XorShift128Plus {
    /// Seed pair used by [`Default`].
    pub const DEFAULT_SEEDS: (u64, u64) = (0x0123_4567_89AB_CDEF, 0x0FED_CBA9_8765_4321);

    /// Creates a generator from two seed words without validation.
    #[inline]
    pub const fn new(seed1: u64, seed2: u64) -> Self {
        Self {
            s0: seed1,
            s1: seed2,
        }
    }

    /// Creates a generator, rejecting the all-zero seed pair.
    pub fn try_new(seed1: u64, seed2: u64) -> Result<Self, SeedError> {
        if seed1 == 0 && seed2 == 0 {
            return Err(SeedError::ZeroState {
                generator: "xorshift128plus",
            });
        }
        Ok(Self::new(seed1, seed2))
    }

    /// Returns the current state words `(s0, s1)`.
    #[inline]
    pub const fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }
}

impl Default for XorShift128Plus {
    fn default() -> Self {
        let (seed1, seed2) = Self::DEFAULT_SEEDS;
        Self::new(seed1, seed2)
    }
}

impl RandomSource for XorShift128Plus {
    type Output = u64;

    #[inline]
    fn randi(&mut self) -> u64 {
        let mut x = self.s0;
        let y = self.s1;
        self.s0 = y;
        x ^= x << 23;
        self.s1 = x ^ y ^ (x >> 17) ^ (y >> 26);
        self.s1.wrapping_add(y)
    }
}

impl Reproducible for XorShift128Plus {}

impl RngCore for XorShift128Plus {
    /// Upper half of the next 64-bit draw.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.randi() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.randi()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift128Plus {
    type Seed = [u8; 16];

    /// First eight bytes are `s0`, last eight `s1`, both little-endian.
    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        Self::new(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }
}
