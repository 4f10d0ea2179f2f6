//! # Random Source Capability Set
//!
//! This module defines [`RandomSource`], the single interface shared by every
//! generator in the crate, together with the derived-quantity logic that is
//! written once here and inherited by all sources.
//!
//! ## Derived Quantities
//!
//! - [`RandomSource::randf`]: one `randi()` draw divided by [`RANDF_DIVISOR`]
//! - [`RandomSource::randb`]: the low bit of one `randi()` draw
//!
//! Each derived call consumes exactly one draw, so it advances the source in
//! the same way a direct `randi()` call would.
//!
//! ## Marker Traits
//!
//! - [`Reproducible`]: the sequence is fully determined by the seed
//! - [`ProcessGlobal`]: the stream belongs to the process, not the instance

use num_traits::{AsPrimitive, One, PrimInt, Unsigned};

/// Divisor applied by [`RandomSource::randf`] for every source.
///
/// Equal to `u32::MAX` converted to `f32`. The 64-bit [`XorShift128Plus`]
/// uses the same divisor, so its floats are not normalised to `[0, 1]`.
///
/// [`XorShift128Plus`]: crate::XorShift128Plus
pub const RANDF_DIVISOR: f32 = u32::MAX as f32;

/// Capability set shared by all random sources.
///
/// Implementors provide [`randi`](Self::randi); everything else is derived
/// from it and must not be overridden per source.
///
/// # Examples
///
/// ```rust
/// use detra_core::{RandomSource, XorShift32};
///
/// let mut a = XorShift32::new(7);
/// let mut b = XorShift32::new(7);
///
/// let coin = a.randb();
/// assert_eq!(coin, b.randi() % 2 == 1);
/// ```
pub trait RandomSource {
    /// Raw integer width produced by this source (`u32` or `u64`).
    ///
    /// Callers must not assume one width across sources.
    type Output: PrimInt + Unsigned + AsPrimitive<f32>;

    /// Returns the next integer and advances the source.
    fn randi(&mut self) -> Self::Output;

    /// Returns `randi() / u32::MAX` as an `f32`.
    ///
    /// For 32-bit sources the result lies in `[0, 1]`; `1.0` is reached only
    /// when the draw rounds to `u32::MAX`.
    #[inline]
    fn randf(&mut self) -> f32 {
        self.randi().as_() / RANDF_DIVISOR
    }

    /// Returns `true` when the low bit of the next draw is set.
    #[inline]
    fn randb(&mut self) -> bool {
        let one = <Self::Output as One>::one();
        (self.randi() & one) == one
    }

    /// Fills the buffer with consecutive `randi()` draws.
    ///
    /// Empty buffers are a no-op and do not advance the source.
    #[inline]
    fn fill_randi(&mut self, buffer: &mut [Self::Output]) {
        for value in buffer.iter_mut() {
            *value = self.randi();
        }
    }

    /// Fills the buffer with consecutive `randf()` values.
    #[inline]
    fn fill_randf(&mut self, buffer: &mut [f32]) {
        for value in buffer.iter_mut() {
            *value = self.randf();
        }
    }

    /// Fills the buffer with consecutive `randb()` values.
    #[inline]
    fn fill_randb(&mut self, buffer: &mut [bool]) {
        for value in buffer.iter_mut() {
            *value = self.randb();
        }
    }
}

/// Sources whose output sequence is fully determined by their seed.
///
/// For [`LegacyLibraryGenerator`](crate::LegacyLibraryGenerator) this only
/// holds while it is the sole user of the process-wide stream.
pub trait Reproducible: RandomSource {}

/// Sources whose stream is owned by the process rather than by the instance.
///
/// Every instance of such a source reads from, and reseeds, the same shared
/// stream: constructing a new instance restarts the sequence for all live
/// instances. At most one logically independent stream exists per process.
pub trait ProcessGlobal: RandomSource {}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    type Output = R::Output;

    #[inline]
    fn randi(&mut self) -> Self::Output {
        (**self).randi()
    }
}

#[cfg(test)]
mod tests;
