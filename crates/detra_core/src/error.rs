//! Error types for source construction.
//!
//! Drawing from a source never fails; the only errors in this crate come from
//! the checked constructors and from runtime source selection.

use thiserror::Error;

use crate::any::SourceKind;

/// Seed rejected by a checked constructor.
///
/// # Examples
///
/// ```
/// use detra_core::{SeedError, XorShift32};
///
/// let err = XorShift32::try_new(0).unwrap_err();
/// assert_eq!(err, SeedError::ZeroState { generator: "xorshift32" });
/// assert_eq!(
///     err.to_string(),
///     "xorshift32 seed must not be all zero (zero is a fixed point of the update)"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeedError {
    /// All state words would be zero, which the xorshift update never leaves.
    #[error("{generator} seed must not be all zero (zero is a fixed point of the update)")]
    ZeroState {
        /// Name of the rejecting source.
        generator: &'static str,
    },

    /// The seed does not fit in the source's state word.
    #[error("{generator} seed must fit in {bits} bits")]
    OutOfRange {
        /// Name of the rejecting source.
        generator: &'static str,
        /// Width of the seed the source accepts.
        bits: u32,
    },

    /// The selected source has no caller-controlled seed.
    #[error("source '{0}' does not accept a seed")]
    NotSeedable(SourceKind),
}
