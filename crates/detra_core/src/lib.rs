//! # detra_core: Interchangeable Pseudo-Random Sources
//!
//! A small family of fast, non-cryptographic random sources that all expose
//! the same capability set:
//!
//! - `randi()`: the next raw integer from the source
//! - `randf()`: a float derived from one `randi()` draw
//! - `randb()`: a boolean derived from one `randi()` draw
//!
//! ## Sources
//!
//! | Type | Output | Reproducible | Notes |
//! |---|---|---|---|
//! | [`SystemEntropy`] | `u32` | no | Operating system entropy, uniform over the full `u32` range |
//! | [`LegacyLibraryGenerator`] | `u32` | yes (single instance) | Process-wide C library style `rand()` stream seeded with `0` |
//! | [`XorShift32`] | `u32` | yes | One word of state |
//! | [`XorShift128Plus`] | `u64` | yes | Two words of state |
//!
//! ## Design
//!
//! - **Static dispatch**: every source implements [`RandomSource`]; the derived
//!   quantities are provided methods on that trait, written once.
//! - **No allocation**: sources are plain values; batch helpers fill
//!   caller-provided slices.
//! - **Closed dispatch**: [`AnySource`] wraps one of the four variants behind a
//!   `match` for callers that choose a source at runtime.
//!
//! ## Usage Example
//!
//! ```rust
//! use detra_core::{RandomSource, XorShift32};
//!
//! let mut rng = XorShift32::default();
//! assert_eq!(rng.randi(), 723_471_715);
//!
//! let f = rng.randf();
//! assert!((0.0..=1.0).contains(&f));
//! let _coin = rng.randb();
//! ```
//!
//! ## Known Behaviour
//!
//! `randf()` divides by `u32::MAX` for every source, including the 64-bit
//! [`XorShift128Plus`], whose floats are therefore not confined to `[0, 1]`.
//! None of these sources are suitable for cryptographic use.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod any;
pub mod entropy;
pub mod error;
pub mod legacy;
pub mod source;
pub mod xorshift;

pub use any::{AnySource, SourceKind};
pub use entropy::SystemEntropy;
pub use error::SeedError;
pub use legacy::{GlibcRandom, LegacyLibraryGenerator};
pub use source::{ProcessGlobal, RandomSource, Reproducible, RANDF_DIVISOR};
pub use xorshift::{XorShift128Plus, XorShift32};
