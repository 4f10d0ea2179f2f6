//! Runtime selection over the four sources.
//!
//! [`AnySource`] is a closed enum: each operation is a single `match` on the
//! variant, with no trait objects involved. Its output is widened to `u64`,
//! which is lossless for the 32-bit sources, so `randf` and `randb` through
//! an [`AnySource`] agree exactly with the wrapped source.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::entropy::SystemEntropy;
use crate::error::SeedError;
use crate::legacy::LegacyLibraryGenerator;
use crate::source::RandomSource;
use crate::xorshift::{XorShift128Plus, XorShift32};

/// Names of the available sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum SourceKind {
    /// [`SystemEntropy`]
    Entropy,
    /// [`LegacyLibraryGenerator`]
    Legacy,
    /// [`XorShift32`]
    #[default]
    XorShift32,
    /// [`XorShift128Plus`]
    XorShift128Plus,
}

impl SourceKind {
    /// Every kind, in display order.
    pub const ALL: [SourceKind; 4] = [
        SourceKind::Entropy,
        SourceKind::Legacy,
        SourceKind::XorShift32,
        SourceKind::XorShift128Plus,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Entropy => "entropy",
            SourceKind::Legacy => "legacy",
            SourceKind::XorShift32 => "xorshift32",
            SourceKind::XorShift128Plus => "xorshift128plus",
        }
    }

    /// Width in bits of `randi()` for this source.
    pub fn output_bits(&self) -> u32 {
        match self {
            SourceKind::XorShift128Plus => 64,
            _ => 32,
        }
    }

    /// Whether the sequence is determined by a seed.
    pub fn is_reproducible(&self) -> bool {
        !matches!(self, SourceKind::Entropy)
    }

    /// Whether instances share one process-wide stream.
    pub fn is_process_global(&self) -> bool {
        matches!(self, SourceKind::Legacy)
    }

    /// Whether the caller may supply a seed.
    pub fn accepts_seed(&self) -> bool {
        matches!(self, SourceKind::XorShift32 | SourceKind::XorShift128Plus)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised source name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source '{0}'. Must be one of: entropy, legacy, xorshift32, xorshift128plus")]
pub struct UnknownSource(
    /// Name as given.
    pub String,
);

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entropy" | "system" | "os" => Ok(SourceKind::Entropy),
            "legacy" | "c" | "crand" => Ok(SourceKind::Legacy),
            "xorshift32" | "xor32" => Ok(SourceKind::XorShift32),
            "xorshift128plus" | "xorshift128+" | "xor128" => Ok(SourceKind::XorShift128Plus),
            _ => Err(UnknownSource(s.to_string())),
        }
    }
}

impl TryFrom<String> for SourceKind {
    type Error = UnknownSource;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One of the four sources, chosen at runtime.
///
/// # Examples
///
/// ```rust
/// use detra_core::{AnySource, RandomSource, SourceKind};
///
/// let mut rng = AnySource::build(SourceKind::XorShift32, None, None).unwrap();
/// assert_eq!(rng.randi(), 723_471_715);
///
/// assert!(AnySource::build(SourceKind::Entropy, Some(1), None).is_err());
/// ```
#[derive(Debug)]
pub enum AnySource {
    /// OS entropy.
    Entropy(SystemEntropy),
    /// Process-wide legacy stream.
    Legacy(LegacyLibraryGenerator),
    /// 32-bit xorshift.
    XorShift32(XorShift32),
    /// 128-bit xorshift+.
    XorShift128Plus(XorShift128Plus),
}

impl AnySource {
    /// Builds the source named by `kind` with its default seed(s).
    ///
    /// Building [`SourceKind::Legacy`] reseeds the process-wide stream.
    pub fn new(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Entropy => AnySource::Entropy(SystemEntropy::new()),
            SourceKind::Legacy => AnySource::Legacy(LegacyLibraryGenerator::new()),
            SourceKind::XorShift32 => AnySource::XorShift32(XorShift32::default()),
            SourceKind::XorShift128Plus => AnySource::XorShift128Plus(XorShift128Plus::default()),
        }
    }

    /// Builds a source with optional explicit seeds.
    ///
    /// - `xorshift32` takes `seed`, which must fit in 32 bits; `seed2` must
    ///   be `None`.
    /// - `xorshift128plus` takes `seed` and `seed2`, each defaulting to its
    ///   own default word when absent.
    /// - `entropy` and `legacy` reject any seed.
    ///
    /// Seeds are not checked for the zero fixed point, matching the plain
    /// constructors.
    pub fn build(kind: SourceKind, seed: Option<u64>, seed2: Option<u64>) -> Result<Self, SeedError> {
        match kind {
            SourceKind::Entropy | SourceKind::Legacy => {
                if seed.is_some() || seed2.is_some() {
                    return Err(SeedError::NotSeedable(kind));
                }
                Ok(Self::new(kind))
            }
            SourceKind::XorShift32 => {
                if seed2.is_some() {
                    return Err(SeedError::NotSeedable(kind));
                }
                let seed = match seed {
                    None => XorShift32::DEFAULT_SEED,
                    Some(s) => u32::try_from(s).map_err(|_| SeedError::OutOfRange {
                        generator: "xorshift32",
                        bits: 32,
                    })?,
                };
                Ok(AnySource::XorShift32(XorShift32::new(seed)))
            }
            SourceKind::XorShift128Plus => {
                let (d1, d2) = XorShift128Plus::DEFAULT_SEEDS;
                Ok(AnySource::XorShift128Plus(XorShift128Plus::new(
                    seed.unwrap_or(d1),
                    seed2.unwrap_or(d2),
                )))
            }
        }
    }

    /// Kind of the wrapped source.
    pub fn kind(&self) -> SourceKind {
        match self {
            AnySource::Entropy(_) => SourceKind::Entropy,
            AnySource::Legacy(_) => SourceKind::Legacy,
            AnySource::XorShift32(_) => SourceKind::XorShift32,
            AnySource::XorShift128Plus(_) => SourceKind::XorShift128Plus,
        }
    }
}

impl RandomSource for AnySource {
    type Output = u64;

    #[inline]
    fn randi(&mut self) -> u64 {
        match self {
            AnySource::Entropy(rng) => u64::from(rng.randi()),
            AnySource::Legacy(rng) => u64::from(rng.randi()),
            AnySource::XorShift32(rng) => u64::from(rng.randi()),
            AnySource::XorShift128Plus(rng) => rng.randi(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_parsing() {
        assert_eq!("entropy".parse::<SourceKind>().unwrap(), SourceKind::Entropy);
        assert_eq!("OS".parse::<SourceKind>().unwrap(), SourceKind::Entropy);
        assert_eq!("Legacy".parse::<SourceKind>().unwrap(), SourceKind::Legacy);
        assert_eq!(
            "XorShift32".parse::<SourceKind>().unwrap(),
            SourceKind::XorShift32
        );
        assert_eq!(
            "xorshift128+".parse::<SourceKind>().unwrap(),
            SourceKind::XorShift128Plus
        );

        let err = "mersenne".parse::<SourceKind>().unwrap_err();
        assert!(err.to_string().contains("mersenne"));
    }

    #[test]
    fn test_source_kind_display_roundtrips() {
        for kind in SourceKind::ALL {
            assert_eq!(kind.to_string().parse::<SourceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_source_kind_properties() {
        assert_eq!(SourceKind::XorShift128Plus.output_bits(), 64);
        assert_eq!(SourceKind::XorShift32.output_bits(), 32);
        assert!(!SourceKind::Entropy.is_reproducible());
        assert!(SourceKind::Legacy.is_process_global());
        assert!(!SourceKind::XorShift32.is_process_global());
        assert!(!SourceKind::Legacy.accepts_seed());
    }

    #[test]
    fn test_build_rejects_seed_for_unseedable() {
        assert_eq!(
            AnySource::build(SourceKind::Entropy, Some(3), None).unwrap_err(),
            SeedError::NotSeedable(SourceKind::Entropy)
        );
        assert!(AnySource::build(SourceKind::XorShift32, Some(3), Some(4)).is_err());
    }

    #[test]
    fn test_build_xorshift32_rejects_wide_seed() {
        assert_eq!(
            AnySource::build(SourceKind::XorShift32, Some(1 << 32), None).unwrap_err(),
            SeedError::OutOfRange {
                generator: "xorshift32",
                bits: 32,
            }
        );

        let mut any =
            AnySource::build(SourceKind::XorShift32, Some(u64::from(u32::MAX)), None).unwrap();
        let mut direct = XorShift32::new(u32::MAX);
        assert_eq!(any.randi(), u64::from(direct.randi()));
    }

    #[test]
    fn test_build_xorshift128plus_partial_seed() {
        let (_, d2) = XorShift128Plus::DEFAULT_SEEDS;
        let mut any = AnySource::build(SourceKind::XorShift128Plus, Some(5), None).unwrap();
        let mut direct = XorShift128Plus::new(5, d2);
        assert_eq!(any.kind(), SourceKind::XorShift128Plus);
        assert_eq!(any.randi(), direct.randi());
    }

    #[test]
    fn test_derived_quantities_match_wrapped_source() {
        let mut any = AnySource::new(SourceKind::XorShift32);
        let mut direct = XorShift32::default();
        for _ in 0..100 {
            assert_eq!(any.randf(), direct.randf());
            assert_eq!(any.randb(), direct.randb());
        }
    }
}
