//! Process-wide legacy `rand()` source.
//!
//! [`LegacyLibraryGenerator`] reads from one stream shared by the whole
//! process, in the manner of the C library's `srand`/`rand`. Every
//! construction reseeds that stream with [`LEGACY_SEED`], so creating a second
//! instance restarts the sequence seen by the first.
//!
//! The stream sits behind a `Mutex` only so that it can be a `static`; the
//! lock does not give instances independent state, and interleaved callers
//! still observe each other's draws.

mod glibc;

use std::sync::{Mutex, MutexGuard, PoisonError};

pub use glibc::{GlibcRandom, RAND_MAX};

use crate::source::{ProcessGlobal, RandomSource, Reproducible};

/// Seed applied to the shared stream by every [`LegacyLibraryGenerator::new`].
pub const LEGACY_SEED: u32 = 0;

static STREAM: Mutex<GlibcRandom> = Mutex::new(GlibcRandom::new(1));

fn stream() -> MutexGuard<'static, GlibcRandom> {
    STREAM.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Handle to the process-wide legacy `rand()` stream.
///
/// Outputs lie in `[0, RAND_MAX]`. The sequence is reproducible only while
/// this is the sole instance in the process: constructing another instance
/// reseeds the shared stream for everyone.
///
/// # Examples
///
/// ```rust
/// use detra_core::{LegacyLibraryGenerator, RandomSource};
///
/// let mut first = LegacyLibraryGenerator::new();
/// let a = first.randi();
///
/// // Reseeds the shared stream: `second` starts over from the beginning.
/// let mut second = LegacyLibraryGenerator::new();
/// assert_eq!(second.randi(), a);
/// ```
#[derive(Debug)]
pub struct LegacyLibraryGenerator {
    _shared: (),
}

impl LegacyLibraryGenerator {
    /// Reseeds the process-wide stream with [`LEGACY_SEED`] and returns a
    /// handle to it.
    pub fn new() -> Self {
        *stream() = GlibcRandom::new(LEGACY_SEED);
        tracing::debug!(seed = LEGACY_SEED, "reseeded process-wide legacy rand stream");
        Self { _shared: () }
    }
}

impl Default for LegacyLibraryGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for LegacyLibraryGenerator {
    type Output = u32;

    #[inline]
    fn randi(&mut self) -> u32 {
        stream().draw()
    }
}

impl Reproducible for LegacyLibraryGenerator {}

impl ProcessGlobal for LegacyLibraryGenerator {}
