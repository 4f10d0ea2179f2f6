//! `detra draw`: print values from one source.

use std::io::Write;

use detra_core::{AnySource, RandomSource, SourceKind};
use tracing::{info, warn};

use crate::config::{DrawConfig, OutputKind};
use crate::Result;

/// Draws `config.count` values of `config.kind` and writes one per line.
///
/// # Errors
///
/// Fails if the source rejects the configured seed or the output cannot be
/// written.
pub fn run<W: Write>(config: &DrawConfig, out: &mut W) -> Result<()> {
    let mut source = AnySource::build(config.source, config.seed, config.seed2)?;

    info!(
        source = %config.source,
        count = config.count,
        kind = %config.kind,
        "drawing values"
    );
    warn_on_known_quirks(config);

    for _ in 0..config.count {
        match config.kind {
            OutputKind::Int => writeln!(out, "{}", source.randi())?,
            OutputKind::Float => writeln!(out, "{}", source.randf())?,
            OutputKind::Bool => writeln!(out, "{}", source.randb())?,
        }
    }

    out.flush()?;
    Ok(())
}

fn warn_on_known_quirks(config: &DrawConfig) {
    let zero_state = match config.source {
        SourceKind::XorShift32 => config.seed == Some(0),
        SourceKind::XorShift128Plus => config.seed == Some(0) && config.seed2 == Some(0),
        _ => false,
    };
    if zero_state {
        warn!(source = %config.source, "all-zero seed: every draw will be 0");
    }

    if config.source == SourceKind::XorShift128Plus && config.kind == OutputKind::Float {
        warn!("xorshift128plus floats are divided by u32::MAX and are not confined to [0, 1]");
    }
}
