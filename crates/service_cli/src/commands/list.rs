//! `detra list`: describe the available sources.

use std::io::Write;

use detra_core::SourceKind;

use crate::Result;

/// Writes one row per source: name, output width, reproducibility and
/// whether the stream is process-wide.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{:<16} {:>5} {:<13} {:<14}",
        "source", "bits", "reproducible", "process-global"
    )?;
    for kind in SourceKind::ALL {
        writeln!(
            out,
            "{:<16} {:>5} {:<13} {:<14}",
            kind.as_str(),
            kind.output_bits(),
            yes_no(kind.is_reproducible()),
            yes_no(kind.is_process_global())
        )?;
    }
    Ok(())
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
