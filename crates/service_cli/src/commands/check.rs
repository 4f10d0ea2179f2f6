//! `detra check`: self-checks against each source.
//!
//! Every reproducible source is rebuilt between phases, so the checks also
//! hold for the process-wide legacy stream: each rebuild reseeds it.

use std::io::Write;

use detra_core::{AnySource, RandomSource, SourceKind, RANDF_DIVISOR};
use tracing::{debug, info};

use crate::{CliError, Result};

const DETERMINISM_DRAWS: usize = 1_000;
const DEGENERACY_DRAWS: usize = 10_000;

/// Result of one check against one source.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutcome {
    /// Source under test.
    pub source: SourceKind,
    /// Short check name.
    pub name: &'static str,
    /// `None` when the check does not apply to this source.
    pub passed: Option<bool>,
    /// Observed value or reason for skipping.
    pub detail: String,
}

impl CheckOutcome {
    fn new(source: SourceKind, name: &'static str, passed: bool, detail: String) -> Self {
        Self {
            source,
            name,
            passed: Some(passed),
            detail,
        }
    }

    fn skipped(source: SourceKind, name: &'static str, reason: &str) -> Self {
        Self {
            source,
            name,
            passed: None,
            detail: reason.to_string(),
        }
    }

    fn status(&self) -> &'static str {
        match self.passed {
            Some(true) => "ok",
            Some(false) => "FAIL",
            None => "skip",
        }
    }
}

/// First `randi()` value of each reproducible source from its defaults.
pub fn golden_first(kind: SourceKind) -> Option<u64> {
    match kind {
        SourceKind::Entropy => None,
        SourceKind::Legacy => Some(1_804_289_383),
        SourceKind::XorShift32 => Some(723_471_715),
        SourceKind::XorShift128Plus => Some(0xCCF7_CE02_51E2_1EDB),
    }
}

/// Runs every check against `kind`.
pub fn run_checks(kind: SourceKind) -> Vec<CheckOutcome> {
    debug!(source = %kind, "running self-checks");
    vec![
        check_golden(kind),
        check_determinism(kind),
        check_non_degenerate(kind),
        check_randb(kind),
        check_randf(kind),
    ]
}

fn check_golden(kind: SourceKind) -> CheckOutcome {
    let Some(expected) = golden_first(kind) else {
        return CheckOutcome::skipped(kind, "golden", "not reproducible");
    };
    let actual = AnySource::new(kind).randi();
    CheckOutcome::new(
        kind,
        "golden",
        actual == expected,
        format!("first={} expected={}", actual, expected),
    )
}

fn check_determinism(kind: SourceKind) -> CheckOutcome {
    if !kind.is_reproducible() {
        return CheckOutcome::skipped(kind, "determinism", "not reproducible");
    }
    let first = draws(kind, DETERMINISM_DRAWS);
    let second = draws(kind, DETERMINISM_DRAWS);
    let mismatch = first.iter().zip(&second).position(|(a, b)| a != b);
    let detail = match mismatch {
        Some(index) => format!("diverged at draw {}", index),
        None => format!("{} draws identical", DETERMINISM_DRAWS),
    };
    CheckOutcome::new(kind, "determinism", mismatch.is_none(), detail)
}

fn check_non_degenerate(kind: SourceKind) -> CheckOutcome {
    let values = draws(kind, DEGENERACY_DRAWS);
    let zeros = values.iter().filter(|&&v| v == 0).count();
    let trailing_zeros = values.iter().rev().take_while(|&&v| v == 0).count();
    CheckOutcome::new(
        kind,
        "non-degenerate",
        zeros < values.len() && trailing_zeros < 8,
        format!("{} zeros in {} draws", zeros, values.len()),
    )
}

fn check_randb(kind: SourceKind) -> CheckOutcome {
    if !kind.is_reproducible() {
        return CheckOutcome::skipped(kind, "randb", "needs an identically seeded sibling");
    }
    let coin = AnySource::new(kind).randb();
    let raw = AnySource::new(kind).randi();
    CheckOutcome::new(
        kind,
        "randb",
        coin == (raw % 2 == 1),
        format!("randb={} randi={}", coin, raw),
    )
}

fn check_randf(kind: SourceKind) -> CheckOutcome {
    if !kind.is_reproducible() {
        return CheckOutcome::skipped(kind, "randf", "needs an identically seeded sibling");
    }
    let float = AnySource::new(kind).randf();
    let raw = AnySource::new(kind).randi();
    let expected = raw as f32 / RANDF_DIVISOR;
    CheckOutcome::new(
        kind,
        "randf",
        float == expected,
        format!("randf={} randi/u32::MAX={}", float, expected),
    )
}

fn draws(kind: SourceKind, count: usize) -> Vec<u64> {
    let mut source = AnySource::new(kind);
    let mut values = vec![0u64; count];
    source.fill_randi(&mut values);
    values
}

/// Runs the checks for `source` (or every source) and prints a table.
///
/// # Errors
///
/// Returns [`CliError::ChecksFailed`] when any applicable check fails.
pub fn run<W: Write>(source: Option<SourceKind>, out: &mut W) -> Result<()> {
    let kinds: Vec<SourceKind> = match source {
        Some(kind) => vec![kind],
        None => SourceKind::ALL.to_vec(),
    };

    let outcomes: Vec<CheckOutcome> = kinds.into_iter().flat_map(run_checks).collect();

    writeln!(out, "{:<16} {:<15} {:<5} detail", "source", "check", "status")?;
    for outcome in &outcomes {
        writeln!(
            out,
            "{:<16} {:<15} {:<5} {}",
            outcome.source.as_str(),
            outcome.name,
            outcome.status(),
            outcome.detail
        )?;
    }

    let failed = outcomes.iter().filter(|o| o.passed == Some(false)).count();
    info!(checks = outcomes.len(), failed, "self-checks complete");
    if failed > 0 {
        return Err(CliError::ChecksFailed(failed));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pass(kind: SourceKind) {
        for outcome in run_checks(kind) {
            assert_ne!(outcome.passed, Some(false), "{:?}", outcome);
        }
    }

    #[test]
    fn test_xorshift32_checks_pass() {
        all_pass(SourceKind::XorShift32);
    }

    #[test]
    fn test_xorshift128plus_checks_pass() {
        all_pass(SourceKind::XorShift128Plus);
    }

    // The only test in this crate that touches the process-wide legacy stream.
    #[test]
    fn test_legacy_checks_pass() {
        all_pass(SourceKind::Legacy);
    }

    #[test]
    fn test_entropy_skips_reproducibility_checks() {
        let outcomes = run_checks(SourceKind::Entropy);
        let skipped: Vec<&str> = outcomes
            .iter()
            .filter(|o| o.passed.is_none())
            .map(|o| o.name)
            .collect();
        assert_eq!(skipped, vec!["golden", "determinism", "randb", "randf"]);

        let non_degenerate = outcomes.iter().find(|o| o.name == "non-degenerate").unwrap();
        assert_eq!(non_degenerate.passed, Some(true));
    }

    #[test]
    fn test_run_prints_table() {
        let mut out = Vec::new();
        run(Some(SourceKind::XorShift32), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("golden"));
        assert!(!text.contains("FAIL"));
    }
}
