//! Checking a guest against the reference timer.
//!
//! The reference is `deltatime_sdk::DeltaTimer`, run natively with the scale from the session
//! config. Values must match bit for bit, except that any NaN matches any NaN (wasm does not
//! pin NaN payloads).

use std::fmt;

use deltatime_sdk::{DeltaTimer, UnitScale};
use tracing::debug;

use crate::{error::HarnessError, session::GuestSession};

/// What the reference timer reports for `timestamps`, starting from a fresh state.
pub fn expected_reports(scale: UnitScale, timestamps: &[f64]) -> Vec<f64> {
    let mut timer = DeltaTimer::new(scale);
    let mut out = Vec::with_capacity(timestamps.len());
    for &ts in timestamps {
        timer.update(ts, &mut |v: f64| out.push(v));
    }
    out
}

pub fn same_value(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/// First reported value that diverged from the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// Zero-based position in the timestamp sequence.
    pub index: usize,
    pub timestamp: f64,
    pub expected: f64,
    pub actual: f64,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "update #{} ({}): expected report {}, got {}",
            self.index, self.timestamp, self.expected, self.actual
        )
    }
}

/// Outcome of [`verify`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConformanceReport {
    /// Number of updates that matched before stopping.
    pub checked: usize,
    pub mismatch: Option<Mismatch>,
}

impl ConformanceReport {
    pub fn is_conformant(&self) -> bool {
        self.mismatch.is_none()
    }
}

/// Reload the session, drive it with `timestamps`, and compare against the reference.
///
/// Stops at the first mismatch. Harness failures (traps, report-count violations) are errors,
/// not mismatches.
pub fn verify(
    session: &mut GuestSession,
    timestamps: &[f64],
) -> Result<ConformanceReport, HarnessError> {
    session.reload()?;
    let expected = expected_reports(session.config().scale, timestamps);

    for (index, (&timestamp, &expected)) in timestamps.iter().zip(&expected).enumerate() {
        let actual = session.update(timestamp)?;
        if !same_value(expected, actual) {
            let mismatch = Mismatch {
                index,
                timestamp,
                expected,
                actual,
            };
            debug!(%mismatch, "guest diverged from reference");
            return Ok(ConformanceReport {
                checked: index,
                mismatch: Some(mismatch),
            });
        }
    }

    Ok(ConformanceReport {
        checked: timestamps.len(),
        mismatch: None,
    })
}
