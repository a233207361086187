//! # Apdex Score
//! Pure calculation of the Application Performance Index from sample counts.
//! No I/O, no shared state, suitable for unit tests and concurrent callers.
//!
//! Formula: `(satisfied + tolerated/2) / total`, with `total == 0` mapping to
//! `0.0` instead of an error. Tolerated samples count at half value; frustrated
//! samples contribute nothing.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::bands::RatingBands;
use crate::rating::Rating;

/// Compute the Apdex score from raw counts.
///
/// The conventional constraint `satisfied + tolerated <= total` is the caller's
/// responsibility; it is not enforced here, and inconsistent counts simply
/// produce a score above 1.0.
pub fn calculate(satisfied: u64, tolerated: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let score = (satisfied as f64 + tolerated as f64 / 2.0) / total as f64;
    debug!(target: "apdex", satisfied, tolerated, total, score, "apdex computed");
    score
}

/// One measurement window's worth of counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleCounts {
    /// Samples that met the target threshold.
    pub satisfied: u64,
    /// Samples over target but within the tolerable threshold (half weight).
    pub tolerated: u64,
    /// All samples observed, frustrated ones included.
    pub total: u64,
}

impl SampleCounts {
    pub fn new(satisfied: u64, tolerated: u64, total: u64) -> Self {
        Self {
            satisfied,
            tolerated,
            total,
        }
    }

    /// Samples beyond the tolerable threshold. Saturates at zero when the
    /// counts are inconsistent (`satisfied + tolerated > total`).
    pub fn frustrated(&self) -> u64 {
        self.total
            .saturating_sub(self.satisfied)
            .saturating_sub(self.tolerated)
    }

    /// Score this window.
    pub fn score(&self) -> ApdexScore {
        ApdexScore(calculate(self.satisfied, self.tolerated, self.total))
    }
}

/// Computed Apdex score. In `[0.0, 1.0]` for consistent counts; the raw value
/// is kept as-is otherwise.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApdexScore(pub f64);

impl ApdexScore {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Qualitative band for this score under the given boundaries.
    pub fn rating(&self, bands: &RatingBands) -> Rating {
        Rating::for_score(self.0, bands)
    }
}

impl fmt::Display for ApdexScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
