//! # Rating Bands
//! Qualitative reading of an Apdex score: Excellent / Good / Fair / Poor /
//! Unacceptable. Boundaries come from [`RatingBands`](crate::bands::RatingBands);
//! this module only holds the classification itself.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bands::RatingBands;

/// Qualitative band for a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    Poor,
    Unacceptable,
}

impl Rating {
    /// Classify a score. Lower bounds are inclusive; the first band whose
    /// bound the score reaches wins, scanning from Excellent down.
    ///
    /// Total over all inputs: scores above 1.0 land in Excellent, while
    /// negative or NaN scores fail every bound and land in Unacceptable.
    pub fn for_score(score: f64, bands: &RatingBands) -> Self {
        if score >= bands.excellent_min {
            Rating::Excellent
        } else if score >= bands.good_min {
            Rating::Good
        } else if score >= bands.fair_min {
            Rating::Fair
        } else if score >= bands.poor_min {
            Rating::Poor
        } else {
            Rating::Unacceptable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "Excellent",
            Rating::Good => "Good",
            Rating::Fair => "Fair",
            Rating::Poor => "Poor",
            Rating::Unacceptable => "Unacceptable",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
