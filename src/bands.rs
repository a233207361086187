//! # Band Configuration
//! Lower bounds for the rating bands, loadable from a `[bands]` TOML table.
//!
//! - Missing keys take the built-in seed (0.94 / 0.85 / 0.70 / 0.50).
//! - Every bound must be finite, within `[0.0, 1.0]`, and the four bounds must
//!   descend strictly; anything else is a config error.
//! - File loading never fails: bad or missing files log a warning and fall
//!   back to the seed.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

// --- env defaults & names ---
pub const DEFAULT_BANDS_CONFIG_PATH: &str = "config/bands.toml";
pub const ENV_BANDS_CONFIG_PATH: &str = "APDEX_BANDS_PATH";

fn default_excellent_min() -> f64 {
    0.94
}
fn default_good_min() -> f64 {
    0.85
}
fn default_fair_min() -> f64 {
    0.70
}
fn default_poor_min() -> f64 {
    0.50
}

/// Built-in seed, shared by `Default` and the fallback paths.
static DEFAULT_BANDS: Lazy<RatingBands> = Lazy::new(|| RatingBands {
    excellent_min: default_excellent_min(),
    good_min: default_good_min(),
    fair_min: default_fair_min(),
    poor_min: default_poor_min(),
});

/// Inclusive lower bounds of the top four bands. Scores below `poor_min`
/// classify as Unacceptable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingBands {
    #[serde(default = "default_excellent_min")]
    pub excellent_min: f64,
    #[serde(default = "default_good_min")]
    pub good_min: f64,
    #[serde(default = "default_fair_min")]
    pub fair_min: f64,
    #[serde(default = "default_poor_min")]
    pub poor_min: f64,
}

impl Default for RatingBands {
    fn default() -> Self {
        *DEFAULT_BANDS
    }
}

/// Config file schema: one optional `[bands]` table.
#[derive(Debug, Deserialize)]
struct BandsRoot {
    #[serde(default)]
    bands: RatingBands,
}

impl RatingBands {
    /// Parse from a TOML string and validate.
    pub fn from_toml_str(toml_str: &str) -> anyhow::Result<Self> {
        let root: BandsRoot = toml::from_str(toml_str)?;
        root.bands.validate()?;
        Ok(root.bands)
    }

    /// Load from a TOML file. Falls back to the built-in seed on any error.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                warn!(target: "apdex", path = %path.display(), error = %e,
                    "bands config not readable, using defaults");
                return Self::default();
            }
        };
        match Self::from_toml_str(&content) {
            Ok(b) => b,
            Err(e) => {
                warn!(target: "apdex", path = %path.display(), error = %e,
                    "bands config invalid, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the config path from `APDEX_BANDS_PATH` (default
    /// `config/bands.toml`) and load it, seed-fallback included.
    pub fn from_env_or_default() -> Self {
        let path = std::env::var(ENV_BANDS_CONFIG_PATH)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BANDS_CONFIG_PATH));
        Self::load_from_file(path)
    }

    fn validate(&self) -> anyhow::Result<()> {
        for (name, v) in [
            ("excellent_min", self.excellent_min),
            ("good_min", self.good_min),
            ("fair_min", self.fair_min),
            ("poor_min", self.poor_min),
        ] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(anyhow::anyhow!("band `{}` out of range: {}", name, v));
            }
        }
        if !(self.excellent_min > self.good_min
            && self.good_min > self.fair_min
            && self.fair_min > self.poor_min)
        {
            return Err(anyhow::anyhow!(
                "band bounds must descend strictly: {} > {} > {} > {}",
                self.excellent_min,
                self.good_min,
                self.fair_min,
                self.poor_min
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values() {
        let b = RatingBands::default();
        assert_eq!(b.excellent_min, 0.94);
        assert_eq!(b.good_min, 0.85);
        assert_eq!(b.fair_min, 0.70);
        assert_eq!(b.poor_min, 0.50);
    }

    #[test]
    fn full_table_parses() {
        let b = RatingBands::from_toml_str(
            r#"
            [bands]
            excellent_min = 0.95
            good_min = 0.80
            fair_min = 0.60
            poor_min = 0.40
            "#,
        )
        .unwrap();
        assert_eq!(b.excellent_min, 0.95);
        assert_eq!(b.poor_min, 0.40);
    }

    #[test]
    fn missing_keys_take_defaults() {
        let b = RatingBands::from_toml_str("[bands]\nexcellent_min = 0.97\n").unwrap();
        assert_eq!(b.excellent_min, 0.97);
        assert_eq!(b.good_min, 0.85);
        // Empty file is the full seed.
        assert_eq!(RatingBands::from_toml_str("").unwrap(), RatingBands::default());
    }

    #[test]
    fn rejects_out_of_range_bound() {
        assert!(RatingBands::from_toml_str("[bands]\nexcellent_min = 1.2\n").is_err());
        assert!(RatingBands::from_toml_str("[bands]\npoor_min = -0.1\n").is_err());
        assert!(RatingBands::from_toml_str("[bands]\nfair_min = nan\n").is_err());
    }

    #[test]
    fn rejects_non_descending_bounds() {
        // Equal adjacent bounds would leave an empty band.
        let err = RatingBands::from_toml_str(
            "[bands]\nexcellent_min = 0.85\ngood_min = 0.85\n",
        );
        assert!(err.is_err());
        assert!(RatingBands::from_toml_str("[bands]\npoor_min = 0.75\n").is_err());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(RatingBands::from_toml_str("[bands\nexcellent_min").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_seed() {
        let b = RatingBands::load_from_file("definitely/not/here.toml");
        assert_eq!(b, RatingBands::default());
    }
}
