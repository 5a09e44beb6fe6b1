//! Core type definitions for ferrara-site

use crate::error::{Result, SiteError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Slack granted to reported fractions; browsers round `intersectionRatio`
/// and may report the crossing entry just under the configured threshold.
pub const THRESHOLD_TOLERANCE: f64 = 1e-3;

/// Fraction of an element that must be inside the viewport
///
/// Always within `0.0..=1.0`; NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Threshold(f64);

impl Threshold {
    /// Any visible pixel counts
    pub const ANY: Threshold = Threshold(0.0);

    /// Create a threshold, rejecting values outside `0.0..=1.0`
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Threshold(value))
        } else {
            Err(SiteError::InvalidThreshold(value))
        }
    }

    /// Raw fraction
    pub fn value(self) -> f64 {
        self.0
    }

    /// Whether a reported visible fraction satisfies this threshold
    ///
    /// A fraction of zero never qualifies, so `Threshold::ANY` still means
    /// "at least partly on screen". Fractions within [`THRESHOLD_TOLERANCE`]
    /// below the threshold qualify.
    pub fn is_met_by(self, fraction: f64) -> bool {
        fraction > 0.0 && fraction + THRESHOLD_TOLERANCE >= self.0
    }
}

impl TryFrom<f64> for Threshold {
    type Error = SiteError;

    fn try_from(value: f64) -> Result<Self> {
        Threshold::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_bounds() {
        assert!(Threshold::new(0.0).is_ok());
        assert!(Threshold::new(1.0).is_ok());
        assert!(matches!(Threshold::new(1.5), Err(SiteError::InvalidThreshold(_))));
        assert!(Threshold::new(-0.1).is_err());
        assert!(Threshold::new(f64::NAN).is_err());
    }

    #[test]
    fn test_threshold_is_met_by() {
        let t = Threshold::new(0.5).unwrap();
        assert!(t.is_met_by(0.5));
        assert!(t.is_met_by(0.9));
        assert!(!t.is_met_by(0.49));
    }

    #[test]
    fn test_threshold_tolerates_rounded_crossing_ratio() {
        let t = Threshold::new(0.5).unwrap();
        assert!(t.is_met_by(0.4999));
        assert!(t.is_met_by(0.5 - THRESHOLD_TOLERANCE));
        assert!(!t.is_met_by(0.498));
        assert!(Threshold::new(0.3).unwrap().is_met_by(0.29995));
    }

    #[test]
    fn test_any_threshold_needs_some_visibility() {
        assert!(!Threshold::ANY.is_met_by(0.0));
        assert!(Threshold::ANY.is_met_by(0.01));
    }

    #[test]
    fn test_threshold_deserialize_rejects_out_of_range() {
        #[derive(Deserialize)]
        struct Wrapper {
            threshold: Threshold,
        }
        let ok: Wrapper = toml::from_str("threshold = 0.3").unwrap();
        assert_eq!(ok.threshold.value(), 0.3);
        assert!(toml::from_str::<Wrapper>("threshold = 2.0").is_err());
    }
}
