//! Risk probability to severity classification.
//!
//! A channel's severity is a step function of the peak probability across
//! its prediction horizons. Thresholds are strict, so a probability exactly
//! on a boundary falls into the lower level:
//!
//! | peak probability | severity |
//! |------------------|----------|
//! | > 0.8            | 7        |
//! | > 0.6            | 6        |
//! | > 0.4            | 5        |
//! | > 0.3            | 4        |
//! | > 0.2            | 3        |
//! | > 0.1            | 2        |
//! | > 0.001          | 1        |
//! | otherwise        | 0        |
//!
//! NaN entries are skipped when taking the peak. A sequence of only NaN
//! classifies as 0.

use crate::config::MAX_SEVERITY;
use crate::error::AlertError;
use crate::thresholds::SEVERITY_THRESHOLDS;

/// Ordinal alert severity, 0 (disabled) through 7 (highest).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Debug, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Severity(u8);

/// Coarse grouping of severities that share a visual treatment.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tier {
    /// Severity 0: nothing worth showing.
    Disabled,
    /// Severity 1-2: cyan accents.
    Low,
    /// Severity 3-5: yellow accents.
    Medium,
    /// Severity 6-7: red border and fill.
    High,
}

impl Severity {
    /// No alert.
    pub const NONE: Self = Self(0);

    /// Highest alert.
    pub const MAX: Self = Self(MAX_SEVERITY);

    /// Validate a raw level.
    pub const fn new(level: u8) -> Result<Self, AlertError> {
        if level > MAX_SEVERITY {
            Err(AlertError::OutOfRange(level))
        } else {
            Ok(Self(level))
        }
    }

    /// Severity for a single peak probability.
    pub fn from_probability(probability: f32) -> Self {
        // Thresholds ascend, so the count of exceeded ones is the level
        let exceeded = SEVERITY_THRESHOLDS.iter().take_while(|&&t| probability > t).count();
        Self(exceeded as u8)
    }

    /// Raw level, 0..=7.
    #[inline]
    pub const fn level(self) -> u8 { self.0 }

    /// Level as a table index.
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }

    /// Visual tier this level belongs to.
    pub const fn tier(self) -> Tier {
        match self.0 {
            0 => Tier::Disabled,
            1..=2 => Tier::Low,
            3..=5 => Tier::Medium,
            _ => Tier::High,
        }
    }

    /// Check if anything should be highlighted.
    #[inline]
    pub const fn is_active(self) -> bool { self.0 > 0 }
}

impl TryFrom<u8> for Severity {
    type Error = AlertError;

    fn try_from(level: u8) -> Result<Self, Self::Error> { Self::new(level) }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self { severity.0 }
}

/// Peak probability across horizons. Fails on an empty sequence.
pub fn peak_probability(probabilities: &[f32]) -> Result<f32, AlertError> {
    let (&first, rest) = probabilities.split_first().ok_or(AlertError::InvalidInput)?;
    Ok(rest.iter().fold(first, |peak, &p| peak.max(p)))
}

/// Classify a sequence of per-horizon probabilities.
pub fn classify(probabilities: &[f32]) -> Result<Severity, AlertError> {
    peak_probability(probabilities).map(Severity::from_probability)
}
