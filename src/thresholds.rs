//! Severity threshold configuration.
//!
//! A channel's severity is the number of thresholds its peak probability
//! strictly exceeds. All thresholds are compile-time constants with
//! ordering assertions, so a misordered table fails to build.
//!
//! # Lowest Threshold
//!
//! The noise floor separating "disabled" (0) from "low" (1) defaults to
//! `0.001`. Enable the `legacy-threshold` feature to use `0.05` instead.

// =============================================================================
// Severity Thresholds (strict `>` comparisons)
// =============================================================================

/// Noise floor. At or below this the channel is shown as disabled.
#[cfg(not(feature = "legacy-threshold"))]
pub const SEVERITY_1: f32 = 0.001;

/// Noise floor. At or below this the channel is shown as disabled.
#[cfg(feature = "legacy-threshold")]
pub const SEVERITY_1: f32 = 0.05;

/// Second low-alert step.
pub const SEVERITY_2: f32 = 0.1;

/// Entry into the medium tier.
pub const SEVERITY_3: f32 = 0.2;

pub const SEVERITY_4: f32 = 0.3;

/// Top of the medium tier. The border turns yellow.
pub const SEVERITY_5: f32 = 0.4;

/// Entry into the high tier. Border and fill turn red.
pub const SEVERITY_6: f32 = 0.6;

/// Highest alert.
pub const SEVERITY_7: f32 = 0.8;

/// All thresholds in ascending order. Index `i` guards severity `i + 1`.
pub const SEVERITY_THRESHOLDS: [f32; 7] = [
    SEVERITY_1, SEVERITY_2, SEVERITY_3, SEVERITY_4, SEVERITY_5, SEVERITY_6, SEVERITY_7,
];

const _: () = assert!(0.0 <= SEVERITY_1);
const _: () = assert!(SEVERITY_1 < SEVERITY_2);
const _: () = assert!(SEVERITY_2 < SEVERITY_3);
const _: () = assert!(SEVERITY_3 < SEVERITY_4);
const _: () = assert!(SEVERITY_4 < SEVERITY_5);
const _: () = assert!(SEVERITY_5 < SEVERITY_6);
const _: () = assert!(SEVERITY_6 < SEVERITY_7);
const _: () = assert!(SEVERITY_7 < 1.0);

/// Check whether a probability rises above the noise floor.
#[inline]
pub fn is_above_noise_floor(probability: f32) -> bool { probability > SEVERITY_1 }
