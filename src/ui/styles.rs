//! Pre-computed text styles for alert bar labels.
//!
//! Fonts are shared `const` references. Only the color varies with
//! severity, so callers build styles with
//! `MonoTextStyle::new(LABEL_FONT, color)`.

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use super::colors::Tint;

// =============================================================================
// Alignment
// =============================================================================

/// Labels sit left of the dots, vertically centered in the bar.
pub const LABEL_ALIGNMENT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Middle)
    .build();

// =============================================================================
// Fonts
// =============================================================================

/// Channel label font (`ProFont` 18pt).
pub const LABEL_FONT: &MonoFont = &PROFONT_18_POINT;

/// Smaller font for the probability readout next to the label.
pub const DETAIL_FONT: &MonoFont = &PROFONT_12_POINT;

/// Build the label style for a tint.
#[inline]
pub fn label_style(tint: Tint) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(LABEL_FONT, tint.to_rgb565()) }

/// Build the probability readout style for a tint.
#[inline]
pub fn detail_style(tint: Tint) -> MonoTextStyle<'static, Rgb565> { MonoTextStyle::new(DETAIL_FONT, tint.to_rgb565()) }
