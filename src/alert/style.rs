//! Per-severity visual treatment of an alert bar.
//!
//! The table holds one [`SeverityStyle`] per level. It is evaluated at
//! compile time and indexed directly, so a lookup never rebuilds anything.
//!
//! # Indicator Dots
//!
//! Each bar carries [`NUM_DOTS`] dots. A severity of `n` activates exactly
//! `n` dots from the left. Within the active run, dots the alert has
//! already passed are dimmed and the leading ones are lit in the tier's
//! accent:
//!
//! ```text
//! 0  . . . . . . .      (everything faded)
//! 1  C . . . . . .      C = cyan
//! 2  C C . . . . .
//! 3  d d Y . . . .      d = dimmed, Y = yellow
//! 4  d d Y Y . . .
//! 5  d d d d Y . .
//! 6  d d d d d R .      R = red
//! 7  d d d d d R R
//! ```

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

use super::severity::{Severity, Tier};
use crate::config::{BORDER_WIDTH, NUM_DOTS, NUM_SEVERITY_LEVELS};
use crate::error::AlertError;
use crate::ui::{BLACK, CYAN, DARK_TEAL, GRAY, OLIVE, PANEL, RED, Tint, WHITE, YELLOW, detail_style, label_style};

// =============================================================================
// Translucency Levels
// =============================================================================

/// Alpha of everything drawn on a disabled bar.
const DISABLED_ALPHA: u8 = 70;

/// Alpha of the disabled bar's panel fill.
const DISABLED_FILL_ALPHA: u8 = 50;

/// Alpha of the red high-alert fill.
const HIGH_FILL_ALPHA: u8 = 80;

// =============================================================================
// Style Types
// =============================================================================

/// Whether an indicator dot is showing.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DotState {
    /// Beyond the current severity.
    Off,
    /// Passed by the current severity.
    Dim,
    /// Leading edge of the current severity.
    Lit,
}

/// One indicator dot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Dot {
    pub state: DotState,
    pub tint: Tint,
}

impl Dot {
    const fn off(tint: Tint) -> Self {
        Self {
            state: DotState::Off,
            tint,
        }
    }

    const fn dim(color: Rgb888) -> Self {
        Self {
            state: DotState::Dim,
            tint: Tint::opaque(color),
        }
    }

    const fn lit(color: Rgb888) -> Self {
        Self {
            state: DotState::Lit,
            tint: Tint::opaque(color),
        }
    }

    /// Check if this dot counts towards the severity.
    #[inline]
    pub const fn is_active(self) -> bool { !matches!(self.state, DotState::Off) }
}

/// Complete visual treatment for one severity level.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeverityStyle {
    pub border: Tint,
    pub fill: Tint,
    pub icon: Tint,
    pub text: Tint,
    /// Border thickness in pixels.
    pub border_width: u32,
    /// Dots from left to right.
    pub dots: [Dot; NUM_DOTS],
}

impl SeverityStyle {
    /// Number of dots in the given state.
    pub fn count(
        &self,
        state: DotState,
    ) -> usize {
        self.dots.iter().filter(|d| d.state == state).count()
    }

    /// Number of lit or dimmed dots. Equals the severity level.
    pub fn active_count(&self) -> usize { self.dots.iter().filter(|d| d.is_active()).count() }

    /// Text style for the channel label.
    #[inline]
    pub fn label_style(&self) -> MonoTextStyle<'static, Rgb565> { label_style(self.text) }

    /// Text style for the probability readout.
    #[inline]
    pub fn detail_style(&self) -> MonoTextStyle<'static, Rgb565> { detail_style(self.text) }

    const fn build(level: u8) -> Self {
        let severity = match Severity::new(level) {
            Ok(s) => s,
            Err(_) => panic!("severity level out of range"),
        };

        let mut style = Self {
            border: Tint::opaque(BLACK),
            fill: Tint::opaque(PANEL),
            icon: Tint::opaque(WHITE),
            text: Tint::opaque(WHITE),
            border_width: BORDER_WIDTH,
            dots: [Dot::off(Tint::opaque(GRAY)); NUM_DOTS],
        };

        match severity.tier() {
            Tier::Disabled => {
                let faded = Tint::new(GRAY, DISABLED_ALPHA);
                style.border = Tint::new(BLACK, 0);
                style.fill = Tint::new(PANEL, DISABLED_FILL_ALPHA);
                style.icon = faded;
                style.text = faded;
                style.dots = [Dot::off(faded); NUM_DOTS];
            },
            Tier::Low => {
                style.icon = Tint::opaque(CYAN);
                let mut i = 0;
                while i < level as usize {
                    style.dots[i] = Dot::lit(CYAN);
                    i += 1;
                }
            },
            Tier::Medium if level < 5 => {
                style.icon = Tint::opaque(YELLOW);
                style.dots[0] = Dot::dim(DARK_TEAL);
                style.dots[1] = Dot::dim(DARK_TEAL);
                style.dots[2] = Dot::lit(YELLOW);
                if level == 4 {
                    style.dots[3] = Dot::lit(YELLOW);
                }
            },
            Tier::Medium | Tier::High => {
                let high = level >= 6;
                style.border = Tint::opaque(if high { RED } else { YELLOW });
                if high {
                    style.fill = Tint::new(RED, HIGH_FILL_ALPHA);
                }
                style.dots[0] = Dot::dim(DARK_TEAL);
                style.dots[1] = Dot::dim(DARK_TEAL);
                style.dots[2] = Dot::dim(OLIVE);
                style.dots[3] = Dot::dim(OLIVE);
                style.dots[4] = if high { Dot::dim(OLIVE) } else { Dot::lit(YELLOW) };
                if high {
                    style.dots[5] = Dot::lit(RED);
                }
                if level == 7 {
                    style.dots[6] = Dot::lit(RED);
                }
            },
        }

        style
    }
}

const fn build_table() -> [SeverityStyle; NUM_SEVERITY_LEVELS] {
    let mut table = [SeverityStyle::build(0); NUM_SEVERITY_LEVELS];
    let mut level = 1;
    while level < NUM_SEVERITY_LEVELS {
        table[level] = SeverityStyle::build(level as u8);
        level += 1;
    }
    table
}

/// Styles indexed by severity level.
pub static SEVERITY_STYLES: [SeverityStyle; NUM_SEVERITY_LEVELS] = build_table();

/// Look up the style for a raw severity level.
///
/// Levels above 7 are a caller bug and return [`AlertError::OutOfRange`].
pub fn style_for(level: u8) -> Result<&'static SeverityStyle, AlertError> {
    Severity::new(level).map(Severity::style)
}

impl Severity {
    /// Style for this level. Infallible since the level is already valid.
    #[inline]
    pub fn style(self) -> &'static SeverityStyle { &SEVERITY_STYLES[self.index()] }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_dots_match_level() {
        for (level, style) in SEVERITY_STYLES.iter().enumerate() {
            assert_eq!(style.active_count(), level, "level {level}");
        }
    }

    #[test]
    fn test_active_dots_non_decreasing() {
        for pair in SEVERITY_STYLES.windows(2) {
            assert!(pair[0].active_count() <= pair[1].active_count());
            assert!(pair[0].count(DotState::Dim) <= pair[1].count(DotState::Dim));
        }
    }

    #[test]
    fn test_active_dots_are_a_prefix() {
        for style in &SEVERITY_STYLES {
            let active = style.active_count();
            assert!(style.dots[..active].iter().all(|d| d.is_active()));
            assert!(style.dots[active..].iter().all(|d| d.state == DotState::Off));
        }
    }

    #[test]
    fn test_style_for_out_of_range() {
        assert_eq!(style_for(8), Err(AlertError::OutOfRange(8)));
        assert_eq!(style_for(u8::MAX), Err(AlertError::OutOfRange(u8::MAX)));
    }

    #[test]
    fn test_style_for_matches_table() {
        for level in 0..=7u8 {
            let style = style_for(level).unwrap();
            assert!(core::ptr::eq(style, &SEVERITY_STYLES[level as usize]));
        }
    }

    #[test]
    fn test_disabled_style_is_faded() {
        let style = style_for(0).unwrap();
        assert!(style.border.is_transparent());
        assert_eq!(style.fill, Tint::new(PANEL, DISABLED_FILL_ALPHA));
        assert_eq!(style.text, Tint::new(GRAY, DISABLED_ALPHA));
        assert_eq!(style.count(DotState::Off), 7);
    }

    #[test]
    fn test_low_tier_is_cyan() {
        for level in [1, 2] {
            let style = style_for(level).unwrap();
            assert_eq!(style.icon, Tint::opaque(CYAN));
            assert_eq!(style.count(DotState::Lit), level as usize);
            assert_eq!(style.border, Tint::opaque(BLACK));
        }
    }

    #[test]
    fn test_medium_tier() {
        let style = style_for(4).unwrap();
        assert_eq!(style.icon, Tint::opaque(YELLOW));
        assert_eq!(style.dots[3], Dot::lit(YELLOW));

        let style = style_for(5).unwrap();
        assert_eq!(style.border, Tint::opaque(YELLOW), "level 5 gets the yellow border");
        assert_eq!(style.fill, Tint::opaque(PANEL));
        assert_eq!(style.dots[4], Dot::lit(YELLOW));
    }

    #[test]
    fn test_high_tier_is_red() {
        for level in [6, 7] {
            let style = style_for(level).unwrap();
            assert_eq!(style.border, Tint::opaque(RED));
            assert_eq!(style.fill, Tint::new(RED, HIGH_FILL_ALPHA));
            assert_eq!(style.icon, Tint::opaque(WHITE));
        }
        assert_eq!(style_for(7).unwrap().count(DotState::Lit), 2);
    }

    #[test]
    fn test_border_width_constant() {
        assert!(SEVERITY_STYLES.iter().all(|s| s.border_width == BORDER_WIDTH));
    }

    #[test]
    fn test_label_style_follows_text_tint() {
        let style = Severity::MAX.style();
        assert_eq!(style.label_style().text_color, Some(style.text.to_rgb565()));
    }
}
