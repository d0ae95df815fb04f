//! Color palette for the driver alert cluster.
//!
//! Colors are kept in 24-bit [`Rgb888`] so the panel values are exact. Use
//! [`Tint::to_rgb565`] when drawing to an RGB565 framebuffer. Translucent
//! treatments (the disabled bar, the red high-alert fill) carry an alpha
//! alongside the color in [`Tint`].

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

// =============================================================================
// Base Colors
// =============================================================================

/// Pure black. Default border of bars below the yellow tier.
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);

/// Near-white used for icons and labels on dark panels.
pub const WHITE: Rgb888 = Rgb888::new(254, 255, 255);

/// Dark slate panel fill behind every alert bar.
pub const PANEL: Rgb888 = Rgb888::new(11, 16, 22);

/// Neutral gray for unlit indicator dots and disabled content.
pub const GRAY: Rgb888 = Rgb888::new(118, 117, 117);

// =============================================================================
// Alert Colors
// =============================================================================

/// Low-tier accent (severity 1-2).
pub const CYAN: Rgb888 = Rgb888::new(0, 209, 255);

/// Medium-tier accent (severity 3-5).
pub const YELLOW: Rgb888 = Rgb888::new(239, 255, 54);

/// High-tier accent (severity 6-7).
pub const RED: Rgb888 = Rgb888::new(255, 60, 70);

/// Dimmed cyan for dots the alert has already passed.
pub const DARK_TEAL: Rgb888 = Rgb888::new(8, 64, 80);

/// Dimmed yellow for dots the alert has already passed.
pub const OLIVE: Rgb888 = Rgb888::new(67, 71, 21);

// =============================================================================
// Translucency
// =============================================================================

/// Fully opaque alpha.
pub const OPAQUE: u8 = 255;

/// Color with alpha, as painted by the host.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tint {
    pub color: Rgb888,
    pub alpha: u8,
}

impl Tint {
    pub const fn new(
        color: Rgb888,
        alpha: u8,
    ) -> Self {
        Self { color, alpha }
    }

    /// Fully opaque tint.
    pub const fn opaque(color: Rgb888) -> Self { Self::new(color, OPAQUE) }

    /// Check if this tint paints nothing.
    #[inline]
    pub const fn is_transparent(self) -> bool { self.alpha == 0 }

    /// Color converted for an RGB565 display. Alpha is left to the host.
    #[inline]
    pub fn to_rgb565(self) -> Rgb565 { Rgb565::from(self.color) }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::pixelcolor::RgbColor;

    use super::*;

    #[test]
    fn test_opaque() {
        let tint = Tint::opaque(RED);
        assert_eq!(tint.alpha, OPAQUE);
        assert!(!tint.is_transparent());
        assert!(Tint::new(BLACK, 0).is_transparent());
    }

    #[test]
    fn test_to_rgb565_extremes() {
        assert_eq!(Tint::opaque(BLACK).to_rgb565(), Rgb565::BLACK);
        let white = Tint::opaque(Rgb888::new(255, 255, 255)).to_rgb565();
        assert_eq!(white, Rgb565::WHITE);
    }

    #[test]
    fn test_dim_colors_darker_than_accents() {
        let sum = |c: Rgb888| u32::from(c.r()) + u32::from(c.g()) + u32::from(c.b());
        assert!(sum(DARK_TEAL) < sum(CYAN));
        assert!(sum(OLIVE) < sum(YELLOW));
    }
}
