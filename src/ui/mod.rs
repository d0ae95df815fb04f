//! UI styling constants consumed by the rendering host.
//!
//! - `colors`: Alert palette and translucent [`Tint`]
//! - `styles`: Label fonts and text styles

mod colors;
mod styles;

pub use colors::{BLACK, CYAN, DARK_TEAL, GRAY, OLIVE, OPAQUE, PANEL, RED, Tint, WHITE, YELLOW};
pub use styles::{DETAIL_FONT, LABEL_ALIGNMENT, LABEL_FONT, detail_style, label_style};
