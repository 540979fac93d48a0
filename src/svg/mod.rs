//! SVG renderer - converts a network model into an SVG string.
//!
//! Pure string building, no DOM manipulation.

mod renderer;
mod styles;
mod theme;

pub use renderer::{escape_xml, render_svg};
pub use styles::Canvas;
pub use theme::{GlyphColors, Palette};
