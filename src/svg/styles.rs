//! Font sizes, stroke widths and glyph geometry.
//!
//! All values are in px of the diagram's logical viewBox.

/// Default logical canvas size
pub struct Canvas;

impl Canvas {
    pub const WIDTH: f64 = 1300.0;
    pub const HEIGHT: f64 = 750.0;
}

/// Fixed font sizes used in the renderer
pub struct FontSizes;

impl FontSizes {
    pub const EDGE_LABEL: f64 = 10.0;
    pub const RESERVOIR_LABEL: f64 = 12.0;
    pub const GLYPH_TEXT: f64 = 11.0;
    pub const CAPTION: f64 = 11.0;
    pub const FALLBACK_CAPTION: f64 = 10.0;
    pub const SMALL_CAPTION: f64 = 9.0;
}

/// Stroke widths per element type
pub struct StrokeWidths;

impl StrokeWidths {
    pub const GLYPH: f64 = 2.0;
    pub const PIPE: f64 = 3.0;
    pub const DUMMY: f64 = 2.0;
}

/// Dash pattern of virtual connections
pub const DUMMY_DASH: &str = "5,5";

/// Arrowhead marker dimensions
pub struct ArrowHead;

impl ArrowHead {
    pub const WIDTH: f64 = 10.0;
    pub const HEIGHT: f64 = 10.0;
    pub const REF_X: f64 = 9.0;
    pub const REF_Y: f64 = 3.0;
    pub const POINTS: &'static str = "0 0, 10 3, 0 6";
}

/// Distance an edge label is lifted above the segment midpoint
pub const EDGE_LABEL_LIFT: f64 = 10.0;

/// Glyph sizes per node kind
pub struct Glyph;

impl Glyph {
    pub const RESERVOIR_WIDTH: f64 = 50.0;
    pub const RESERVOIR_HEIGHT: f64 = 40.0;
    pub const SURGE_TANK_WIDTH: f64 = 40.0;
    pub const SURGE_TANK_HEIGHT: f64 = 80.0;
    /// Half height of the flow-boundary triangle
    pub const BOUNDARY_HALF_HEIGHT: f64 = 10.0;
    /// Tip distance of the flow-boundary triangle
    pub const BOUNDARY_LENGTH: f64 = 20.0;
    pub const JUNCTION_RADIUS: f64 = 6.0;
    pub const FALLBACK_RADIUS: f64 = 5.0;
}
