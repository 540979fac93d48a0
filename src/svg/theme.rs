//! Fixed color palette for the system diagram.
//!
//! Every glyph kind has its own fill/stroke pair; captions and pipe colors
//! are shared across the whole drawing.

use crate::types::NodeKind;

/// Fill and stroke of a node glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphColors {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl GlyphColors {
    /// Palette entry for a node kind
    pub fn for_kind(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Reservoir => Self {
                fill: "#3498db",
                stroke: "#2980b9",
            },
            NodeKind::SurgeTank => Self {
                fill: "#f39c12",
                stroke: "#e67e22",
            },
            NodeKind::FlowBoundary => Self {
                fill: "#2ecc71",
                stroke: "#27ae60",
            },
            NodeKind::Junction => Self {
                fill: "#e74c3c",
                stroke: "#c0392b",
            },
            NodeKind::Other => Self {
                fill: "#95a5a6",
                stroke: "#7f8c8d",
            },
        }
    }
}

/// Colors shared by edges and captions
pub struct Palette;

impl Palette {
    /// Physical pipes and the arrowhead marker
    pub const PIPE: &'static str = "#3498db";
    /// Dashed virtual connections
    pub const DUMMY: &'static str = "#95a5a6";
    /// Captions and edge labels
    pub const TEXT: &'static str = "#2c3e50";
    /// Text drawn on top of a filled glyph
    pub const TEXT_ON_GLYPH: &'static str = "white";
}
