//! SVG renderer - converts network nodes and edges into an SVG string.
//!
//! Pure string building, no DOM manipulation.
//! Renders back-to-front: edges → edge labels → node glyphs with captions.

use log::debug;

use super::styles::{ArrowHead, FontSizes, Glyph, StrokeWidths, DUMMY_DASH, EDGE_LABEL_LIFT};
use super::theme::{GlyphColors, Palette};
use crate::types::{find_node, fmt_num, Edge, Node, NodeKind};
use crate::DiagramOptions;

/// Render nodes and edges as a standalone `<svg>` element.
///
/// Edges whose source or target is not among `nodes` are skipped.
pub fn render_svg(nodes: &[Node], edges: &[Edge], options: &DiagramOptions) -> String {
    debug!(nodes = nodes.len(), edges = edges.len(); "Rendering system diagram");

    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(options.width, options.height));
    parts.push("<defs>".to_string());
    parts.push(arrow_marker_defs());
    parts.push("</defs>".to_string());

    // 1. Pipes, beneath the node glyphs
    for edge in edges {
        if let Some(rendered) = render_edge(edge, nodes) {
            parts.push(rendered);
        }
    }

    // 2. Node glyphs with captions
    for node in nodes {
        parts.push(render_node(node));
    }

    parts.push("</svg>".to_string());

    parts.join("\n")
}

fn svg_open_tag(width: f64, height: f64) -> String {
    format!(
        r#"<svg viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet" xmlns="http://www.w3.org/2000/svg">"#,
        fmt_num(width),
        fmt_num(height)
    )
}

// ============================================================================
// Arrow marker definitions
// ============================================================================

fn arrow_marker_defs() -> String {
    format!(
        r#"  <marker id="arrowhead" markerWidth="{}" markerHeight="{}" refX="{}" refY="{}" orient="auto">
    <polygon points="{}" fill="{}" />
  </marker>"#,
        ArrowHead::WIDTH,
        ArrowHead::HEIGHT,
        ArrowHead::REF_X,
        ArrowHead::REF_Y,
        ArrowHead::POINTS,
        Palette::PIPE
    )
}

// ============================================================================
// Edge rendering
// ============================================================================

/// Line plus midpoint label, or `None` when an endpoint is missing.
fn render_edge(edge: &Edge, nodes: &[Node]) -> Option<String> {
    let source = find_node(nodes, &edge.source)?;
    let target = find_node(nodes, &edge.target)?;

    let from = source.position;
    let to = target.position;

    let stroke = if edge.is_dummy() {
        format!(
            r#"stroke="{}" stroke-width="{}" stroke-dasharray="{}""#,
            Palette::DUMMY,
            StrokeWidths::DUMMY,
            DUMMY_DASH
        )
    } else {
        format!(
            r#"stroke="{}" stroke-width="{}" marker-end="url(#arrowhead)""#,
            Palette::PIPE,
            StrokeWidths::PIPE
        )
    };

    let line = format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" {} fill="none" />"#,
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(to.x),
        fmt_num(to.y),
        stroke
    );

    let mid = from.midpoint(&to);
    let label = render_text(
        mid.x,
        mid.y - EDGE_LABEL_LIFT,
        TextStyle::bold("middle", Palette::TEXT, FontSizes::EDGE_LABEL),
        edge.label(),
    );

    Some(format!("{}\n{}", line, label))
}

// ============================================================================
// Node rendering
// ============================================================================

fn render_node(node: &Node) -> String {
    let x = node.position.x;
    let y = node.position.y;
    let colors = GlyphColors::for_kind(node.kind);

    let elements = match node.kind {
        NodeKind::Reservoir => render_reservoir(node, x, y, colors),
        NodeKind::SurgeTank => render_surge_tank(node, x, y, colors),
        NodeKind::FlowBoundary => render_flow_boundary(node, x, y, colors),
        NodeKind::Junction => render_junction(node, x, y, colors),
        NodeKind::Other => render_fallback(node, x, y, colors),
    };

    format!("<g>\n{}\n</g>", elements.join("\n"))
}

fn node_caption(node: &Node) -> String {
    format!("Node {}", node.display_number())
}

fn elevation_caption(node: &Node) -> String {
    format!("Elev: {}", node.display_elevation())
}

fn render_reservoir(node: &Node, x: f64, y: f64, colors: GlyphColors) -> Vec<String> {
    let w = Glyph::RESERVOIR_WIDTH;
    let h = Glyph::RESERVOIR_HEIGHT;
    vec![
        render_rect(x - w / 2.0, y - h / 2.0, w, h, colors),
        render_text(
            x,
            y + 5.0,
            TextStyle::bold("middle", Palette::TEXT_ON_GLYPH, FontSizes::RESERVOIR_LABEL),
            node.label(),
        ),
        render_text(
            x,
            y - 30.0,
            TextStyle::plain("middle", FontSizes::CAPTION),
            &node_caption(node),
        ),
        render_text(
            x,
            y + 35.0,
            TextStyle::plain("middle", FontSizes::SMALL_CAPTION),
            &elevation_caption(node),
        ),
    ]
}

fn render_surge_tank(node: &Node, x: f64, y: f64, colors: GlyphColors) -> Vec<String> {
    let w = Glyph::SURGE_TANK_WIDTH;
    let h = Glyph::SURGE_TANK_HEIGHT;
    vec![
        render_rect(x - w / 2.0, y - h / 2.0, w, h, colors),
        render_text(
            x,
            y + 5.0,
            TextStyle::bold("middle", Palette::TEXT_ON_GLYPH, FontSizes::GLYPH_TEXT),
            "ST",
        ),
        render_text(
            x,
            y + 50.0,
            TextStyle::plain("middle", FontSizes::SMALL_CAPTION),
            &node_caption(node),
        ),
    ]
}

fn render_flow_boundary(node: &Node, x: f64, y: f64, colors: GlyphColors) -> Vec<String> {
    let half = Glyph::BOUNDARY_HALF_HEIGHT;
    // top, tip, bottom
    let points = format!(
        "{},{} {},{} {},{}",
        fmt_num(x),
        fmt_num(y - half),
        fmt_num(x + Glyph::BOUNDARY_LENGTH),
        fmt_num(y),
        fmt_num(x),
        fmt_num(y + half)
    );
    vec![
        format!(
            r#"<polygon points="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
            points,
            colors.fill,
            colors.stroke,
            StrokeWidths::GLYPH
        ),
        render_text(
            x + 25.0,
            y + 5.0,
            TextStyle::bold("start", Palette::TEXT, FontSizes::GLYPH_TEXT),
            node.label(),
        ),
        render_text(
            x + 25.0,
            y + 18.0,
            TextStyle::plain("start", FontSizes::SMALL_CAPTION),
            &node_caption(node),
        ),
    ]
}

fn render_junction(node: &Node, x: f64, y: f64, colors: GlyphColors) -> Vec<String> {
    vec![
        render_circle(x, y, Glyph::JUNCTION_RADIUS, colors),
        render_text(
            x,
            y + 30.0,
            TextStyle::plain("middle", FontSizes::CAPTION),
            &node_caption(node),
        ),
        render_text(
            x,
            y + 45.0,
            TextStyle::plain("middle", FontSizes::SMALL_CAPTION),
            "Junction",
        ),
        render_text(
            x,
            y + 60.0,
            TextStyle::plain("middle", FontSizes::SMALL_CAPTION),
            &elevation_caption(node),
        ),
    ]
}

fn render_fallback(node: &Node, x: f64, y: f64, colors: GlyphColors) -> Vec<String> {
    vec![
        render_circle(x, y, Glyph::FALLBACK_RADIUS, colors),
        render_text(
            x,
            y - 25.0,
            TextStyle::plain("middle", FontSizes::FALLBACK_CAPTION),
            &node_caption(node),
        ),
        render_text(
            x,
            y - 12.0,
            TextStyle::plain("middle", FontSizes::SMALL_CAPTION),
            &elevation_caption(node),
        ),
    ]
}

// --- Basic shapes ---

fn render_rect(x: f64, y: f64, w: f64, h: f64, colors: GlyphColors) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(w),
        fmt_num(h),
        colors.fill,
        colors.stroke,
        StrokeWidths::GLYPH
    )
}

fn render_circle(cx: f64, cy: f64, r: f64, colors: GlyphColors) -> String {
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}" />"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(r),
        colors.fill,
        colors.stroke,
        StrokeWidths::GLYPH
    )
}

// ============================================================================
// Text rendering
// ============================================================================

#[derive(Debug, Clone, Copy)]
struct TextStyle {
    anchor: &'static str,
    fill: &'static str,
    size: f64,
    bold: bool,
}

impl TextStyle {
    fn plain(anchor: &'static str, size: f64) -> Self {
        Self {
            anchor,
            fill: Palette::TEXT,
            size,
            bold: false,
        }
    }

    fn bold(anchor: &'static str, fill: &'static str, size: f64) -> Self {
        Self {
            anchor,
            fill,
            size,
            bold: true,
        }
    }
}

fn render_text(x: f64, y: f64, style: TextStyle, content: &str) -> String {
    let weight = if style.bold { r#" font-weight="bold""# } else { "" };
    format!(
        r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{}>{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        style.anchor,
        style.fill,
        fmt_num(style.size),
        weight,
        escape_xml(content)
    )
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
