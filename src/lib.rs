//! whamo-diagram - Render WHAMO water-distribution network models as HTML/SVG
//!
//! This library turns the nodes and edges of a network model (reservoirs,
//! surge tanks, flow boundaries, junctions and the pipes between them) into a
//! standalone HTML page with an inline SVG drawing. Positions come from the
//! caller; nothing is laid out here.
//!
//! # Example
//!
//! ```rust
//! use whamo_diagram::{render, Edge, Node, NodeKind};
//!
//! let nodes = vec![
//!     Node::new("N1", NodeKind::Reservoir, 100.0, 100.0).with_label("Lake"),
//!     Node::new("N2", NodeKind::Junction, 300.0, 100.0),
//! ];
//! let edges = vec![Edge::new("N1", "N2").with_label("P1")];
//!
//! let doc = render(&nodes, &edges);
//! assert_eq!(doc.mime_type(), "text/html;charset=utf-8");
//! assert!(doc.as_str().contains("Lake"));
//! ```
//!
//! Rendering never fails: missing optional fields print as blanks and edges
//! that reference an unknown node are left out.

pub mod error;
pub mod html;
pub mod svg;
pub mod types;

pub use error::{Error, Result};
pub use html::{HtmlDocument, HTML_MIME_TYPE};
pub use types::*;

use serde::{Deserialize, Serialize};

/// Render a network model to an HTML document using the default page settings.
pub fn render(nodes: &[Node], edges: &[Edge]) -> HtmlDocument {
    render_with_options(nodes, edges, &DiagramOptions::default())
}

/// Render a network model to an HTML document.
pub fn render_with_options(
    nodes: &[Node],
    edges: &[Edge],
    options: &DiagramOptions,
) -> HtmlDocument {
    let svg = svg::render_svg(nodes, edges, options);
    HtmlDocument::from_svg(&svg, options)
}

/// Parse a `{"nodes": [...], "edges": [...]}` model and render it.
///
/// # Example
/// ```rust
/// let doc = whamo_diagram::render_json(r#"{"nodes": [], "edges": []}"#).unwrap();
/// assert!(doc.as_str().contains("<svg"));
/// ```
pub fn render_json(json: &str) -> Result<HtmlDocument> {
    render_json_with_options(json, &DiagramOptions::default())
}

/// Parse a model from JSON and render it with the given page settings.
pub fn render_json_with_options(json: &str, options: &DiagramOptions) -> Result<HtmlDocument> {
    let model: NetworkModel = serde_json::from_str(json)?;
    Ok(render_with_options(&model.nodes, &model.edges, options))
}

/// Page and canvas settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagramOptions {
    /// Logical viewBox width. Default: 1300
    pub width: f64,
    /// Logical viewBox height. Default: 750
    pub height: f64,
    /// Browser tab title. Default: "WHAMO System Diagram"
    pub title: String,
    /// Page heading above the drawing
    pub heading: String,
}

impl Default for DiagramOptions {
    fn default() -> Self {
        Self {
            width: svg::Canvas::WIDTH,
            height: svg::Canvas::HEIGHT,
            title: "WHAMO System Diagram".to_string(),
            heading: "🌊 WHAMO Water Distribution System Diagram".to_string(),
        }
    }
}
