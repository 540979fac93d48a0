//! Type definitions for the water-distribution network model.
//!
//! The serde shape follows the diagram editor's JSON export: nodes carry
//! `id`, `type`, `position` and `data`; edges carry `source`, `target` and
//! an optional `data` payload.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Kind of network element a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    Reservoir,
    SurgeTank,
    FlowBoundary,
    Junction,
    /// Any tag the renderer has no dedicated glyph for
    #[default]
    #[serde(other)]
    Other,
}

/// Canvas position in pixels, as placed by the editor
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`
    pub fn midpoint(&self, other: &Position) -> Position {
        Position {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Display identifier of a node. The editor stores it as either a number or text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeNumber {
    Number(f64),
    Text(String),
}

impl NodeNumber {
    fn is_blank(&self) -> bool {
        match self {
            NodeNumber::Number(_) => false,
            NodeNumber::Text(s) => s.is_empty(),
        }
    }
}

impl fmt::Display for NodeNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeNumber::Number(n) => f.write_str(&fmt_num(*n)),
            NodeNumber::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for NodeNumber {
    fn from(n: i32) -> Self {
        NodeNumber::Number(f64::from(n))
    }
}

impl From<u32> for NodeNumber {
    fn from(n: u32) -> Self {
        NodeNumber::Number(f64::from(n))
    }
}

impl From<&str> for NodeNumber {
    fn from(s: &str) -> Self {
        NodeNumber::Text(s.to_string())
    }
}

impl From<String> for NodeNumber {
    fn from(s: String) -> Self {
        NodeNumber::Text(s)
    }
}

/// Editable properties shown on a node glyph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_number: Option<NodeNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

/// A node of the network model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: NodeKind,
    #[serde(default, deserialize_with = "null_as_default")]
    pub position: Position,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: NodeData,
}

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            kind,
            position: Position::new(x, y),
            data: NodeData::default(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.data.label = Some(label.into());
        self
    }

    pub fn with_node_number(mut self, number: impl Into<NodeNumber>) -> Self {
        self.data.node_number = Some(number.into());
        self
    }

    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.data.elevation = Some(elevation);
        self
    }

    /// Label text, empty when unset
    pub fn label(&self) -> &str {
        self.data.label.as_deref().unwrap_or("")
    }

    /// Text for the "Node {..}" caption: the node number, or the id when there is none
    pub fn display_number(&self) -> String {
        match &self.data.node_number {
            Some(number) if !number.is_blank() => number.to_string(),
            _ => self.id.clone(),
        }
    }

    /// Text for the "Elev: {..}" caption, empty when unset
    pub fn display_elevation(&self) -> String {
        self.data.elevation.map(fmt_num).unwrap_or_default()
    }
}

/// Kind of connection an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Virtual connection with no physical conduit
    Dummy,
    #[default]
    #[serde(other)]
    Pipe,
}

/// Optional metadata carried by an edge
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<EdgeKind>,
}

/// A directed connection between two nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<EdgeData>,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            data: None,
        }
    }

    /// A virtual connection between `source` and `target`
    pub fn dummy(source: impl Into<String>, target: impl Into<String>) -> Self {
        let mut edge = Self::new(source, target);
        edge.data_mut().kind = Some(EdgeKind::Dummy);
        edge
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.data_mut().label = Some(label.into());
        self
    }

    fn data_mut(&mut self) -> &mut EdgeData {
        self.data.get_or_insert_with(EdgeData::default)
    }

    pub fn kind(&self) -> EdgeKind {
        self.data
            .as_ref()
            .and_then(|d| d.kind)
            .unwrap_or_default()
    }

    pub fn is_dummy(&self) -> bool {
        self.kind() == EdgeKind::Dummy
    }

    /// Label text, empty when unset
    pub fn label(&self) -> &str {
        self.data
            .as_ref()
            .and_then(|d| d.label.as_deref())
            .unwrap_or("")
    }
}

/// A complete model as exported by the editor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NetworkModel {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

/// First node with the given id. Duplicate ids resolve to the earliest entry.
pub fn find_node<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
    nodes.iter().find(|n| n.id == id)
}

/// Format a number the way a JavaScript editor prints it: shortest form, no
/// trailing `.0`, `-0` as `0`, and exponent form (`1e+21`, `1e-7`) outside
/// `[1e-6, 1e21)`.
pub fn fmt_num(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", n);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        };
    }
    format!("{}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num() {
        assert_eq!(fmt_num(250.0), "250");
        assert_eq!(fmt_num(12.5), "12.5");
        assert_eq!(fmt_num(-3.0), "-3");
        assert_eq!(fmt_num(-0.0), "0");
    }

    #[test]
    fn test_fmt_num_exponent_form_at_extremes() {
        assert_eq!(fmt_num(1e21), "1e+21");
        assert_eq!(fmt_num(-2.5e22), "-2.5e+22");
        assert_eq!(fmt_num(1e-7), "1e-7");
        assert_eq!(fmt_num(0.000001), "0.000001");
        assert_eq!(fmt_num(123456789012345680000.0), "123456789012345680000");
        assert_eq!(fmt_num(f64::INFINITY), "Infinity");
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let json = r#"{
            "nodes": [
                {"id": "a", "type": null, "position": {"x": 1, "y": 2}, "data": {}},
                {"id": "b", "type": "junction", "position": null, "data": null}
            ],
            "edges": [{"source": "a", "target": "b", "data": null}]
        }"#;
        let model: NetworkModel = serde_json::from_str(json).unwrap();

        assert_eq!(model.nodes[0].kind, NodeKind::Other);
        assert_eq!(model.nodes[0].position, Position::new(1.0, 2.0));
        assert_eq!(model.nodes[1].kind, NodeKind::Junction);
        assert_eq!(model.nodes[1].position, Position::default());
        assert_eq!(model.nodes[1].data, NodeData::default());
        assert_eq!(model.edges[0].kind(), EdgeKind::Pipe);
    }

    #[test]
    fn test_display_number_falls_back_to_id() {
        let node = Node::new("N7", NodeKind::Junction, 0.0, 0.0);
        assert_eq!(node.display_number(), "N7");

        let node = node.with_node_number(7);
        assert_eq!(node.display_number(), "7");

        let blank = Node::new("N8", NodeKind::Junction, 0.0, 0.0).with_node_number("");
        assert_eq!(blank.display_number(), "N8");
    }

    #[test]
    fn test_display_elevation_blank_when_missing() {
        let node = Node::new("N1", NodeKind::Reservoir, 0.0, 0.0);
        assert_eq!(node.display_elevation(), "");
        assert_eq!(node.with_elevation(101.25).display_elevation(), "101.25");
    }

    #[test]
    fn test_deserialize_editor_json() {
        let json = r#"{
            "nodes": [
                {"id": "a", "type": "surgeTank", "position": {"x": 10, "y": -4.5},
                 "data": {"label": "Tank", "nodeNumber": "12", "elevation": 88}},
                {"id": "b", "type": "valve", "position": {"x": 0, "y": 0}, "data": {}},
                {"id": "c", "position": {"x": 1, "y": 2}}
            ],
            "edges": [
                {"id": "e1", "source": "a", "target": "b", "data": {"label": "P1", "type": "dummy"}},
                {"source": "b", "target": "c", "data": {"type": "conduit"}},
                {"source": "a", "target": "c"}
            ]
        }"#;
        let model: NetworkModel = serde_json::from_str(json).unwrap();

        assert_eq!(model.nodes[0].kind, NodeKind::SurgeTank);
        assert_eq!(model.nodes[0].position, Position::new(10.0, -4.5));
        assert_eq!(model.nodes[0].display_number(), "12");
        assert_eq!(model.nodes[1].kind, NodeKind::Other);
        assert_eq!(model.nodes[2].kind, NodeKind::Other);

        assert!(model.edges[0].is_dummy());
        assert_eq!(model.edges[0].label(), "P1");
        assert_eq!(model.edges[1].kind(), EdgeKind::Pipe);
        assert_eq!(model.edges[2].kind(), EdgeKind::Pipe);
        assert_eq!(model.edges[2].label(), "");
    }

    #[test]
    fn test_find_node_first_match_wins() {
        let nodes = vec![
            Node::new("dup", NodeKind::Reservoir, 1.0, 1.0),
            Node::new("dup", NodeKind::Junction, 2.0, 2.0),
        ];
        let found = find_node(&nodes, "dup").unwrap();
        assert_eq!(found.kind, NodeKind::Reservoir);
        assert!(find_node(&nodes, "missing").is_none());
    }
}
