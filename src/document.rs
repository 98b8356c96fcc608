use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A point in canvas coordinates. Unbounded; negative values are valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A positioned node. `data` is an opaque payload carried through untouched;
/// the placement engine only ever reads `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Point,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: serde_json::Value,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Point) -> Self {
        Self {
            id: id.into(),
            position,
            data: serde_json::Value::Null,
        }
    }
}

/// A directed edge between two node ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid document JSON")]
    Parse(#[from] serde_json::Error),
}

/// A node/edge document as exchanged with the host editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Document {
    pub fn from_json(input: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let contents = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Edges whose source or target id matches no node. The layout engine
    /// tolerates them; callers may want to surface them anyway.
    pub fn dangling_edges(&self) -> Vec<&Edge> {
        let ids: HashSet<&str> = self.nodes.iter().map(|node| node.id.as_str()).collect();
        self.edges
            .iter()
            .filter(|edge| !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_minimal_document() {
        let doc = Document::from_json(r#"{"nodes": [], "edges": []}"#).unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let doc = Document::from_json("{}").unwrap();
        assert!(doc.nodes.is_empty());
        assert!(doc.edges.is_empty());
    }

    #[test]
    fn payload_survives_round_trip() {
        let input = r#"{
            "nodes": [{"id": "a", "position": {"x": 40.0, "y": 60.0}, "data": {"label": "Start"}}],
            "edges": []
        }"#;
        let doc = Document::from_json(input).unwrap();
        assert_eq!(doc.nodes[0].data["label"], "Start");

        let json = serde_json::to_string(&doc).unwrap();
        let back = Document::from_json(&json).unwrap();
        assert_eq!(back, doc);
    }

    #[test]
    fn null_payload_is_omitted_from_output() {
        let doc = Document {
            nodes: vec![Node::new("a", Point::new(0.0, 0.0))],
            edges: Vec::new(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("\"data\""));
    }

    #[test]
    fn reports_dangling_edges() {
        let doc = Document {
            nodes: vec![Node::new("a", Point::default())],
            edges: vec![Edge::new("a", "ghost"), Edge::new("a", "a")],
        };
        let dangling = doc.dangling_edges();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].target, "ghost");
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let err = Document::from_json("{nodes").unwrap_err();
        assert!(matches!(err, DocumentError::Parse(_)));
    }
}
