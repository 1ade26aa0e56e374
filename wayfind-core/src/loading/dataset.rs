//! Raw dataset records as published alongside the campus map

use serde::{Deserialize, Deserializer};

use crate::{Distance, Edge, Node, NodeId};

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct RawDataset {
    pub nodes: Vec<RawNode>,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawNode {
    #[serde(deserialize_with = "deserialize_node_id")]
    pub id: NodeId,
    #[serde(default)]
    pub name: Option<String>,
    pub lat: f64,
    #[serde(alias = "lon")]
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEdge {
    #[serde(deserialize_with = "deserialize_node_id")]
    pub from: NodeId,
    #[serde(deserialize_with = "deserialize_node_id")]
    pub to: NodeId,
    #[serde(alias = "distance")]
    pub weight: Distance,
    /// Missing means accessible
    #[serde(default)]
    pub accessible: Option<bool>,
}

impl From<RawNode> for Node {
    fn from(raw: RawNode) -> Self {
        Node {
            id: raw.id,
            name: raw.name,
            geometry: geo::Point::new(raw.lng, raw.lat),
        }
    }
}

impl From<RawEdge> for Edge {
    fn from(raw: RawEdge) -> Self {
        Edge::new(raw.from, raw.to, raw.weight).with_accessible(raw.accessible.unwrap_or(true))
    }
}

/// Node ids appear both as JSON strings and as integers
fn deserialize_node_id<'de, D>(deserializer: D) -> Result<NodeId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Signed(i64),
        Unsigned(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Signed(id) => id.to_string(),
        RawId::Unsigned(id) => id.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_and_integer_ids() {
        let dataset: RawDataset = serde_json::from_str(
            r#"{
                "nodes": [
                    {"id": 1, "name": "Library", "lat": 10.0, "lng": 20.0},
                    {"id": "gate-2", "lat": 11.0, "lon": 21.0}
                ],
                "edges": [{"from": 1, "to": "gate-2", "weight": 4.5}]
            }"#,
        )
        .unwrap();

        let node = Node::from(dataset.nodes[0].clone());
        assert_eq!(node.id, "1");
        assert_eq!(node.display_name(), Some("Library"));
        assert_eq!(Node::from(dataset.nodes[1].clone()).lng(), 21.0);

        let edge = Edge::from(dataset.edges[0].clone());
        assert_eq!((edge.from.as_str(), edge.to.as_str()), ("1", "gate-2"));
        assert!(edge.accessible);
    }

    #[test]
    fn explicit_accessibility_is_kept() {
        let edge: RawEdge =
            serde_json::from_str(r#"{"from": "a", "to": "b", "weight": 1, "accessible": false}"#)
                .unwrap();
        assert!(!Edge::from(edge).accessible);
    }

    #[test]
    fn null_name_is_absent() {
        let node: RawNode =
            serde_json::from_str(r#"{"id": "a", "name": null, "lat": 0, "lng": 0}"#).unwrap();
        assert_eq!(Node::from(node).display_name(), None);
    }
}
