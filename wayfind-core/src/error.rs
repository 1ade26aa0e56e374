use thiserror::Error;

use crate::{Distance, NodeId};

#[derive(Error, Debug)]
pub enum Error {
    #[error("Edge {from} -> {to} references unknown node {missing}")]
    DanglingEdge {
        from: NodeId,
        to: NodeId,
        missing: NodeId,
    },
    #[error("Duplicate node id: {0}")]
    DuplicateNode(NodeId),
    #[error("Edge {from} -> {to} has invalid weight {weight}")]
    InvalidWeight {
        from: NodeId,
        to: NodeId,
        weight: Distance,
    },
    #[error("Unknown node: {0}")]
    UnknownNode(NodeId),
    #[error("Location group has no members")]
    EmptyGroup,
    #[error("Unknown location: {0}")]
    UnknownLocation(String),
    #[error("Start and end locations are the same: {0}")]
    SameLocation(String),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
}
