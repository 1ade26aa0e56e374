//! Data model for campus routing
//!
//! Contains the waypoint graph, the name index over it and the
//! combined model that route queries run against.

pub mod campus_model;
pub mod graph;
pub mod names;

pub use campus_model::CampusModel;
pub use graph::{CampusGraph, Edge, Node};
pub use names::{LocationGroup, LocationMarker, NameGroups, centroid};
