//! Campus walking-route engine.
//!
//! Builds a directed, weighted graph of physical waypoints, groups waypoints
//! by their display name and finds the cheapest route between two named
//! locations with one of three traversal strategies.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{CampusModelConfig, campus_model_from_str, create_campus_model};
pub use model::{CampusGraph, CampusModel, Edge, LocationGroup, LocationMarker, NameGroups, Node};
pub use routing::{
    Algorithm, Path, Route, best_route, constrained_path_cost, find_route, path_cost,
};

/// Opaque waypoint identifier as found in the dataset
pub type NodeId = String;
/// Dense slot of a node inside [`CampusGraph`]
pub type NodeIndex = usize;
/// Physical distance in meters
pub type Distance = f64;
