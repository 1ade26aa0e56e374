// Re-export key components
pub use crate::loading::{CampusModelConfig, campus_model_from_str, create_campus_model};
pub use crate::model::{
    CampusGraph, CampusModel, Edge, LocationGroup, LocationMarker, NameGroups, Node, centroid,
};
pub use crate::routing::itinerary::ExplanationRequest;
pub use crate::routing::matrix::route_matrix;
pub use crate::routing::{
    Algorithm, Path, Route, best_route, constrained_path_cost, find_route, path_cost,
};

// Core types
pub use crate::Distance; // meters
pub use crate::Error;
pub use crate::NodeId;
pub use crate::NodeIndex;
