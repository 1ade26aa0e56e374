//! Walkway network of the campus

pub mod components;
pub mod network;

pub use components::{Edge, Node};
pub use network::CampusGraph;
