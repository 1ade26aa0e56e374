//! Traversal algorithms and route selection over the campus graph

mod algorithm;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod itinerary;
pub mod matrix;
mod path;
mod selector;

pub use algorithm::Algorithm;
pub use path::{Path, constrained_path_cost, path_cost};
pub use selector::{Route, best_route, find_route};
