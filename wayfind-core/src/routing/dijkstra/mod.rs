mod state;
pub mod weighted;

pub use weighted::dijkstra_path;
