use std::path::PathBuf;

/// Settings for building a [`CampusModel`](crate::CampusModel) from disk
#[derive(Debug, Clone)]
pub struct CampusModelConfig {
    /// JSON document with `nodes` and `edges` arrays
    pub dataset_path: PathBuf,
    /// Insert the reverse of every edge that lacks one. Edges are strictly
    /// directed when this is off.
    pub mirror_edges: bool,
}

impl CampusModelConfig {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            mirror_edges: false,
        }
    }
}
