use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Path, bfs::bfs_path, dfs::dfs_path, dijkstra::dijkstra_path};
use crate::{CampusGraph, Error};

/// Traversal strategy used for every candidate pair of a route query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Fewest edges, ignores weights
    Bfs,
    /// First path found depth-first, no optimality guarantee
    Dfs,
    /// Minimum total weight, honors the accessibility constraint
    #[default]
    #[serde(alias = "dijkstra")]
    Weighted,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Weighted];

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Weighted => "weighted",
        }
    }

    /// Runs the traversal between two node ids. Only the weighted search
    /// looks at `accessible_only`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if an endpoint is not in the graph.
    pub fn find_path(
        self,
        graph: &CampusGraph,
        start: &str,
        end: &str,
        accessible_only: bool,
    ) -> Result<Path, Error> {
        match self {
            Algorithm::Bfs => bfs_path(graph, start, end),
            Algorithm::Dfs => dfs_path(graph, start, end),
            Algorithm::Weighted => dijkstra_path(graph, start, end, accessible_only),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "weighted" | "dijkstra" => Ok(Algorithm::Weighted),
            other => Err(Error::InvalidData(format!(
                "Unknown algorithm '{other}', expected one of bfs, dfs, weighted"
            ))),
        }
    }
}
