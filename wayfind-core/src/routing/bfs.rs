use std::collections::VecDeque;

use fixedbitset::FixedBitSet;

use super::Path;
use crate::{CampusGraph, Error, NodeIndex};

/// Breadth-first search ignoring edge weights.
///
/// Returns a path with the fewest edges. Among equally short paths the one
/// discovered first in adjacency order wins. The path is empty if `end` is
/// unreachable.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if an endpoint is not in the graph.
pub fn bfs_path(graph: &CampusGraph, start: &str, end: &str) -> Result<Path, Error> {
    let source = graph.index_of(start)?;
    let target = graph.index_of(end)?;
    if source == target {
        return Ok(Path::from_indices(graph, &[source]));
    }

    let node_count = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(node_count);
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut queue = VecDeque::from([source]);
    visited.insert(source);

    while let Some(node) = queue.pop_front() {
        for (next, _) in graph.out_edges(node) {
            // Predecessor is fixed the first time a node is discovered
            if visited.put(next) {
                continue;
            }
            predecessors[next] = Some(node);

            if next == target {
                return Ok(Path::reconstruct(graph, &predecessors, source, target));
            }
            queue.push_back(next);
        }
    }

    Ok(Path::empty())
}
