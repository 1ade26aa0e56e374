use fixedbitset::FixedBitSet;

use super::Path;
use crate::{CampusGraph, Error, NodeIndex};

/// Depth-first search ignoring edge weights.
///
/// Follows the first untried outgoing edge until it reaches `end` or a dead
/// end, then backtracks. The returned path is the first one this order finds
/// and is not shortest by any metric. Empty if `end` is unreachable.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if an endpoint is not in the graph.
pub fn dfs_path(graph: &CampusGraph, start: &str, end: &str) -> Result<Path, Error> {
    let source = graph.index_of(start)?;
    let target = graph.index_of(end)?;

    let mut visited = FixedBitSet::with_capacity(graph.node_count());
    visited.insert(source);

    // Each frame is a node on the current walk and the position of its next
    // untried outgoing edge
    let mut stack: Vec<(NodeIndex, usize)> = vec![(source, 0)];

    while let Some(frame) = stack.last_mut() {
        let node = frame.0;
        if node == target {
            let walk: Vec<NodeIndex> = stack.iter().map(|&(node, _)| node).collect();
            return Ok(Path::from_indices(graph, &walk));
        }

        let mut next = None;
        while let Some(candidate) = graph.successor(node, frame.1) {
            frame.1 += 1;
            if !visited.put(candidate) {
                next = Some(candidate);
                break;
            }
        }

        match next {
            Some(candidate) => stack.push((candidate, 0)),
            None => {
                stack.pop();
            }
        }
    }

    Ok(Path::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Node};

    fn graph(edges: Vec<Edge>) -> CampusGraph {
        let nodes = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|id| Node::new(id, 0.0, 0.0));
        CampusGraph::build(nodes, edges).unwrap()
    }

    #[test]
    fn follows_first_edge_before_shorter_alternative() {
        let graph = graph(vec![
            Edge::new("A", "B", 1.0),
            Edge::new("A", "D", 1.0),
            Edge::new("B", "C", 1.0),
            Edge::new("C", "D", 1.0),
        ]);
        assert_eq!(
            dfs_path(&graph, "A", "D").unwrap().nodes(),
            ["A", "B", "C", "D"]
        );
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        let graph = graph(vec![
            Edge::new("A", "B", 1.0),
            Edge::new("B", "E", 1.0),
            Edge::new("A", "C", 1.0),
            Edge::new("C", "D", 1.0),
        ]);
        assert_eq!(dfs_path(&graph, "A", "D").unwrap().nodes(), ["A", "C", "D"]);
    }

    #[test]
    fn cycles_terminate() {
        let graph = graph(vec![
            Edge::new("A", "B", 1.0),
            Edge::new("B", "C", 1.0),
            Edge::new("C", "A", 1.0),
        ]);
        assert!(dfs_path(&graph, "A", "D").unwrap().is_empty());
    }

    #[test]
    fn start_equal_to_end_is_single_node() {
        let graph = graph(vec![Edge::new("A", "B", 1.0)]);
        assert_eq!(dfs_path(&graph, "B", "B").unwrap().nodes(), ["B"]);
    }
}
