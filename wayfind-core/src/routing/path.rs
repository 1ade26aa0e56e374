use itertools::Itertools;

use crate::{CampusGraph, Distance, NodeId, NodeIndex};

/// Walk through the campus graph as a sequence of node ids.
///
/// An empty path means that no path was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Self {
        Self { nodes }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_indices(graph: &CampusGraph, indices: &[NodeIndex]) -> Self {
        Self {
            nodes: indices
                .iter()
                .map(|&node| graph.node_at(node).id.clone())
                .collect(),
        }
    }

    /// Follows the predecessor chain back from `target` to `source`
    pub(crate) fn reconstruct(
        graph: &CampusGraph,
        predecessors: &[Option<NodeIndex>],
        source: NodeIndex,
        target: NodeIndex,
    ) -> Self {
        let mut walk = vec![target];
        let mut current = target;
        while current != source {
            match predecessors[current] {
                Some(prev) => {
                    walk.push(prev);
                    current = prev;
                }
                None => return Self::empty(),
            }
        }
        walk.reverse();
        Self::from_indices(graph, &walk)
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }

    /// Number of stops
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }
}

impl From<Vec<NodeId>> for Path {
    fn from(nodes: Vec<NodeId>) -> Self {
        Self::new(nodes)
    }
}

impl<S: Into<NodeId>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Total weight of a path.
///
/// Each consecutive pair uses the first connecting edge in adjacency order.
/// A pair without a connecting edge costs [`Distance::INFINITY`], so stale
/// paths lose every comparison instead of failing. Paths with fewer than two
/// stops cost 0.
pub fn path_cost(graph: &CampusGraph, path: &Path) -> Distance {
    constrained_path_cost(graph, path, false)
}

/// Like [`path_cost`], but with `accessible_only` set each pair is priced by
/// its first accessible connecting edge. A pair joined only by inaccessible
/// edges costs [`Distance::INFINITY`].
pub fn constrained_path_cost(graph: &CampusGraph, path: &Path, accessible_only: bool) -> Distance {
    path.nodes()
        .iter()
        .tuple_windows()
        .map(|(from, to)| {
            graph
                .walkable_edge(from, to, accessible_only)
                .map_or(Distance::INFINITY, |edge| edge.weight)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Edge, Node};

    fn graph() -> CampusGraph {
        CampusGraph::build(
            vec![
                Node::new("A", 0.0, 0.0),
                Node::new("B", 0.0, 1.0),
                Node::new("C", 0.0, 2.0),
            ],
            vec![
                Edge::new("A", "B", 1.5),
                Edge::new("B", "C", 2.0),
                Edge::new("A", "C", 5.0),
            ],
        )
        .unwrap()
    }

    #[test]
    fn sums_edge_weights() {
        let path: Path = ["A", "B", "C"].into_iter().collect();
        assert_eq!(path_cost(&graph(), &path), 3.5);
        assert_eq!(path.edge_count(), 2);
    }

    #[test]
    fn short_paths_cost_nothing() {
        let graph = graph();
        assert_eq!(path_cost(&graph, &Path::empty()), 0.0);
        assert_eq!(path_cost(&graph, &["B"].into_iter().collect()), 0.0);
    }

    #[test]
    fn missing_edge_costs_infinity() {
        let graph = graph();
        let backwards: Path = ["C", "B"].into_iter().collect();
        assert!(path_cost(&graph, &backwards).is_infinite());

        let unknown: Path = ["A", "Z"].into_iter().collect();
        assert!(path_cost(&graph, &unknown).is_infinite());
    }

    #[test]
    fn endpoints_are_exposed() {
        let path: Path = ["A", "B"].into_iter().collect();
        assert_eq!(path.start(), Some("A"));
        assert_eq!(path.end(), Some("B"));
        assert_eq!(Path::empty().start(), None);
    }

    #[test]
    fn accessible_cost_skips_inaccessible_parallel_edges() {
        let graph = CampusGraph::build(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 1.0)],
            vec![
                Edge::new("A", "B", 1.0).with_accessible(false),
                Edge::new("A", "B", 10.0),
            ],
        )
        .unwrap();
        let path: Path = ["A", "B"].into_iter().collect();
        assert_eq!(path_cost(&graph, &path), 1.0);
        assert_eq!(constrained_path_cost(&graph, &path, true), 10.0);
        assert_eq!(constrained_path_cost(&graph, &path, false), 1.0);
    }

    #[test]
    fn inaccessible_only_step_costs_infinity() {
        let graph = CampusGraph::build(
            vec![Node::new("A", 0.0, 0.0), Node::new("B", 0.0, 1.0)],
            vec![Edge::new("A", "B", 1.0).with_accessible(false)],
        )
        .unwrap();
        let path: Path = ["A", "B"].into_iter().collect();
        assert!(constrained_path_cost(&graph, &path, true).is_infinite());
    }
}
