//! Campus graph with validated construction and insertion-ordered adjacency

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;
use log::debug;

use super::{Edge, Node};
use crate::{Error, NodeId, NodeIndex};

/// Directed, weighted waypoint graph.
///
/// Nodes live in dense slots addressed by [`NodeIndex`]; outgoing edges of
/// each node are kept in the order they were inserted, which fixes the
/// neighbor visitation order of every traversal.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    nodes: Vec<Node>,
    index: HashMap<NodeId, NodeIndex>,
    edges: Vec<Edge>,
    /// Target slot of every edge
    targets: Vec<NodeIndex>,
    /// Outgoing edge slots of every node
    adjacency: Vec<Vec<usize>>,
}

impl CampusGraph {
    /// Builds a graph from node and edge records, nodes first.
    ///
    /// # Errors
    ///
    /// Fails on duplicate node ids, on edges whose endpoints are not known
    /// nodes and on negative or non-finite weights.
    pub fn build(
        nodes: impl IntoIterator<Item = Node>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, Error> {
        let mut graph = Self::default();
        for node in nodes {
            graph.insert_node(node)?;
        }
        for edge in edges {
            graph.insert_edge(edge)?;
        }

        debug!(
            "Built campus graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    fn insert_node(&mut self, node: Node) -> Result<(), Error> {
        match self.index.entry(node.id.clone()) {
            Entry::Occupied(_) => Err(Error::DuplicateNode(node.id)),
            Entry::Vacant(entry) => {
                entry.insert(self.nodes.len());
                self.nodes.push(node);
                self.adjacency.push(Vec::new());
                Ok(())
            }
        }
    }

    fn insert_edge(&mut self, edge: Edge) -> Result<(), Error> {
        let source = self.endpoint(&edge, &edge.from)?;
        let target = self.endpoint(&edge, &edge.to)?;

        if !edge.weight.is_finite() || edge.weight < 0.0 {
            return Err(Error::InvalidWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            });
        }

        self.adjacency[source].push(self.edges.len());
        self.targets.push(target);
        self.edges.push(edge);
        Ok(())
    }

    fn endpoint(&self, edge: &Edge, id: &str) -> Result<NodeIndex, Error> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::DanglingEdge {
                from: edge.from.clone(),
                to: edge.to.clone(),
                missing: id.to_string(),
            })
    }

    /// Outgoing edges of a node in insertion order
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node is not in the graph.
    pub fn neighbors(&self, id: &str) -> Result<Vec<&Edge>, Error> {
        let node = self.index_of(id)?;
        Ok(self.out_edges(node).map(|(_, edge)| edge).collect())
    }

    /// # Errors
    ///
    /// Returns [`Error::UnknownNode`] if the node is not in the graph.
    pub fn node(&self, id: &str) -> Result<&Node, Error> {
        self.index_of(id).map(|node| &self.nodes[node])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// First edge from `from` to `to` in adjacency order
    pub fn edge_between(&self, from: &str, to: &str) -> Option<&Edge> {
        self.walkable_edge(from, to, false)
    }

    /// First edge from `from` to `to` in adjacency order that may be walked,
    /// skipping edges not marked accessible when `accessible_only` is set
    pub fn walkable_edge(&self, from: &str, to: &str, accessible_only: bool) -> Option<&Edge> {
        let source = self.index.get(from)?;
        self.adjacency[*source]
            .iter()
            .map(|&slot| &self.edges[slot])
            .find(|edge| edge.to == to && (edge.accessible || !accessible_only))
    }

    pub(crate) fn index_of(&self, id: &str) -> Result<NodeIndex, Error> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| Error::UnknownNode(id.to_string()))
    }

    pub(crate) fn node_at(&self, node: NodeIndex) -> &Node {
        &self.nodes[node]
    }

    /// Outgoing edges of a node slot together with their target slots
    pub(crate) fn out_edges(
        &self,
        node: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &Edge)> + '_ {
        self.adjacency[node]
            .iter()
            .map(|&slot| (self.targets[slot], &self.edges[slot]))
    }

    /// Target of the `position`-th outgoing edge of a node slot
    pub(crate) fn successor(&self, node: NodeIndex, position: usize) -> Option<NodeIndex> {
        self.adjacency[node]
            .get(position)
            .map(|&slot| self.targets[slot])
    }
}
