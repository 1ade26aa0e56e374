use crate::{
    Algorithm, CampusGraph, Error, LocationMarker, NameGroups, Path, Route,
    routing::{best_route, find_route},
};

/// Campus graph together with its name index.
///
/// Built once from a dataset and read-only afterwards, so a single model can
/// serve route queries from many threads.
#[derive(Debug, Clone)]
pub struct CampusModel {
    graph: CampusGraph,
    names: NameGroups,
}

impl CampusModel {
    pub fn new(graph: CampusGraph) -> Self {
        let names = NameGroups::group_by_name(graph.nodes());
        Self { graph, names }
    }

    pub fn graph(&self) -> &CampusGraph {
        &self.graph
    }

    /// Name index derived from the graph at construction
    pub fn names(&self) -> &NameGroups {
        &self.names
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn location_count(&self) -> usize {
        self.names.len()
    }

    /// # Errors
    ///
    /// See [`NameGroups::locations`].
    pub fn locations(&self) -> Result<Vec<LocationMarker>, Error> {
        self.names.locations(&self.graph)
    }

    /// Cheapest route between two named locations, `None` if no candidate
    /// pair is connected.
    ///
    /// # Errors
    ///
    /// See [`find_route`].
    pub fn find_route(
        &self,
        start_name: &str,
        end_name: &str,
        algorithm: Algorithm,
        accessible_only: bool,
    ) -> Result<Option<Route>, Error> {
        find_route(
            &self.graph,
            &self.names,
            start_name,
            end_name,
            algorithm,
            accessible_only,
        )
    }

    /// # Errors
    ///
    /// See [`best_route`].
    pub fn best_route(
        &self,
        start_name: &str,
        end_name: &str,
        algorithm: Algorithm,
        accessible_only: bool,
    ) -> Result<Path, Error> {
        best_route(
            &self.graph,
            &self.names,
            start_name,
            end_name,
            algorithm,
            accessible_only,
        )
    }
}
