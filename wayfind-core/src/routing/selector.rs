use itertools::iproduct;
use log::{debug, trace};

use super::{Algorithm, Path, constrained_path_cost};
use crate::{CampusGraph, Distance, Error, NodeId, model::NameGroups};

/// Cheapest path found between two named locations
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub path: Path,
    /// Total walking distance in meters
    pub cost: Distance,
}

impl Route {
    /// Number of stops along the route
    pub fn stops(&self) -> usize {
        self.path.len()
    }

    pub fn start(&self) -> Option<&str> {
        self.path.start()
    }

    pub fn end(&self) -> Option<&str> {
        self.path.end()
    }
}

/// Runs `algorithm` for every (start, end) candidate pair of two named
/// locations and keeps the non-empty path with the lowest finite cost.
///
/// Candidates are tried in member order, so the first pair found wins ties.
/// Every pair is searched independently; groups are expected to hold only a
/// handful of waypoints.
///
/// Returns `Ok(None)` if no pair is connected.
///
/// # Errors
///
/// [`Error::SameLocation`] if both names are equal, [`Error::UnknownLocation`]
/// if either name has no group.
pub fn find_route(
    graph: &CampusGraph,
    names: &NameGroups,
    start_name: &str,
    end_name: &str,
    algorithm: Algorithm,
    accessible_only: bool,
) -> Result<Option<Route>, Error> {
    if start_name == end_name {
        return Err(Error::SameLocation(start_name.to_string()));
    }

    let starts = names.resolve(start_name)?;
    let ends = names.resolve(end_name)?;
    debug!(
        "Routing '{start_name}' -> '{end_name}' with {algorithm} over {} candidate pairs (accessible only: {accessible_only})",
        starts.len() * ends.len()
    );

    let mut best: Option<Route> = None;
    for (start, end) in iproduct!(starts, ends) {
        let Some(route) = candidate_route(graph, start, end, algorithm, accessible_only)? else {
            continue;
        };

        if best.as_ref().is_none_or(|current| route.cost < current.cost) {
            best = Some(route);
        }
    }

    match &best {
        Some(route) => debug!(
            "Best route '{start_name}' -> '{end_name}': {} stops, {:.2} m",
            route.stops(),
            route.cost
        ),
        None => debug!("No path between '{start_name}' and '{end_name}'"),
    }
    Ok(best)
}

fn candidate_route(
    graph: &CampusGraph,
    start: &NodeId,
    end: &NodeId,
    algorithm: Algorithm,
    accessible_only: bool,
) -> Result<Option<Route>, Error> {
    let path = algorithm.find_path(graph, start, end, accessible_only)?;
    if path.is_empty() {
        trace!("Candidate {start} -> {end}: unreachable");
        return Ok(None);
    }

    // Only the weighted search honors the accessibility filter, so only its
    // paths are priced by accessible edges.
    let accessible_cost = accessible_only && algorithm == Algorithm::Weighted;
    let cost = constrained_path_cost(graph, &path, accessible_cost);
    trace!("Candidate {start} -> {end}: {} stops, cost {cost}", path.len());
    Ok(cost.is_finite().then_some(Route { path, cost }))
}

/// Path of [`find_route`], empty if no candidate pair is connected.
///
/// # Errors
///
/// See [`find_route`].
pub fn best_route(
    graph: &CampusGraph,
    names: &NameGroups,
    start_name: &str,
    end_name: &str,
    algorithm: Algorithm,
    accessible_only: bool,
) -> Result<Path, Error> {
    let route = find_route(
        graph,
        names,
        start_name,
        end_name,
        algorithm,
        accessible_only,
    )?;
    Ok(route.map(|route| route.path).unwrap_or_default())
}
