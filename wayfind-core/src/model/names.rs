//! Name index over the campus graph
//!
//! One human-readable location (a building, a gate) is often drawn as several
//! physical waypoints that share a display name. [`NameGroups`] maps each
//! trimmed name to those waypoints so route queries can start and end at any
//! of them.

use geo::{Centroid, MultiPoint, Point};
use hashbrown::HashMap;

use crate::{CampusGraph, Error, Node, NodeId};

/// Waypoints sharing one trimmed display name
#[derive(Debug, Clone, PartialEq)]
pub struct LocationGroup {
    name: String,
    members: Vec<NodeId>,
}

impl LocationGroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Member node ids in node insertion order
    pub fn members(&self) -> &[NodeId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Mean position of all members
    ///
    /// # Errors
    ///
    /// Fails if a member is not part of `graph`.
    pub fn centroid(&self, graph: &CampusGraph) -> Result<Point<f64>, Error> {
        centroid(graph, &self.members)
    }
}

/// Display marker for one named location
#[derive(Debug, Clone, PartialEq)]
pub struct LocationMarker {
    pub name: String,
    /// Centroid of the member waypoints (x = longitude, y = latitude)
    pub geometry: Point<f64>,
    pub members: usize,
}

impl LocationMarker {
    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lng(&self) -> f64 {
        self.geometry.x()
    }
}

/// Partition of all named nodes by trimmed display name.
///
/// Groups keep the order in which their name first appears among the nodes.
#[derive(Debug, Clone, Default)]
pub struct NameGroups {
    groups: Vec<LocationGroup>,
    by_name: HashMap<String, usize>,
}

impl NameGroups {
    /// Groups nodes by trimmed display name. Nodes without a name are skipped,
    /// names are compared exactly.
    pub fn group_by_name<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut index = Self::default();

        for node in nodes {
            let Some(name) = node.display_name() else {
                continue;
            };

            let slot = if let Some(&slot) = index.by_name.get(name) {
                slot
            } else {
                let slot = index.groups.len();
                index.by_name.insert(name.to_string(), slot);
                index.groups.push(LocationGroup {
                    name: name.to_string(),
                    members: Vec::new(),
                });
                slot
            };
            index.groups[slot].members.push(node.id.clone());
        }

        index
    }

    pub fn get(&self, name: &str) -> Option<&LocationGroup> {
        self.by_name.get(name).map(|&slot| &self.groups[slot])
    }

    /// Member node ids of a named location
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownLocation`] for names without a group.
    pub fn resolve(&self, name: &str) -> Result<&[NodeId], Error> {
        self.get(name)
            .map(LocationGroup::members)
            .ok_or_else(|| Error::UnknownLocation(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocationGroup> {
        self.groups.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(LocationGroup::name)
    }

    /// One marker per location, placed at the centroid of its members
    ///
    /// # Errors
    ///
    /// Fails if a member is not part of `graph`.
    pub fn locations(&self, graph: &CampusGraph) -> Result<Vec<LocationMarker>, Error> {
        self.groups
            .iter()
            .map(|group| {
                Ok(LocationMarker {
                    name: group.name.clone(),
                    geometry: group.centroid(graph)?,
                    members: group.len(),
                })
            })
            .collect()
    }
}

/// Arithmetic mean of the member coordinates, latitude and longitude taken
/// independently.
///
/// # Errors
///
/// Returns [`Error::EmptyGroup`] for an empty member list and
/// [`Error::UnknownNode`] for members missing from `graph`.
pub fn centroid(graph: &CampusGraph, members: &[NodeId]) -> Result<Point<f64>, Error> {
    if members.is_empty() {
        return Err(Error::EmptyGroup);
    }

    let points: MultiPoint<f64> = members
        .iter()
        .map(|id| graph.node(id).map(|node| node.geometry))
        .collect::<Result<Vec<_>, _>>()?
        .into();

    points.centroid().ok_or(Error::EmptyGroup)
}
