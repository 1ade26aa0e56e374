//! Campus graph components - waypoints and walkway segments

use geo::Point;

use crate::{Distance, NodeId};

/// Physical waypoint
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Dataset identifier of the node
    pub id: NodeId,
    /// Display name as found in the dataset, possibly blank
    pub name: Option<String>,
    /// Node coordinates (x = longitude, y = latitude)
    pub geometry: Point<f64>,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            name: None,
            geometry: Point::new(lng, lat),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lng(&self) -> f64 {
        self.geometry.x()
    }

    /// Trimmed display name, `None` for blank or missing names
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Directed walkway segment
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Walking distance in meters
    pub weight: Distance,
    /// Segment is usable when the accessibility constraint is on
    pub accessible: bool,
}

impl Edge {
    /// Creates an accessible edge
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>, weight: Distance) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
            accessible: true,
        }
    }

    #[must_use]
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.accessible = accessible;
        self
    }

    /// Same segment walked in the opposite direction
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
            accessible: self.accessible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_absent() {
        assert_eq!(Node::new("a", 0.0, 0.0).display_name(), None);
        assert_eq!(Node::new("a", 0.0, 0.0).with_name("   ").display_name(), None);
        assert_eq!(
            Node::new("a", 0.0, 0.0).with_name("  Library ").display_name(),
            Some("Library")
        );
    }

    #[test]
    fn coordinates_keep_lat_lng_order() {
        let node = Node::new("a", 52.1, 4.3);
        assert_eq!(node.lat(), 52.1);
        assert_eq!(node.lng(), 4.3);
    }

    #[test]
    fn edges_default_to_accessible() {
        let edge = Edge::new("a", "b", 3.0);
        assert!(edge.accessible);
        let reversed = edge.with_accessible(false).reversed();
        assert_eq!(reversed.from, "b");
        assert_eq!(reversed.to, "a");
        assert!(!reversed.accessible);
    }
}
