use geo::{Coord, LineString, line_string};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use crate::{CampusGraph, Error, NameGroups, Route};

impl Route {
    /// Converts the route to a `GeoJSON` `FeatureCollection` holding a single
    /// `LineString` through all stops.
    ///
    /// # Errors
    ///
    /// Fails if a stop is not part of `graph`.
    pub fn to_geojson(&self, graph: &CampusGraph) -> Result<FeatureCollection, Error> {
        let coords = self
            .path
            .nodes()
            .iter()
            .map(|id| graph.node(id).map(|node| Coord::from(node.geometry)))
            .collect::<Result<Vec<_>, _>>()?;

        let geometry = Geometry::new(GeoJsonValue::from(&LineString::new(coords)));
        let properties = json!({
            "feature_type": "route",
            "cost": self.cost,
            "stops": self.stops(),
            "node_ids": self.path.nodes(),
        });

        Ok(collection(vec![feature(geometry, properties)?]))
    }

    /// # Errors
    ///
    /// See [`Route::to_geojson`].
    pub fn to_geojson_string(&self, graph: &CampusGraph) -> Result<String, Error> {
        to_string(&self.to_geojson(graph)?)
    }
}

impl NameGroups {
    /// One `Point` feature per location marker
    ///
    /// # Errors
    ///
    /// Fails if a group member is not part of `graph`.
    pub fn to_geojson(&self, graph: &CampusGraph) -> Result<FeatureCollection, Error> {
        let features = self
            .locations(graph)?
            .into_iter()
            .map(|marker| {
                let geometry = Geometry::new(GeoJsonValue::from(&marker.geometry));
                feature(
                    geometry,
                    json!({
                        "feature_type": "location",
                        "name": marker.name,
                        "members": marker.members,
                    }),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(collection(features))
    }
}

impl CampusGraph {
    /// One `LineString` feature per edge, for drawing the whole network
    ///
    /// # Errors
    ///
    /// Fails only if a feature cannot be assembled.
    pub fn edges_to_geojson(&self) -> Result<FeatureCollection, Error> {
        let features = self
            .edges()
            .iter()
            .map(|edge| {
                let from = self.node(&edge.from)?.geometry;
                let to = self.node(&edge.to)?.geometry;
                let coordinates = line_string![
                    (x: from.x(), y: from.y()),
                    (x: to.x(), y: to.y()),
                ];
                feature(
                    Geometry::new(GeoJsonValue::from(&coordinates)),
                    json!({
                        "feature_type": "edge",
                        "from": edge.from,
                        "to": edge.to,
                        "weight": edge.weight,
                        "accessible": edge.accessible,
                    }),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(collection(features))
    }
}

/// Serializes any collection produced by this module
///
/// # Errors
///
/// Returns [`Error::GeoJsonError`] if serialization fails.
pub(crate) fn to_string(collection: &FeatureCollection) -> Result<String, Error> {
    serde_json::to_string(collection).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn feature(geometry: Geometry, properties: serde_json::Value) -> Result<Feature, Error> {
    let value = json!({
        "type": "Feature",
        "geometry": geometry,
        "properties": properties,
    });

    serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
}

fn collection(features: Vec<Feature>) -> FeatureCollection {
    FeatureCollection {
        features,
        bbox: None,
        foreign_members: None,
    }
}
