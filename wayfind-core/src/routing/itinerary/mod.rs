//! Hand-off formats for the rendering and explanation collaborators

mod explanation;
mod to_geojson;

pub use explanation::ExplanationRequest;
