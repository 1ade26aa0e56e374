//! This module is responsible for loading the campus dataset
//! and building the routing model from it.

mod builder;
mod config;
pub mod dataset;

pub use builder::{campus_model_from_str, create_campus_model};
pub use config::CampusModelConfig;
pub use dataset::{RawDataset, RawEdge, RawNode};
