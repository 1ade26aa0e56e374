use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use wayfind_core::prelude::*;

use crate::config::AppConfig;

/// Loads the campus model described by the configuration
pub fn load_model(config: &AppConfig) -> Result<CampusModel> {
    let started = Instant::now();
    let model = create_campus_model(&config.model_config()).with_context(|| {
        format!(
            "Failed to create campus model from {}",
            config.dataset.display()
        )
    })?;

    info!(
        nodes = model.node_count(),
        edges = model.edge_count(),
        locations = model.location_count(),
        elapsed = ?started.elapsed(),
        "Campus model ready"
    );
    Ok(model)
}
