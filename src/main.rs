use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod locations;
mod matrix;
mod model;
mod routing;

use cli::{Cli, Command};
use config::AppConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(&cli);
    init_tracing(&config.log_filter);

    if let Some(threads) = config.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let model = model::load_model(&config)?;

    let output = match &cli.command {
        Command::Locations { geojson } => locations::render_locations(&model, *geojson)?,
        Command::Route(args) => routing::render_route(&model, args, &config.routing)?,
        Command::Edges => serde_json::to_string(&model.graph().edges_to_geojson()?)?,
        Command::Matrix(args) => matrix::render_matrix(&model, args, &config.routing)?,
    };
    println!("{output}");

    Ok(())
}

/// `RUST_LOG` takes precedence over the configured filter
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
