use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wayfind_core::Algorithm;

/// Walking routes between named campus locations
#[derive(Debug, Parser)]
#[command(name = "wayfind", version, about)]
pub struct Cli {
    /// Configuration file (TOML), defaults to ./wayfind.toml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Campus dataset (JSON), overrides the configured path
    #[arg(short, long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Treat every walkway as walkable in both directions
    #[arg(long, global = true)]
    pub mirror_edges: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List named locations with their marker position
    Locations {
        /// Print a GeoJSON FeatureCollection instead of a table
        #[arg(long)]
        geojson: bool,
    },
    /// Find the best route between two named locations
    Route(RouteArgs),
    /// Print every walkway segment as GeoJSON
    Edges,
    /// Route cost between every pair of the given locations
    Matrix(MatrixArgs),
}

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// Start location name
    pub from: String,
    /// End location name
    pub to: String,
    /// Traversal strategy: bfs, dfs or weighted
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
    /// Avoid walkways not marked accessible (weighted search only)
    #[arg(long)]
    pub accessible: bool,
    /// Print the route as GeoJSON
    #[arg(long)]
    pub geojson: bool,
    /// Print the request body for the route explanation service
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct MatrixArgs {
    /// Location names, all locations when empty
    pub names: Vec<String>,
    /// Traversal strategy: bfs, dfs or weighted
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,
    /// Avoid walkways not marked accessible (weighted search only)
    #[arg(long)]
    pub accessible: bool,
}
