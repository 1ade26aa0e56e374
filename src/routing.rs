use anyhow::Result;
use tracing::{debug, warn};
use wayfind_core::prelude::*;

use crate::cli::RouteArgs;
use crate::config::RoutingConfig;

/// Runs a route query and formats the outcome.
///
/// "No path" is an ordinary answer; only rejected queries become errors.
pub fn render_route(
    model: &CampusModel,
    args: &RouteArgs,
    defaults: &RoutingConfig,
) -> Result<String> {
    let (algorithm, accessible_only) = defaults.resolve(args.algorithm, args.accessible);
    if accessible_only && algorithm != Algorithm::Weighted {
        warn!(
            "Accessibility constraint only applies to the weighted search, {algorithm} ignores it"
        );
    }

    let route = model.find_route(&args.from, &args.to, algorithm, accessible_only)?;
    let Some(route) = route else {
        return Ok(format!(
            "No path found between '{}' and '{}'.",
            args.from, args.to
        ));
    };
    debug!(stops = route.stops(), cost = route.cost, "Route found");

    if args.geojson {
        return Ok(route.to_geojson_string(model.graph())?);
    }

    let mut output = describe_route(&args.from, &args.to, algorithm, &route);
    if args.explain {
        output.push('\n');
        output.push_str(&serde_json::to_string(&route.explanation_request())?);
    }
    Ok(output)
}

fn describe_route(from: &str, to: &str, algorithm: Algorithm, route: &Route) -> String {
    format!(
        "{from} -> {to} ({algorithm}): {} stops, {:.2} m\n  {}",
        route.stops(),
        route.cost,
        route.path.nodes().join(" -> ")
    )
}
