use std::fmt::Write;

use anyhow::{Result, bail};
use wayfind_core::prelude::*;

use crate::cli::MatrixArgs;
use crate::config::RoutingConfig;

/// Tab-separated cost matrix, `-` where no route exists
pub fn render_matrix(
    model: &CampusModel,
    args: &MatrixArgs,
    defaults: &RoutingConfig,
) -> Result<String> {
    let (algorithm, accessible_only) = defaults.resolve(args.algorithm, args.accessible);

    let names: Vec<String> = if args.names.is_empty() {
        model.names().names().map(str::to_string).collect()
    } else {
        args.names.clone()
    };
    if let Some(unknown) = names.iter().find(|name| !model.names().contains(name)) {
        bail!("Unknown location: {unknown}");
    }

    let matrix = route_matrix(model, &names, algorithm, accessible_only);

    let mut output = String::new();
    writeln!(output, "\t{}", names.join("\t"))?;
    for (name, row) in names.iter().zip(matrix) {
        let cells: Vec<String> = row
            .into_iter()
            .map(|cost| cost.map_or_else(|| "-".to_string(), |cost| format!("{cost:.2}")))
            .collect();
        writeln!(output, "{name}\t{}", cells.join("\t"))?;
    }
    Ok(output.trim_end().to_string())
}
