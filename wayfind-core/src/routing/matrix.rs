use log::warn;
use rayon::prelude::*;

use crate::{Algorithm, CampusModel, Distance};

/// Route cost between every ordered pair of named locations.
///
/// Rows are computed in parallel over the shared, read-only model. Cells on
/// the diagonal, failed queries and unconnected pairs are `None`.
pub fn route_matrix<S>(
    model: &CampusModel,
    names: &[S],
    algorithm: Algorithm,
    accessible_only: bool,
) -> Vec<Vec<Option<Distance>>>
where
    S: AsRef<str> + Sync,
{
    names
        .par_iter()
        .map(|start| {
            let start = start.as_ref();
            names
                .iter()
                .map(|end| {
                    let end = end.as_ref();
                    if start == end {
                        return None;
                    }
                    match model.find_route(start, end, algorithm, accessible_only) {
                        Ok(route) => route.map(|route| route.cost),
                        Err(e) => {
                            warn!("Routing failed for '{start}' -> '{end}', error: {e}");
                            None
                        }
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CampusGraph, Edge, Node};

    #[test]
    fn fills_directed_costs() {
        let graph = CampusGraph::build(
            vec![
                Node::new("a", 0.0, 0.0).with_name("North"),
                Node::new("b", 0.0, 1.0).with_name("South"),
            ],
            vec![Edge::new("a", "b", 12.5)],
        )
        .unwrap();
        let model = CampusModel::new(graph);

        let matrix = route_matrix(&model, &["North", "South", "Nowhere"], Algorithm::Weighted, false);
        assert_eq!(
            matrix,
            vec![
                vec![None, Some(12.5), None],
                vec![None, None, None],
                vec![None, None, None],
            ]
        );
    }
}
