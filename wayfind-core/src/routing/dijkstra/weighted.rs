use std::collections::BinaryHeap;

use fixedbitset::FixedBitSet;

use super::state::State;
use crate::{CampusGraph, Distance, Error, NodeIndex, routing::Path};

/// Dijkstra's algorithm for the cheapest walk between two nodes.
///
/// With `accessible_only` set, edges not marked accessible are never
/// relaxed. Stops as soon as `end` is settled. The path is empty when no
/// compliant path exists.
///
/// # Errors
///
/// Returns [`Error::UnknownNode`] if an endpoint is not in the graph.
pub fn dijkstra_path(
    graph: &CampusGraph,
    start: &str,
    end: &str,
    accessible_only: bool,
) -> Result<Path, Error> {
    let source = graph.index_of(start)?;
    let target = graph.index_of(end)?;

    let node_count = graph.node_count();
    let mut distances: Vec<Distance> = vec![Distance::INFINITY; node_count];
    let mut predecessors: Vec<Option<NodeIndex>> = vec![None; node_count];
    let mut settled = FixedBitSet::with_capacity(node_count);
    let mut heap = BinaryHeap::with_capacity(node_count / 4 + 1);
    let mut order = 0_u64;

    // Start node has distance 0
    distances[source] = 0.0;
    heap.push(State {
        cost: 0.0,
        order,
        node: source,
    });

    while let Some(State { cost, node, .. }) = heap.pop() {
        // Stale entry of an already settled node
        if settled.put(node) {
            continue;
        }
        if node == target {
            break;
        }

        for (next, edge) in graph.out_edges(node) {
            if accessible_only && !edge.accessible {
                continue;
            }
            if settled.contains(next) {
                continue;
            }

            let next_cost = cost + edge.weight;
            if next_cost < distances[next] {
                distances[next] = next_cost;
                predecessors[next] = Some(node);
                order += 1;
                heap.push(State {
                    cost: next_cost,
                    order,
                    node: next,
                });
            }
        }
    }

    if !settled.contains(target) {
        return Ok(Path::empty());
    }
    Ok(Path::reconstruct(graph, &predecessors, source, target))
}
