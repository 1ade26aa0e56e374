use hashbrown::HashSet;
use log::{info, warn};

use super::config::CampusModelConfig;
use super::dataset::RawDataset;
use crate::{CampusGraph, CampusModel, Edge, Error, Node};

/// Creates a campus model from the dataset named in the configuration
///
/// # Errors
///
/// Returns an error if the dataset cannot be read or parsed, or if it
/// describes an inconsistent graph
pub fn create_campus_model(config: &CampusModelConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!(
        "Loading campus dataset: {}",
        config.dataset_path.display()
    );
    let contents = std::fs::read_to_string(&config.dataset_path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!(
                "Failed to read dataset '{}': {e}",
                config.dataset_path.display()
            ),
        )
    })?;

    campus_model_from_str(&contents, config.mirror_edges)
}

/// Creates a campus model from an in-memory JSON dataset
///
/// # Errors
///
/// Returns an error if the JSON is malformed or describes an inconsistent
/// graph
pub fn campus_model_from_str(json: &str, mirror_edges: bool) -> Result<CampusModel, Error> {
    let dataset: RawDataset = serde_json::from_str(json)?;

    let nodes: Vec<Node> = dataset.nodes.into_iter().map(Node::from).collect();
    let mut edges: Vec<Edge> = dataset.edges.into_iter().map(Edge::from).collect();
    if mirror_edges {
        let added = mirror(&mut edges);
        info!("Mirrored {added} one-way edges");
    }

    let graph = CampusGraph::build(nodes, edges)?;
    let model = CampusModel::new(graph);

    info!(
        "Campus model created: {} nodes, {} edges, {} named locations",
        model.node_count(),
        model.edge_count(),
        model.location_count()
    );
    warn_isolated_locations(&model);

    Ok(model)
}

fn validate_config(config: &CampusModelConfig) -> Result<(), Error> {
    if !config.dataset_path.exists() {
        return Err(Error::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Dataset not found: {}", config.dataset_path.display()),
        )));
    }

    if !config.dataset_path.is_file() {
        return Err(Error::InvalidData(format!(
            "Dataset path is not a file: {}",
            config.dataset_path.display()
        )));
    }

    Ok(())
}

/// Appends the reverse of every edge that has no reverse yet, keeping the
/// original edges first. Returns the number of edges added.
fn mirror(edges: &mut Vec<Edge>) -> usize {
    let mut present: HashSet<(String, String)> = edges
        .iter()
        .map(|edge| (edge.from.clone(), edge.to.clone()))
        .collect();

    let reversed: Vec<Edge> = edges
        .iter()
        .filter_map(|edge| {
            let key = (edge.to.clone(), edge.from.clone());
            present.insert(key).then(|| edge.reversed())
        })
        .collect();

    let added = reversed.len();
    edges.extend(reversed);
    added
}

/// Named locations without a single edge in or out can never be routed to
fn warn_isolated_locations(model: &CampusModel) {
    let connected: HashSet<&str> = model
        .graph()
        .edges()
        .iter()
        .flat_map(|edge| [edge.from.as_str(), edge.to.as_str()])
        .collect();

    let isolated = model
        .names()
        .iter()
        .filter(|group| {
            group
                .members()
                .iter()
                .all(|id| !connected.contains(id.as_str()))
        })
        .count();

    if isolated > 0 {
        warn!(
            "{isolated} of {} named locations have no walkway connections and are unreachable",
            model.location_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Algorithm;

    const DATASET: &str = r#"{
        "nodes": [
            {"id": "A", "name": "Library", "lat": 0.0, "lng": 0.0},
            {"id": "B", "name": "", "lat": 0.0, "lng": 1.0},
            {"id": "C", "name": "Gym", "lat": 0.0, "lng": 2.0}
        ],
        "edges": [
            {"from": "A", "to": "B", "weight": 1.0},
            {"from": "B", "to": "C", "weight": 2.0}
        ]
    }"#;

    #[test]
    fn builds_model_from_json() {
        let model = campus_model_from_str(DATASET, false).unwrap();
        assert_eq!(model.node_count(), 3);
        assert_eq!(model.edge_count(), 2);
        assert_eq!(model.location_count(), 2);

        let route = model
            .find_route("Library", "Gym", Algorithm::Weighted, false)
            .unwrap()
            .unwrap();
        assert_eq!(route.cost, 3.0);
        assert!(
            model
                .find_route("Gym", "Library", Algorithm::Weighted, false)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn mirroring_makes_edges_walkable_both_ways() {
        let model = campus_model_from_str(DATASET, true).unwrap();
        assert_eq!(model.edge_count(), 4);
        let path = model
            .best_route("Gym", "Library", Algorithm::Bfs, false)
            .unwrap();
        assert_eq!(path.nodes(), ["C", "B", "A"]);
    }

    #[test]
    fn mirroring_skips_existing_reverse_edges() {
        let mut edges = vec![
            Edge::new("A", "B", 1.0),
            Edge::new("B", "A", 3.0),
            Edge::new("B", "C", 2.0),
        ];
        assert_eq!(mirror(&mut edges), 1);
        assert_eq!(edges[3], Edge::new("C", "B", 2.0));
    }

    #[test]
    fn dangling_edge_in_dataset_is_fatal() {
        let json = r#"{"nodes": [{"id": "A", "lat": 0, "lng": 0}],
                       "edges": [{"from": "A", "to": "B", "weight": 1}]}"#;
        assert!(matches!(
            campus_model_from_str(json, false),
            Err(Error::DanglingEdge { .. })
        ));
    }

    #[test]
    fn missing_dataset_file_is_reported() {
        let config = CampusModelConfig::new("/definitely/not/here/campus.json");
        assert!(matches!(
            create_campus_model(&config),
            Err(Error::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(
            campus_model_from_str("{\"nodes\": [", false),
            Err(Error::JsonError(_))
        ));
    }
}
