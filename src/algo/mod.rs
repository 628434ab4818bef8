//! Route queries
//!
//! Adapter between the [`GraphStore`] and the `egress-algorithms` engine:
//! borrows the store's tables as a view, runs the engine and renders labels.
//! Queries never mutate the store, so any number can share it.

pub mod label;

use crate::config::QueryConfig;
use crate::graph::{GraphError, GraphResult, GraphStore, VertexIndex, Weight};
use egress_algorithms::{label_setting, DistanceTable, PathOutcome, PathResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use egress_algorithms::Reconstruction;
pub use label::PathLabeler;

/// A shortest route between two vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub source: VertexIndex,
    pub destination: VertexIndex,
    /// Total edge weight along `path`
    pub distance: Weight,
    /// Vertex indices from source to destination
    pub path: Vec<VertexIndex>,
    /// Display string, exit runs collapsed
    pub label: String,
}

/// Outcome of a route query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    Found(Route),
    Unreachable {
        source: VertexIndex,
        destination: VertexIndex,
    },
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::Unreachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}

/// Full distance table from `source`
pub fn distances_from(store: &GraphStore, source: VertexIndex) -> GraphResult<DistanceTable> {
    let view = store.view()?;
    Ok(label_setting(&view, source)?)
}

/// Shortest route from `source` to `destination`
pub fn shortest_route(
    store: &GraphStore,
    source: VertexIndex,
    destination: VertexIndex,
    config: &QueryConfig,
) -> GraphResult<RouteOutcome> {
    let view = store.view()?;
    view.check_index(destination)?;

    debug!("Routing {} -> {} ({:?})", source, destination, config.strategy);
    let table = label_setting(&view, source)?;
    let outcome = table.reconstruct(&view, destination, config.strategy)?;

    Ok(to_route(store, outcome, &PathLabeler::from_config(config)))
}

/// Route to whichever member of `group` is closest to `source`.
///
/// Equal distances go to the lowest index. If no member is reachable the
/// outcome is `Unreachable` towards the lowest-index member.
pub fn nearest_exit(
    store: &GraphStore,
    source: VertexIndex,
    group: &[VertexIndex],
    config: &QueryConfig,
) -> GraphResult<RouteOutcome> {
    let view = store.view()?;
    for &member in group {
        view.check_index(member)?;
    }

    let table = label_setting(&view, source)?;
    let nearest = group
        .iter()
        .copied()
        .min_by_key(|&v| (table.distances[v], v))
        .ok_or(GraphError::EmptyGroup)?;

    debug!(
        "Nearest exit from {} is {} at distance {}",
        source, nearest, table.distances[nearest]
    );
    let outcome = table.reconstruct(&view, nearest, config.strategy)?;
    Ok(to_route(store, outcome, &PathLabeler::from_config(config)))
}

/// Resolve an exit group given by names
pub fn resolve_group<S: AsRef<str>>(store: &GraphStore, names: &[S]) -> GraphResult<Vec<VertexIndex>> {
    names.iter().map(|name| store.resolve(name.as_ref())).collect()
}

/// Independent queries evaluated in parallel against a shared store.
///
/// Results keep the order of `pairs`.
pub fn route_batch(
    store: &GraphStore,
    pairs: &[(VertexIndex, VertexIndex)],
    config: &QueryConfig,
) -> Vec<GraphResult<RouteOutcome>> {
    pairs
        .par_iter()
        .map(|&(source, destination)| shortest_route(store, source, destination, config))
        .collect()
}

fn to_route(store: &GraphStore, outcome: PathOutcome, labeler: &PathLabeler) -> RouteOutcome {
    match outcome {
        PathOutcome::Found(PathResult { source, target, path, cost }) => {
            let label = labeler.render(path.iter().filter_map(|&i| store.vertex(i)).map(|v| v.name()));
            debug!("Route {} -> {}: {} ({})", source, target, label, cost);
            RouteOutcome::Found(Route {
                source,
                destination: target,
                distance: cost,
                path,
                label,
            })
        }
        PathOutcome::Unreachable { source, target } => {
            debug!("Route {} -> {}: unreachable", source, target);
            RouteOutcome::Unreachable {
                source,
                destination: target,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Vertex;

    fn abc() -> GraphStore {
        let mut store = GraphStore::with_capacity(3, 3);
        for name in ["A", "B", "C"] {
            store.add_vertex(Vertex::unplaced(name)).unwrap();
        }
        store.add_weighted_edge(0, 1, 10).unwrap();
        store.add_weighted_edge(1, 2, 5).unwrap();
        store
    }

    #[test]
    fn test_shortest_route_line() {
        let store = abc();
        let outcome = shortest_route(&store, 0, 2, &QueryConfig::default()).unwrap();
        let route = outcome.route().unwrap();
        assert_eq!(route.distance, 15);
        assert_eq!(route.path, vec![0, 1, 2]);
        assert_eq!(route.label, "Begin->A->B->C");
    }

    #[test]
    fn test_destination_out_of_range() {
        let store = abc();
        let err = shortest_route(&store, 0, 3, &QueryConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::Path(_)));
    }

    #[test]
    fn test_nearest_exit_empty_group() {
        let store = abc();
        let err = nearest_exit(&store, 0, &[], &QueryConfig::default()).unwrap_err();
        assert_eq!(err, GraphError::EmptyGroup);
    }

    #[test]
    fn test_route_outcome_json() {
        let store = abc();
        let outcome = shortest_route(&store, 2, 0, &QueryConfig::default()).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["distance"], 15);
        assert_eq!(json["path"], serde_json::json!([2, 1, 0]));
    }
}
