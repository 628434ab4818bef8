//! Egress exit routing
//!
//! A fixed-capacity, weighted, undirected floor-plan graph with single-source
//! shortest-path routing and full path reconstruction.
//!
//! # Architecture
//!
//! - `graph`: the Graph Store. Dense adjacency and weight matrices, weight
//!   symmetry repaired after every insertion, edge restriction.
//! - `egress-algorithms`: the Shortest-Path Engine. Label-setting Dijkstra on
//!   a borrowed view, predecessor or distance-backtrace reconstruction.
//! - `algo`: query adapter. Routes, nearest exit, parallel batches, labels.
//! - `config` / `scenario`: YAML/JSON configuration and graph descriptions.
//!
//! Exits are modelled as vertices joined by zero-weight edges: reaching one
//! reaches all of them, and path labels print only the first one reached.
//!
//! ## Example Usage
//!
//! ```rust
//! use egress::algo::shortest_route;
//! use egress::config::QueryConfig;
//! use egress::graph::{GraphStore, Vertex};
//!
//! let mut store = GraphStore::with_capacity(3, 3);
//! let a = store.add_vertex(Vertex::new("A", 0, 0)).unwrap();
//! let b = store.add_vertex(Vertex::new("B", 10, 0)).unwrap();
//! let c = store.add_vertex(Vertex::new("C", 20, 0)).unwrap();
//!
//! store.add_weighted_edge(a, b, 10).unwrap();
//! store.add_weighted_edge(b, c, 5).unwrap();
//!
//! let outcome = shortest_route(&store, a, c, &QueryConfig::default()).unwrap();
//! let route = outcome.route().unwrap();
//! assert_eq!(route.distance, 15);
//! assert_eq!(route.path, vec![a, b, c]);
//! assert_eq!(route.label, "Begin->A->B->C");
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod graph;
pub mod scenario;

// Re-export main types for convenience
pub use graph::{
    AdjacencyTable, GraphError, GraphResult, GraphStore, Position, Vertex, VertexIndex,
    VertexName, Weight,
};

pub use algo::{
    distances_from, nearest_exit, route_batch, shortest_route, PathLabeler, Reconstruction, Route,
    RouteOutcome,
};

pub use config::{ConfigError, ConfigResult, EgressConfig, GraphConfig, QueryConfig, WeightRange};

pub use scenario::{EdgeSpec, Scenario, VertexSpec};

pub use egress_algorithms::{Distance, DistanceTable, PathError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}
