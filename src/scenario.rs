//! Scenario descriptions
//!
//! A scenario names its vertices, edges, restrictions and exit groups so a
//! graph can be assembled from a YAML/JSON document or from the built-in
//! floor plan. Edges refer to vertices by name.

use crate::config::{load_document, ConfigResult, GraphConfig, QueryConfig};
use crate::graph::{GraphResult, GraphStore, Vertex, Weight};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexSpec {
    pub name: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    /// Omitted weights are drawn at random
    #[serde(default)]
    pub weight: Option<Weight>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub vertices: Vec<VertexSpec>,
    pub edges: Vec<EdgeSpec>,
    /// Edges blocked after construction, as `[from, to]` name pairs
    pub restrictions: Vec<[String; 2]>,
    /// Groups of interchangeable exits
    pub exits: Vec<Vec<String>>,
}

impl Scenario {
    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        load_document(path.as_ref())
    }

    /// `config` with capacities raised to fit this scenario
    pub fn fit(&self, config: &GraphConfig) -> GraphConfig {
        GraphConfig {
            max_vertices: config.max_vertices.max(self.vertices.len()),
            max_edges: config.max_edges.max(self.edges.len()),
            ..config.clone()
        }
    }

    /// `config` extended with this scenario's exit groups
    pub fn query_config(&self, config: &QueryConfig) -> QueryConfig {
        let mut query = config.clone();
        query.exit_groups.extend(self.exits.iter().cloned());
        query
    }

    /// Build a store: vertices, then edges, then restrictions
    pub fn build(&self, config: &GraphConfig) -> GraphResult<GraphStore> {
        let mut store = GraphStore::new(config)?;

        for spec in &self.vertices {
            store.add_vertex(Vertex::new(spec.name.as_str(), spec.x, spec.y))?;
        }
        for edge in &self.edges {
            let from = store.resolve(&edge.from)?;
            let to = store.resolve(&edge.to)?;
            store.add_edge(from, to, edge.weight)?;
        }
        for [from, to] in &self.restrictions {
            let from = store.resolve(from)?;
            let to = store.resolve(to)?;
            store.restrict(from, to)?;
        }

        info!(
            "Built scenario graph: {} vertices, {} edges, {} restrictions",
            store.vertex_count(),
            store.edge_count(),
            self.restrictions.len()
        );
        Ok(store)
    }

    /// Block an extra edge by name
    pub fn restrict(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.restrictions.push([from.into(), to.into()]);
    }

    /// Twenty-vertex floor plan with exits `S` and `O` joined by a zero-weight edge.
    ///
    /// Coordinates are drawing positions; weights are corridor lengths.
    pub fn floor_plan() -> Self {
        const VERTICES: [(&str, i32, i32); 20] = [
            ("A", 78, 75),
            ("B", 156, 75),
            ("C", 233, 75),
            ("D", 306, 75),
            ("E", 383, 75),
            ("F", 78, 125),
            ("G", 105, 125),
            ("H", 156, 125),
            ("I", 306, 125),
            ("J", 383, 125),
            ("T", 105, 182),
            ("K", 156, 182),
            ("L", 233, 182),
            ("M", 306, 255),
            ("N", 383, 255),
            ("O", 78, 297),
            ("P", 156, 297),
            ("Q", 233, 297),
            ("R", 306, 297),
            ("S", 383, 297),
        ];
        const EDGES: [(&str, &str, Weight); 27] = [
            // Corridors
            ("A", "B", 235),
            ("B", "C", 230),
            ("C", "D", 220),
            ("D", "E", 230),
            ("F", "G", 80),
            ("G", "H", 155),
            ("I", "J", 230),
            ("T", "K", 155),
            ("K", "L", 230),
            ("M", "N", 230),
            ("O", "P", 235),
            ("Q", "R", 220),
            ("R", "S", 230),
            // Connectors
            ("A", "F", 100),
            ("F", "O", 345),
            ("G", "T", 115),
            ("B", "H", 100),
            ("K", "P", 225),
            ("C", "L", 215),
            ("L", "Q", 255),
            ("D", "I", 100),
            ("I", "M", 260),
            ("M", "R", 110),
            ("E", "J", 100),
            ("J", "N", 260),
            ("N", "S", 110),
            // Reaching either exit reaches both
            ("S", "O", 0),
        ];

        Scenario {
            vertices: VERTICES
                .iter()
                .map(|&(name, x, y)| VertexSpec {
                    name: name.to_string(),
                    x,
                    y,
                })
                .collect(),
            edges: EDGES
                .iter()
                .map(|&(from, to, weight)| EdgeSpec {
                    from: from.to_string(),
                    to: to.to_string(),
                    weight: Some(weight),
                })
                .collect(),
            restrictions: Vec::new(),
            exits: vec![vec!["S".to_string(), "O".to_string()]],
        }
    }
}
