//! Fixed-capacity in-memory graph storage
//!
//! Dense adjacency and weight matrices sized to the configured vertex
//! capacity. Every edge insertion writes both directions of the adjacency
//! matrix and is followed by a symmetry repair pass over the weight matrix.

use super::table::AdjacencyTable;
use super::types::{VertexIndex, VertexName, Weight};
use super::vertex::Vertex;
use crate::config::{GraphConfig, WeightRange};
use egress_algorithms::{GraphView, PathError};
use ndarray::{s, Array2, ArrayView2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during graph operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex capacity of {capacity} reached")]
    VertexCapacityExceeded { capacity: usize },

    #[error("Edge capacity of {capacity} reached")]
    EdgeCapacityExceeded { capacity: usize },

    #[error("Vertex index {index} out of range (vertex count {vertex_count})")]
    IndexOutOfRange { index: VertexIndex, vertex_count: usize },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Exit group is empty")]
    EmptyGroup,

    #[error("Invalid random weight range {min}..={max}")]
    InvalidWeightRange { min: Weight, max: Weight },

    #[error("Path error: {0}")]
    Path(#[from] PathError),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory routing graph
///
/// - vertices: insertion-ordered, the index is the identity
/// - adjacency: `max_vertices x max_vertices`, 1 where an edge exists
/// - weights: `max_vertices x max_vertices`, kept symmetric
#[derive(Debug, Clone)]
pub struct GraphStore {
    /// Vertex storage, at most `max_vertices` long
    vertices: Vec<Vertex>,

    /// Edge existence, independent of weight
    adjacency: Array2<u8>,

    /// Edge weights; survive restriction
    weights: Array2<Weight>,

    max_vertices: usize,
    max_edges: usize,

    /// Accepted edge insertions
    edge_count: usize,

    /// Range for weights drawn by `add_random_edge`
    random_weights: WeightRange,

    rng: StdRng,
}

impl GraphStore {
    /// Create a store from configuration
    pub fn new(config: &GraphConfig) -> GraphResult<Self> {
        if !config.random_weights.is_valid() {
            return Err(GraphError::InvalidWeightRange {
                min: config.random_weights.min,
                max: config.random_weights.max,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(GraphStore {
            vertices: Vec::with_capacity(config.max_vertices),
            adjacency: Array2::zeros((config.max_vertices, config.max_vertices)),
            weights: Array2::zeros((config.max_vertices, config.max_vertices)),
            max_vertices: config.max_vertices,
            max_edges: config.max_edges,
            edge_count: 0,
            random_weights: config.random_weights,
            rng,
        })
    }

    /// Create an empty store with the default random weight range
    pub fn with_capacity(max_vertices: usize, max_edges: usize) -> Self {
        GraphStore {
            vertices: Vec::with_capacity(max_vertices),
            adjacency: Array2::zeros((max_vertices, max_vertices)),
            weights: Array2::zeros((max_vertices, max_vertices)),
            max_vertices,
            max_edges,
            edge_count: 0,
            random_weights: WeightRange::default(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Append a vertex; its index is its position
    pub fn add_vertex(&mut self, vertex: Vertex) -> GraphResult<VertexIndex> {
        if self.vertices.len() == self.max_vertices {
            warn!("Rejected vertex {}: graph is full", vertex.name);
            return Err(GraphError::VertexCapacityExceeded {
                capacity: self.max_vertices,
            });
        }
        let idx = self.vertices.len();
        debug!("Added vertex {} at index {}", vertex.name, idx);
        self.vertices.push(vertex);
        Ok(idx)
    }

    /// Connect two vertices.
    ///
    /// A missing weight is drawn from the configured random range. The weight
    /// is written in the `from -> to` direction and the symmetry pass copies
    /// it across; on conflict with a nonzero opposite entry this insertion
    /// wins. A zero weight never overwrites a nonzero opposite entry.
    pub fn add_edge(
        &mut self,
        from: VertexIndex,
        to: VertexIndex,
        weight: Option<Weight>,
    ) -> GraphResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        if self.edge_count == self.max_edges {
            warn!("Rejected edge {} - {}: edge capacity reached", from, to);
            return Err(GraphError::EdgeCapacityExceeded {
                capacity: self.max_edges,
            });
        }

        let weight = weight.unwrap_or_else(|| self.random_weight());

        self.adjacency[[from, to]] = 1;
        self.adjacency[[to, from]] = 1;
        self.weights[[from, to]] = weight;
        self.edge_count += 1;

        let repaired = self.make_symmetric(Some((from, to)));
        debug!(
            "Added edge {} - {} (weight {}), {} weight pair(s) repaired",
            from, to, weight, repaired
        );
        Ok(())
    }

    pub fn add_weighted_edge(
        &mut self,
        from: VertexIndex,
        to: VertexIndex,
        weight: Weight,
    ) -> GraphResult<()> {
        self.add_edge(from, to, Some(weight))
    }

    pub fn add_random_edge(&mut self, from: VertexIndex, to: VertexIndex) -> GraphResult<()> {
        self.add_edge(from, to, None)
    }

    /// Remove the connection between two vertices from traversal.
    ///
    /// The stored weight is kept.
    pub fn restrict(&mut self, from: VertexIndex, to: VertexIndex) -> GraphResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        self.adjacency[[from, to]] = 0;
        self.adjacency[[to, from]] = 0;
        debug!("Restricted edge {} - {}", from, to);
        Ok(())
    }

    /// Repair asymmetric weight pairs, returning how many were changed.
    ///
    /// A zero entry takes the nonzero one. Two unequal nonzero entries resolve
    /// to the `preferred` direction when the pair matches it, otherwise to the
    /// lower-index row.
    fn make_symmetric(&mut self, preferred: Option<(VertexIndex, VertexIndex)>) -> usize {
        let n = self.vertices.len();
        let mut repaired = 0;
        for i in 0..n {
            for j in (i + 1)..n {
                let upper = self.weights[[i, j]];
                let lower = self.weights[[j, i]];
                if upper == lower {
                    continue;
                }
                repaired += 1;
                if upper == 0 {
                    self.weights[[i, j]] = lower;
                } else if lower == 0 || preferred != Some((j, i)) {
                    self.weights[[j, i]] = upper;
                } else {
                    self.weights[[i, j]] = lower;
                }
            }
        }
        repaired
    }

    fn random_weight(&mut self) -> Weight {
        self.rng
            .gen_range(self.random_weights.min..=self.random_weights.max)
    }

    fn check_index(&self, index: VertexIndex) -> GraphResult<()> {
        if index < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfRange {
                index,
                vertex_count: self.vertices.len(),
            })
        }
    }

    /// Adjacency matrix clipped to the occupied vertices
    pub fn adjacency(&self) -> ArrayView2<'_, u8> {
        let n = self.vertices.len();
        self.adjacency.slice(s![..n, ..n])
    }

    /// Weight matrix clipped to the occupied vertices
    pub fn weights(&self) -> ArrayView2<'_, Weight> {
        let n = self.vertices.len();
        self.weights.slice(s![..n, ..n])
    }

    /// Read-only view for the shortest-path engine
    pub fn view(&self) -> GraphResult<GraphView<'_>> {
        Ok(GraphView::new(self.adjacency(), self.weights())?)
    }

    pub fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> GraphResult<bool> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.adjacency[[from, to]] != 0)
    }

    /// Stored weight between two vertices, whether or not the edge is restricted
    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> GraphResult<Weight> {
        self.check_index(from)?;
        self.check_index(to)?;
        Ok(self.weights[[from, to]])
    }

    /// Traversable edges as `(lower, higher, weight)`
    pub fn edges(&self) -> Vec<(VertexIndex, VertexIndex, Weight)> {
        let n = self.vertices.len();
        let mut edges = Vec::new();
        for i in 0..n {
            for j in i..n {
                if self.adjacency[[i, j]] != 0 {
                    edges.push((i, j, self.weights[[i, j]]));
                }
            }
        }
        edges
    }

    pub fn is_symmetric(&self) -> bool {
        let weights = self.weights();
        weights == weights.t()
    }

    pub fn vertex(&self, index: VertexIndex) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Index of the first vertex with this name
    pub fn index_of(&self, name: &str) -> Option<VertexIndex> {
        self.vertices.iter().position(|v| v.name() == name)
    }

    /// Like [`GraphStore::index_of`] but an unknown name is an error
    pub fn resolve(&self, name: &str) -> GraphResult<VertexIndex> {
        self.index_of(name)
            .ok_or_else(|| GraphError::UnknownVertex(name.to_string()))
    }

    pub fn rename_vertex(
        &mut self,
        index: VertexIndex,
        name: impl Into<VertexName>,
    ) -> GraphResult<()> {
        self.check_index(index)?;
        self.vertices[index].rename(name);
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn max_edges(&self) -> usize {
        self.max_edges
    }

    /// Adjacency matrix labelled with vertex names
    pub fn adjacency_table(&self) -> AdjacencyTable<'_> {
        let names = self.vertices.iter().map(|v| v.name()).collect();
        AdjacencyTable::new(names, self.adjacency())
    }
}
