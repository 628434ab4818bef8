//! Routing graph implementation
//!
//! This module implements the fixed-capacity floor-plan graph:
//! - Named, positioned vertices addressed by insertion index
//! - Undirected edges in a dense adjacency matrix
//! - A weight matrix kept symmetric after every insertion
//! - Restriction of edges without losing their weights

pub mod store;
pub mod table;
pub mod types;
pub mod vertex;

// Re-export main types
pub use store::{GraphError, GraphResult, GraphStore};
pub use table::AdjacencyTable;
pub use types::{Position, VertexIndex, VertexName, Weight};
pub use vertex::Vertex;
