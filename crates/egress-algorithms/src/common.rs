//! Shared utilities for graph algorithms
//!
//! Provides a read-only, borrowed view of a dense graph for algorithm execution.

use ndarray::{ArrayView2, Axis};
use std::fmt;
use thiserror::Error;

/// Dense vertex index (position in insertion order)
pub type VertexIndex = usize;

/// Edge weight. Zero is a legal weight, edge existence is tracked separately.
pub type Weight = u64;

/// Errors raised by the algorithms in this crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("vertex index {index} out of range (vertex count {vertex_count})")]
    IndexOutOfRange { index: VertexIndex, vertex_count: usize },

    #[error("adjacency shape {adjacency:?} and weight shape {weights:?} must be equal and square")]
    ShapeMismatch {
        adjacency: (usize, usize),
        weights: (usize, usize),
    },

    #[error("backtrace stalled at vertex {at}: no consistent predecessor")]
    BacktraceStalled { at: VertexIndex },

    #[error("distance to vertex {at} exceeds the weight range")]
    WeightOverflow { at: VertexIndex },

    #[error("distance table covers {table} vertices but the view has {view}")]
    ViewMismatch { table: usize, view: usize },
}

/// Distance from the source of a query
///
/// `Infinite` orders above every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Finite(Weight),
    Infinite,
}

impl Distance {
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, if any
    pub fn value(&self) -> Option<Weight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// A dense, index-addressed view of an undirected weighted graph.
///
/// Borrows the adjacency and weight matrices of the owning store; the view
/// never mutates them.
#[derive(Debug, Clone, Copy)]
pub struct GraphView<'a> {
    /// `adjacency[[i, j]] != 0` iff an edge joins i and j
    adjacency: ArrayView2<'a, u8>,
    /// Edge weights, meaningful only where an edge exists
    weights: ArrayView2<'a, Weight>,
}

impl<'a> GraphView<'a> {
    pub fn new(
        adjacency: ArrayView2<'a, u8>,
        weights: ArrayView2<'a, Weight>,
    ) -> Result<Self, PathError> {
        let (rows, cols) = adjacency.dim();
        if rows != cols || adjacency.dim() != weights.dim() {
            return Err(PathError::ShapeMismatch {
                adjacency: adjacency.dim(),
                weights: weights.dim(),
            });
        }
        Ok(GraphView { adjacency, weights })
    }

    /// Number of vertices in the view
    pub fn vertex_count(&self) -> usize {
        self.adjacency.nrows()
    }

    pub fn has_edge(&self, from: VertexIndex, to: VertexIndex) -> bool {
        self.adjacency[[from, to]] != 0
    }

    pub fn weight(&self, from: VertexIndex, to: VertexIndex) -> Weight {
        self.weights[[from, to]]
    }

    /// Neighbours of `idx` in ascending index order, with the connecting weight
    pub fn neighbors(&self, idx: VertexIndex) -> impl Iterator<Item = (VertexIndex, Weight)> + 'a {
        let view = *self;
        view.adjacency
            .index_axis_move(Axis(0), idx)
            .into_iter()
            .enumerate()
            .filter(|&(_, &a)| a != 0)
            .map(move |(j, _)| (j, view.weights[[idx, j]]))
    }

    /// Reject indices outside `[0, vertex_count)`
    pub fn check_index(&self, index: VertexIndex) -> Result<(), PathError> {
        if index < self.vertex_count() {
            Ok(())
        } else {
            Err(PathError::IndexOutOfRange {
                index,
                vertex_count: self.vertex_count(),
            })
        }
    }
}
