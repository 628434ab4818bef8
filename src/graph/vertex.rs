//! Vertex implementation for the routing graph

use super::types::{Position, VertexName};
use serde::{Deserialize, Serialize};

/// A vertex of the floor plan
///
/// Identified in the store by its insertion index; the name is for display
/// and lookup, the position for drawing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    /// Display name
    pub name: VertexName,

    /// Drawing position
    pub position: Position,
}

impl Vertex {
    /// Create a vertex at `(x, y)`
    pub fn new(name: impl Into<VertexName>, x: i32, y: i32) -> Self {
        Vertex {
            name: name.into(),
            position: Position::new(x, y),
        }
    }

    /// Create a vertex without a meaningful position
    pub fn unplaced(name: impl Into<VertexName>) -> Self {
        Vertex {
            name: name.into(),
            position: Position::default(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn rename(&mut self, name: impl Into<VertexName>) {
        self.name = name.into();
    }
}
