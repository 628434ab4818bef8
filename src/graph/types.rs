//! Core type definitions for the routing graph

use serde::{Deserialize, Serialize};
use std::fmt;

pub use egress_algorithms::{VertexIndex, Weight};

/// Position of a vertex on the floor plan
///
/// Carried for renderers only; routing never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

/// Display name of a vertex (e.g., "A", "Exit-North")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct VertexName(String);

impl VertexName {
    pub fn new(name: impl Into<String>) -> Self {
        VertexName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VertexName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VertexName {
    fn from(s: String) -> Self {
        VertexName(s)
    }
}

impl From<&str> for VertexName {
    fn from(s: &str) -> Self {
        VertexName(s.to_string())
    }
}
