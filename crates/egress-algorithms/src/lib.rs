pub mod common;
pub mod pathfinding;

pub use common::{Distance, GraphView, PathError, VertexIndex, Weight};
pub use pathfinding::{
    dijkstra, label_setting, path_weight, DistanceTable, PathOutcome, PathResult, Reconstruction,
};
