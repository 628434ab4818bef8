//! Pathfinding algorithms
//!
//! Dense label-setting Dijkstra ("visit the closest unvisited vertex") over a
//! [`GraphView`], with two ways of turning the distance table into a path.

use super::common::{Distance, GraphView, PathError, VertexIndex, Weight};

/// How a concrete path is recovered once distances are known
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Reconstruction {
    /// Walk the predecessor recorded whenever a relaxation improved a distance
    #[default]
    Predecessor,
    /// Re-derive predecessors from the finished distance table.
    ///
    /// Among consistent neighbours the smallest distance wins, and on equal
    /// distances the last index in scan order wins.
    DistanceBacktrace,
}

/// Result of a pathfinding algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub source: VertexIndex,
    pub target: VertexIndex,
    /// Vertices from source to target, both included
    pub path: Vec<VertexIndex>,
    pub cost: Weight,
}

/// Outcome of a single shortest-path query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    Found(PathResult),
    Unreachable {
        source: VertexIndex,
        target: VertexIndex,
    },
}

impl PathOutcome {
    pub fn found(&self) -> Option<&PathResult> {
        match self {
            PathOutcome::Found(result) => Some(result),
            PathOutcome::Unreachable { .. } => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// Distances from one source, as left by the forward pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    pub source: VertexIndex,
    pub distances: Vec<Distance>,
    /// Vertex whose relaxation last improved each distance
    pub predecessors: Vec<Option<VertexIndex>>,
}

impl DistanceTable {
    pub fn distance(&self, vertex: VertexIndex) -> Option<Distance> {
        self.distances.get(vertex).copied()
    }

    /// Recover one shortest path from the source to `target`.
    ///
    /// `view` must be the view the table was computed from.
    pub fn reconstruct(
        &self,
        view: &GraphView<'_>,
        target: VertexIndex,
        strategy: Reconstruction,
    ) -> Result<PathOutcome, PathError> {
        if view.vertex_count() != self.distances.len() {
            return Err(PathError::ViewMismatch {
                table: self.distances.len(),
                view: view.vertex_count(),
            });
        }
        view.check_index(target)?;

        let cost = match self.distances[target] {
            Distance::Finite(cost) => cost,
            Distance::Infinite => {
                return Ok(PathOutcome::Unreachable {
                    source: self.source,
                    target,
                })
            }
        };

        let path = match strategy {
            Reconstruction::Predecessor => self.predecessor_walk(target)?,
            Reconstruction::DistanceBacktrace => self.backtrace(view, target)?,
        };

        Ok(PathOutcome::Found(PathResult {
            source: self.source,
            target,
            path,
            cost,
        }))
    }

    fn predecessor_walk(&self, target: VertexIndex) -> Result<Vec<VertexIndex>, PathError> {
        let mut path = vec![target];
        let mut current = target;
        while current != self.source {
            match self.predecessors[current] {
                Some(prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => return Err(PathError::BacktraceStalled { at: current }),
            }
        }
        path.reverse();
        Ok(path)
    }

    /// Depth-first walk over consistent predecessors, most preferred first.
    ///
    /// A vertex that leads nowhere is abandoned and never retried, so the walk
    /// terminates even on zero-weight plateaus.
    fn backtrace(
        &self,
        view: &GraphView<'_>,
        target: VertexIndex,
    ) -> Result<Vec<VertexIndex>, PathError> {
        let mut seen = vec![false; self.distances.len()];
        seen[target] = true;
        let mut path = vec![target];
        let mut pending = vec![self.consistent_predecessors(view, target, &seen)];

        while path.last() != Some(&self.source) {
            let next = pending.last_mut().and_then(|candidates| candidates.pop());
            match next {
                Some(prev) if seen[prev] => continue,
                Some(prev) => {
                    seen[prev] = true;
                    path.push(prev);
                    pending.push(self.consistent_predecessors(view, prev, &seen));
                }
                None => {
                    pending.pop();
                    path.pop();
                    if path.is_empty() {
                        return Err(PathError::BacktraceStalled { at: target });
                    }
                }
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Neighbours `i` of `current` with `distance[i] == distance[current] - weight[i][current]`.
    ///
    /// Ordered so the preferred candidate is last: smallest distance, then
    /// highest index.
    fn consistent_predecessors(
        &self,
        view: &GraphView<'_>,
        current: VertexIndex,
        seen: &[bool],
    ) -> Vec<VertexIndex> {
        let here = match self.distances[current] {
            Distance::Finite(d) => d,
            Distance::Infinite => return Vec::new(),
        };

        let mut candidates: Vec<VertexIndex> = view
            .neighbors(current)
            .map(|(i, _)| i)
            .filter(|&i| !seen[i])
            .filter(|&i| match here.checked_sub(view.weight(i, current)) {
                Some(expected) => self.distances[i] == Distance::Finite(expected),
                None => false,
            })
            .collect();

        candidates.sort_by(|&a, &b| {
            self.distances[b]
                .cmp(&self.distances[a])
                .then(a.cmp(&b))
        });
        candidates
    }
}

/// Forward pass of Dijkstra's algorithm on a dense view.
///
/// Runs at most `vertex_count - 1` selection rounds. Selection scans left to
/// right with `<=`, so the last index sharing the minimum distance is visited
/// first. Vertices that cannot be reached keep [`Distance::Infinite`].
///
/// A reachable vertex whose shortest distance does not fit in [`Weight`] is
/// reported as [`PathError::WeightOverflow`].
pub fn label_setting(view: &GraphView<'_>, source: VertexIndex) -> Result<DistanceTable, PathError> {
    view.check_index(source)?;

    let n = view.vertex_count();
    let mut distances = vec![Distance::Infinite; n];
    let mut predecessors = vec![None; n];
    let mut visited = vec![false; n];
    let mut overflowed = vec![false; n];
    distances[source] = Distance::Finite(0);

    for _ in 1..n {
        let current = match closest_unvisited(&distances, &visited) {
            Some(idx) => idx,
            None => break,
        };
        visited[current] = true;

        // Everything left is unreachable
        let base = match distances[current] {
            Distance::Finite(d) => d,
            Distance::Infinite => break,
        };

        for (next, weight) in view.neighbors(current) {
            if visited[next] {
                continue;
            }
            // An overflowing sum never beats a finite distance
            let candidate = match base.checked_add(weight) {
                Some(d) => Distance::Finite(d),
                None => {
                    overflowed[next] = true;
                    continue;
                }
            };
            if candidate < distances[next] {
                distances[next] = candidate;
                predecessors[next] = Some(current);
            }
        }
    }

    if let Some(at) = (0..n).find(|&v| overflowed[v] && !distances[v].is_finite()) {
        return Err(PathError::WeightOverflow { at });
    }

    Ok(DistanceTable {
        source,
        distances,
        predecessors,
    })
}

fn closest_unvisited(distances: &[Distance], visited: &[bool]) -> Option<VertexIndex> {
    let mut min = Distance::Infinite;
    let mut min_index = None;
    for (i, &d) in distances.iter().enumerate() {
        if !visited[i] && d <= min {
            min = d;
            min_index = Some(i);
        }
    }
    min_index
}

/// Dijkstra's Algorithm (Weighted Shortest Path)
///
/// Computes the distance table from `source` and reconstructs one shortest
/// path to `target` with the given strategy.
pub fn dijkstra(
    view: &GraphView<'_>,
    source: VertexIndex,
    target: VertexIndex,
    strategy: Reconstruction,
) -> Result<PathOutcome, PathError> {
    view.check_index(target)?;
    let table = label_setting(view, source)?;
    table.reconstruct(view, target, strategy)
}

/// Total weight along `path` (consecutive pairs)
pub fn path_weight(view: &GraphView<'_>, path: &[VertexIndex]) -> Result<Weight, PathError> {
    path.windows(2).try_fold(0, |total: Weight, pair| {
        total
            .checked_add(view.weight(pair[0], pair[1]))
            .ok_or(PathError::WeightOverflow { at: pair[1] })
    })
}
