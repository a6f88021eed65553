//! Graph traversal trace engines.
//!
//! [`bfs`] and [`dfs`] share one state machine: take the next node off the
//! frontier, skip it silently if it was already visited, otherwise emit a
//! "current" step, mark it visited, emit again, then discover its neighbours
//! with an "exploring" step and a "frontier updated" step per neighbour.
//! BFS additionally tracks hop distances and the set of completed nodes.
//!
//! Both engines take the graph as-is. A start node that is not in the graph
//! is still visited; it simply has no neighbours. Use [`traverse_checked`]
//! to reject such input up front.

pub mod bfs;
pub mod dfs;

use std::fmt;
use std::str::FromStr;

use algoviz_core::{CoreError, Graph, NodeId, TraversalStep};
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

pub use bfs::bfs;
pub use dfs::dfs;

/// The traversal algorithms with a trace engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalAlgorithm {
    Bfs,
    Dfs,
}

impl TraversalAlgorithm {
    pub const ALL: [TraversalAlgorithm; 2] = [TraversalAlgorithm::Bfs, TraversalAlgorithm::Dfs];

    pub fn name(self) -> &'static str {
        match self {
            TraversalAlgorithm::Bfs => "bfs",
            TraversalAlgorithm::Dfs => "dfs",
        }
    }

    /// Runs this algorithm's engine from `start`.
    pub fn run(self, graph: &Graph, start: &NodeId) -> Vec<TraversalStep> {
        match self {
            TraversalAlgorithm::Bfs => bfs(graph, start),
            TraversalAlgorithm::Dfs => dfs(graph, start),
        }
    }
}

impl fmt::Display for TraversalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TraversalAlgorithm {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" | "breadth-first" | "breadth-first-search" => Ok(TraversalAlgorithm::Bfs),
            "dfs" | "depth-first" | "depth-first-search" => Ok(TraversalAlgorithm::Dfs),
            _ => Err(TraceError::UnknownAlgorithm {
                family: "traversal",
                name: s.to_string(),
                expected: "bfs, dfs".to_string(),
            }),
        }
    }
}

/// Validates `graph` and `start` before tracing.
///
/// Rejects duplicate node ids, dangling edges and an unknown start node.
pub fn traverse_checked(
    algorithm: TraversalAlgorithm,
    graph: &Graph,
    start: &NodeId,
) -> Result<Vec<TraversalStep>, TraceError> {
    graph.validate()?;
    if !graph.contains_node(start) {
        return Err(CoreError::NodeNotFound { id: start.clone() }.into());
    }
    Ok(algorithm.run(graph, start))
}

#[cfg(test)]
pub(crate) mod test_support {
    use algoviz_core::{Edge, Graph, Node, NodeId};

    /// Builds a graph with unit-spaced nodes from string ids and edge pairs.
    pub fn graph(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        Graph::new(
            ids.iter()
                .enumerate()
                .map(|(i, id)| Node {
                    id: NodeId::from(*id),
                    x: i as f64,
                    y: 0.0,
                })
                .collect(),
            edges.iter().map(|(a, b)| Edge::new(*a, *b)).collect(),
        )
    }

    pub fn ids(ids: &[&str]) -> Vec<NodeId> {
        ids.iter().map(|id| NodeId::from(*id)).collect()
    }
}
