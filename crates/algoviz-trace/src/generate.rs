//! Random graph generator.
//!
//! Graphs are built in two phases so that connectivity never depends on
//! chance:
//!
//! 1. **Spanning tree.** Starting from node 0, repeatedly join a random
//!    already-connected node to a random not-yet-connected node until every
//!    node is connected.
//! 2. **Density.** Add random extra edges towards
//!    `floor(n(n-1)/2 * density)` total edges. Each rejected candidate (self
//!    pair or existing edge) uses up one of `3 * missing` attempts, so the
//!    target is best-effort rather than exact.
//!
//! Nodes are laid out evenly on a circle; positions are layout hints only.
//!
//! Reproducibility: [`generate_from_config`] with a `seed` uses a ChaCha8
//! stream, so the same config always yields the same graph.

use std::collections::HashSet;
use std::f64::consts::PI;

use algoviz_core::{Edge, Graph, Node, NodeId};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

/// Centre of the circular layout.
const LAYOUT_CENTER: (f64, f64) = (250.0, 250.0);
/// Radius of the circular layout.
const LAYOUT_RADIUS: f64 = 200.0;

/// Configuration for a generator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of nodes. Default: 10.
    pub node_count: usize,
    /// Fraction of all possible edges to aim for, within `[0, 1]`. Default: 0.3.
    pub edge_density: f64,
    /// Seed for a reproducible graph; entropy from the OS when `None`.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            node_count: 10,
            edge_density: 0.3,
            seed: None,
        }
    }
}

/// Generates a connected random graph using thread-local randomness.
pub fn generate(node_count: usize, edge_density: f64) -> Result<Graph, TraceError> {
    generate_with_rng(node_count, edge_density, &mut rand::thread_rng())
}

/// Generates a graph as described by `config`.
pub fn generate_from_config(config: &GeneratorConfig) -> Result<Graph, TraceError> {
    match config.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_with_rng(config.node_count, config.edge_density, &mut rng)
        }
        None => generate(config.node_count, config.edge_density),
    }
}

/// Generates a connected random graph drawing from `rng`.
pub fn generate_with_rng<R: Rng>(
    node_count: usize,
    edge_density: f64,
    rng: &mut R,
) -> Result<Graph, TraceError> {
    if !edge_density.is_finite() || !(0.0..=1.0).contains(&edge_density) {
        return Err(TraceError::InvalidEdgeDensity {
            density: edge_density,
        });
    }

    let nodes = circle_layout(node_count);
    if node_count == 0 {
        return Ok(Graph::new(nodes, Vec::new()));
    }

    let mut edges = spanning_tree(node_count, rng);
    let tree_edges = edges.len();

    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(tree_edges * 2);
    for &(a, b) in &edges {
        seen.insert((a, b));
        seen.insert((b, a));
    }

    let max_possible = node_count * (node_count - 1) / 2;
    let target = (max_possible as f64 * edge_density).floor() as usize;
    let missing = target.saturating_sub(tree_edges);

    let mut attempts_left = missing * 3;
    let mut added = 0;
    while added < missing && attempts_left > 0 {
        let i = rng.gen_range(0..node_count);
        let j = rng.gen_range(0..node_count);

        if i == j || seen.contains(&(i, j)) {
            attempts_left -= 1;
            continue;
        }

        edges.push((i, j));
        seen.insert((i, j));
        seen.insert((j, i));
        added += 1;
    }

    tracing::trace!(
        node_count,
        tree_edges,
        target,
        added,
        "generated random graph"
    );

    let edges = edges
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();
    Ok(Graph::new(nodes, edges))
}

/// Places `n` nodes evenly on the layout circle, node `i` at angle `2πi/n`.
fn circle_layout(n: usize) -> Vec<Node> {
    (0..n)
        .map(|i| {
            let angle = (i as f64 / n as f64) * 2.0 * PI;
            Node {
                id: NodeId::from(i),
                x: LAYOUT_CENTER.0 + LAYOUT_RADIUS * angle.cos(),
                y: LAYOUT_CENTER.1 + LAYOUT_RADIUS * angle.sin(),
            }
        })
        .collect()
}

/// Random spanning tree over `0..n` rooted at node 0, as index pairs
/// `(connected, newly_connected)`.
fn spanning_tree<R: Rng>(n: usize, rng: &mut R) -> Vec<(usize, usize)> {
    let mut connected = vec![0];
    let mut remaining: Vec<usize> = (1..n).collect();
    let mut edges = Vec::with_capacity(n.saturating_sub(1));

    while !remaining.is_empty() {
        let source = connected[rng.gen_range(0..connected.len())];
        let target = remaining.remove(rng.gen_range(0..remaining.len()));
        edges.push((source, target));
        connected.push(target);
    }

    edges
}
