//! Depth-first search trace.
//!
//! Stack-based. A popped node that was already visited is dropped without a
//! step; this happens because a node can be pushed several times before it
//! is processed. Neighbours are collected in edge order and pushed in
//! reverse, so the first-listed neighbour ends up on top and is visited
//! first. Each push is an exploring step followed by a stack-updated step.

use algoviz_core::{Frontier, Graph, NodeId, TraversalStep};

/// Traces a depth-first search of `graph` from `start`.
pub fn dfs(graph: &Graph, start: &NodeId) -> Vec<TraversalStep> {
    let mut visited: Vec<NodeId> = Vec::new();
    let mut stack: Vec<NodeId> = vec![start.clone()];

    tracing::debug!(nodes = graph.node_count(), %start, "starting dfs");

    let mut steps = vec![TraversalStep::snapshot(&visited, Frontier::stack(&stack))];

    while let Some(current) = stack.pop() {
        if visited.contains(&current) {
            continue;
        }

        steps.push(TraversalStep::snapshot(&visited, Frontier::stack(&stack)).with_current(&current));

        visited.push(current.clone());
        steps.push(TraversalStep::snapshot(&visited, Frontier::stack(&stack)));

        let mut neighbors: Vec<NodeId> = Vec::new();
        for neighbor in graph.neighbors(&current) {
            if !visited.contains(&neighbor) && !neighbors.contains(&neighbor) {
                neighbors.push(neighbor);
            }
        }

        for neighbor in neighbors.into_iter().rev() {
            steps.push(
                TraversalStep::snapshot(&visited, Frontier::stack(&stack))
                    .with_exploring(&current, &neighbor),
            );
            stack.push(neighbor);
            steps.push(TraversalStep::snapshot(&visited, Frontier::stack(&stack)));
        }
    }

    tracing::debug!(steps = steps.len(), visited = visited.len(), "dfs completed");
    steps
}
