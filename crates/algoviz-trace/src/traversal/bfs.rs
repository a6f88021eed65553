//! Breadth-first search trace.
//!
//! Step sequence per processed node:
//! 1. `current` set, node not yet visited;
//! 2. node appended to `visited`;
//! 3. per neighbour (not visited, not queued, sorted by id): an exploring
//!    step highlighting the edge, then a step showing it enqueued with its
//!    distance relaxed;
//! 4. node appended to `completed`.
//!
//! Every step carries the queue, the distance map and the completed list.

use std::collections::VecDeque;

use algoviz_core::{Distance, Frontier, Graph, NodeId, TraversalStep};
use indexmap::IndexMap;

/// Traces a breadth-first search of `graph` from `start`.
pub fn bfs(graph: &Graph, start: &NodeId) -> Vec<TraversalStep> {
    let mut visited: Vec<NodeId> = Vec::new();
    let mut queue: VecDeque<NodeId> = VecDeque::from([start.clone()]);
    let mut completed: Vec<NodeId> = Vec::new();

    let mut distances: IndexMap<NodeId, Distance> = graph
        .nodes
        .iter()
        .map(|node| {
            let d = if &node.id == start {
                Distance::Finite(0)
            } else {
                Distance::Infinite
            };
            (node.id.clone(), d)
        })
        .collect();

    tracing::debug!(nodes = graph.node_count(), %start, "starting bfs");

    let snapshot = |visited: &[NodeId],
                    queue: &VecDeque<NodeId>,
                    distances: &IndexMap<NodeId, Distance>,
                    completed: &[NodeId]| {
        TraversalStep::snapshot(visited, Frontier::queue(queue))
            .with_distances(distances)
            .with_completed(completed)
    };

    let mut steps = vec![snapshot(&visited, &queue, &distances, &completed)];

    while let Some(current) = queue.pop_front() {
        if visited.contains(&current) {
            continue;
        }

        steps.push(snapshot(&visited, &queue, &distances, &completed).with_current(&current));

        visited.push(current.clone());
        steps.push(snapshot(&visited, &queue, &distances, &completed));

        let mut neighbors: Vec<NodeId> = graph
            .neighbors(&current)
            .into_iter()
            .filter(|n| !visited.contains(n) && !queue.contains(n))
            .collect();
        neighbors.sort();
        neighbors.dedup();

        for neighbor in neighbors {
            steps.push(
                snapshot(&visited, &queue, &distances, &completed)
                    .with_exploring(&current, &neighbor),
            );

            let candidate = distances
                .get(&current)
                .copied()
                .unwrap_or(Distance::Infinite)
                .successor();
            if let Some(known) = distances.get_mut(&neighbor) {
                if candidate < *known {
                    *known = candidate;
                }
            }

            queue.push_back(neighbor);
            steps.push(snapshot(&visited, &queue, &distances, &completed));
        }

        completed.push(current);
        steps.push(snapshot(&visited, &queue, &distances, &completed));
    }

    tracing::debug!(steps = steps.len(), visited = visited.len(), "bfs completed");
    steps
}
