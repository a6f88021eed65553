use std::collections::HashSet;

use algoviz_core::{Distance, Graph, NodeId};
use algoviz_trace::traversal::{bfs, dfs, TraversalAlgorithm};
use algoviz_trace::{generate_from_config, traverse_checked, GeneratorConfig};
use proptest::prelude::*;

fn config() -> impl Strategy<Value = GeneratorConfig> {
    (1usize..16, 0.0f64..=1.0, any::<u64>()).prop_map(|(node_count, edge_density, seed)| {
        GeneratorConfig {
            node_count,
            edge_density,
            seed: Some(seed),
        }
    })
}

fn random_graph() -> impl Strategy<Value = Graph> {
    config().prop_map(|config| generate_from_config(&config).unwrap())
}

fn all_ids(graph: &Graph) -> HashSet<NodeId> {
    graph.nodes.iter().map(|n| n.id.clone()).collect()
}

// ── Generator ────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn generated_graphs_are_valid_and_connected(config in config()) {
        let graph = generate_from_config(&config).unwrap();
        let n = config.node_count;

        prop_assert_eq!(graph.node_count(), n);
        prop_assert!(graph.validate().is_ok());
        prop_assert!(graph.is_connected());
        prop_assert!(graph.edge_count() >= n - 1);
        prop_assert!(graph.edge_count() <= n * (n - 1) / 2);
        prop_assert!(graph.edges.iter().all(|e| e.source != e.target));
    }

    #[test]
    fn same_seed_same_graph(config in config()) {
        prop_assert_eq!(
            generate_from_config(&config).unwrap(),
            generate_from_config(&config).unwrap()
        );
    }
}

#[test]
fn small_sparse_graphs_stay_connected_across_seeds() {
    for seed in 0..500 {
        let config = GeneratorConfig {
            node_count: 6,
            edge_density: 0.2,
            seed: Some(seed),
        };
        let graph = generate_from_config(&config).unwrap();
        assert!(graph.is_connected(), "seed {seed}");
    }
}

// ── BFS ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn bfs_distances_are_hop_counts(graph in random_graph()) {
        let start = NodeId::from(0usize);
        let steps = bfs(&graph, &start);
        let last = steps.last().unwrap();

        let pg = graph.to_petgraph();
        let start_idx = pg.node_indices().find(|&i| pg[i] == start).unwrap();
        let hops = petgraph::algo::dijkstra(&pg, start_idx, None, |_| 1u32);

        for idx in pg.node_indices() {
            let expected = hops.get(&idx).map_or(Distance::Infinite, |&d| Distance::Finite(d));
            prop_assert_eq!(last.distance(&pg[idx]), Some(expected), "node {}", pg[idx]);
        }
    }

    #[test]
    fn bfs_visits_every_node_once_and_completes_it(graph in random_graph()) {
        let steps = bfs(&graph, &NodeId::from(0usize));
        let last = steps.last().unwrap();

        let visited: HashSet<NodeId> = last.visited.iter().cloned().collect();
        prop_assert_eq!(visited.len(), last.visited.len());
        prop_assert_eq!(visited, all_ids(&graph));
        prop_assert_eq!(last.completed.as_deref(), Some(&last.visited[..]));
        prop_assert_eq!(last.queue(), Some(&[][..]));
    }
}

// ── DFS ──────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn dfs_visits_every_node_once(graph in random_graph()) {
        let steps = dfs(&graph, &NodeId::from(0usize));
        let last = steps.last().unwrap();

        let visited: HashSet<NodeId> = last.visited.iter().cloned().collect();
        prop_assert_eq!(visited.len(), last.visited.len());
        // Leftover stack entries are duplicates popped silently after the
        // last step.
        let stack = last.stack().unwrap();
        prop_assert!(stack.iter().all(|id| visited.contains(id)));
        prop_assert_eq!(visited, all_ids(&graph));
    }

    #[test]
    fn dfs_children_follow_a_graph_edge(graph in random_graph()) {
        // Every node after the first was pushed by an already visited neighbour.
        let steps = dfs(&graph, &NodeId::from(0usize));
        let visited = &steps.last().unwrap().visited;
        for (i, node) in visited.iter().enumerate().skip(1) {
            prop_assert!(
                visited[..i].iter().any(|earlier| graph.has_edge(earlier, node)),
                "{} has no visited neighbour before it", node
            );
        }
    }
}

// ── Shared ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn highlighted_edges_exist_in_the_graph(graph in random_graph()) {
        for algo in TraversalAlgorithm::ALL {
            for step in algo.run(&graph, &NodeId::from(0usize)) {
                if let Some(edge) = &step.highlighted_edge {
                    prop_assert!(graph.has_edge(&edge.source, &edge.target), "{}", algo);
                    prop_assert_eq!(step.current.as_ref(), Some(&edge.source));
                    prop_assert_eq!(step.exploring.as_ref(), Some(&edge.target));
                }
            }
        }
    }

    #[test]
    fn checked_and_unchecked_runs_agree_on_valid_graphs(graph in random_graph()) {
        let start = NodeId::from(0usize);
        for algo in TraversalAlgorithm::ALL {
            prop_assert_eq!(
                traverse_checked(algo, &graph, &start).unwrap(),
                algo.run(&graph, &start)
            );
        }
    }
}

#[test]
fn graph_json_round_trips_through_the_file_format() {
    let config = GeneratorConfig {
        node_count: 5,
        edge_density: 0.5,
        seed: Some(7),
    };
    let graph = generate_from_config(&config).unwrap();
    let json = serde_json::to_string(&graph).unwrap();
    assert_eq!(Graph::from_json(&json).unwrap(), graph);
}

#[test]
fn traversal_steps_serialize_with_a_single_frontier_key() {
    let config = GeneratorConfig {
        node_count: 4,
        edge_density: 0.0,
        seed: Some(3),
    };
    let graph = generate_from_config(&config).unwrap();

    let bfs_json = serde_json::to_value(bfs(&graph, &NodeId::from(0usize))).unwrap();
    assert_eq!(bfs_json[0]["queue"], serde_json::json!(["0"]));
    assert!(bfs_json[0].get("stack").is_none());
    assert_eq!(bfs_json[0]["distances"]["0"], 0);
    assert!(bfs_json[0]["distances"]["1"].is_null());

    let dfs_json = serde_json::to_value(dfs(&graph, &NodeId::from(0usize))).unwrap();
    assert_eq!(dfs_json[0]["stack"], serde_json::json!(["0"]));
    assert!(dfs_json[0].get("queue").is_none());
    assert!(dfs_json[0].get("distances").is_none());
}
