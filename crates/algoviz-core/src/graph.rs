//! Graph: the input of the traversal engines.
//!
//! A [`Graph`] is a plain list of positioned [`Node`]s and undirected
//! [`Edge`]s. Node positions are layout hints for the presentation layer and
//! carry no meaning for the algorithms. Edge order matters: neighbour lookup
//! reports endpoints in the order their edges were added, which is what DFS
//! relies on.
//!
//! The engines accept any graph as-is. Graphs coming from the outside world
//! (hand-built or loaded from JSON) can be checked with [`Graph::validate`]
//! first; an unchecked dangling edge is simply ignored during traversal.

use std::collections::{HashMap, HashSet};

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::NodeId;

/// A positioned graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

/// An undirected edge. `source`/`target` only record how the edge was
/// written down; lookups check both directions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Edge {
    pub fn new(source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Edge {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns `true` if this edge touches `id` at either end.
    pub fn touches(&self, id: &NodeId) -> bool {
        &self.source == id || &self.target == id
    }

    /// Returns the endpoint opposite to `id`, or `None` if the edge does not
    /// touch `id`. A self-loop returns `id` itself.
    pub fn other(&self, id: &NodeId) -> Option<&NodeId> {
        if &self.source == id {
            Some(&self.target)
        } else if &self.target == id {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Returns `true` if this edge connects `a` and `b` in either orientation.
    pub fn connects(&self, a: &NodeId, b: &NodeId) -> bool {
        (&self.source == a && &self.target == b) || (&self.source == b && &self.target == a)
    }
}

/// A graph of positioned nodes and undirected edges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph from its parts without any validation.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| &n.id == id)
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &NodeId) -> Result<&Node, CoreError> {
        self.nodes
            .iter()
            .find(|n| &n.id == id)
            .ok_or_else(|| CoreError::NodeNotFound { id: id.clone() })
    }

    /// Returns `true` if an edge joins `a` and `b` in either orientation.
    pub fn has_edge(&self, a: &NodeId, b: &NodeId) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// Returns the endpoints opposite to `id` of every edge touching it, in
    /// edge order.
    ///
    /// Endpoints that are not nodes of this graph are skipped. Duplicates are
    /// kept; callers decide how to collapse them.
    pub fn neighbors(&self, id: &NodeId) -> Vec<NodeId> {
        self.edges
            .iter()
            .filter_map(|e| e.other(id))
            .filter(|other| self.contains_node(other))
            .cloned()
            .collect()
    }

    /// Checks that node ids are unique and every edge references known nodes.
    pub fn validate(&self) -> Result<(), CoreError> {
        let mut seen = HashSet::new();
        for node in &self.nodes {
            if !seen.insert(&node.id) {
                return Err(CoreError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !seen.contains(endpoint) {
                    return Err(CoreError::DanglingEdge {
                        from: edge.source.clone(),
                        to: edge.target.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Builds an undirected petgraph view of this graph. Node weights are the
    /// node ids; dangling edges are dropped.
    pub fn to_petgraph(&self) -> UnGraph<NodeId, ()> {
        let mut graph = UnGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut indices: HashMap<&NodeId, NodeIndex<u32>> = HashMap::new();

        for node in &self.nodes {
            let idx = graph.add_node(node.id.clone());
            indices.entry(&node.id).or_insert(idx);
        }

        for edge in &self.edges {
            if let (Some(&a), Some(&b)) = (indices.get(&edge.source), indices.get(&edge.target)) {
                graph.add_edge(a, b, ());
            }
        }

        graph
    }

    /// Returns `true` if every node is reachable from every other node.
    /// The empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        petgraph::algo::connected_components(&self.to_petgraph()) <= 1
    }

    /// Parses a graph from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> Node {
        Node {
            id: NodeId::from(id),
            x: 0.0,
            y: 0.0,
        }
    }

    /// Helper: a path graph 0 - 1 - 2.
    fn path3() -> Graph {
        Graph::new(
            vec![node("0"), node("1"), node("2")],
            vec![Edge::new("0", "1"), Edge::new("1", "2")],
        )
    }

    #[test]
    fn neighbors_follow_edge_order_in_both_directions() {
        let graph = Graph::new(
            vec![node("a"), node("b"), node("c")],
            vec![Edge::new("b", "a"), Edge::new("a", "c")],
        );
        assert_eq!(
            graph.neighbors(&NodeId::from("a")),
            vec![NodeId::from("b"), NodeId::from("c")]
        );
    }

    #[test]
    fn neighbors_skip_dangling_endpoints() {
        let mut graph = path3();
        graph.edges.push(Edge::new("1", "9"));
        assert_eq!(
            graph.neighbors(&NodeId::from("1")),
            vec![NodeId::from("0"), NodeId::from("2")]
        );
    }

    #[test]
    fn self_loop_reports_itself() {
        let graph = Graph::new(vec![node("0")], vec![Edge::new("0", "0")]);
        assert_eq!(graph.neighbors(&NodeId::from("0")), vec![NodeId::from("0")]);
    }

    #[test]
    fn has_edge_checks_both_orientations() {
        let graph = path3();
        assert!(graph.has_edge(&NodeId::from("1"), &NodeId::from("0")));
        assert!(!graph.has_edge(&NodeId::from("0"), &NodeId::from("2")));
    }

    #[test]
    fn validate_accepts_well_formed_graph() {
        assert!(path3().validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_node() {
        let mut graph = path3();
        graph.nodes.push(node("1"));
        assert!(matches!(
            graph.validate(),
            Err(CoreError::DuplicateNode { id }) if id == NodeId::from("1")
        ));
    }

    #[test]
    fn validate_rejects_dangling_edge() {
        let mut graph = path3();
        graph.edges.push(Edge::new("2", "7"));
        let err = graph.validate().unwrap_err();
        assert!(matches!(err, CoreError::DanglingEdge { ref missing, .. } if *missing == NodeId::from("7")));
        assert_eq!(err.to_string(), "edge 2 -> 7 references unknown node '7'");
    }

    #[test]
    fn node_lookup_reports_missing_id() {
        let graph = path3();
        assert!(graph.node(&NodeId::from("2")).is_ok());
        assert!(matches!(
            graph.node(&NodeId::from("5")),
            Err(CoreError::NodeNotFound { .. })
        ));
    }

    #[test]
    fn connectivity() {
        assert!(path3().is_connected());
        assert!(Graph::default().is_connected());

        let mut split = path3();
        split.nodes.push(node("3"));
        assert!(!split.is_connected());
    }

    #[test]
    fn petgraph_view_drops_dangling_edges() {
        let mut graph = path3();
        graph.edges.push(Edge::new("0", "missing"));
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
    }

    #[test]
    fn json_shape_matches_presentation_layer() {
        let graph = Graph::new(
            vec![Node {
                id: NodeId::from("0"),
                x: 450.0,
                y: 250.0,
            }],
            vec![Edge::new("0", "0")],
        );
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "nodes": [{"id": "0", "x": 450.0, "y": 250.0}],
                "edges": [{"source": "0", "target": "0"}]
            })
        );
        let back = Graph::from_json(&json.to_string()).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn from_json_reports_malformed_input() {
        assert!(matches!(Graph::from_json("{\"nodes\": 3}"), Err(CoreError::Json(_))));
    }
}
