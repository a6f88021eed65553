//! Node identifier newtype.
//!
//! Graph nodes are identified by strings so that manually built graphs can use
//! any label. Ordering is lexicographic on the underlying string, which is the
//! order BFS uses to explore neighbours.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable node identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Creates a new identifier from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        NodeId(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        NodeId(id)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        NodeId(index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_display() {
        assert_eq!(format!("{}", NodeId::new("7")), "7");
    }

    #[test]
    fn node_id_from_index() {
        assert_eq!(NodeId::from(3usize), NodeId::new("3"));
    }

    #[test]
    fn ordering_is_lexicographic() {
        // "10" sorts before "2" as strings.
        let mut ids = vec![NodeId::from("2"), NodeId::from("10"), NodeId::from("1")];
        ids.sort();
        assert_eq!(ids, vec![NodeId::from("1"), NodeId::from("10"), NodeId::from("2")]);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&NodeId::new("a")).unwrap();
        assert_eq!(json, "\"a\"");
        let back: NodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NodeId::new("a"));
    }
}
