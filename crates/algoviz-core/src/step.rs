//! Step types: the immutable snapshots that make up a trace.
//!
//! A trace is a `Vec` of steps produced eagerly by one of the engines in
//! `algoviz-trace`. Every step owns its data. Engines build steps from
//! borrowed views of their working buffers and the `with_*` builders copy
//! those views, so mutating a buffer after a push can never alter a step that
//! was already emitted.
//!
//! Both step types serialize to camelCase JSON with unset fields omitted,
//! which is the shape the presentation layer consumes.

use std::collections::VecDeque;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::Edge;
use crate::id::NodeId;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Machine-readable phase of a sorting step.
///
/// Merge sort and quick sort tag every step they emit. The simple sorts leave
/// the phase unset; their state is fully described by `comparing`,
/// `swapping` and `sorted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SortPhase {
    /// The untouched input.
    Initial,
    /// Every splittable subarray was split once more; `depth` starts at 1.
    Splitting { depth: u32 },
    /// All subarrays are terminal (length 0 or 1).
    SplitComplete,
    /// All pairwise merges of one level finished; `depth` is the level the
    /// merged arrays now belong to.
    Merging { depth: u32 },
    /// One quick sort partition call finished.
    Partitioned,
    /// The array is fully sorted.
    Complete,
}

/// One snapshot of a sorting algorithm.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortingStep {
    /// The working array. `None` marks a masked element.
    pub array: Vec<Option<f64>>,
    /// Merge sort's partition forest at this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_arrays: Option<Vec<Vec<f64>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<SortPhase>,
    /// Display text. Never parsed; use `phase` for state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparing: Option<(usize, usize)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swapping: Option<(usize, usize)>,
    /// Indices known to hold their final value, in the order they were learned.
    #[serde(default, skip_serializing_if = "Option::is_none", alias = "sortedIndices")]
    pub sorted: Option<Vec<usize>>,
    /// Final index of the pivot of the last partition (quick sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<usize>,
    /// Inclusive `(low, high)` bounds of the active partition (quick sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_array_range: Option<(usize, usize)>,
    /// `array[low..=high]` of the active partition (quick sort).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_array: Option<Vec<f64>>,
}

impl SortingStep {
    /// A plain snapshot of `values` with no highlighting.
    pub fn snapshot(values: &[f64]) -> Self {
        SortingStep {
            array: values.iter().copied().map(Some).collect(),
            ..Default::default()
        }
    }

    pub fn with_comparing(mut self, a: usize, b: usize) -> Self {
        self.comparing = Some((a, b));
        self
    }

    pub fn with_swapping(mut self, a: usize, b: usize) -> Self {
        self.swapping = Some((a, b));
        self
    }

    pub fn with_sorted<'a>(mut self, indices: impl IntoIterator<Item = &'a usize>) -> Self {
        self.sorted = Some(indices.into_iter().copied().collect());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_phase(mut self, phase: SortPhase) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_sub_arrays(mut self, sub_arrays: &[Vec<f64>]) -> Self {
        self.sub_arrays = Some(sub_arrays.to_vec());
        self
    }

    pub fn with_pivot(mut self, pivot: usize) -> Self {
        self.pivot = Some(pivot);
        self
    }

    /// Records the active partition `[low, high]` and copies its slice out of
    /// the step's own array.
    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.sub_array_range = Some((low, high));
        self.sub_array = Some(
            self.array[low..=high]
                .iter()
                .flatten()
                .copied()
                .collect(),
        );
        self
    }

    /// The present (non-masked) values, in array order.
    pub fn values(&self) -> Vec<f64> {
        self.array.iter().flatten().copied().collect()
    }

    /// Number of indices marked sorted (0 when the field is unset).
    pub fn sorted_len(&self) -> usize {
        self.sorted.as_ref().map_or(0, Vec::len)
    }
}

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Hop count from the start node. `Infinite` orders above every finite value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Distance {
    Finite(u32),
    /// Serialized as `null`.
    Infinite,
}

impl Distance {
    /// The distance one hop further away.
    pub fn successor(self) -> Distance {
        match self {
            Distance::Finite(d) => d.checked_add(1).map_or(Distance::Infinite, Distance::Finite),
            Distance::Infinite => Distance::Infinite,
        }
    }

    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "\u{221e}"),
        }
    }
}

/// The discovered-but-unprocessed nodes: a FIFO queue for BFS, a LIFO stack
/// for DFS (top of stack is the last element).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frontier {
    Queue(Vec<NodeId>),
    Stack(Vec<NodeId>),
}

impl Frontier {
    pub fn queue(queue: &VecDeque<NodeId>) -> Self {
        Frontier::Queue(queue.iter().cloned().collect())
    }

    pub fn stack(stack: &[NodeId]) -> Self {
        Frontier::Stack(stack.to_vec())
    }

    /// The frontier's nodes, front of queue / bottom of stack first.
    pub fn nodes(&self) -> &[NodeId] {
        match self {
            Frontier::Queue(nodes) | Frontier::Stack(nodes) => nodes,
        }
    }
}

/// One snapshot of a graph traversal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalStep {
    /// Nodes in discovery order.
    pub visited: Vec<NodeId>,
    /// Serialized as a `queue` or `stack` key.
    #[serde(flatten)]
    pub frontier: Option<Frontier>,
    /// Node being processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current: Option<NodeId>,
    /// Neighbour being considered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exploring: Option<NodeId>,
    /// BFS only, keyed in graph node order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distances: Option<IndexMap<NodeId, Distance>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_edge: Option<Edge>,
    /// BFS only: nodes whose neighbours were all processed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<Vec<NodeId>>,
}

impl TraversalStep {
    /// A snapshot holding a copy of `visited` and the frontier.
    pub fn snapshot(visited: &[NodeId], frontier: Frontier) -> Self {
        TraversalStep {
            visited: visited.to_vec(),
            frontier: Some(frontier),
            ..Default::default()
        }
    }

    pub fn with_current(mut self, current: &NodeId) -> Self {
        self.current = Some(current.clone());
        self
    }

    /// Marks `neighbor` as explored from `current` and highlights the edge
    /// between them. Also sets `current`.
    pub fn with_exploring(mut self, current: &NodeId, neighbor: &NodeId) -> Self {
        self.current = Some(current.clone());
        self.exploring = Some(neighbor.clone());
        self.highlighted_edge = Some(Edge::new(current.clone(), neighbor.clone()));
        self
    }

    pub fn with_distances(mut self, distances: &IndexMap<NodeId, Distance>) -> Self {
        self.distances = Some(distances.clone());
        self
    }

    pub fn with_completed(mut self, completed: &[NodeId]) -> Self {
        self.completed = Some(completed.to_vec());
        self
    }

    /// The queue, if this is a BFS step.
    pub fn queue(&self) -> Option<&[NodeId]> {
        match &self.frontier {
            Some(Frontier::Queue(nodes)) => Some(nodes),
            _ => None,
        }
    }

    /// The stack, if this is a DFS step.
    pub fn stack(&self) -> Option<&[NodeId]> {
        match &self.frontier {
            Some(Frontier::Stack(nodes)) => Some(nodes),
            _ => None,
        }
    }

    /// Looks up the BFS distance of `id` at this step.
    pub fn distance(&self, id: &NodeId) -> Option<Distance> {
        self.distances.as_ref()?.get(id).copied()
    }
}
