pub mod error;
pub mod graph;
pub mod id;
pub mod step;

// Re-export commonly used types
pub use error::CoreError;
pub use graph::{Edge, Graph, Node};
pub use id::NodeId;
pub use step::{Distance, Frontier, SortPhase, SortingStep, TraversalStep};
