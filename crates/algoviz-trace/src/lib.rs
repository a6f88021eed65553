//! Step-trace engines for sorting and graph traversal.
//!
//! Every engine is a pure function from its input to a `Vec` of steps that
//! describes the whole run, computed eagerly before any playback starts:
//!
//! - [`sorting`]: bubble, selection, insertion, merge and quick sort over
//!   `f64` values, producing [`SortingStep`]s.
//! - [`traversal`]: BFS and DFS over a [`Graph`], producing
//!   [`TraversalStep`]s.
//! - [`generate`]: connected random graphs for the traversal engines.
//! - [`playback`]: the cursor state machine a presentation layer drives
//!   while replaying a trace.
//!
//! Engines keep no state between calls; two calls with the same input return
//! equal traces.

pub mod error;
pub mod generate;
pub mod playback;
pub mod sorting;
pub mod traversal;

pub use algoviz_core::{Graph, NodeId, SortingStep, TraversalStep};
pub use error::TraceError;
pub use generate::{generate, generate_from_config, generate_with_rng, GeneratorConfig};
pub use playback::{Playback, PlaybackConfig, PlaybackState, TickOutcome, TickToken};
pub use sorting::SortAlgorithm;
pub use traversal::{traverse_checked, TraversalAlgorithm};
