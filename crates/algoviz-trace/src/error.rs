//! Error types for the trace crate.
//!
//! The trace engines are infallible. Errors only arise when choosing an
//! engine by name, configuring the random graph generator, or validating a
//! graph up front with `traverse_checked`.

use algoviz_core::CoreError;
use thiserror::Error;

/// Errors produced by algoviz-trace.
#[derive(Debug, Error)]
pub enum TraceError {
    /// An algorithm name did not match any known engine.
    #[error("unknown {family} algorithm '{name}', expected one of: {expected}")]
    UnknownAlgorithm {
        family: &'static str,
        name: String,
        expected: String,
    },

    /// The generator's edge density is not a finite value in `[0, 1]`.
    #[error("edge density must be within [0, 1], got {density}")]
    InvalidEdgeDensity { density: f64 },

    /// A graph-level error surfaced while preparing a trace.
    #[error(transparent)]
    Core(#[from] CoreError),
}
