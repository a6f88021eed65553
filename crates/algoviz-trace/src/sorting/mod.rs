//! Sorting trace engines.
//!
//! Each engine takes the raw input values, drops anything that is not a
//! finite number, runs the algorithm to completion on a private working copy
//! and returns every intermediate state as a [`SortingStep`].
//!
//! Guarantees shared by all five engines:
//! - the first step is the filtered input in its original order, with no
//!   comparison or swap highlighted;
//! - the last step marks every index sorted and holds the ascending order of
//!   the input;
//! - `array` keeps the same length in every step and values are only ever
//!   moved, never invented or dropped;
//! - the `sorted` set never shrinks;
//! - empty and single-element inputs produce a short trace instead of an
//!   error.
//!
//! The exact sequence of micro-steps per algorithm is fixed (see the module
//! docs of each engine), so step counts are deterministic and testable.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

use std::fmt;
use std::str::FromStr;

use algoviz_core::SortingStep;
use serde::{Deserialize, Serialize};

use crate::error::TraceError;

pub use bubble::bubble;
pub use insertion::insertion;
pub use merge::merge;
pub use quick::quick;
pub use selection::selection;

/// The sorting algorithms with a trace engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl SortAlgorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
        SortAlgorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Selection => "selection",
            SortAlgorithm::Insertion => "insertion",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        }
    }

    /// Runs this algorithm's engine over `values`.
    pub fn run(self, values: &[f64]) -> Vec<SortingStep> {
        match self {
            SortAlgorithm::Bubble => bubble(values),
            SortAlgorithm::Selection => selection(values),
            SortAlgorithm::Insertion => insertion(values),
            SortAlgorithm::Merge => merge(values),
            SortAlgorithm::Quick => quick(values),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = TraceError;

    /// Accepts the algorithm name with or without a `-sort`/`_sort` suffix,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower
            .strip_suffix("-sort")
            .or_else(|| lower.strip_suffix("_sort"))
            .unwrap_or(&lower);

        SortAlgorithm::ALL
            .into_iter()
            .find(|algo| algo.name() == name)
            .ok_or_else(|| TraceError::UnknownAlgorithm {
                family: "sorting",
                name: s.to_string(),
                expected: SortAlgorithm::ALL.map(SortAlgorithm::name).join(", "),
            })
    }
}

/// Drops non-finite entries (NaN, ±infinity), keeping the order of the rest.
pub fn finite_values(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// All indices `0..n`, the `sorted` set of a finished run.
pub(crate) fn all_indices(n: usize) -> Vec<usize> {
    (0..n).collect()
}


#[cfg(test)]
mod tests {
    use super::test_support::assert_well_formed;
    use super::*;

    #[test]
    fn finite_values_drops_nan_and_infinities() {
        assert_eq!(
            finite_values(&[1.0, f64::NAN, 2.0, f64::INFINITY, f64::NEG_INFINITY, -3.5]),
            vec![1.0, 2.0, -3.5]
        );
    }

    #[test]
    fn parse_algorithm_names() {
        assert_eq!("bubble".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Bubble);
        assert_eq!("Quick-Sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Quick);
        assert_eq!("merge_sort".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Merge);
        assert_eq!(SortAlgorithm::Insertion.to_string(), "insertion");
    }

    #[test]
    fn parse_unknown_algorithm_lists_choices() {
        let err = "heap".parse::<SortAlgorithm>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown sorting algorithm 'heap', expected one of: bubble, selection, insertion, merge, quick"
        );
    }

    #[test]
    fn every_engine_filters_non_finite_input() {
        let input = [3.0, f64::NAN, 1.0, f64::INFINITY, 2.0];
        for algo in SortAlgorithm::ALL {
            let steps = algo.run(&input);
            assert_well_formed(&input, &steps);
            assert_eq!(steps[0].array.len(), 3, "{algo}");
        }
    }

    #[test]
    fn every_engine_handles_empty_and_singleton_input() {
        for algo in SortAlgorithm::ALL {
            let empty = algo.run(&[]);
            assert!(!empty.is_empty() && empty.len() <= 2, "{algo}: {}", empty.len());
            assert!(empty.iter().all(|s| s.array.is_empty()));

            let single = algo.run(&[42.0]);
            assert!(!single.is_empty() && single.len() <= 2, "{algo}: {}", single.len());
            assert_well_formed(&[42.0], &single);
        }
    }

    #[test]
    fn every_engine_is_deterministic() {
        let input = [9.0, -1.0, 4.0, 4.0, 0.5, 7.0, 3.0];
        for algo in SortAlgorithm::ALL {
            assert_eq!(algo.run(&input), algo.run(&input), "{algo}");
        }
    }

    #[test]
    fn every_engine_handles_duplicates_and_negatives() {
        let input = [0.0, -2.0, 5.0, -2.0, 5.0, 1.25, 0.0];
        for algo in SortAlgorithm::ALL {
            assert_well_formed(&input, &algo.run(&input));
        }
    }
}
