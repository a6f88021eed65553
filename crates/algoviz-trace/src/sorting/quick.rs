//! Quick sort trace.
//!
//! Pivots are chosen by median-of-three over the current subarray's low, mid
//! (`low + size / 2`) and high elements, moved to `high`, and the range is
//! partitioned Lomuto-style with a strict `<` test before the pivot is swapped
//! into its final slot.
//!
//! Exactly one step is emitted per partition call. Recursion is pre-order,
//! left part first. Single-element ranges join the sorted set silently. The
//! sorted set is an accumulator owned by one [`quick`] call and shared by
//! reference through the recursion; it is never reset, so each step shows
//! every index settled so far.

use algoviz_core::{SortPhase, SortingStep};
use indexmap::IndexSet;

use super::{all_indices, finite_values};

/// Traces median-of-three quick sort over the finite entries of `values`.
pub fn quick(values: &[f64]) -> Vec<SortingStep> {
    let arr = finite_values(values);
    let n = arr.len();

    tracing::debug!(len = n, "starting quick sort");

    let mut initial = SortingStep::snapshot(&arr)
        .with_phase(SortPhase::Initial)
        .with_comment("Initial array")
        .with_sorted(&[]);
    if n > 0 {
        initial = initial.with_range(0, n - 1);
    }

    if n <= 1 {
        let mut steps = vec![initial];
        if n == 1 {
            steps.push(
                SortingStep::snapshot(&arr)
                    .with_phase(SortPhase::Complete)
                    .with_comment("Single element array (already sorted)")
                    .with_sorted(&[0]),
            );
        }
        return steps;
    }

    let mut run = QuickSortRun {
        arr,
        sorted: IndexSet::with_capacity(n),
        steps: vec![initial],
    };
    run.sort_range(0, n - 1);

    let QuickSortRun { arr, mut steps, .. } = run;
    steps.push(
        SortingStep::snapshot(&arr)
            .with_phase(SortPhase::Complete)
            .with_comment("Sorted array")
            .with_sorted(&all_indices(n))
            .with_range(0, n - 1),
    );

    tracing::debug!(steps = steps.len(), "quick sort completed");
    steps
}

/// Working state of one quick sort call.
struct QuickSortRun {
    arr: Vec<f64>,
    /// Settled indices in the order they were settled.
    sorted: IndexSet<usize>,
    steps: Vec<SortingStep>,
}

impl QuickSortRun {
    fn sort_range(&mut self, low: usize, high: usize) {
        if low < high {
            let pivot = self.partition(low, high);
            if pivot > low {
                self.sort_range(low, pivot - 1);
            }
            if pivot < high {
                self.sort_range(pivot + 1, high);
            }
        } else if low == high {
            self.sorted.insert(low);
        }
    }

    /// Partitions `arr[low..=high]`, records one step and returns the pivot's
    /// final index.
    fn partition(&mut self, low: usize, high: usize) -> usize {
        let size = high - low + 1;
        let mid = low + size / 2;
        let (first, middle, last) = (self.arr[low], self.arr[mid], self.arr[high]);

        let pivot_idx = match median_of_three(first, middle, last) {
            Median::Low => low,
            Median::Mid => mid,
            Median::High => high,
        };
        let pivot_val = self.arr[pivot_idx];

        let how_found = if size == 2 {
            format!("median of {} and {}", first, last)
        } else {
            format!("median of {}, {}, and {}", first, middle, last)
        };
        let comment = format!("Pivot {}\n{}", pivot_val, how_found);

        self.arr.swap(pivot_idx, high);

        let mut store = low;
        for j in low..high {
            if self.arr[j] < pivot_val {
                self.arr.swap(store, j);
                store += 1;
            }
        }
        self.arr.swap(store, high);
        self.sorted.insert(store);

        tracing::trace!(low, high, pivot = store, "partitioned");

        self.steps.push(
            SortingStep::snapshot(&self.arr)
                .with_pivot(store)
                .with_phase(SortPhase::Partitioned)
                .with_comment(comment)
                .with_range(low, high)
                .with_sorted(&self.sorted),
        );

        store
    }
}

/// Which of the three sampled positions holds the median.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Median {
    Low,
    Mid,
    High,
}

/// Picks the median of the values at low (`a`), mid (`b`) and high (`c`).
/// Ties resolve to mid first, then low.
fn median_of_three(a: f64, b: f64, c: f64) -> Median {
    if (a <= b && b <= c) || (c <= b && b <= a) {
        Median::Mid
    } else if (b <= a && a <= c) || (c <= a && a <= b) {
        Median::Low
    } else {
        Median::High
    }
}
