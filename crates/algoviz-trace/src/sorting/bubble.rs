//! Bubble sort trace.
//!
//! Per pass `i`, every adjacent pair `(j, j + 1)` of the unsorted prefix is
//! compared (one step). An out-of-order pair adds a `swapping` step and a
//! plain step showing the array after the swap. Each pass ends by prepending
//! index `n - i - 1` to the sorted set, so the sorted region grows from the
//! back.

use std::collections::VecDeque;

use algoviz_core::SortingStep;

use super::finite_values;

/// Traces bubble sort over the finite entries of `values`.
pub fn bubble(values: &[f64]) -> Vec<SortingStep> {
    let mut arr = finite_values(values);
    let n = arr.len();
    let mut sorted: VecDeque<usize> = VecDeque::with_capacity(n);
    let mut steps = vec![SortingStep::snapshot(&arr)];

    tracing::debug!(len = n, "starting bubble sort");

    for i in 0..n {
        for j in 0..n - i - 1 {
            steps.push(SortingStep::snapshot(&arr).with_comparing(j, j + 1));

            if arr[j] > arr[j + 1] {
                steps.push(SortingStep::snapshot(&arr).with_swapping(j, j + 1));
                arr.swap(j, j + 1);
                steps.push(SortingStep::snapshot(&arr));
            }
        }
        sorted.push_front(n - i - 1);
        steps.push(SortingStep::snapshot(&arr).with_sorted(&sorted));
    }

    tracing::debug!(steps = steps.len(), "bubble sort completed");
    steps
}
