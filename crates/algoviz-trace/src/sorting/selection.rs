//! Selection sort trace.
//!
//! For each position `i` the unsorted suffix is scanned with one `comparing`
//! step per candidate `(min, j)`; moving the running minimum is silent. A
//! swap, when needed, adds a `swapping` step and a post-swap step. Then `i`
//! is appended to the sorted set, which grows from the front.

use algoviz_core::SortingStep;

use super::finite_values;

/// Traces selection sort over the finite entries of `values`.
pub fn selection(values: &[f64]) -> Vec<SortingStep> {
    let mut arr = finite_values(values);
    let n = arr.len();
    let mut sorted = Vec::with_capacity(n);
    let mut steps = vec![SortingStep::snapshot(&arr)];

    tracing::debug!(len = n, "starting selection sort");

    for i in 0..n {
        let mut min_idx = i;

        for j in i + 1..n {
            steps.push(SortingStep::snapshot(&arr).with_comparing(min_idx, j));
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }

        if min_idx != i {
            steps.push(SortingStep::snapshot(&arr).with_swapping(i, min_idx));
            arr.swap(i, min_idx);
            steps.push(SortingStep::snapshot(&arr));
        }

        sorted.push(i);
        steps.push(SortingStep::snapshot(&arr).with_sorted(&sorted));
    }

    tracing::debug!(steps = steps.len(), "selection sort completed");
    steps
}
