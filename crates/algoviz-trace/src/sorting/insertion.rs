//! Insertion sort trace.
//!
//! Index 0 starts sorted. Each new element `i` is announced with a
//! self-comparison `(i, i)`, then walked left: every `(j, j - 1)` comparison is
//! a step, and while the pair is out of order a `swapping` step and a
//! post-swap step follow. The walk stops at the first in-order pair or at the
//! front.

use algoviz_core::SortingStep;

use super::finite_values;

/// Traces insertion sort over the finite entries of `values`.
pub fn insertion(values: &[f64]) -> Vec<SortingStep> {
    let mut arr = finite_values(values);
    let n = arr.len();
    let mut sorted: Vec<usize> = if n > 0 { vec![0] } else { Vec::new() };
    let mut steps = vec![SortingStep::snapshot(&arr).with_sorted(&sorted)];

    tracing::debug!(len = n, "starting insertion sort");

    for i in 1..n {
        steps.push(SortingStep::snapshot(&arr).with_comparing(i, i));

        let mut j = i;
        while j > 0 {
            steps.push(SortingStep::snapshot(&arr).with_comparing(j, j - 1));

            if arr[j] < arr[j - 1] {
                steps.push(SortingStep::snapshot(&arr).with_swapping(j, j - 1));
                arr.swap(j, j - 1);
                steps.push(SortingStep::snapshot(&arr));
                j -= 1;
            } else {
                break;
            }
        }

        sorted.push(i);
        steps.push(SortingStep::snapshot(&arr).with_sorted(&sorted));
    }

    tracing::debug!(steps = steps.len(), "insertion sort completed");
    steps
}
