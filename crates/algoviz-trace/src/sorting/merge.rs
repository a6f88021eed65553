//! Merge sort trace.
//!
//! The trace is built level by level rather than by recursion, so each step
//! shows a whole level of the partition forest:
//!
//! 1. `max_depth = ceil(log2(n))` split levels. At each level every subarray
//!    of length two or more is cut at `len / 2`; shorter ones are carried
//!    down unchanged. One step per level.
//! 2. One "split complete" step listing the terminal subarrays.
//! 3. `max_depth` merge levels, deepest first. Adjacent subarrays are paired
//!    left to right (an odd trailing one passes through) and merged with a
//!    stable two-pointer merge. Only completed levels are observable: one
//!    step per level, never per pairwise merge.
//! 4. A final step with the sorted array.
//!
//! `array` stays the original input until the final step; the evolving state
//! lives in `sub_arrays`. Every step carries a [`SortPhase`].

use algoviz_core::{SortPhase, SortingStep};

use super::{all_indices, finite_values};

/// Traces merge sort level by level over the finite entries of `values`.
pub fn merge(values: &[f64]) -> Vec<SortingStep> {
    let arr = finite_values(values);
    let n = arr.len();

    tracing::debug!(len = n, "starting merge sort");

    if n <= 1 {
        return vec![SortingStep::snapshot(&arr)
            .with_phase(SortPhase::Complete)
            .with_comment("Single element array (already sorted)")
            .with_sorted(&all_indices(n))];
    }

    let mut steps = vec![SortingStep::snapshot(&arr)
        .with_sub_arrays(&[arr.clone()])
        .with_phase(SortPhase::Initial)
        .with_comment("Initial unsorted array")];

    let max_depth = split_depth(n);
    let mut level = vec![arr.clone()];

    for depth in 1..=max_depth {
        level = split_level(&level);
        steps.push(
            SortingStep::snapshot(&arr)
                .with_sub_arrays(&level)
                .with_phase(SortPhase::Splitting { depth })
                .with_comment(format!("Splitting at depth {}", depth)),
        );
    }

    level.retain(|sub| !sub.is_empty());
    steps.push(
        SortingStep::snapshot(&arr)
            .with_sub_arrays(&level)
            .with_phase(SortPhase::SplitComplete)
            .with_comment("Split complete - all elements separated"),
    );

    for depth in (1..=max_depth).rev() {
        level = merge_level(&level);
        steps.push(
            SortingStep::snapshot(&arr)
                .with_sub_arrays(&level)
                .with_phase(SortPhase::Merging { depth: depth - 1 })
                .with_comment(format!("Merge complete at depth {}", depth - 1)),
        );
    }

    let result = level.concat();
    steps.push(
        SortingStep::snapshot(&result)
            .with_sub_arrays(&[result.clone()])
            .with_phase(SortPhase::Complete)
            .with_comment("Sorting complete")
            .with_sorted(&all_indices(n)),
    );

    tracing::debug!(steps = steps.len(), max_depth, "merge sort completed");
    steps
}

/// `ceil(log2(n))` for `n >= 1`.
fn split_depth(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

fn split_level(level: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut next = Vec::with_capacity(level.len() * 2);
    for sub in level {
        if sub.len() <= 1 {
            next.push(sub.clone());
        } else {
            let (left, right) = sub.split_at(sub.len() / 2);
            next.push(left.to_vec());
            next.push(right.to_vec());
        }
    }
    next
}

fn merge_level(level: &[Vec<f64>]) -> Vec<Vec<f64>> {
    level
        .chunks(2)
        .map(|pair| match pair {
            [left, right] => merge_sorted(left, right),
            [single] => single.clone(),
            _ => unreachable!("chunks(2) yields one or two subarrays"),
        })
        .collect()
}

/// Stable two-pointer merge: on ties the left element goes first.
fn merge_sorted(left: &[f64], right: &[f64]) -> Vec<f64> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
