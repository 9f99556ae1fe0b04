//! Step-order arithmetic
//!
//! Pure helpers for maintaining the dense 1..=N ordering invariant of a
//! pipeline's steps. Shared by the server (gap closing after deletion) and
//! the editor (optimistic projections).

use crate::domain::pipeline::PipelineStep;
use uuid::Uuid;

/// Order assigned to a step appended after `len` existing steps.
pub fn append_order(len: usize) -> i32 {
    len as i32 + 1
}

/// Order assigned to a step inserted directly after `after_order`.
pub fn insertion_order(after_order: i32) -> i32 {
    after_order + 1
}

/// Shift every step ordered after `after_order` up by one, making room for an
/// insertion at `after_order + 1`. Relative order among the shifted steps is
/// preserved; steps at or before `after_order` are untouched.
pub fn shift_for_insert(steps: &mut [PipelineStep], after_order: i32) {
    for step in steps.iter_mut() {
        if step.step_order > after_order {
            step.step_order += 1;
        }
    }
}

/// Re-index steps positionally to a dense 1..=N sequence.
///
/// Sorts by the current `step_order` and assigns positions, so the result is
/// dense even if the input had gaps or duplicates.
pub fn reindex(steps: &mut [PipelineStep]) {
    steps.sort_by_key(|s| s.step_order);
    for (index, step) in steps.iter_mut().enumerate() {
        step.step_order = index as i32 + 1;
    }
}

/// Stable ascending sort by `step_order`.
pub fn sort_by_order(steps: &mut [PipelineStep]) {
    steps.sort_by_key(|s| s.step_order);
}

/// Exchange the orders of the steps with ids `a` and `b`.
///
/// Returns `false` (and leaves the slice untouched) if either id is missing.
pub fn swap_orders(steps: &mut [PipelineStep], a: Uuid, b: Uuid) -> bool {
    let pos_a = steps.iter().position(|s| s.id == a);
    let pos_b = steps.iter().position(|s| s.id == b);

    match (pos_a, pos_b) {
        (Some(pos_a), Some(pos_b)) => {
            let order_a = steps[pos_a].step_order;
            steps[pos_a].step_order = steps[pos_b].step_order;
            steps[pos_b].step_order = order_a;
            true
        }
        _ => false,
    }
}

/// Whether the step orders are exactly {1..N} with no gaps or duplicates.
pub fn is_dense(steps: &[PipelineStep]) -> bool {
    let mut orders: Vec<i32> = steps.iter().map(|s| s.step_order).collect();
    orders.sort_unstable();
    orders
        .iter()
        .enumerate()
        .all(|(index, &order)| order == index as i32 + 1)
}
