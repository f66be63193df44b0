//! Shared three-phase distribution for Row widths and Column heights.
//!
//! This is the axis-agnostic core of the sizing model. A container hands
//! its children a finite pool, and the pool is consumed in three strict
//! phases that form a declared priority, independent of child declaration
//! order:
//!
//! 1. fixed-size children claim their constraint, in list order;
//! 2. flex-0 children size themselves intrinsically against the shrinking
//!    remainder, in list order (earlier siblings get first claim);
//! 3. flex>0 children split whatever is left by flex ratio.

use crate::axis::Axis;
use crate::node::LayoutNode;

/// Distribute `pool` across `children` on `axis`.
///
/// Negative pools are clamped to 0 first, so malformed space degrades the
/// subtree to zero size instead of failing. Fixed children keep their
/// constraint even when the pool is exhausted; overflowing a pool with
/// fixed children is a programmer error checked only in debug builds.
pub(crate) fn distribute(children: &mut [LayoutNode], axis: Axis, pool: f32) {
    let pool = pool.max(0.0);
    let mut remaining = pool;

    // Phase 1: fixed children.
    for child in children.iter_mut() {
        if let Some(fixed) = child.fixed(axis) {
            child.assign(axis, fixed);
            remaining = (remaining - fixed).max(0.0);
        }
    }

    // Phase 2: flex-0 children against the shrinking remainder.
    for child in children.iter_mut() {
        if child.fixed(axis).is_none() && child.flex() == 0 {
            child.fit_within(axis, remaining);
            let claimed = child.size(axis);
            debug_assert!(claimed >= 0.0);
            if axis == Axis::Horizontal {
                // A width derivation is bounded by the pool it was offered;
                // fitting heights may legitimately exceed theirs.
                debug_assert!(
                    claimed <= remaining + 0.001,
                    "flex-0 child claimed {claimed} from a pool of {remaining}"
                );
            }
            remaining = (remaining - claimed).max(0.0);
        }
    }

    // Phase 3: flex>0 children split the remainder by weight.
    let sum_flex: u32 = children
        .iter()
        .filter(|c| c.fixed(axis).is_none() && c.flex() > 0)
        .map(LayoutNode::flex)
        .sum();
    tracing::trace!(?axis, pool, remaining, sum_flex, "distribute");
    if sum_flex == 0 {
        return;
    }
    for child in children.iter_mut() {
        if child.fixed(axis).is_none() && child.flex() > 0 {
            let share = (child.flex() as f32 / sum_flex as f32) * remaining;
            child.assign(axis, share.max(0.0));
        }
    }
}
