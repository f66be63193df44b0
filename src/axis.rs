//! Axis identifiers and the per-axis resolution slot.
//!
//! Every node resolves each axis through the same small state machine:
//! `Unsized -> Resolving -> Resolved`. The slot remembers the input that
//! drove the last resolution, so re-running a step with an unchanged
//! target is a no-op while a changed target regresses the axis and forces
//! the subtree to recompute.

/// A sizing axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Width: main axis of a Row, cross axis of a Column.
    Horizontal,
    /// Height: main axis of a Column, cross axis of a Row.
    Vertical,
}

/// The input that drove a resolution step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AxisInput {
    /// A parent handed down a definite size.
    Assigned(f32),
    /// The node sized itself: against an available pool on the width
    /// axis, or at a resolved width on the height axis.
    Derived(f32),
}

/// Per-node, per-axis resolution state.
///
/// `input == None` is Unsized. `input` recorded but `value == None` is
/// Resolving. Both set is Resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct AxisSlot {
    input: Option<AxisInput>,
    value: Option<f32>,
}

impl AxisSlot {
    /// Start a resolution step.
    ///
    /// Returns `false` when the slot is already Resolved from an identical
    /// input; the caller then skips the whole step. Otherwise the slot
    /// regresses to Resolving and the caller must finish with
    /// [`AxisSlot::resolve`].
    pub(crate) fn begin(&mut self, input: AxisInput) -> bool {
        if self.value.is_some() && self.input == Some(input) {
            return false;
        }
        self.input = Some(input);
        self.value = None;
        true
    }

    /// Finish the in-flight step with the final value.
    pub(crate) fn resolve(&mut self, value: f32) {
        debug_assert!(value >= 0.0, "resolved lengths are never negative");
        debug_assert!(self.input.is_some(), "resolve() without begin()");
        self.value = Some(value);
    }

    /// The resolved value, if the slot has reached Resolved.
    pub(crate) fn value(&self) -> Option<f32> {
        self.value
    }
}
