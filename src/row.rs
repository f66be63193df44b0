//! Row - horizontal container (main axis = width).
//!
//! Width is distributed across children with the three-phase priority in
//! [`crate::flex`]; height is the cross axis, stretch-only: every child
//! ends up at the row's fitting height (the tallest child) unless the row
//! itself was given a definite height.

use crate::axis::{Axis, AxisInput, AxisSlot};
use crate::flex::distribute;
use crate::node::LayoutNode;

/// A horizontal container (children laid out left to right).
pub struct Row {
    pub(crate) flex: u32,
    pub(crate) fixed_width: Option<f32>,
    pub(crate) fixed_height: Option<f32>,
    pub(crate) children: Vec<LayoutNode>,
    pub(crate) width: AxisSlot,
    pub(crate) height: AxisSlot,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    /// Create an empty row with flex 1 and no fixed dimensions.
    pub fn new() -> Self {
        Self {
            flex: 1,
            fixed_width: None,
            fixed_height: None,
            children: Vec::new(),
            width: AxisSlot::default(),
            height: AxisSlot::default(),
        }
    }

    /// Set the flex weight.
    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = flex;
        self
    }

    /// Set a hard width constraint; disables flex and intrinsic sizing on
    /// that axis.
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.fixed_width = Some(width);
        self
    }

    /// Set a hard height constraint.
    pub fn fixed_height(mut self, height: f32) -> Self {
        self.fixed_height = Some(height);
        self
    }

    /// Append a child.
    pub fn push(mut self, child: impl Into<LayoutNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Parent hands down a definite width: store it, distribute it across
    /// children, then run this subtree's height pass.
    pub(crate) fn assign_width(&mut self, value: f32) {
        let width = self.fixed_width.unwrap_or_else(|| value.max(0.0));
        if !self.width.begin(AxisInput::Assigned(width)) {
            return;
        }
        self.width.resolve(width);
        distribute(&mut self.children, Axis::Horizontal, width);
        self.derive_height(width);
    }

    /// Size the row from its children: distribute the available pool with
    /// the same rule, then settle on the sum of the children's widths.
    pub(crate) fn derive_width(&mut self, available: f32) {
        if let Some(fixed) = self.fixed_width {
            // The interior is still laid out, at the fixed value.
            self.assign_width(fixed);
            return;
        }
        let pool = available.max(0.0);
        if !self.width.begin(AxisInput::Derived(pool)) {
            return;
        }
        distribute(&mut self.children, Axis::Horizontal, pool);
        let width: f32 = self.children.iter().map(LayoutNode::width).sum();
        self.width.resolve(width.max(0.0));
        self.derive_height(width);
    }

    /// Cross-axis pass: fit to the tallest child, then stretch every
    /// non-fixed child to that height.
    pub(crate) fn derive_height(&mut self, width: f32) {
        if !self.height.begin(AxisInput::Derived(width)) {
            return;
        }
        for child in &mut self.children {
            let w = child.width();
            child.derive_height(w);
        }
        let fitting = self
            .children
            .iter()
            .map(LayoutNode::height)
            .fold(0.0_f32, f32::max);
        let target = self.fixed_height.unwrap_or(fitting);
        for child in &mut self.children {
            if child.fixed_height().is_none() && child.height() != target {
                child.assign_height(target);
            }
        }
        self.height.resolve(target);
    }

    /// Parent hands down a definite height: children stretch to it.
    pub(crate) fn assign_height(&mut self, value: f32) {
        let height = self.fixed_height.unwrap_or_else(|| value.max(0.0));
        if !self.height.begin(AxisInput::Assigned(height)) {
            return;
        }
        self.height.resolve(height);
        for child in &mut self.children {
            if child.fixed_height().is_none() {
                child.assign_height(height);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaf::Leaf;

    fn block(min_width: f32, height: f32) -> Leaf {
        Leaf::new(move || min_width, move |_| height)
    }

    #[test]
    fn test_assign_width_splits_among_flexed_children() {
        let mut row = Row::new()
            .push(block(10.0, 5.0).flex(1))
            .push(block(10.0, 5.0).flex(1));
        row.assign_width(300.0);
        assert_eq!(row.width.value(), Some(300.0));
        assert_eq!(row.children[0].width(), 150.0);
        assert_eq!(row.children[1].width(), 150.0);
    }

    #[test]
    fn test_derive_width_settles_on_children_sum() {
        let mut row = Row::new()
            .push(block(60.0, 5.0).flex(0))
            .push(block(50.0, 5.0).flex(0));
        row.derive_width(400.0);
        assert_eq!(row.width.value(), Some(110.0));
    }

    #[test]
    fn test_derive_width_with_flexed_child_consumes_pool() {
        let mut row = Row::new()
            .push(block(60.0, 5.0).flex(0))
            .push(block(10.0, 5.0).flex(1));
        row.derive_width(200.0);
        // the flexed child absorbs the remainder, so the row fills the pool
        assert_eq!(row.width.value(), Some(200.0));
        assert_eq!(row.children[1].width(), 140.0);
    }

    #[test]
    fn test_height_fits_tallest_child_and_stretches_rest() {
        let mut row = Row::new()
            .push(block(10.0, 80.0).flex(1))
            .push(block(10.0, 30.0).flex(1));
        row.assign_width(100.0);
        assert_eq!(row.height.value(), Some(80.0));
        assert_eq!(row.children[0].height(), 80.0);
        assert_eq!(row.children[1].height(), 80.0, "stretched to tallest");
    }

    #[test]
    fn test_fixed_height_overrides_fitting() {
        let mut row = Row::new()
            .fixed_height(50.0)
            .push(block(10.0, 80.0).flex(1));
        row.assign_width(100.0);
        assert_eq!(row.height.value(), Some(50.0));
        assert_eq!(row.children[0].height(), 50.0);
    }

    #[test]
    fn test_assign_height_stretches_children() {
        let mut row = Row::new()
            .push(block(10.0, 20.0).flex(1))
            .push(block(10.0, 20.0).flex(1));
        row.assign_width(100.0);
        row.assign_height(200.0);
        assert_eq!(row.height.value(), Some(200.0));
        assert_eq!(row.children[0].height(), 200.0);
        assert_eq!(row.children[1].height(), 200.0);
    }

    #[test]
    fn test_fixed_width_row_lays_out_interior_at_fixed_value() {
        let mut row = Row::new()
            .fixed_width(120.0)
            .push(block(10.0, 5.0).flex(1));
        row.derive_width(500.0);
        assert_eq!(row.width.value(), Some(120.0));
        assert_eq!(row.children[0].width(), 120.0);
    }

    #[test]
    fn test_zero_pool_collapses_subtree() {
        let mut row = Row::new()
            .push(block(60.0, 5.0).flex(0))
            .push(block(10.0, 5.0).flex(1));
        row.assign_width(0.0);
        assert_eq!(row.width.value(), Some(0.0));
        assert_eq!(row.children[0].width(), 0.0);
        assert_eq!(row.children[1].width(), 0.0);
    }

    #[test]
    fn test_reassigning_same_width_is_noop() {
        let mut row = Row::new().push(block(10.0, 5.0).flex(1));
        row.assign_width(100.0);
        row.children[0].assign_height(99.0); // perturb a descendant
        row.assign_width(100.0);
        // no-op: the perturbed descendant state is untouched
        assert_eq!(row.children[0].height(), 99.0);
    }

    #[test]
    fn test_reassigning_new_width_recomputes() {
        let mut row = Row::new().push(block(10.0, 5.0).flex(1));
        row.assign_width(100.0);
        row.assign_width(60.0);
        assert_eq!(row.width.value(), Some(60.0));
        assert_eq!(row.children[0].width(), 60.0);
    }
}
