//! Column - vertical container (main axis = height).
//!
//! Width is the cross axis: on assignment every child stretches to the
//! column's width; on derivation every child sizes itself against the same
//! pool (children stack, so each gets the full lane) and the column
//! settles on the widest child, capped by the pool. Height stacks children
//! when derived and distributes with the three-phase priority when
//! assigned.

use crate::axis::{Axis, AxisInput, AxisSlot};
use crate::flex::distribute;
use crate::node::LayoutNode;

/// A vertical container (children stacked top to bottom).
pub struct Column {
    pub(crate) flex: u32,
    pub(crate) fixed_width: Option<f32>,
    pub(crate) fixed_height: Option<f32>,
    pub(crate) children: Vec<LayoutNode>,
    pub(crate) width: AxisSlot,
    pub(crate) height: AxisSlot,
}

impl Default for Column {
    fn default() -> Self {
        Self::new()
    }
}

impl Column {
    /// Create an empty column with flex 1 and no fixed dimensions.
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

    /// Cross-axis assignment: every child stretches to the column width,
    /// then this subtree's height pass runs.
    pub(crate) fn assign_width(&mut self, value: f32) {
        let width = self.fixed_width.unwrap_or_else(|| value.max(0.0));
        if !self.width.begin(AxisInput::Assigned(width)) {
            return;
        }
        self.width.resolve(width);
        for child in &mut self.children {
            // a child's own fixed width wins inside its assignment
            child.assign_width(width);
        }
        self.derive_height(width);
    }

    /// Cross-axis derivation: children size themselves against the same
    /// pool, the column settles on `min(pool, widest child)`.
    pub(crate) fn derive_width(&mut self, available: f32) {
        if let Some(fixed) = self.fixed_width {
            self.assign_width(fixed);
            return;
        }
        let pool = available.max(0.0);
        if !self.width.begin(AxisInput::Derived(pool)) {
            return;
        }
        for child in &mut self.children {
            child.derive_width(pool);
        }
        let widest = self
            .children
            .iter()
            .map(LayoutNode::width)
            .fold(0.0_f32, f32::max);
        let width = widest.min(pool);
        self.width.resolve(width);
        self.derive_height(width);
    }

    /// Stack the children: each derives its own height at its resolved
    /// width; the column is the sum, unless a fixed height takes over and
    /// the interior is distributed inside it.
    pub(crate) fn derive_height(&mut self, width: f32) {
        if !self.height.begin(AxisInput::Derived(width)) {
            return;
        }
        for child in &mut self.children {
            let w = child.width();
            child.derive_height(w);
        }
        if let Some(fixed) = self.fixed_height {
            distribute(&mut self.children, Axis::Vertical, fixed);
            self.height.resolve(fixed);
        } else {
            let height: f32 = self.children.iter().map(LayoutNode::height).sum();
            self.height.resolve(height.max(0.0));
        }
    }

    /// Main-axis assignment: distribute the height with the same
    /// three-phase priority Row uses for widths.
    pub(crate) fn assign_height(&mut self, value: f32) {
        let height = self.fixed_height.unwrap_or_else(|| value.max(0.0));
        if !self.height.begin(AxisInput::Assigned(height)) {
            return;
        }
        self.height.resolve(height);
        distribute(&mut self.children, Axis::Vertical, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::Row;
    use crate::leaf::Leaf;

    fn block(min_width: f32, height: f32) -> Leaf {
        Leaf::new(move || min_width, move |_| height)
    }

    #[test]
    fn test_assign_width_stretches_every_child() {
        let mut col = Column::new()
            .push(block(20.0, 10.0).flex(1))
            .push(block(90.0, 10.0).flex(0));
        col.assign_width(150.0);
        assert_eq!(col.width.value(), Some(150.0));
        assert_eq!(col.children[0].width(), 150.0);
        assert_eq!(col.children[1].width(), 150.0);
    }

    #[test]
    fn test_derive_width_is_widest_child_capped_by_pool() {
        let mut col = Column::new()
            .push(block(80.0, 10.0).flex(0))
            .push(block(30.0, 10.0).flex(0));
        col.derive_width(200.0);
        assert_eq!(col.width.value(), Some(80.0));

        let mut col = Column::new().push(block(80.0, 10.0).flex(0));
        col.derive_width(50.0);
        assert_eq!(col.width.value(), Some(50.0));
    }

    #[test]
    fn test_derive_width_offers_full_lane_to_each_child() {
        // Children stack vertically: the pool does not shrink between them.
        let mut col = Column::new()
            .push(block(70.0, 10.0).flex(0))
            .push(block(60.0, 10.0).flex(0));
        col.derive_width(100.0);
        assert_eq!(col.children[0].width(), 70.0);
        assert_eq!(col.children[1].width(), 60.0);
    }

    #[test]
    fn test_derive_height_stacks_children() {
        let mut col = Column::new()
            .push(block(10.0, 25.0).flex(1))
            .push(block(10.0, 35.0).flex(1));
        col.assign_width(100.0);
        assert_eq!(col.height.value(), Some(60.0));
    }

    #[test]
    fn test_assign_height_distributes_by_flex() {
        let mut col = Column::new()
            .push(block(10.0, 5.0).flex(2))
            .push(block(10.0, 5.0).flex(3));
        col.assign_width(100.0);
        col.assign_height(100.0);
        assert!((col.children[0].height() - 40.0).abs() < 0.01);
        assert!((col.children[1].height() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_assign_height_respects_fixed_and_flex_zero_priority() {
        let mut col = Column::new()
            .push(Row::new().fixed_height(20.0).flex(0).push(block(10.0, 5.0)))
            .push(block(10.0, 30.0).flex(0))
            .push(block(10.0, 5.0).flex(1));
        col.assign_width(100.0);
        col.assign_height(100.0);
        assert_eq!(col.children[0].height(), 20.0);
        assert_eq!(col.children[1].height(), 30.0);
        assert_eq!(col.children[2].height(), 50.0);
    }

    #[test]
    fn test_fixed_height_column_distributes_interior() {
        let mut col = Column::new()
            .fixed_height(90.0)
            .push(block(10.0, 5.0).flex(1))
            .push(block(10.0, 5.0).flex(2));
        col.assign_width(100.0);
        assert_eq!(col.height.value(), Some(90.0));
        assert!((col.children[0].height() - 30.0).abs() < 0.01);
        assert!((col.children[1].height() - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_pool_collapses_subtree() {
        let mut col = Column::new().push(block(50.0, 10.0).flex(0));
        col.derive_width(0.0);
        assert_eq!(col.width.value(), Some(0.0));
        assert_eq!(col.children[0].width(), 0.0);
    }

    #[test]
    fn test_same_derivation_is_noop() {
        let mut col = Column::new().push(block(50.0, 10.0).flex(0));
        col.derive_width(200.0);
        col.children[0].assign_height(77.0); // perturb a descendant
        col.derive_width(200.0);
        assert_eq!(col.children[0].height(), 77.0);
    }
}
