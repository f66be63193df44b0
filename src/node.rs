//! Layout Node Enum - Central Switchboard
//!
//! `LayoutNode` is the closed variant set every container works against:
//! {Row, Column, Leaf}. Containers never know the concrete type of their
//! children; they call the shared capability set (assign/derive on each
//! axis, flex weight, fixed dimensions, resolved sizes) through this enum.
//!
//! The recursive container variants are boxed to break the size recursion
//! that would otherwise make the enum infinitely sized.

use crate::axis::Axis;
use crate::column::Column;
use crate::leaf::Leaf;
use crate::row::Row;

/// No children; what [`LayoutNode::children`] returns for a Leaf.
const NO_CHILDREN: &[LayoutNode] = &[];

// =========================================================================
// LayoutNode Enum
// =========================================================================

/// A node in a layout tree.
///
/// The variant set is fixed and exhaustive by design: a horizontal
/// container, a vertical container, or a measured leaf. Trees are built
/// fresh for each layout pass, owned exclusively by the caller, and carry
/// no identity beyond that pass.
pub enum LayoutNode {
    /// A horizontal container (boxed to break size recursion).
    Row(Box<Row>),
    /// A vertical container (boxed to break size recursion).
    Column(Box<Column>),
    /// A content leaf measured through embedder callbacks.
    Leaf(Leaf),
}

impl LayoutNode {
    /// The flex weight used when this node's main-axis size is not fixed.
    pub fn flex(&self) -> u32 {
        match self {
            LayoutNode::Row(r) => r.flex,
            LayoutNode::Column(c) => c.flex,
            LayoutNode::Leaf(l) => l.flex,
        }
    }

    /// Caller-supplied hard width constraint, if any.
    pub fn fixed_width(&self) -> Option<f32> {
        match self {
            LayoutNode::Row(r) => r.fixed_width,
            LayoutNode::Column(c) => c.fixed_width,
            LayoutNode::Leaf(_) => None,
        }
    }

    /// Caller-supplied hard height constraint, if any.
    pub fn fixed_height(&self) -> Option<f32> {
        match self {
            LayoutNode::Row(r) => r.fixed_height,
            LayoutNode::Column(c) => c.fixed_height,
            LayoutNode::Leaf(_) => None,
        }
    }

    /// The ordered children of this node (empty for a Leaf).
    pub fn children(&self) -> &[LayoutNode] {
        match self {
            LayoutNode::Row(r) => &r.children,
            LayoutNode::Column(c) => &c.children,
            LayoutNode::Leaf(_) => NO_CHILDREN,
        }
    }

    /// The width resolved during the current pass, if any.
    pub fn resolved_width(&self) -> Option<f32> {
        match self {
            LayoutNode::Row(r) => r.width.value(),
            LayoutNode::Column(c) => c.width.value(),
            LayoutNode::Leaf(l) => l.width.value(),
        }
    }

    /// The height resolved during the current pass, if any.
    pub fn resolved_height(&self) -> Option<f32> {
        match self {
            LayoutNode::Row(r) => r.height.value(),
            LayoutNode::Column(c) => c.height.value(),
            LayoutNode::Leaf(l) => l.height.value(),
        }
    }

    /// Effective width: the fixed constraint wins, then the resolved
    /// value, then 0 while unsized.
    pub fn width(&self) -> f32 {
        self.fixed_width()
            .or_else(|| self.resolved_width())
            .unwrap_or(0.0)
    }

    /// Effective height: the fixed constraint wins, then the resolved
    /// value, then 0 while unsized.
    pub fn height(&self) -> f32 {
        self.fixed_height()
            .or_else(|| self.resolved_height())
            .unwrap_or(0.0)
    }

    // =====================================================================
    // Resolution operations (the shared capability set)
    // =====================================================================

    /// Parent hands down a definite width.
    pub fn assign_width(&mut self, value: f32) {
        match self {
            LayoutNode::Row(r) => r.assign_width(value),
            LayoutNode::Column(c) => c.assign_width(value),
            LayoutNode::Leaf(l) => l.assign_width(value),
        }
    }

    /// Node computes its own width against an available pool.
    pub fn derive_width(&mut self, available: f32) {
        match self {
            LayoutNode::Row(r) => r.derive_width(available),
            LayoutNode::Column(c) => c.derive_width(available),
            LayoutNode::Leaf(l) => l.derive_width(available),
        }
    }

    /// Parent hands down a definite height.
    pub fn assign_height(&mut self, value: f32) {
        match self {
            LayoutNode::Row(r) => r.assign_height(value),
            LayoutNode::Column(c) => c.assign_height(value),
            LayoutNode::Leaf(l) => l.assign_height(value),
        }
    }

    /// Node computes its own fitting height at a resolved width.
    pub fn derive_height(&mut self, width: f32) {
        match self {
            LayoutNode::Row(r) => r.derive_height(width),
            LayoutNode::Column(c) => c.derive_height(width),
            LayoutNode::Leaf(l) => l.derive_height(width),
        }
    }

    // =====================================================================
    // Axis-generic helpers used by the distribution routine
    // =====================================================================

    /// Fixed constraint on the given axis.
    pub(crate) fn fixed(&self, axis: Axis) -> Option<f32> {
        match axis {
            Axis::Horizontal => self.fixed_width(),
            Axis::Vertical => self.fixed_height(),
        }
    }

    /// Effective size on the given axis.
    pub(crate) fn size(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width(),
            Axis::Vertical => self.height(),
        }
    }

    /// Assign a definite size on the given axis.
    pub(crate) fn assign(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::Horizontal => self.assign_width(value),
            Axis::Vertical => self.assign_height(value),
        }
    }

    /// Size intrinsically on the given axis.
    ///
    /// On the width axis the node sizes itself against `pool`. On the
    /// height axis the fitting size comes from the already-resolved width;
    /// `pool` only bounds the claim accounting in the caller.
    pub(crate) fn fit_within(&mut self, axis: Axis, pool: f32) {
        match axis {
            Axis::Horizontal => self.derive_width(pool),
            Axis::Vertical => self.derive_height(self.width()),
        }
    }

    /// Short description used by the trace walk, e.g. `Row.flex(1)`.
    pub(crate) fn label(&self) -> String {
        match self {
            LayoutNode::Row(r) => format!("Row.flex({})", r.flex),
            LayoutNode::Column(c) => format!("Column.flex({})", c.flex),
            LayoutNode::Leaf(l) => format!("Leaf.flex({})", l.flex),
        }
    }
}

// =========================================================================
// From impls - enables generic `.push()` on containers
// =========================================================================

impl From<Row> for LayoutNode {
    fn from(v: Row) -> Self {
        Self::Row(Box::new(v))
    }
}

impl From<Column> for LayoutNode {
    fn from(v: Column) -> Self {
        Self::Column(Box::new(v))
    }
}

impl From<Leaf> for LayoutNode {
    fn from(v: Leaf) -> Self {
        Self::Leaf(v)
    }
}
