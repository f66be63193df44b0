//! Layout Driver - root entry point and the diagnostic walk.
//!
//! [`snap`] is the only way a caller drives layout: a width pass over the
//! whole tree, then an optional height pass. [`trace`] is a pure,
//! side-effect-free pre-order walk over the resolved tree; callers format
//! or log the entries however they like (structured pass events go to
//! `tracing` instead of a global print).

use std::fmt;

use crate::node::LayoutNode;

/// Resolve the tree: assign the root width, and, when given, the root
/// height. Afterwards every descendant's resolved dimensions are readable.
///
/// Re-snapping with the same inputs is a no-op; a different width or
/// height regresses the affected axis and recomputes.
pub fn snap(root: &mut LayoutNode, width: f32, height: Option<f32>) {
    tracing::debug!(width, "snap: width pass");
    root.assign_width(width);
    if let Some(height) = height {
        tracing::debug!(height, "snap: height pass");
        root.assign_height(height);
    }
}

/// One step of the diagnostic walk.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    /// Depth below the walk's root (the root itself is 0).
    pub depth: usize,
    /// Node description, e.g. `Row.flex(1)`.
    pub label: String,
    /// Effective width at the time of the walk.
    pub width: f32,
    /// Effective height at the time of the walk.
    pub height: f32,
}

impl fmt::Display for TraceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            write!(f, "\t")?;
        }
        write!(
            f,
            "➜{}\t{} | W: {}, H: {}",
            self.depth, self.label, self.width, self.height
        )
    }
}

/// Lazy pre-order walk over a layout tree.
///
/// Finite (trees have no cycles by construction) and restartable: call
/// [`trace`] again, or clone an iterator mid-walk to fork it.
#[derive(Clone)]
pub struct Trace<'a> {
    stack: Vec<(usize, &'a LayoutNode)>,
}

/// Walk `root` pre-order, yielding one [`TraceEntry`] per node.
pub fn trace(root: &LayoutNode) -> Trace<'_> {
    Trace {
        stack: vec![(0, root)],
    }
}

impl Iterator for Trace<'_> {
    type Item = TraceEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some(TraceEntry {
            depth,
            label: node.label(),
            width: node.width(),
            height: node.height(),
        })
    }
}
