//! Sample trees exercising the sizing rules end to end.
//!
//! These mirror the ad-hoc harness the algorithm was originally validated
//! against: nested columns in a row, flexed leaves stacked in a column,
//! image-like leaves in both orientations, and the priority/fixed-width
//! trees. Integration tests drive them through [`crate::snap`].

use crate::column::Column;
use crate::leaf::Leaf;
use crate::node::LayoutNode;
use crate::row::Row;

/// A leaf with a constant min-content width and a constant fitting height,
/// the way the harness fakes text blocks and images.
pub fn block(min_width: f32, fitting_height: f32) -> Leaf {
    Leaf::new(move || min_width, move |_| fitting_height)
}

/// Two flexed columns side by side; the second stacks two flexed leaves.
pub fn nested_columns() -> LayoutNode {
    Row::new()
        .push(Column::new().flex(1).push(block(20.0, 120.0).flex(1)))
        .push(
            Column::new()
                .flex(1)
                .push(block(50.0, 10.0).flex(2))
                .push(block(50.0, 10.0).flex(3)),
        )
        .into()
}

/// A single column stacking two flexed leaves.
pub fn stacked_leaves() -> LayoutNode {
    Column::new()
        .flex(1)
        .push(block(50.0, 25.0).flex(2))
        .push(block(50.0, 25.0).flex(3))
        .into()
}

/// Two image-like leaves stacked vertically.
pub fn column_of_images() -> LayoutNode {
    Column::new()
        .flex(1)
        .push(block(100.0, 100.0).flex(1))
        .push(block(65.0, 100.0).flex(4))
        .into()
}

/// Two image-like leaves side by side.
pub fn row_of_images() -> LayoutNode {
    Row::new()
        .flex(1)
        .push(block(100.0, 100.0).flex(1))
        .push(block(65.0, 100.0).flex(4))
        .into()
}

/// The priority-rule tree: a flexed column competing with two flex-0
/// columns whose leaves demand more than the pool holds.
pub fn priority_tree() -> LayoutNode {
    Row::new()
        .push(Column::new().flex(1).push(block(100.0, 20.0)))
        .push(Column::new().flex(0).push(block(300.0, 50.0)))
        .push(Column::new().flex(0).push(block(200.0, 20.0)))
        .into()
}

/// The priority tree with the first column pinned to a fixed width.
pub fn fixed_width_tree() -> LayoutNode {
    Row::new()
        .push(
            Column::new()
                .flex(1)
                .fixed_width(100.0)
                .push(block(100.0, 20.0)),
        )
        .push(Column::new().flex(0).push(block(300.0, 50.0)))
        .push(Column::new().flex(0).push(block(200.0, 20.0)))
        .into()
}
