//! flexsnap: two-axis flex sizing for trees of UI box nodes.
//!
//! Every node carries a non-negative flex weight, may carry a fixed width
//! and/or height, and ends up with a resolved width and height once the
//! root is handed an available width (and optionally a height) via
//! [`snap`].
//!
//! # Architecture
//!
//! ```text
//! snap(root, w, h?) -> width pass (top-down assign / bottom-up derive)
//!                   -> height pass (fitting + cross-axis stretch)
//! ```
//!
//! Assigned dimensions flow top-down (a parent tells a child its size);
//! intrinsic dimensions flow bottom-up (a child reports its natural size).
//! Width for a subtree always stabilizes before that subtree's height pass
//! runs, because leaf fitting heights and cross-axis stretch both consume
//! the already-resolved width.
//!
//! Sibling priority on a container's main axis is fixed, independent of
//! declaration order: fixed-size children claim space first, then flex-0
//! children size themselves against the shrinking remainder, then flex>0
//! children split what is left by weight.
//!
//! Leaf content measurement (text shaping, image intrinsic size) is not
//! part of this crate; the embedder supplies it as pure callbacks on
//! [`Leaf`].

pub mod axis;
pub mod node;

pub mod leaf;

// containers must come before flex (flex distributes over LayoutNode)
pub mod column;
pub mod row;

pub mod flex;

pub mod driver;

// Sample trees from the original harness, shared by tests.
pub mod demo;

// Re-export core types
pub use axis::Axis;
pub use column::Column;
pub use driver::{Trace, TraceEntry, snap, trace};
pub use leaf::Leaf;
pub use node::LayoutNode;
pub use row::Row;
