//! Leaf Sizing Adapter
//!
//! Wraps two embedder-supplied measurement callbacks into a node:
//! a min-content width and a fitting height for a given width. The
//! callbacks are assumed total, deterministic, and side-effect-free
//! within a pass (text shaping and image intrinsic sizing live behind
//! them, outside this crate).

use crate::axis::{AxisInput, AxisSlot};

/// A content leaf. No children; sizes come from the callbacks or from the
/// parent.
pub struct Leaf {
    /// Weight used when the parent distributes leftover main-axis space.
    pub(crate) flex: u32,
    /// Min-content width, consulted only when deriving against a pool.
    min_width: Box<dyn Fn() -> f32>,
    /// Fitting height for a resolved width.
    fitting_height: Box<dyn Fn(f32) -> f32>,
    pub(crate) width: AxisSlot,
    pub(crate) height: AxisSlot,
}

impl Leaf {
    /// Wrap the two measurement callbacks into a leaf with flex 1.
    pub fn new(
        min_width: impl Fn() -> f32 + 'static,
        fitting_height: impl Fn(f32) -> f32 + 'static,
    ) -> Self {
        Self {
            flex: 1,
            min_width: Box::new(min_width),
            fitting_height: Box::new(fitting_height),
            width: AxisSlot::default(),
            height: AxisSlot::default(),
        }
    }

    /// Set the flex weight.
    pub fn flex(mut self, flex: u32) -> Self {
        self.flex = flex;
        self
    }

    /// Parent assigns a definite share: taken verbatim, no re-measurement.
    pub(crate) fn assign_width(&mut self, value: f32) {
        let width = value.max(0.0);
        if !self.width.begin(AxisInput::Assigned(width)) {
            return;
        }
        self.width.resolve(width);
        self.refit(width);
    }

    /// Size against available space: `min(min_width(), pool)`, floor 0.
    /// An empty pool resolves to 0 without consulting the callback.
    pub(crate) fn derive_width(&mut self, available: f32) {
        let pool = available.max(0.0);
        if !self.width.begin(AxisInput::Derived(pool)) {
            return;
        }
        let width = if pool <= 0.0 {
            0.0
        } else {
            (self.min_width)().min(pool).max(0.0)
        };
        self.width.resolve(width);
        self.refit(width);
    }

    /// Cross-axis stretch: accept the externally-assigned height, which
    /// overrides the fitted value for the rest of the pass.
    pub(crate) fn assign_height(&mut self, value: f32) {
        let height = value.max(0.0);
        if !self.height.begin(AxisInput::Assigned(height)) {
            return;
        }
        self.height.resolve(height);
    }

    /// Height is always intrinsic until a parent stretches it.
    pub(crate) fn derive_height(&mut self, width: f32) {
        self.refit(width);
    }

    /// Recompute the fitting height once width is final for the pass.
    fn refit(&mut self, width: f32) {
        if self.height.begin(AxisInput::Derived(width)) {
            self.height.resolve((self.fitting_height)(width).max(0.0));
        }
    }
}
