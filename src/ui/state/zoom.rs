// SPDX-License-Identifier: MPL-2.0
//! Zoom factor and anchor-preserving zoom steps.
//!
//! Zooming multiplies the factor by [`ZOOM_STEP_FACTOR`] and moves the item
//! center so that the item pixel under the anchor stays under the anchor.

pub use crate::config::{DEFAULT_ZOOM_FACTOR, MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR, ZOOM_STEP_FACTOR};

use iced::{Point, Vector};

/// Zoom factor, guaranteed to be strictly positive and within
/// [`MIN_ZOOM_FACTOR`]..=[`MAX_ZOOM_FACTOR`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a zoom factor, clamping it to the valid range.
    /// Non-finite input yields the default factor.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() {
            Self(factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_unity(self) -> bool {
        (self.0 - 1.0).abs() < f32::EPSILON
    }

    /// The factor after one zoom-in step, or `None` at the maximum.
    #[must_use]
    pub fn zoomed_in(self) -> Option<Self> {
        let next = self.0 * ZOOM_STEP_FACTOR;
        (next <= MAX_ZOOM_FACTOR).then_some(Self(next))
    }

    /// The factor after one zoom-out step, or `None` at the minimum.
    #[must_use]
    pub fn zoomed_out(self) -> Option<Self> {
        let next = self.0 / ZOOM_STEP_FACTOR;
        (next >= MIN_ZOOM_FACTOR).then_some(Self(next))
    }

    /// Text of the zoom indicator, e.g. `x2` or `x0.25`.
    #[must_use]
    pub fn label(self) -> String {
        format!("x{}", self.0)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_FACTOR)
    }
}

/// Direction of one zoom step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scale applied to distances on screen by one step in this direction.
    #[must_use]
    pub fn scale(self) -> f32 {
        match self {
            ZoomDirection::In => ZOOM_STEP_FACTOR,
            ZoomDirection::Out => 1.0 / ZOOM_STEP_FACTOR,
        }
    }

    /// Positive wheel deltas zoom in, negative ones zoom out.
    #[must_use]
    pub fn from_wheel(delta_y: f32) -> Option<Self> {
        if delta_y > 0.0 {
            Some(ZoomDirection::In)
        } else if delta_y < 0.0 {
            Some(ZoomDirection::Out)
        } else {
            None
        }
    }
}

/// New center offset after scaling by `scale` around `anchor`.
///
/// `pane_anchor` is the viewport-derived center of the pane the anchor lies in.
/// The item center `pane_anchor + offset` moves to `anchor + (item_center - anchor) * scale`.
#[must_use]
pub fn anchored_offset(pane_anchor: Point, offset: Vector, anchor: Point, scale: f32) -> Vector {
    let item_center = pane_anchor + offset;
    let moved = anchor + (item_center - anchor) * scale;
    moved - pane_anchor
}

/// New center offset after scaling with no anchor: the offset itself scales.
#[must_use]
pub fn unanchored_offset(offset: Vector, scale: f32) -> Vector {
    offset * scale
}
