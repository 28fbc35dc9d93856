// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! The split view supports two drags: moving the splitter with the left
//! button, and panning the view with the right button.

use crate::config::{SPLITTER_CLIP_X, SPLITTER_MARGIN};
use iced::{Point, Vector};

/// Which drag, if any, is in progress.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// The splitter follows the cursor.
    Splitter,
    /// The view follows the cursor.
    View {
        /// Position where the drag started
        start_position: Point,
        /// Pan offset when the drag started
        start_offset: Vector,
    },
}

impl DragState {
    pub fn start_splitter(&mut self) {
        *self = DragState::Splitter;
    }

    pub fn start_view(&mut self, position: Point, offset: Vector) {
        *self = DragState::View {
            start_position: position,
            start_offset: offset,
        };
    }

    pub fn stop(&mut self) {
        *self = DragState::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        !matches!(self, DragState::Idle)
    }

    #[must_use]
    pub fn is_dragging_splitter(&self) -> bool {
        matches!(self, DragState::Splitter)
    }

    /// Pan offset for the current cursor position during a view drag.
    #[must_use]
    pub fn view_offset(&self, current_position: Point) -> Option<Vector> {
        match *self {
            DragState::View {
                start_position,
                start_offset,
            } => Some(start_offset + (current_position - start_position)),
            _ => None,
        }
    }
}

/// Whether `x` is close enough to the splitter at `x_split` to grab it.
#[must_use]
pub fn splitter_hit(x: f32, x_split: f32) -> bool {
    (x - x_split).abs() < SPLITTER_MARGIN
}

/// Splitting point for a splitter dragged to `x`, keeping it
/// [`SPLITTER_CLIP_X`] away from both edges.
///
/// Widgets too narrow to honor the clip margins keep the splitter centered.
#[must_use]
pub fn splitting_point_for(x: f32, width: f32) -> f32 {
    if width <= 2.0 * SPLITTER_CLIP_X {
        return 0.5;
    }
    x.clamp(SPLITTER_CLIP_X, width - SPLITTER_CLIP_X) / width
}
