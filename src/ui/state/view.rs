// SPDX-License-Identifier: MPL-2.0
//! Presentation state of the split view: split position, zoom, pan offset
//! and the current drag.

use super::drag::{splitter_hit, splitting_point_for, DragState};
use super::geometry::PaneLayout;
use super::zoom::{anchored_offset, unanchored_offset, ZoomDirection, ZoomFactor};
use crate::config::{ViewMode, DEFAULT_SPLITTING_POINT};
use iced::mouse;
use iced::{Point, Size, Vector};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    splitting_point: f32,
    zoom: ZoomFactor,
    center_offset: Vector,
    view_mode: ViewMode,
    split_enabled: bool,
    drag: DragState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(false, ViewMode::default())
    }
}

impl ViewState {
    #[must_use]
    pub fn new(split_enabled: bool, view_mode: ViewMode) -> Self {
        Self {
            splitting_point: DEFAULT_SPLITTING_POINT,
            zoom: ZoomFactor::default(),
            center_offset: Vector::ZERO,
            view_mode,
            split_enabled,
            drag: DragState::default(),
        }
    }

    #[must_use]
    pub fn splitting_point(&self) -> f32 {
        self.splitting_point
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn center_offset(&self) -> Vector {
        self.center_offset
    }

    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    #[must_use]
    pub fn is_split_enabled(&self) -> bool {
        self.split_enabled
    }

    #[must_use]
    pub fn drag(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn layout(&self, size: Size) -> PaneLayout {
        PaneLayout::new(size, self.splitting_point, self.split_enabled, self.view_mode)
    }

    /// Returns whether the value changed.
    pub fn set_split_enabled(&mut self, enabled: bool) -> bool {
        if self.split_enabled == enabled {
            return false;
        }
        self.split_enabled = enabled;
        if !enabled && self.drag.is_dragging_splitter() {
            self.drag.stop();
        }
        log::debug!("split view {}", if enabled { "enabled" } else { "disabled" });
        true
    }

    /// Returns whether the value changed.
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }
        self.view_mode = mode;
        log::debug!("view mode set to {mode:?}");
        true
    }

    /// Zooms in, keeping the item pixel under `anchor` in place.
    /// Returns `false` when the zoom is already at its maximum.
    pub fn zoom_in(&mut self, anchor: Option<Point>, size: Size) -> bool {
        self.zoom_step(ZoomDirection::In, anchor, size)
    }

    /// Zooms out, keeping the item pixel under `anchor` in place.
    /// Returns `false` when the zoom is already at its minimum.
    pub fn zoom_out(&mut self, anchor: Option<Point>, size: Size) -> bool {
        self.zoom_step(ZoomDirection::Out, anchor, size)
    }

    pub fn zoom_step(&mut self, direction: ZoomDirection, anchor: Option<Point>, size: Size) -> bool {
        let next = match direction {
            ZoomDirection::In => self.zoom.zoomed_in(),
            ZoomDirection::Out => self.zoom.zoomed_out(),
        };
        let Some(next) = next else {
            return false;
        };

        let scale = direction.scale();
        self.center_offset = match anchor {
            Some(anchor) => {
                let layout = self.layout(size);
                let pane_anchor = layout.anchor(layout.pane_at(anchor));
                anchored_offset(pane_anchor, self.center_offset, anchor, scale)
            }
            None => unanchored_offset(self.center_offset, scale),
        };
        self.zoom = next;
        true
    }

    /// Restores the default split position, zoom and pan offset.
    pub fn reset(&mut self) {
        self.splitting_point = DEFAULT_SPLITTING_POINT;
        self.zoom = ZoomFactor::default();
        self.center_offset = Vector::ZERO;
        log::debug!("split view reset");
    }

    /// Left button press. Grabs the splitter when the press is on it.
    pub fn press_left(&mut self, position: Point, size: Size) -> bool {
        let layout = self.layout(size);
        if layout.is_split() && splitter_hit(position.x, layout.x_split()) {
            self.drag.start_splitter();
            return true;
        }
        false
    }

    /// Right button press. Starts panning.
    pub fn press_right(&mut self, position: Point) -> bool {
        self.drag.start_view(position, self.center_offset);
        true
    }

    /// Applies the current drag to the cursor position. Returns whether
    /// anything moved.
    pub fn drag_to(&mut self, position: Point, size: Size) -> bool {
        match self.drag {
            DragState::Splitter if self.split_enabled => {
                self.splitting_point = splitting_point_for(position.x, size.width);
                true
            }
            DragState::View { .. } => match self.drag.view_offset(position) {
                Some(offset) => {
                    self.center_offset = offset;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Left button release. Ends a splitter drag at `position`.
    pub fn release_left(&mut self, position: Point, size: Size) -> bool {
        if !self.drag.is_dragging_splitter() {
            return false;
        }
        let moved = self.drag_to(position, size);
        self.drag.stop();
        moved
    }

    /// Right button release. Ends a view drag at `position`.
    pub fn release_right(&mut self, position: Point) -> bool {
        let Some(offset) = self.drag.view_offset(position) else {
            return false;
        };
        self.center_offset = offset;
        self.drag.stop();
        true
    }

    /// Cursor shape for a cursor at `position`, or outside the widget.
    #[must_use]
    pub fn interaction(&self, position: Option<Point>, size: Size) -> mouse::Interaction {
        match self.drag {
            DragState::Splitter => return mouse::Interaction::ResizingHorizontally,
            DragState::View { .. } => return mouse::Interaction::Grabbing,
            DragState::Idle => {}
        }

        let layout = self.layout(size);
        match position {
            Some(position) if layout.is_split() && splitter_hit(position.x, layout.x_split()) => {
                mouse::Interaction::ResizingHorizontally
            }
            _ => mouse::Interaction::default(),
        }
    }
}
