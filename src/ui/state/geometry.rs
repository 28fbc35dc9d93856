// SPDX-License-Identifier: MPL-2.0
//! Pane layout and the mapping between screen and item coordinates.
//!
//! All positions are relative to the top-left corner of the split view. An
//! item is drawn centered on its pane center, which is the pane anchor plus
//! the user's pan offset.

use crate::config::ViewMode;
use crate::media::PixelPos;
use iced::{Point, Rectangle, Size, Vector};

/// One of the two display regions of the split view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Left,
    Right,
}

impl Pane {
    pub const ALL: [Pane; 2] = [Pane::Left, Pane::Right];

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Pane::Left => 0,
            Pane::Right => 1,
        }
    }
}

/// Where the panes of the split view lie for one widget size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaneLayout {
    size: Size,
    x_split: f32,
    split_enabled: bool,
    mode: ViewMode,
}

impl PaneLayout {
    #[must_use]
    pub fn new(size: Size, splitting_point: f32, split_enabled: bool, mode: ViewMode) -> Self {
        Self {
            size,
            x_split: size.width * splitting_point,
            split_enabled,
            mode,
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Horizontal position of the splitter.
    #[must_use]
    pub fn x_split(&self) -> f32 {
        self.x_split
    }

    #[must_use]
    pub fn is_split(&self) -> bool {
        self.split_enabled
    }

    /// Pane that contains `point`. The splitter column belongs to the left pane.
    #[must_use]
    pub fn pane_at(&self, point: Point) -> Pane {
        if self.split_enabled && point.x > self.x_split {
            Pane::Right
        } else {
            Pane::Left
        }
    }

    /// Viewport-derived center of a pane, before the pan offset is applied.
    #[must_use]
    pub fn anchor(&self, pane: Pane) -> Point {
        let y = self.size.height / 2.0;
        if !self.split_enabled || self.mode == ViewMode::Comparison {
            return Point::new(self.size.width / 2.0, y);
        }
        match pane {
            Pane::Left => Point::new(self.x_split / 2.0, y),
            Pane::Right => Point::new(self.x_split + (self.size.width - self.x_split) / 2.0, y),
        }
    }

    /// Screen position of the item center in `pane`.
    #[must_use]
    pub fn center(&self, pane: Pane, offset: Vector) -> Point {
        self.anchor(pane) + offset
    }

    /// Region `pane` may draw into.
    #[must_use]
    pub fn clip_rect(&self, pane: Pane) -> Rectangle {
        let full = Rectangle::with_size(self.size);
        if !self.split_enabled {
            return full;
        }
        match pane {
            Pane::Left => Rectangle::new(Point::ORIGIN, Size::new(self.x_split, self.size.height)),
            Pane::Right => Rectangle::new(
                Point::new(self.x_split, 0.0),
                Size::new((self.size.width - self.x_split).max(0.0), self.size.height),
            ),
        }
    }

    /// Panes that show an item. The right pane is only used while splitting.
    #[must_use]
    pub fn visible_panes(&self, has_second: bool) -> &'static [Pane] {
        if self.split_enabled && has_second {
            &Pane::ALL
        } else {
            &Pane::ALL[..1]
        }
    }
}

/// Cursor position relative to an item center, in item pixels.
#[must_use]
pub fn displacement(cursor: Point, center: Point, zoom: f32) -> Vector {
    (cursor - center) * (1.0 / zoom)
}

/// The item pixel under the cursor, for one pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelHit {
    pub pixel: PixelPos,
    /// Whether `pixel` lies inside the item.
    pub inside: bool,
    /// Item-pixel translation that moves `pixel` onto the origin when the
    /// item is drawn centered there.
    pub zoom_box_translation: Vector,
}

/// Resolves `displacement` (see [`displacement`]) to a pixel of an item of `item_size`.
///
/// Coordinates are floored so that `-0.5` maps to pixel `-1`.
#[must_use]
pub fn pixel_hit(displacement: Vector, item_size: Size<u32>) -> PixelHit {
    let half_width = item_size.width as f32 / 2.0;
    let half_height = item_size.height as f32 / 2.0;

    let pixel = PixelPos::new(
        (displacement.x + half_width).floor() as i32,
        (displacement.y + half_height).floor() as i32,
    );

    PixelHit {
        pixel,
        inside: pixel.is_inside(item_size),
        zoom_box_translation: Vector::new(
            half_width - pixel.x as f32 - 0.5,
            half_height - pixel.y as f32 - 0.5,
        ),
    }
}

/// Square covering `pixel` when the item is drawn at `zoom` centered on the origin.
#[must_use]
pub fn pixel_rect(pixel: PixelPos, item_size: Size<u32>, zoom: f32) -> Rectangle {
    let x = -(item_size.width as f32 / 2.0 - pixel.x as f32) * zoom;
    let y = -(item_size.height as f32 / 2.0 - pixel.y as f32) * zoom;
    Rectangle::new(Point::new(x, y), Size::new(zoom, zoom))
}

/// Inner lines of a regular grid every `grid_size` item pixels, relative to
/// the item center. Empty when the grid spacing would be under one screen pixel.
#[must_use]
pub fn grid_lines(item_size: Size<u32>, grid_size: u32, zoom: f32) -> Vec<(Point, Point)> {
    let step = grid_size as f32 * zoom;
    if step < 1.0 {
        return Vec::new();
    }

    let width = item_size.width as f32 * zoom;
    let height = item_size.height as f32 * zoom;
    let (left, top) = (-width / 2.0, -height / 2.0);
    let mut lines = Vec::new();

    let mut offset = step;
    while offset < height {
        lines.push((Point::new(left, top + offset), Point::new(-left, top + offset)));
        offset += step;
    }

    let mut offset = step;
    while offset < width {
        lines.push((Point::new(left + offset, top), Point::new(left + offset, -top)));
        offset += step;
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn layout(split: bool, mode: ViewMode) -> PaneLayout {
        PaneLayout::new(Size::new(800.0, 600.0), 0.25, split, mode)
    }

    #[test]
    fn single_pane_anchor_is_viewport_center() {
        let layout = layout(false, ViewMode::SideBySide);
        assert_eq!(layout.anchor(Pane::Left), Point::new(400.0, 300.0));
        assert_eq!(layout.pane_at(Point::new(700.0, 10.0)), Pane::Left);
        assert_eq!(layout.clip_rect(Pane::Left), Rectangle::with_size(Size::new(800.0, 600.0)));
    }

    #[test]
    fn side_by_side_anchors_center_each_region() {
        let layout = layout(true, ViewMode::SideBySide);
        assert_abs_diff_eq!(layout.x_split(), 200.0);
        assert_eq!(layout.anchor(Pane::Left), Point::new(100.0, 300.0));
        assert_eq!(layout.anchor(Pane::Right), Point::new(500.0, 300.0));
    }

    #[test]
    fn comparison_panes_share_one_anchor() {
        let layout = layout(true, ViewMode::Comparison);
        assert_eq!(layout.anchor(Pane::Left), layout.anchor(Pane::Right));
        assert_eq!(layout.center(Pane::Right, Vector::new(5.0, -5.0)), Point::new(405.0, 295.0));
    }

    #[test]
    fn splitter_column_belongs_to_left_pane() {
        let layout = layout(true, ViewMode::SideBySide);
        assert_eq!(layout.pane_at(Point::new(200.0, 0.0)), Pane::Left);
        assert_eq!(layout.pane_at(Point::new(200.5, 0.0)), Pane::Right);
    }

    #[test]
    fn split_clip_rects_meet_at_splitter() {
        let layout = layout(true, ViewMode::SideBySide);
        let left = layout.clip_rect(Pane::Left);
        let right = layout.clip_rect(Pane::Right);
        assert_abs_diff_eq!(left.width, 200.0);
        assert_abs_diff_eq!(right.x, 200.0);
        assert_abs_diff_eq!(right.width, 600.0);
    }

    #[test]
    fn right_pane_only_visible_when_split_with_second_item() {
        assert_eq!(layout(true, ViewMode::SideBySide).visible_panes(true).len(), 2);
        assert_eq!(layout(true, ViewMode::SideBySide).visible_panes(false).len(), 1);
        assert_eq!(layout(false, ViewMode::SideBySide).visible_panes(true).len(), 1);
    }

    #[test]
    fn cursor_on_item_center_hits_middle_pixel() {
        let hit = pixel_hit(Vector::new(0.0, 0.0), Size::new(10, 8));
        assert_eq!(hit.pixel, PixelPos::new(5, 4));
        assert!(hit.inside);
        assert_abs_diff_eq!(hit.zoom_box_translation.x, -0.5);
        assert_abs_diff_eq!(hit.zoom_box_translation.y, -0.5);
    }

    #[test]
    fn positions_just_left_of_item_floor_to_minus_one() {
        let item = Size::new(10, 8);
        let hit = pixel_hit(Vector::new(-5.5, 0.0), item);
        assert_eq!(hit.pixel.x, -1);
        assert!(!hit.inside);

        let edge = super::pixel_hit(Vector::new(-5.0, -4.0), item);
        assert_eq!(edge.pixel, PixelPos::new(0, 0));
        assert!(edge.inside);
    }

    #[test]
    fn far_edge_is_outside() {
        let hit = pixel_hit(Vector::new(5.0, 0.0), Size::new(10, 8));
        assert_eq!(hit.pixel.x, 10);
        assert!(!hit.inside);
    }

    #[test]
    fn displacement_is_scaled_by_zoom() {
        let d = displacement(Point::new(140.0, 80.0), Point::new(100.0, 100.0), 4.0);
        assert_abs_diff_eq!(d.x, 10.0);
        assert_abs_diff_eq!(d.y, -5.0);
    }

    #[test]
    fn pixel_rect_covers_one_zoomed_pixel() {
        let rect = pixel_rect(PixelPos::new(0, 0), Size::new(4, 2), 8.0);
        assert_eq!(rect, Rectangle::new(Point::new(-16.0, -8.0), Size::new(8.0, 8.0)));
    }

    #[test]
    fn grid_has_inner_lines_only() {
        // 128x64 item with a 64 pixel grid: one vertical line, no horizontal one.
        let lines = grid_lines(Size::new(128, 64), 64, 1.0);
        assert_eq!(lines, vec![(Point::new(0.0, -32.0), Point::new(0.0, 32.0))]);
    }

    #[test]
    fn grid_is_skipped_below_one_screen_pixel() {
        assert!(grid_lines(Size::new(4096, 4096), 8, 1.0 / 16.0).is_empty());
    }
}
