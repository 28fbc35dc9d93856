// SPDX-License-Identifier: MPL-2.0
//! Magnified inset of the pixel under the cursor, with a readout of its
//! coordinates and values.

use crate::config::{
    INFO_PANEL_FONT_SIZE, ZOOM_BOX_FACTOR, ZOOM_BOX_MARGIN, ZOOM_BOX_PADDING,
    ZOOM_BOX_SOURCE_PIXELS,
};
use crate::media::{DisplayItem, PixelPos, ValuePairList};
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::state::geometry::{Pane, PaneLayout, PixelHit};
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Path, Stroke, Text};
use iced::{Color, Font, Point, Rectangle, Size, Vector};

/// Side length of the inset in screen pixels.
pub const ZOOM_BOX_SIZE: f32 = ZOOM_BOX_SOURCE_PIXELS as f32 * ZOOM_BOX_FACTOR;

/// Width of one monospace glyph relative to the font size.
const CHAR_WIDTH_RATIO: f32 = 0.6;
/// Line height relative to the font size (iced's default relative line height).
const LINE_HEIGHT_RATIO: f32 = 1.3;
/// Minimum number of blank glyphs between a label and its value.
const COLUMN_GAP_CHARS: usize = 2;

const PANEL_BACKGROUND: Color = Color {
    a: opacity::INFO_PANEL,
    ..palette::BLACK
};

/// Where one pane's inset goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBoxPlacement {
    pub rect: Rectangle,
    /// `false` when the inset is narrowed by the splitter or clipped by the
    /// widget edge.
    pub show_info: bool,
}

/// Places the inset of `pane` at the bottom-right of the pane.
///
/// Returns `None` for the right pane when the splitter leaves no room for it.
#[must_use]
pub fn placement(pane: Pane, layout: &PaneLayout) -> Option<ZoomBoxPlacement> {
    let size = layout.size();
    let x_split = layout.x_split();
    let right_pane = layout.is_split() && pane == Pane::Right;

    let mut width = ZOOM_BOX_SIZE;
    let mut show_info = true;
    if right_pane && x_split > size.width - ZOOM_BOX_MARGIN - ZOOM_BOX_SIZE {
        if x_split > size.width - ZOOM_BOX_MARGIN {
            return None;
        }
        width = size.width - x_split - ZOOM_BOX_MARGIN;
        show_info = false;
    }

    let right = if layout.is_split() && pane == Pane::Left {
        x_split - ZOOM_BOX_MARGIN
    } else {
        size.width - ZOOM_BOX_MARGIN
    };
    let bottom = size.height - ZOOM_BOX_MARGIN;
    let rect = Rectangle::new(
        Point::new(right - width, bottom - ZOOM_BOX_SIZE),
        Size::new(width, ZOOM_BOX_SIZE),
    );

    // An inset hanging off the left or top edge gets no readout.
    if rect.x < 0.0 || rect.y < 0.0 {
        show_info = false;
    }

    Some(ZoomBoxPlacement { rect, show_info })
}

/// A titled block of `label: value` rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoSection {
    pub heading: String,
    pub rows: Vec<(String, String)>,
}

/// Text readout drawn to the left of the inset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    sections: Vec<InfoSection>,
}

impl InfoPanel {
    /// Coordinates section, followed by the pixel values when there are any.
    #[must_use]
    pub fn new(coordinates_heading: &str, pixel: PixelPos, values: Option<ValuePairList>) -> Self {
        let mut sections = vec![InfoSection {
            heading: coordinates_heading.to_string(),
            rows: vec![
                ("X".to_string(), pixel.x.to_string()),
                ("Y".to_string(), pixel.y.to_string()),
            ],
        }];

        if let Some(values) = values.filter(|values| !values.is_empty()) {
            sections.push(InfoSection {
                heading: values.title,
                rows: values.values,
            });
        }

        Self { sections }
    }

    #[must_use]
    pub fn sections(&self) -> &[InfoSection] {
        &self.sections
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.sections.iter().map(|section| 1 + section.rows.len()).sum()
    }

    /// Size of the text block, without padding.
    #[must_use]
    pub fn text_size(&self) -> Size {
        let widest = self
            .sections
            .iter()
            .flat_map(|section| {
                let heading = section.heading.chars().count();
                let rows = section.rows.iter().map(|(label, value)| {
                    label.chars().count() + 1 + COLUMN_GAP_CHARS + value.chars().count()
                });
                std::iter::once(heading).chain(rows)
            })
            .max()
            .unwrap_or(0);

        Size::new(
            widest as f32 * INFO_PANEL_FONT_SIZE * CHAR_WIDTH_RATIO,
            self.line_count() as f32 * line_height(),
        )
    }

    /// Panel rectangle left of `zoom_box`, bottom-aligned with it and kept on screen.
    #[must_use]
    pub fn rect(&self, zoom_box: Rectangle) -> Rectangle {
        let text = self.text_size();
        let size = Size::new(
            text.width + 2.0 * ZOOM_BOX_PADDING,
            text.height + 2.0 * ZOOM_BOX_PADDING,
        );
        let x = (zoom_box.x - size.width).max(0.0);
        let y = (zoom_box.y + zoom_box.height - size.height).max(0.0);
        Rectangle::new(Point::new(x, y), size)
    }

    pub fn draw(&self, frame: &mut canvas::Frame, zoom_box: Rectangle) {
        let rect = self.rect(zoom_box);
        frame.fill_rectangle(rect.position(), rect.size(), PANEL_BACKGROUND);

        let left = rect.x + ZOOM_BOX_PADDING;
        let right = rect.x + rect.width - ZOOM_BOX_PADDING;
        let mut y = rect.y + ZOOM_BOX_PADDING;

        for section in &self.sections {
            frame.fill_text(panel_text(section.heading.clone(), Point::new(left, y)));
            y += line_height();

            for (label, value) in &section.rows {
                frame.fill_text(panel_text(format!("{label}:"), Point::new(left, y)));
                frame.fill_text(Text {
                    align_x: Horizontal::Right.into(),
                    ..panel_text(value.clone(), Point::new(right, y))
                });
                y += line_height();
            }
        }
    }
}

fn line_height() -> f32 {
    INFO_PANEL_FONT_SIZE * LINE_HEIGHT_RATIO
}

fn panel_text(content: String, position: Point) -> Text {
    Text {
        content,
        position,
        color: palette::WHITE,
        size: INFO_PANEL_FONT_SIZE.into(),
        font: Font::MONOSPACE,
        ..Text::default()
    }
}

/// Draws the inset for one pane: background, the magnified item centered on
/// the hovered pixel, a frame and (when there is room) the readout.
pub fn draw(
    frame: &mut canvas::Frame,
    placement: ZoomBoxPlacement,
    item: &dyn DisplayItem,
    frame_index: usize,
    hit: PixelHit,
    background: Color,
    coordinates_heading: &str,
) {
    let rect = placement.rect;
    frame.fill_rectangle(rect.position(), rect.size(), background);

    frame.with_clip(rect, |inset| {
        inset.translate(
            Vector::new(rect.width / 2.0, rect.height / 2.0)
                + hit.zoom_box_translation * ZOOM_BOX_FACTOR,
        );
        item.draw(inset, frame_index, ZOOM_BOX_FACTOR);
    });

    frame.stroke(
        &Path::rectangle(rect.position(), rect.size()),
        Stroke::default().with_width(1.0).with_color(palette::BLACK),
    );

    if placement.show_info {
        let values = hit
            .inside
            .then(|| item.pixel_values(frame_index, hit.pixel));
        InfoPanel::new(coordinates_heading, hit.pixel, values).draw(frame, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewMode;
    use crate::test_utils::assert_abs_diff_eq;

    const SIZE: Size = Size::new(1000.0, 600.0);

    fn rgba() -> ValuePairList {
        ValuePairList {
            title: "RGBA".to_string(),
            values: vec![
                ("R".to_string(), "255".to_string()),
                ("G".to_string(), "0".to_string()),
            ],
        }
    }

    #[test]
    fn zoom_box_is_160_pixels() {
        assert_abs_diff_eq!(ZOOM_BOX_SIZE, 160.0);
    }

    #[test]
    fn single_pane_box_sits_bottom_right() {
        let layout = PaneLayout::new(SIZE, 0.5, false, ViewMode::SideBySide);
        let placement = placement(Pane::Left, &layout).unwrap();
        assert_eq!(
            placement.rect,
            Rectangle::new(Point::new(829.0, 429.0), Size::new(160.0, 160.0))
        );
        assert!(placement.show_info);
    }

    #[test]
    fn left_pane_box_ends_at_splitter() {
        let layout = PaneLayout::new(SIZE, 0.5, true, ViewMode::SideBySide);
        let placement = placement(Pane::Left, &layout).unwrap();
        assert_abs_diff_eq!(placement.rect.x + placement.rect.width, 489.0);
    }

    #[test]
    fn right_pane_box_narrows_when_splitter_is_far_right() {
        let layout = PaneLayout::new(SIZE, 0.9, true, ViewMode::SideBySide);
        let placement = placement(Pane::Right, &layout).unwrap();
        assert_abs_diff_eq!(placement.rect.width, 89.0, epsilon = 1e-3);
        assert_abs_diff_eq!(placement.rect.x, 900.0, epsilon = 1e-3);
        assert!(!placement.show_info);
    }

    #[test]
    fn right_pane_box_is_dropped_when_margin_does_not_fit() {
        let layout = PaneLayout::new(SIZE, 0.995, true, ViewMode::SideBySide);
        assert!(placement(Pane::Right, &layout).is_none());
    }

    #[test]
    fn left_pane_box_past_left_edge_has_no_readout() {
        let layout = PaneLayout::new(SIZE, 0.1, true, ViewMode::SideBySide);
        let placement = placement(Pane::Left, &layout).unwrap();
        assert!(placement.rect.x < 0.0);
        assert!(!placement.show_info);
    }

    #[test]
    fn short_widget_box_past_top_edge_has_no_readout() {
        let layout = PaneLayout::new(Size::new(1000.0, 120.0), 0.5, false, ViewMode::SideBySide);
        let placement = placement(Pane::Left, &layout).unwrap();
        assert!(placement.rect.y < 0.0);
        assert!(!placement.show_info);
    }

    #[test]
    fn info_panel_lists_values_only_when_present() {
        let pixel = PixelPos::new(3, -1);
        let coords_only = InfoPanel::new("Coordinates", pixel, None);
        assert_eq!(coords_only.sections().len(), 1);
        assert_eq!(coords_only.sections()[0].rows[1], ("Y".to_string(), "-1".to_string()));

        let empty = InfoPanel::new("Coordinates", pixel, Some(ValuePairList::default()));
        assert_eq!(empty.sections().len(), 1);

        let full = InfoPanel::new("Coordinates", pixel, Some(rgba()));
        assert_eq!(full.sections().len(), 2);
        assert_eq!(full.sections()[1].heading, "RGBA");
        assert_eq!(full.line_count(), 6);
    }

    #[test]
    fn info_panel_is_left_of_box_and_bottom_aligned() {
        let panel = InfoPanel::new("Coordinates", PixelPos::new(10, 20), Some(rgba()));
        let zoom_box = Rectangle::new(Point::new(600.0, 400.0), Size::new(160.0, 160.0));
        let rect = panel.rect(zoom_box);

        assert_abs_diff_eq!(rect.x + rect.width, zoom_box.x, epsilon = 1e-3);
        assert_abs_diff_eq!(rect.y + rect.height, zoom_box.y + zoom_box.height, epsilon = 1e-3);
        assert!(rect.width > 2.0 * ZOOM_BOX_PADDING);
    }

    #[test]
    fn info_panel_stays_on_screen() {
        let panel = InfoPanel::new("Coordinates", PixelPos::new(0, 0), None);
        let zoom_box = Rectangle::new(Point::new(5.0, 0.0), Size::new(160.0, 20.0));
        let rect = panel.rect(zoom_box);
        assert_abs_diff_eq!(rect.x, 0.0);
        assert_abs_diff_eq!(rect.y, 0.0);
    }
}
