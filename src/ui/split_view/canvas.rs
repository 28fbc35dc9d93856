// SPDX-License-Identifier: MPL-2.0
//! Canvas program of the split view: turns mouse events into component
//! messages and renders the selected items.

use super::{zoom_box, Message, State};
use crate::config::{
    SplitterStyle, SPLITTER_HANDLE_SIZE, ZOOM_LABEL_FONT_SIZE, ZOOM_LABEL_POSITION,
};
use crate::i18n::fluent::I18n;
use crate::media::{DisplayItem, Playlist};
use crate::playback::PlaybackController;
use crate::ui::design_tokens::{opacity, palette};
use crate::ui::state::geometry::{self, Pane, PaneLayout, PixelHit};
use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke, Text};
use iced::widget::Action;
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, Vector};

const SPLITTER_COLOR: Color = palette::WHITE;
const GRID_COLOR: Color = Color {
    a: opacity::GRID,
    ..palette::BLACK
};
const HIGHLIGHT_COLOR: Color = palette::BLACK;
const ZOOM_LABEL_COLOR: Color = palette::BLACK;

/// Borrowed view of everything one frame of the split view needs.
pub struct SplitViewCanvas<'a> {
    pub state: &'a State,
    pub playlist: &'a dyn Playlist,
    pub playback: &'a dyn PlaybackController,
    pub i18n: &'a I18n,
}

impl<'a> SplitViewCanvas<'a> {
    fn selected_items(&self) -> [Option<&'a dyn DisplayItem>; 2] {
        let (first, second) = self.playlist.selected_items();
        [first, second]
    }

    /// Pixel under the cursor in each visible pane, or `None` when the zoom
    /// box is off or the cursor is outside the widget.
    fn hits(
        &self,
        layout: &PaneLayout,
        items: &[Option<&dyn DisplayItem>; 2],
    ) -> [Option<PixelHit>; 2] {
        let mut hits = [None, None];
        if !self.state.zoom_box_enabled() {
            return hits;
        }
        let Some(cursor) = self.state.cursor_position() else {
            return hits;
        };

        let view = self.state.view();
        let zoom = view.zoom().value();
        let center = layout.center(layout.pane_at(cursor), view.center_offset());
        let displacement = geometry::displacement(cursor, center, zoom);

        for &pane in layout.visible_panes(items[1].is_some()) {
            if let Some(item) = items[pane.index()] {
                hits[pane.index()] = Some(geometry::pixel_hit(displacement, item.size()));
            }
        }
        hits
    }

    /// Component message for a canvas event, if the event concerns the split view.
    fn message_for(
        &self,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Message> {
        let size = bounds.size();

        match event {
            iced::Event::Mouse(mouse::Event::CursorLeft) => {
                self.state.cursor_position().map(|_| Message::CursorLeft)
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                match cursor.position_in(bounds) {
                    Some(position) => {
                        let moved = self.state.cursor_position() != Some(position);
                        (moved || self.state.view().drag().is_dragging())
                            .then_some(Message::CursorMoved { position, size })
                    }
                    // Drags continue outside the widget; hover tracking does not.
                    None if self.state.view().drag().is_dragging() => {
                        cursor.position().map(|absolute| Message::CursorMoved {
                            position: absolute - Vector::new(bounds.x, bounds.y),
                            size,
                        })
                    }
                    None => self.state.cursor_position().map(|_| Message::CursorLeft),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonPressed(button)) => cursor
                .position_in(bounds)
                .map(|position| Message::ButtonPressed {
                    button: *button,
                    position,
                    size,
                }),
            iced::Event::Mouse(mouse::Event::ButtonReleased(button)) => {
                if !self.state.view().drag().is_dragging() {
                    None
                } else {
                    cursor.position().map(|absolute| Message::ButtonReleased {
                        button: *button,
                        position: absolute - Vector::new(bounds.x, bounds.y),
                        size,
                    })
                }
            }
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let delta_y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } | mouse::ScrollDelta::Pixels { y, .. } => *y,
                };
                cursor
                    .position_in(bounds)
                    .map(|position| Message::WheelScrolled {
                        delta_y,
                        position,
                        size,
                    })
            }
            _ => None,
        }
    }

    fn draw_pane(
        &self,
        frame: &mut Frame,
        layout: &PaneLayout,
        pane: Pane,
        item: &dyn DisplayItem,
        hit: Option<PixelHit>,
    ) {
        let view = self.state.view();
        let zoom = view.zoom().value();
        let frame_index = self.playback.current_frame();
        let clip = layout.clip_rect(pane);
        let center = layout.center(pane, view.center_offset());

        frame.with_clip(clip, |pane_frame| {
            pane_frame.translate(center - clip.position());
            item.draw(pane_frame, frame_index, zoom);

            if self.state.grid_enabled() {
                let stroke = Stroke::default().with_width(1.0).with_color(GRID_COLOR);
                for (from, to) in geometry::grid_lines(item.size(), self.state.grid_size(), zoom) {
                    pane_frame.stroke(&Path::line(from, to), stroke);
                }
            }

            if let Some(hit) = hit.filter(|hit| hit.inside) {
                let rect = geometry::pixel_rect(hit.pixel, item.size(), zoom);
                pane_frame.stroke(
                    &Path::rectangle(rect.position(), rect.size()),
                    Stroke::default().with_width(1.0).with_color(HIGHLIGHT_COLOR),
                );
            }
        });

        if let Some(hit) = hit {
            if let Some(placement) = zoom_box::placement(pane, layout) {
                zoom_box::draw(
                    frame,
                    placement,
                    item,
                    frame_index,
                    hit,
                    self.state.background(),
                    &self.i18n.tr("split-view-coordinates"),
                );
            }
        }
    }
}

impl canvas::Program<Message> for SplitViewCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = self.message_for(event, bounds, cursor)?;
        Some(Action::publish(message).and_capture())
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();
        frame.fill_rectangle(Point::ORIGIN, size, self.state.background());

        let view = self.state.view();
        let layout = view.layout(size);
        let items = self.selected_items();
        let hits = self.hits(&layout, &items);

        for &pane in layout.visible_panes(items[1].is_some()) {
            if let Some(item) = items[pane.index()] {
                self.draw_pane(&mut frame, &layout, pane, item, hits[pane.index()]);
            }
        }

        if layout.is_split() {
            draw_splitter(&mut frame, layout.x_split(), size, self.state.splitter_style());
        }

        let zoom = view.zoom();
        if !zoom.is_unity() {
            frame.fill_text(Text {
                content: zoom.label(),
                position: Point::new(ZOOM_LABEL_POSITION.0, ZOOM_LABEL_POSITION.1),
                color: ZOOM_LABEL_COLOR,
                size: ZOOM_LABEL_FONT_SIZE.into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        self.state
            .view()
            .interaction(cursor.position_in(bounds), bounds.size())
    }
}

fn draw_splitter(frame: &mut Frame, x_split: f32, size: Size, style: SplitterStyle) {
    match style {
        SplitterStyle::SolidLine => {
            frame.stroke(
                &Path::line(Point::new(x_split, 0.0), Point::new(x_split, size.height)),
                Stroke::default().with_width(1.0).with_color(SPLITTER_COLOR),
            );
        }
        SplitterStyle::Handlers => {
            let handles = Path::new(|builder| {
                for (edge, tip) in [
                    (0.0, SPLITTER_HANDLE_SIZE),
                    (size.height, size.height - SPLITTER_HANDLE_SIZE),
                ] {
                    builder.move_to(Point::new(x_split - SPLITTER_HANDLE_SIZE, edge));
                    builder.line_to(Point::new(x_split, tip));
                    builder.line_to(Point::new(x_split + SPLITTER_HANDLE_SIZE, edge));
                    builder.close();
                }
            });
            frame.fill(&handles, SPLITTER_COLOR);
        }
    }
}
