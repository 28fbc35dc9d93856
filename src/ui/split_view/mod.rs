// SPDX-License-Identifier: MPL-2.0
//! Split view component.
//!
//! Shows one or two items from the playlist, side by side or overlaid, and
//! lets the user pan, zoom, drag the splitter and inspect pixels through the
//! zoom box. The component only owns presentation state; items and the frame
//! position are borrowed for each draw.

pub mod canvas;
pub mod zoom_box;

pub use canvas::SplitViewCanvas;

use crate::config::{Config, SplitterStyle, ViewMode, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::i18n::fluent::I18n;
use crate::media::Playlist;
use crate::playback::PlaybackController;
use crate::ui::state::{ViewState, ZoomDirection};
use iced::mouse;
use iced::widget::Canvas;
use iced::{Color, Element, Length, Point, Size};

/// Split view state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    view: ViewState,
    /// Cursor position tracked for the zoom box, relative to the widget.
    cursor: Option<Point>,
    /// Widget size seen with the last mouse event.
    size: Size,
    zoom_box_enabled: bool,
    grid_enabled: bool,
    grid_size: u32,
    background: Color,
    splitter_style: SplitterStyle,
}

/// Messages for the split view.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    ButtonPressed {
        button: mouse::Button,
        position: Point,
        size: Size,
    },
    ButtonReleased {
        button: mouse::Button,
        position: Point,
        size: Size,
    },
    CursorMoved {
        position: Point,
        size: Size,
    },
    CursorLeft,
    WheelScrolled {
        delta_y: f32,
        position: Point,
        size: Size,
    },
    SetSplitEnabled(bool),
    SetViewMode(ViewMode),
    SetGridEnabled(bool),
    SetGridSize(u32),
    SetZoomBoxEnabled(bool),
    /// Zoom in around the pan offset, without a cursor anchor.
    ZoomIn,
    ZoomOut,
    ResetViews,
    /// Re-read the display settings from the settings file.
    ReloadSettings,
}

/// Effects produced by split view changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The view must be redrawn.
    Redraw,
    /// The app should reload the settings file and call [`State::apply_settings`].
    ReloadSettings,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default(), false)
    }
}

impl State {
    /// Creates the state from the settings, with the split initially enabled or not.
    #[must_use]
    pub fn new(config: &Config, split_enabled: bool) -> Self {
        let mut state = Self {
            view: ViewState::new(split_enabled, config.view_mode()),
            cursor: None,
            size: Size::ZERO,
            zoom_box_enabled: config.zoom_box_enabled(),
            grid_enabled: config.grid_enabled(),
            grid_size: config.grid_size(),
            background: Color::BLACK,
            splitter_style: SplitterStyle::default(),
        };
        state.apply_settings(config);
        state
    }

    /// Takes over the display settings (background color and splitter style).
    pub fn apply_settings(&mut self, config: &Config) {
        self.background = config.background_color();
        self.splitter_style = config.splitter_style();
    }

    /// Handle a split view message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let changed = match msg {
            Message::ButtonPressed {
                button,
                position,
                size,
            } => {
                self.size = size;
                match button {
                    mouse::Button::Left => self.view.press_left(position, size),
                    mouse::Button::Right => self.view.press_right(position),
                    _ => false,
                }
            }
            Message::ButtonReleased {
                button,
                position,
                size,
            } => {
                self.size = size;
                match button {
                    mouse::Button::Left => self.view.release_left(position, size),
                    mouse::Button::Right => self.view.release_right(position),
                    _ => false,
                }
            }
            Message::CursorMoved { position, size } => {
                self.size = size;
                let dragged = self.view.drag_to(position, size);
                let inside = position.x >= 0.0
                    && position.y >= 0.0
                    && position.x < size.width
                    && position.y < size.height;
                let tracked = self.track_cursor(inside.then_some(position));
                dragged || tracked
            }
            Message::CursorLeft => self.track_cursor(None),
            Message::WheelScrolled {
                delta_y,
                position,
                size,
            } => {
                self.size = size;
                match ZoomDirection::from_wheel(delta_y) {
                    Some(direction) => self.view.zoom_step(direction, Some(position), size),
                    None => false,
                }
            }
            Message::SetSplitEnabled(enabled) => self.view.set_split_enabled(enabled),
            Message::SetViewMode(mode) => self.view.set_view_mode(mode),
            Message::SetGridEnabled(enabled) => replace(&mut self.grid_enabled, enabled),
            Message::SetGridSize(size) => {
                replace(&mut self.grid_size, size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE))
            }
            Message::SetZoomBoxEnabled(enabled) => replace(&mut self.zoom_box_enabled, enabled),
            Message::ZoomIn => self.view.zoom_in(None, self.size),
            Message::ZoomOut => self.view.zoom_out(None, self.size),
            Message::ResetViews => {
                self.view.reset();
                true
            }
            Message::ReloadSettings => return Effect::ReloadSettings,
        };

        if changed {
            Effect::Redraw
        } else {
            Effect::None
        }
    }

    /// Only reports a change when the tracked position differs.
    fn track_cursor(&mut self, position: Option<Point>) -> bool {
        if self.cursor == position {
            return false;
        }
        self.cursor = position;
        self.zoom_box_enabled
    }

    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    #[must_use]
    pub fn zoom_box_enabled(&self) -> bool {
        self.zoom_box_enabled
    }

    #[must_use]
    pub fn grid_enabled(&self) -> bool {
        self.grid_enabled
    }

    #[must_use]
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    #[must_use]
    pub fn background(&self) -> Color {
        self.background
    }

    #[must_use]
    pub fn splitter_style(&self) -> SplitterStyle {
        self.splitter_style
    }
}

/// Sets `slot` and returns whether the value changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

/// Builds the split view canvas filling the available space.
pub fn view<'a>(
    state: &'a State,
    playlist: &'a dyn Playlist,
    playback: &'a dyn PlaybackController,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    Canvas::new(SplitViewCanvas {
        state,
        playlist,
        playback,
        i18n,
    })
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
