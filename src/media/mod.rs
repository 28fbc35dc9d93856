// SPDX-License-Identifier: MPL-2.0
//! Displayable media items and the playlist that selects them.
//!
//! The split view never owns pixel data. It borrows up to two
//! [`DisplayItem`]s from a [`Playlist`] for the duration of one draw.

pub mod image_item;
pub mod playlist;

pub use image_item::ImageItem;
pub use playlist::{MediaPlaylist, Playlist};

use iced::widget::canvas;
use iced::Size;

/// A `(label, value)` row of the file info panel.
pub type InfoItem = (String, String);

/// Integer pixel coordinate inside an item. May lie outside the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PixelPos {
    pub x: i32,
    pub y: i32,
}

impl PixelPos {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether the position lies in `[0, width) x [0, height)`.
    #[must_use]
    pub fn is_inside(self, size: Size<u32>) -> bool {
        let inside = |value: i32, extent: u32| value >= 0 && (value as i64) < extent as i64;
        inside(self.x, size.width) && inside(self.y, size.height)
    }
}

/// Titled list of component values for one pixel, e.g. `RGBA` with `R`, `G`, `B`, `A`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValuePairList {
    pub title: String,
    pub values: Vec<(String, String)>,
}

impl ValuePairList {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Anything the split view can draw and inspect.
pub trait DisplayItem {
    /// Short name shown in selection lists.
    fn name(&self) -> &str;

    /// Size in item pixels.
    fn size(&self) -> Size<u32>;

    /// Number of frames; still images have one.
    fn frame_count(&self) -> usize {
        1
    }

    /// Draws `frame_index` centered on the frame origin, scaled by `zoom`.
    fn draw(&self, frame: &mut canvas::Frame, frame_index: usize, zoom: f32);

    /// Component values of one pixel. Empty when `pixel` is outside the item.
    fn pixel_values(&self, frame_index: usize, pixel: PixelPos) -> ValuePairList;

    fn info_title(&self) -> String;

    fn info_list(&self) -> Vec<InfoItem>;
}
