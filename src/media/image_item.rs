// SPDX-License-Identifier: MPL-2.0
//! Still images and image sequences decoded with the `image` crate.

use super::{DisplayItem, InfoItem, PixelPos, ValuePairList};
use crate::directory_scanner;
use crate::error::{ImageError, Result};
use iced::widget::canvas;
use iced::widget::image::{FilterMethod, Handle};
use iced::{Point, Rectangle, Size};
use image_rs::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

/// One decoded frame. The RGBA buffer answers pixel queries, the handle feeds the renderer.
struct Frame {
    pixels: RgbaImage,
    handle: Handle,
}

impl Frame {
    fn new(pixels: RgbaImage) -> Self {
        let handle = Handle::from_rgba(pixels.width(), pixels.height(), pixels.as_raw().clone());
        Self { pixels, handle }
    }
}

/// A named sequence of equally sized RGBA frames.
pub struct ImageItem {
    name: String,
    path: Option<PathBuf>,
    frames: Vec<Frame>,
    size: Size<u32>,
    color_type: String,
    file_size: u64,
}

impl std::fmt::Debug for ImageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageItem")
            .field("name", &self.name)
            .field("size", &self.size)
            .field("frames", &self.frames.len())
            .finish()
    }
}

impl ImageItem {
    /// Opens an image file, or a directory whose images become the frames of a sequence.
    pub fn open(path: &Path) -> Result<Self> {
        if path.is_dir() {
            Self::open_sequence(path)
        } else {
            Self::open_file(path)
        }
    }

    fn open_file(path: &Path) -> Result<Self> {
        if !directory_scanner::is_supported_image(path) {
            return Err(ImageError::UnsupportedFormat.into());
        }

        let bytes = fs::read(path)?;
        let decoded = image_rs::load_from_memory(&bytes)?;
        let color_type = format!("{:?}", decoded.color());

        let mut item = Self::from_frames(display_name(path), vec![decoded.to_rgba8()])?;
        item.path = Some(path.to_path_buf());
        item.color_type = color_type;
        item.file_size = bytes.len() as u64;
        log::debug!("loaded {} ({}x{})", path.display(), item.size.width, item.size.height);
        Ok(item)
    }

    fn open_sequence(dir: &Path) -> Result<Self> {
        let files = directory_scanner::scan_images(dir)?;

        let mut frames = Vec::with_capacity(files.len());
        let mut file_size = 0;
        let mut color_type = String::new();
        for file in &files {
            let bytes = fs::read(file)?;
            let decoded = image_rs::load_from_memory(&bytes)?;
            if color_type.is_empty() {
                color_type = format!("{:?}", decoded.color());
            }
            file_size += bytes.len() as u64;
            frames.push(decoded.to_rgba8());
        }

        let mut item = Self::from_frames(display_name(dir), frames)?;
        item.path = Some(dir.to_path_buf());
        item.color_type = color_type;
        item.file_size = file_size;
        log::debug!("loaded sequence {} with {} frames", dir.display(), item.frames.len());
        Ok(item)
    }

    /// Builds an item from already decoded frames, which must all share one size.
    pub fn from_frames(name: impl Into<String>, frames: Vec<RgbaImage>) -> Result<Self> {
        let first = frames.first().ok_or(ImageError::EmptySequence)?;
        let expected = first.dimensions();

        if let Some(mismatch) = frames.iter().find(|frame| frame.dimensions() != expected) {
            return Err(ImageError::SizeMismatch {
                expected,
                found: mismatch.dimensions(),
            }
            .into());
        }

        Ok(Self {
            name: name.into(),
            path: None,
            size: Size::new(expected.0, expected.1),
            frames: frames.into_iter().map(Frame::new).collect(),
            color_type: "Rgba8".to_string(),
            file_size: 0,
        })
    }

    fn frame(&self, frame_index: usize) -> Option<&Frame> {
        if self.frames.is_empty() {
            return None;
        }
        self.frames.get(frame_index % self.frames.len())
    }
}

impl DisplayItem for ImageItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Size<u32> {
        self.size
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn draw(&self, frame: &mut canvas::Frame, frame_index: usize, zoom: f32) {
        let Some(current) = self.frame(frame_index) else {
            return;
        };

        let width = self.size.width as f32 * zoom;
        let height = self.size.height as f32 * zoom;
        let bounds = Rectangle::new(
            Point::new(-width / 2.0, -height / 2.0),
            Size::new(width, height),
        );

        frame.draw_image(
            bounds,
            canvas::Image::new(current.handle.clone()).filter_method(FilterMethod::Nearest),
        );
    }

    fn pixel_values(&self, frame_index: usize, pixel: PixelPos) -> ValuePairList {
        let Some(current) = self.frame(frame_index) else {
            return ValuePairList::default();
        };
        if !pixel.is_inside(self.size) {
            return ValuePairList::default();
        }

        let [r, g, b, a] = current.pixels.get_pixel(pixel.x as u32, pixel.y as u32).0;
        ValuePairList {
            title: "RGBA".to_string(),
            values: [("R", r), ("G", g), ("B", b), ("A", a)]
                .into_iter()
                .map(|(label, value)| (label.to_string(), value.to_string()))
                .collect(),
        }
    }

    fn info_title(&self) -> String {
        if self.frames.len() > 1 {
            "Image Sequence Info".to_string()
        } else {
            "Image Info".to_string()
        }
    }

    fn info_list(&self) -> Vec<InfoItem> {
        let mut info = vec![("File".to_string(), self.name.clone())];
        if let Some(path) = &self.path {
            info.push(("Path".to_string(), path.display().to_string()));
        }
        info.push((
            "Resolution".to_string(),
            format!("{}x{}", self.size.width, self.size.height),
        ));
        info.push(("Frames".to_string(), self.frames.len().to_string()));
        info.push(("Color Type".to_string(), self.color_type.clone()));
        if self.file_size > 0 {
            info.push(("File Size".to_string(), format_file_size(self.file_size)));
        }
        info
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Formats a byte count with binary units, e.g. `1.5 KiB`.
fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::Rgba;
    use tempfile::tempdir;

    fn gradient(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 7, 255]))
    }

    #[test]
    fn from_frames_rejects_empty_input() {
        let result = ImageItem::from_frames("empty", Vec::new());
        assert!(matches!(result, Err(Error::Image(ImageError::EmptySequence))));
    }

    #[test]
    fn from_frames_rejects_mismatched_sizes() {
        let result = ImageItem::from_frames("mixed", vec![gradient(4, 4), gradient(2, 4)]);
        assert!(matches!(
            result,
            Err(Error::Image(ImageError::SizeMismatch {
                expected: (4, 4),
                found: (2, 4)
            }))
        ));
    }

    #[test]
    fn pixel_values_report_rgba_components() {
        let item = ImageItem::from_frames("gradient", vec![gradient(8, 6)]).unwrap();
        let values = item.pixel_values(0, PixelPos::new(3, 5));

        assert_eq!(values.title, "RGBA");
        let expected: Vec<(String, String)> = [("R", "3"), ("G", "5"), ("B", "7"), ("A", "255")]
            .iter()
            .map(|(l, v)| (l.to_string(), v.to_string()))
            .collect();
        assert_eq!(values.values, expected);
    }

    #[test]
    fn pixel_values_outside_item_are_empty() {
        let item = ImageItem::from_frames("gradient", vec![gradient(8, 6)]).unwrap();
        assert!(item.pixel_values(0, PixelPos::new(8, 0)).is_empty());
        assert!(item.pixel_values(0, PixelPos::new(-1, 0)).is_empty());
    }

    #[test]
    fn frame_index_wraps_around_sequence() {
        let first = RgbaImage::from_pixel(2, 2, Rgba([10, 0, 0, 255]));
        let second = RgbaImage::from_pixel(2, 2, Rgba([20, 0, 0, 255]));
        let item = ImageItem::from_frames("seq", vec![first, second]).unwrap();

        assert_eq!(item.frame_count(), 2);
        let red = |frame| item.pixel_values(frame, PixelPos::new(0, 0)).values[0].1.clone();
        assert_eq!(red(1), "20");
        assert_eq!(red(2), "10");
    }

    #[test]
    fn open_rejects_unsupported_extension() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.txt");
        fs::write(&path, b"hello").expect("failed to write file");

        assert!(matches!(
            ImageItem::open(&path),
            Err(Error::Image(ImageError::UnsupportedFormat))
        ));
    }

    #[test]
    fn open_decodes_png_and_fills_info() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("sample.png");
        gradient(5, 3).save(&path).expect("failed to write png");

        let item = ImageItem::open(&path).expect("png should load");
        assert_eq!(item.size(), Size::new(5, 3));
        assert_eq!(item.name(), "sample.png");
        assert_eq!(item.info_title(), "Image Info");
        assert!(item
            .info_list()
            .contains(&("Resolution".to_string(), "5x3".to_string())));
    }

    #[test]
    fn open_directory_builds_sorted_sequence() {
        let dir = tempdir().expect("failed to create temp dir");
        RgbaImage::from_pixel(2, 2, Rgba([2, 0, 0, 255]))
            .save(dir.path().join("frame10.png"))
            .unwrap();
        RgbaImage::from_pixel(2, 2, Rgba([1, 0, 0, 255]))
            .save(dir.path().join("frame2.png"))
            .unwrap();

        let item = ImageItem::open(dir.path()).expect("sequence should load");
        assert_eq!(item.frame_count(), 2);
        assert_eq!(item.info_title(), "Image Sequence Info");
        assert_eq!(item.pixel_values(0, PixelPos::new(0, 0)).values[0].1, "1");
    }

    #[test]
    fn file_size_uses_binary_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KiB");
        assert_eq!(format_file_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
