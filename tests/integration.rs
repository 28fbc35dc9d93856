// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{mouse, Point, Size, Vector};
use image_rs::{Rgba, RgbaImage};
use split_lens::config::{self, Config, SplitterStyle, ViewMode, SPLITTER_CLIP_X};
use split_lens::i18n::fluent::I18n;
use split_lens::media::{DisplayItem, ImageItem, MediaPlaylist, PixelPos, Playlist};
use split_lens::ui::split_view::{Effect, Message, State};
use split_lens::ui::state::geometry::{displacement, pixel_hit, Pane};
use tempfile::tempdir;

const SIZE: Size = Size::new(800.0, 600.0);

fn press(button: mouse::Button, x: f32, y: f32) -> Message {
    Message::ButtonPressed {
        button,
        position: Point::new(x, y),
        size: SIZE,
    }
}

fn release(button: mouse::Button, x: f32, y: f32) -> Message {
    Message::ButtonReleased {
        button,
        position: Point::new(x, y),
        size: SIZE,
    }
}

fn moved(x: f32, y: f32) -> Message {
    Message::CursorMoved {
        position: Point::new(x, y),
        size: SIZE,
    }
}

fn wheel(delta_y: f32, x: f32, y: f32) -> Message {
    Message::WheelScrolled {
        delta_y,
        position: Point::new(x, y),
        size: SIZE,
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    config::save_to_path(&config, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    config.general.language = Some("fr".to_string());
    config::save_to_path(&config, &path).expect("Failed to write french config file");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("split-view-coordinates"), "Coordonnées");
}

#[test]
fn test_settings_file_drives_split_view_defaults() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(
        dir.path().join("settings.toml"),
        r##"
[display]
background_color = "#102030"
splitter_style = "handlers"

[split_view]
view_mode = "comparison"
zoom_box_enabled = true
grid_size = 12
"##,
    )
    .expect("write settings");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let state = State::new(&config, true);
    assert_eq!(state.splitter_style(), SplitterStyle::Handlers);
    assert_eq!(state.view().view_mode(), ViewMode::Comparison);
    assert!(state.zoom_box_enabled());
    assert_eq!(state.grid_size(), 12);
    assert_abs_diff_eq!(state.background().r, 16.0 / 255.0, epsilon = 1e-6);
}

#[test]
fn test_broken_settings_file_falls_back_to_defaults() {
    let dir = tempdir().expect("tempdir");
    std::fs::write(dir.path().join("settings.toml"), "[display\nbroken").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("config-load-error"));
}

#[test]
fn test_directory_becomes_sequence() {
    let dir = tempdir().expect("tempdir");
    for (name, value) in [("f10.png", 30), ("f2.png", 20), ("f1.png", 10)] {
        RgbaImage::from_pixel(3, 2, Rgba([value, 0, 0, 255]))
            .save(dir.path().join(name))
            .expect("write frame");
    }

    let item = ImageItem::open(dir.path()).expect("sequence opens");
    assert_eq!(item.frame_count(), 3);
    assert_eq!(item.size(), Size::new(3, 2));

    // natural order: f1, f2, f10
    let red = |frame| item.pixel_values(frame, PixelPos::new(0, 0)).values[0].1.clone();
    assert_eq!(red(0), "10");
    assert_eq!(red(1), "20");
    assert_eq!(red(2), "30");
}

#[test]
fn test_pixel_under_cursor_matches_item_values() {
    let mut image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
    image.put_pixel(3, 1, Rgba([200, 100, 50, 255]));
    let item = ImageItem::from_frames("dot", vec![image]).expect("valid frame");

    let mut playlist = MediaPlaylist::new();
    playlist.push(Box::new(item));
    playlist.select(Some(0), None);

    let mut state = State::default();
    let _ = state.handle(Message::SetSplitEnabled(false));
    for _ in 0..2 {
        let _ = state.handle(wheel(1.0, 400.0, 300.0));
    }
    assert_abs_diff_eq!(state.view().zoom().value(), 4.0);

    // item pixel (3, 1) spans x in [404, 408) and y in [296, 300) at zoom 4
    let cursor = Point::new(405.0, 297.0);
    let layout = state.view().layout(SIZE);
    let center = layout.center(Pane::Left, state.view().center_offset());
    let (first, _) = playlist.selected_items();
    let first = first.expect("first item selected");
    let result = pixel_hit(
        displacement(cursor, center, state.view().zoom().value()),
        first.size(),
    );

    assert_eq!(result.pixel, PixelPos::new(3, 1));
    assert!(result.inside);
    let values = first.pixel_values(0, result.pixel);
    assert_eq!(values.values[0], ("R".to_string(), "200".to_string()));
}

#[test]
fn test_wheel_zoom_round_trip_restores_view() {
    let mut state = State::default();
    let _ = state.handle(Message::SetSplitEnabled(true));
    let _ = state.handle(press(mouse::Button::Right, 100.0, 100.0));
    let _ = state.handle(release(mouse::Button::Right, 130.0, 90.0));
    let before = state.view().center_offset();

    assert_eq!(state.handle(wheel(1.0, 650.0, 420.0)), Effect::Redraw);
    assert_eq!(state.handle(wheel(-1.0, 650.0, 420.0)), Effect::Redraw);

    assert_abs_diff_eq!(state.view().zoom().value(), 1.0);
    let after = state.view().center_offset();
    assert_abs_diff_eq!(after.x, before.x, epsilon = 1e-4);
    assert_abs_diff_eq!(after.y, before.y, epsilon = 1e-4);
}

#[test]
fn test_splitter_drag_stays_within_clip_margins() {
    let mut state = State::default();
    let _ = state.handle(Message::SetSplitEnabled(true));

    assert_eq!(state.handle(press(mouse::Button::Left, 402.0, 10.0)), Effect::Redraw);
    let _ = state.handle(moved(-50.0, 10.0));
    assert_abs_diff_eq!(
        state.view().splitting_point(),
        SPLITTER_CLIP_X / SIZE.width,
        epsilon = 1e-6
    );

    let _ = state.handle(release(mouse::Button::Left, 2000.0, 10.0));
    assert_abs_diff_eq!(
        state.view().splitting_point(),
        1.0 - SPLITTER_CLIP_X / SIZE.width,
        epsilon = 1e-6
    );

    // the drag ended, further moves leave the splitter alone
    let _ = state.handle(moved(400.0, 10.0));
    assert_abs_diff_eq!(
        state.view().splitting_point(),
        1.0 - SPLITTER_CLIP_X / SIZE.width,
        epsilon = 1e-6
    );
}

#[test]
fn test_reset_restores_defaults() {
    let mut state = State::default();
    let _ = state.handle(Message::SetSplitEnabled(true));
    let _ = state.handle(press(mouse::Button::Left, 400.0, 10.0));
    let _ = state.handle(release(mouse::Button::Left, 600.0, 10.0));
    let _ = state.handle(wheel(1.0, 100.0, 100.0));
    let _ = state.handle(press(mouse::Button::Right, 0.0, 0.0));
    let _ = state.handle(release(mouse::Button::Right, 25.0, 25.0));

    assert_eq!(state.handle(Message::ResetViews), Effect::Redraw);
    assert_abs_diff_eq!(state.view().splitting_point(), 0.5);
    assert_abs_diff_eq!(state.view().zoom().value(), 1.0);
    assert_eq!(state.view().center_offset(), Vector::ZERO);
}

#[test]
fn test_reload_settings_is_delegated() {
    let mut state = State::default();
    assert_eq!(state.handle(Message::ReloadSettings), Effect::ReloadSettings);
}
