// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the split view, the
//! controls side panel and the file info panel.
//!
//! The `App` struct wires together the domains (playlist, playback, split
//! view presentation state) and translates messages into state changes.
//! Rendering lives in [`view`], timers and shortcuts in [`subscription`].

mod message;
pub mod subscription;
mod update;
mod view;

pub use message::{Flags, LoadFailure, Message, Shortcut};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{ImageItem, MediaPlaylist, Playlist};
use crate::playback::Playback;
use crate::ui::{file_info, split_view};
use iced::{window, Element, Subscription, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    i18n: I18n,
    playlist: MediaPlaylist,
    playback: Playback,
    split_view: split_view::State,
    file_info: file_info::State,
    /// Localized warnings shown under the side panel.
    notices: Vec<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Opens every input in order. Failures are logged and returned so the UI can
/// report them; the first two items that opened are selected.
pub fn load_inputs(paths: &[PathBuf]) -> (MediaPlaylist, Vec<LoadFailure>) {
    let mut playlist = MediaPlaylist::new();
    let mut failures = Vec::new();

    for path in paths {
        match ImageItem::open(path) {
            Ok(item) => {
                playlist.push(Box::new(item));
            }
            Err(error) => {
                log::error!("cannot open {}: {error}", path.display());
                failures.push(LoadFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    playlist.select(Some(0), Some(1));
    (playlist, failures)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure, flags are only consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::new(Flags::default()).0
    }
}

impl App {
    /// Initializes application state from the decoded inputs and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let playlist = flags.playlist;
        let [_, second] = playlist.selection();
        let split_view = split_view::State::new(&config, second.is_some());
        let playback = Playback::new(playlist.max_frame_count(), config.fps());

        let mut file_info = file_info::State::default();
        let (first_item, second_item) = playlist.selected_items();
        file_info.on_selection_changed(first_item, second_item);

        let mut notices: Vec<String> = config_warning.iter().map(|key| i18n.tr(key)).collect();
        notices.extend(flags.load_failures.iter().map(|failure| {
            format!("{}: {}", failure.path.display(), i18n.tr(failure.error.i18n_key()))
        }));

        let app = Self {
            i18n,
            playlist,
            playback,
            split_view,
            file_info,
            notices,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let names: Vec<&str> = match self.playlist.selected_items() {
            (Some(first), Some(second)) => vec![first.name(), second.name()],
            (Some(first), None) => vec![first.name()],
            _ => Vec::new(),
        };

        if names.is_empty() {
            app_name
        } else {
            format!("{} - {app_name}", names.join(" | "))
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(&self.playback),
            subscription::create_shortcut_subscription(),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            playlist: &self.playlist,
            playback: &self.playback,
            split_view: &self.split_view,
            file_info: &self.file_info,
            notices: &self.notices,
        })
    }
}
