// SPDX-License-Identifier: MPL-2.0
//! Message routing for the application.
//!
//! Component messages are forwarded to their owners; effects that reach
//! beyond one component (settings reload, selection changes) are applied here.

use super::{App, Message, Shortcut};
use crate::config::{self, Config};
use crate::media::Playlist;
use crate::ui::{controls, split_view};
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SplitView(msg) => self.handle_split_view(msg),
            Message::Controls(msg) => self.handle_controls(msg),
            Message::Tick(_) => {
                self.playback.tick();
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
        }
        Task::none()
    }

    fn handle_split_view(&mut self, msg: split_view::Message) {
        match self.split_view.handle(msg) {
            split_view::Effect::None | split_view::Effect::Redraw => {}
            split_view::Effect::ReloadSettings => self.reload_settings(),
        }
    }

    fn handle_controls(&mut self, msg: controls::Message) {
        match msg {
            controls::Message::SplitView(msg) => self.handle_split_view(msg),
            controls::Message::SelectFirst(index) => {
                let [_, second] = self.playlist.selection();
                self.select(index, second);
            }
            controls::Message::SelectSecond(index) => {
                let [first, _] = self.playlist.selection();
                self.select(first, index);
            }
            controls::Message::TogglePlay => self.playback.toggle_play(),
            controls::Message::StepForward => self.playback.step_forward(),
            controls::Message::StepBackward => self.playback.step_backward(),
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) {
        let msg = match shortcut {
            Shortcut::ZoomIn => split_view::Message::ZoomIn,
            Shortcut::ZoomOut => split_view::Message::ZoomOut,
            Shortcut::ResetViews => split_view::Message::ResetViews,
            Shortcut::ToggleSplit => {
                split_view::Message::SetSplitEnabled(!self.split_view.view().is_split_enabled())
            }
            Shortcut::ToggleZoomBox => {
                split_view::Message::SetZoomBoxEnabled(!self.split_view.zoom_box_enabled())
            }
            Shortcut::ToggleGrid => {
                split_view::Message::SetGridEnabled(!self.split_view.grid_enabled())
            }
            Shortcut::TogglePlay => return self.handle_controls(controls::Message::TogglePlay),
            Shortcut::StepForward => return self.handle_controls(controls::Message::StepForward),
            Shortcut::StepBackward => {
                return self.handle_controls(controls::Message::StepBackward)
            }
        };
        self.handle_split_view(msg);
    }

    /// Changes the selection and refreshes everything derived from it.
    fn select(&mut self, first: Option<usize>, second: Option<usize>) {
        self.playlist.select(first, second);
        log::debug!("selection changed to {:?}", self.playlist.selection());

        let (first_item, second_item) = self.playlist.selected_items();
        self.file_info.on_selection_changed(first_item, second_item);
        self.playback.set_frame_count(self.playlist.max_frame_count());
    }

    /// Re-reads the settings file and applies its display and playback settings.
    fn reload_settings(&mut self) {
        let (config, warning) = config::load();
        self.apply_settings(&config, warning.as_deref());
    }

    pub(super) fn apply_settings(&mut self, config: &Config, warning: Option<&str>) {
        if let Some(key) = warning {
            let notice = self.i18n.tr(key);
            if !self.notices.contains(&notice) {
                self.notices.push(notice);
            }
        }
        self.split_view.apply_settings(config);
        self.playback.set_fps(config.fps());
        log::debug!("settings reloaded");
    }
}
