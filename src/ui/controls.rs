// SPDX-License-Identifier: MPL-2.0
//! Side panel controls: split view toggles, zoom buttons, item selection and
//! sequence playback.

use crate::config::{ViewMode, GRID_SIZE_STEP, MAX_GRID_SIZE, MIN_GRID_SIZE};
use crate::i18n::fluent::I18n;
use crate::media::MediaPlaylist;
use crate::playback::{Playback, PlaybackController};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::split_view;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, slider, toggler, Column, Row, Space, Text},
    Element, Length,
};
use std::fmt;

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub split_view: &'a split_view::State,
    pub playlist: &'a MediaPlaylist,
    pub playback: &'a Playback,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SplitView(split_view::Message),
    /// `None` clears a selection. The first picker offers no empty entry.
    SelectFirst(Option<usize>),
    SelectSecond(Option<usize>),
    TogglePlay,
    StepForward,
    StepBackward,
}

/// Localized entry of the view mode pick list.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModeChoice {
    pub mode: ViewMode,
    label: String,
}

impl fmt::Display for ViewModeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Entry of an item pick list. `index` is `None` for the "no item" entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChoice {
    pub index: Option<usize>,
    label: String,
}

impl fmt::Display for ItemChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[must_use]
pub fn view_mode_choices(i18n: &I18n) -> Vec<ViewModeChoice> {
    ViewMode::ALL
        .iter()
        .map(|&mode| ViewModeChoice {
            mode,
            label: i18n.tr(match mode {
                ViewMode::SideBySide => "controls-view-mode-side-by-side",
                ViewMode::Comparison => "controls-view-mode-comparison",
            }),
        })
        .collect()
}

/// Item entries in playlist order, optionally preceded by a "none" entry.
#[must_use]
pub fn item_choices(i18n: &I18n, playlist: &MediaPlaylist, with_none: bool) -> Vec<ItemChoice> {
    let none = with_none.then(|| ItemChoice {
        index: None,
        label: i18n.tr("controls-item-none"),
    });
    none.into_iter()
        .chain(
            playlist
                .names()
                .into_iter()
                .enumerate()
                .map(|(index, label)| ItemChoice {
                    index: Some(index),
                    label,
                }),
        )
        .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::SIDE_PANEL_WIDTH))
        .push(selection_section(&ctx))
        .push(split_view_section(&ctx))
        .push(zoom_section(&ctx))
        .push(playback_section(&ctx))
        .into()
}

fn section<'a>(title: String, content: Column<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}

fn toggle_row<'a>(
    label: String,
    is_on: bool,
    on_toggle: impl Fn(bool) -> Message + 'a,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(label).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(toggler(is_on).on_toggle(on_toggle).size(sizing::TOGGLER))
        .into()
}

fn selection_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let [first, second] = ctx.playlist.selection();
    let first_choices = item_choices(ctx.i18n, ctx.playlist, false);
    let second_choices = item_choices(ctx.i18n, ctx.playlist, true);

    let selected_first = first_choices
        .iter()
        .find(|choice| choice.index.is_some() && choice.index == first)
        .cloned();
    let selected_second = second_choices
        .iter()
        .find(|choice| choice.index == second)
        .cloned();

    let first_picker = pick_list(first_choices, selected_first, select_first).width(Length::Fill);
    let second_picker =
        pick_list(second_choices, selected_second, select_second).width(Length::Fill);

    section(
        ctx.i18n.tr("controls-section-items"),
        Column::new()
            .spacing(spacing::XS)
            .push(Text::new(ctx.i18n.tr("controls-item-first")).size(typography::BODY))
            .push(first_picker)
            .push(Text::new(ctx.i18n.tr("controls-item-second")).size(typography::BODY))
            .push(second_picker),
    )
}

fn select_first(choice: ItemChoice) -> Message {
    Message::SelectFirst(choice.index)
}

fn select_second(choice: ItemChoice) -> Message {
    Message::SelectSecond(choice.index)
}

fn split_view_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.split_view;
    let view = state.view();

    let mode_choices = view_mode_choices(ctx.i18n);
    let selected_mode = mode_choices
        .iter()
        .find(|choice| choice.mode == view.view_mode())
        .cloned();
    let mode_picker = pick_list(mode_choices, selected_mode, |choice: ViewModeChoice| {
        Message::SplitView(split_view::Message::SetViewMode(choice.mode))
    })
    .width(Length::Fill);

    let grid_size = state.grid_size();
    let grid_slider = slider(MIN_GRID_SIZE..=MAX_GRID_SIZE, grid_size, |size| {
        Message::SplitView(split_view::Message::SetGridSize(size))
    })
    .step(GRID_SIZE_STEP);

    let content = Column::new()
        .spacing(spacing::XS)
        .push(toggle_row(
            ctx.i18n.tr("controls-split-enabled"),
            view.is_split_enabled(),
            |enabled| Message::SplitView(split_view::Message::SetSplitEnabled(enabled)),
        ))
        .push(mode_picker)
        .push(toggle_row(
            ctx.i18n.tr("controls-grid-enabled"),
            state.grid_enabled(),
            |enabled| Message::SplitView(split_view::Message::SetGridEnabled(enabled)),
        ))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .align_y(Vertical::Center)
                .push(
                    Text::new(ctx.i18n.tr_with_args(
                        "controls-grid-size",
                        &[("size", i64::from(grid_size))],
                    ))
                    .size(typography::BODY),
                )
                .push(grid_slider),
        )
        .push(toggle_row(
            ctx.i18n.tr("controls-zoom-box-enabled"),
            state.zoom_box_enabled(),
            |enabled| Message::SplitView(split_view::Message::SetZoomBoxEnabled(enabled)),
        ));

    section(ctx.i18n.tr("controls-section-split-view"), content)
}

fn zoom_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let zoom_button = |key: &str, message: split_view::Message| {
        button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .on_press(Message::SplitView(message))
            .padding([6, 12])
    };

    let buttons = Row::new()
        .spacing(spacing::XS)
        .push(zoom_button("controls-zoom-out", split_view::Message::ZoomOut))
        .push(zoom_button("controls-zoom-reset", split_view::Message::ResetViews))
        .push(zoom_button("controls-zoom-in", split_view::Message::ZoomIn));

    let reload = button(Text::new(ctx.i18n.tr("controls-reload-settings")).size(typography::BODY))
        .on_press(Message::SplitView(split_view::Message::ReloadSettings))
        .padding([6, 12]);

    section(
        ctx.i18n.tr("controls-section-view"),
        Column::new().spacing(spacing::XS).push(buttons).push(reload),
    )
}

fn playback_section<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let playback = ctx.playback;
    let enabled = playback.is_sequence();
    let play_key = if playback.is_playing() {
        "controls-pause"
    } else {
        "controls-play"
    };

    let playback_button = |label: String, message: Message| {
        button(Text::new(label).size(typography::BODY))
            .on_press_maybe(enabled.then_some(message))
            .padding([6, 12])
    };

    let frame_readout = Text::new(ctx.i18n.tr_with_args(
        "playback-frame",
        &[
            ("current", playback.current_frame() as i64 + 1),
            ("total", playback.frame_count() as i64),
        ],
    ))
    .size(typography::CAPTION);

    section(
        ctx.i18n.tr("controls-section-playback"),
        Column::new()
            .spacing(spacing::XS)
            .push(
                Row::new()
                    .spacing(spacing::XS)
                    .push(playback_button(
                        ctx.i18n.tr("controls-step-backward"),
                        Message::StepBackward,
                    ))
                    .push(playback_button(ctx.i18n.tr(play_key), Message::TogglePlay))
                    .push(playback_button(
                        ctx.i18n.tr("controls-step-forward"),
                        Message::StepForward,
                    )),
            )
            .push(frame_readout),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageItem;
    use image_rs::RgbaImage;

    fn playlist() -> MediaPlaylist {
        let mut playlist = MediaPlaylist::new();
        for name in ["left.png", "right.png"] {
            let item = ImageItem::from_frames(name, vec![RgbaImage::new(2, 2)]).unwrap();
            playlist.push(Box::new(item));
        }
        playlist.select(Some(0), Some(1));
        playlist
    }

    #[test]
    fn item_choices_follow_playlist_order() {
        let i18n = I18n::default();
        let choices = item_choices(&i18n, &playlist(), true);

        assert_eq!(choices.len(), 3);
        assert_eq!(choices[0].index, None);
        assert_eq!(choices[2].index, Some(1));
        assert_eq!(choices[2].to_string(), "right.png");
    }

    #[test]
    fn first_picker_always_selects_an_item() {
        let i18n = I18n::default();
        let messages: Vec<Message> = item_choices(&i18n, &playlist(), false)
            .into_iter()
            .map(select_first)
            .collect();
        assert_eq!(
            messages,
            vec![Message::SelectFirst(Some(0)), Message::SelectFirst(Some(1))]
        );

        let cleared = item_choices(&i18n, &playlist(), true).remove(0);
        assert_eq!(select_second(cleared), Message::SelectSecond(None));
    }

    #[test]
    fn view_mode_choices_cover_all_modes_in_index_order() {
        let i18n = I18n::default();
        let choices = view_mode_choices(&i18n);
        let modes: Vec<ViewMode> = choices.iter().map(|choice| choice.mode).collect();
        assert_eq!(modes, ViewMode::ALL.to_vec());
        assert_eq!(ViewMode::from_index(1), Some(choices[1].mode));
    }

    #[test]
    fn controls_view_renders() {
        let i18n = I18n::default();
        let split_view = split_view::State::default();
        let playlist = playlist();
        let playback = Playback::new(playlist.max_frame_count(), 25);

        let _element = view(ViewContext {
            i18n: &i18n,
            split_view: &split_view,
            playlist: &playlist,
            playback: &playback,
        });
    }
}
