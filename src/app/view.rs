// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The split view fills the window; the controls, file info and any
//! warnings share a scrollable side panel on the right.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::media::MediaPlaylist;
use crate::playback::Playback;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::{controls, file_info, split_view};
use iced::widget::{scrollable, Column, Container, Row, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub playlist: &'a MediaPlaylist,
    pub playback: &'a Playback,
    pub split_view: &'a split_view::State,
    pub file_info: &'a file_info::State,
    pub notices: &'a [String],
}

/// Renders the split view next to the side panel.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let split_view = split_view::view(ctx.split_view, ctx.playlist, ctx.playback, ctx.i18n)
        .map(Message::SplitView);

    Row::new()
        .push(
            Container::new(split_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(side_panel(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn side_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let controls = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        split_view: ctx.split_view,
        playlist: ctx.playlist,
        playback: ctx.playback,
    })
    .map(Message::Controls);

    let file_info = file_info::view(file_info::ViewContext { i18n: ctx.i18n }, ctx.file_info);

    let notices = ctx.notices.iter().fold(
        Column::new().spacing(spacing::XXS),
        |column, notice| {
            column.push(
                Text::new(notice.as_str())
                    .size(typography::CAPTION)
                    .color(palette::WARNING_500),
            )
        },
    );

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fixed(sizing::SIDE_PANEL_WIDTH))
        .push(controls)
        .push(file_info)
        .push(notices);

    Container::new(scrollable(content))
        .padding(spacing::MD)
        .height(Length::Fill)
        .into()
}
