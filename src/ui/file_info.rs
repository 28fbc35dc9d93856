// SPDX-License-Identifier: MPL-2.0
//! File info panel: a titled two-column grid of `(label, value)` pairs
//! describing the first selected item.

use crate::i18n::fluent::I18n;
use crate::media::{DisplayItem, InfoItem};
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::text::Wrapping;
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    /// `None` shows the generic "File Info" heading.
    title: Option<String>,
    entries: Vec<InfoItem>,
}

#[derive(Clone)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Replaces the heading and all rows.
    pub fn set_file_info(&mut self, title: impl Into<String>, entries: Vec<InfoItem>) {
        self.title = Some(title.into());
        self.entries = entries;
    }

    /// Shows the generic heading and no rows.
    pub fn clear(&mut self) {
        self.title = None;
        self.entries.clear();
    }

    /// Shows the info of `first`, or clears the panel when nothing is selected.
    /// The second selection is not shown.
    pub fn on_selection_changed(
        &mut self,
        first: Option<&dyn DisplayItem>,
        _second: Option<&dyn DisplayItem>,
    ) {
        match first {
            Some(item) => self.set_file_info(item.info_title(), item.info_list()),
            None => self.clear(),
        }
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn entries(&self) -> &[InfoItem] {
        &self.entries
    }
}

pub fn view<'a, Message: 'a>(ctx: ViewContext<'_>, state: &'a State) -> Element<'a, Message> {
    let title = state
        .title
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("file-info-title"));

    let rows = state.entries.iter().fold(
        Column::new().spacing(spacing::XXS),
        |rows, (label, value)| {
            rows.push(
                Row::new()
                    .spacing(spacing::SM)
                    .push(
                        Text::new(label.as_str())
                            .size(typography::BODY_SM)
                            .width(Length::Shrink),
                    )
                    .push(
                        Text::new(value.as_str())
                            .size(typography::BODY_SM)
                            .width(Length::Fill)
                            .wrapping(Wrapping::Word),
                    ),
            )
        },
    );

    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(rows)
        .into()
}
