// SPDX-License-Identifier: MPL-2.0
//! `split_lens` compares two images or image sequences in a split view.
//!
//! The view shows the items side by side or overlaid, with anchored zoom,
//! panning, a draggable splitter and a zoom box that reads pixel values.
//! Labels are localized with Fluent and preferences live in a TOML file.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod playback;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
