// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`split_view`] - Canvas showing one or two items with zoom box and grid
//! - [`controls`] - Side panel with split, zoom and playback controls
//! - [`file_info`] - Label grid describing the first selected item
//! - [`state`] - Geometry, zoom and drag state behind the split view
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod controls;
pub mod design_tokens;
pub mod file_info;
pub mod split_view;
pub mod state;
