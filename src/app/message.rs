// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::MediaPlaylist;
use crate::ui::{controls, split_view};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    SplitView(split_view::Message),
    Controls(controls::Message),
    /// Playback timer fired.
    Tick(Instant),
    Shortcut(Shortcut),
}

/// Keyboard shortcuts handled when no widget captured the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    ZoomIn,
    ZoomOut,
    ResetViews,
    ToggleSplit,
    ToggleZoomBox,
    ToggleGrid,
    TogglePlay,
    StepForward,
    StepBackward,
}

/// An input that could not be opened at startup.
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub path: PathBuf,
    pub error: Error,
}

/// Runtime flags passed from `main`, with the inputs already decoded.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form.
    pub lang: Option<String>,
    /// Items opened from the command line, the first two selected.
    pub playlist: MediaPlaylist,
    pub load_failures: Vec<LoadFailure>,
}
