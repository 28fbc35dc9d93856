// SPDX-License-Identifier: MPL-2.0
//! Frame position and play/pause state for image sequences.

use crate::config::{DEFAULT_FPS, MAX_FPS, MIN_FPS};
use std::time::Duration;

/// Source of the frame index the split view draws.
pub trait PlaybackController {
    fn current_frame(&self) -> usize;
}

/// Loops through `frame_count` frames at `fps` while playing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Playback {
    current_frame: usize,
    frame_count: usize,
    playing: bool,
    fps: u32,
}

impl Default for Playback {
    fn default() -> Self {
        Self::new(1, DEFAULT_FPS)
    }
}

impl Playback {
    #[must_use]
    pub fn new(frame_count: usize, fps: u32) -> Self {
        Self {
            current_frame: 0,
            frame_count: frame_count.max(1),
            playing: false,
            fps: fps.clamp(MIN_FPS, MAX_FPS),
        }
    }

    #[must_use]
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether there is more than one frame to step through.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        self.frame_count > 1
    }

    /// Interval between two ticks while playing.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    /// Changes the number of frames (e.g. after the selection changed),
    /// keeping the position when it is still valid.
    pub fn set_frame_count(&mut self, frame_count: usize) {
        self.frame_count = frame_count.max(1);
        if self.current_frame >= self.frame_count {
            self.current_frame = 0;
        }
        if !self.is_sequence() {
            self.playing = false;
        }
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(MIN_FPS, MAX_FPS);
    }

    /// Starts or stops playback. Single frames never play.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing && self.is_sequence();
        log::debug!("playback {}", if self.playing { "started" } else { "paused" });
    }

    pub fn step_forward(&mut self) {
        self.current_frame = (self.current_frame + 1) % self.frame_count;
    }

    pub fn step_backward(&mut self) {
        self.current_frame = (self.current_frame + self.frame_count - 1) % self.frame_count;
    }

    /// Jumps to `frame`, clamped to the last frame.
    pub fn seek(&mut self, frame: usize) {
        self.current_frame = frame.min(self.frame_count - 1);
    }

    /// Advances one frame while playing. Returns whether the frame changed.
    pub fn tick(&mut self) -> bool {
        if !self.playing || !self.is_sequence() {
            return false;
        }
        self.step_forward();
        true
    }
}

impl PlaybackController for Playback {
    fn current_frame(&self) -> usize {
        self.current_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_playback_starts_paused_at_first_frame() {
        let playback = Playback::new(10, 25);
        assert_eq!(playback.current_frame(), 0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn zero_frames_are_treated_as_one() {
        let playback = Playback::new(0, 25);
        assert_eq!(playback.frame_count(), 1);
        assert!(!playback.is_sequence());
    }

    #[test]
    fn single_frame_never_plays() {
        let mut playback = Playback::new(1, 25);
        playback.toggle_play();
        assert!(!playback.is_playing());
        assert!(!playback.tick());
    }

    #[test]
    fn stepping_wraps_in_both_directions() {
        let mut playback = Playback::new(3, 25);
        playback.step_backward();
        assert_eq!(playback.current_frame(), 2);
        playback.step_forward();
        assert_eq!(playback.current_frame(), 0);
    }

    #[test]
    fn tick_advances_only_while_playing() {
        let mut playback = Playback::new(3, 25);
        assert!(!playback.tick());

        playback.toggle_play();
        assert!(playback.tick());
        assert!(playback.tick());
        assert!(playback.tick());
        assert_eq!(playback.current_frame(), 0);
    }

    #[test]
    fn seek_clamps_to_last_frame() {
        let mut playback = Playback::new(4, 25);
        playback.seek(99);
        assert_eq!(playback.current_frame(), 3);
    }

    #[test]
    fn shrinking_frame_count_resets_position_and_stops() {
        let mut playback = Playback::new(5, 25);
        playback.seek(4);
        playback.toggle_play();

        playback.set_frame_count(1);
        assert_eq!(playback.current_frame(), 0);
        assert!(!playback.is_playing());
    }

    #[test]
    fn fps_is_clamped_and_sets_interval() {
        let playback = Playback::new(2, 0);
        assert_eq!(playback.frame_interval(), Duration::from_secs(1));
    }
}
