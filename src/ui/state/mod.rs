// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure presentation state of the split view, kept apart from rendering so
//! it can be unit tested without a renderer.

pub mod drag;
pub mod geometry;
pub mod view;
pub mod zoom;

// Re-export commonly used types for convenience
pub use drag::DragState;
pub use geometry::{Pane, PaneLayout, PixelHit};
pub use view::ViewState;
pub use zoom::{ZoomDirection, ZoomFactor};
