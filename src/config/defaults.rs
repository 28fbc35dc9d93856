// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **View**: Split position, zoom factor and zoom step
//! - **Splitter**: Grab margin, clip bounds and handle size
//! - **Grid**: Regular grid spacing bounds
//! - **Zoom Box**: Magnified inset geometry
//! - **Playback**: Frame rate bounds

// ==========================================================================
// View Defaults
// ==========================================================================

/// Split position as a fraction of the widget width.
pub const DEFAULT_SPLITTING_POINT: f32 = 0.5;

/// Zoom factor restored by a view reset (1.0 = one item pixel per screen pixel).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Factor applied to the zoom by one zoom-in step (and removed by one zoom-out step).
pub const ZOOM_STEP_FACTOR: f32 = 2.0;

/// Smallest reachable zoom factor (ten zoom-out steps from 1.0).
pub const MIN_ZOOM_FACTOR: f32 = 1.0 / 1024.0;

/// Largest reachable zoom factor (ten zoom-in steps from 1.0).
pub const MAX_ZOOM_FACTOR: f32 = 1024.0;

/// Background color used when the settings file does not define one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#808080";

/// Font size of the `x<zoom>` label drawn in the top-left corner.
pub const ZOOM_LABEL_FONT_SIZE: f32 = 24.0;

/// Top-left corner of the zoom label.
pub const ZOOM_LABEL_POSITION: (f32, f32) = (10.0, 5.0);

// ==========================================================================
// Splitter Defaults
// ==========================================================================

/// Distance (in pixels) on either side of the splitter line that grabs it.
pub const SPLITTER_MARGIN: f32 = 4.0;

/// The splitter cannot be dragged closer than this to either widget edge.
pub const SPLITTER_CLIP_X: f32 = 10.0;

/// Half width and height of the triangular splitter handles.
pub const SPLITTER_HANDLE_SIZE: f32 = 10.0;

// ==========================================================================
// Grid Defaults
// ==========================================================================

/// Default spacing of the regular grid, in item pixels.
pub const DEFAULT_GRID_SIZE: u32 = 64;

/// Minimum grid spacing.
pub const MIN_GRID_SIZE: u32 = 8;

/// Maximum grid spacing.
pub const MAX_GRID_SIZE: u32 = 256;

/// Step of the grid size slider.
pub const GRID_SIZE_STEP: u32 = 8;

// ==========================================================================
// Zoom Box Defaults
// ==========================================================================

/// Magnification of the zoom box relative to item pixels.
pub const ZOOM_BOX_FACTOR: f32 = 32.0;

/// Number of item pixels visible along each side of the zoom box.
pub const ZOOM_BOX_SOURCE_PIXELS: u32 = 5;

/// Gap between the zoom box and the pane border.
pub const ZOOM_BOX_MARGIN: f32 = 11.0;

/// Inner padding of the pixel info panel.
pub const ZOOM_BOX_PADDING: f32 = 6.0;

/// Font size of the pixel info panel text.
pub const INFO_PANEL_FONT_SIZE: f32 = 13.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Default playback rate for image sequences.
pub const DEFAULT_FPS: u32 = 25;

/// Minimum playback rate.
pub const MIN_FPS: u32 = 1;

/// Maximum playback rate.
pub const MAX_FPS: u32 = 120;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // View validation
    assert!(DEFAULT_SPLITTING_POINT > 0.0 && DEFAULT_SPLITTING_POINT < 1.0);
    assert!(DEFAULT_ZOOM_FACTOR > 0.0);
    assert!(ZOOM_STEP_FACTOR > 1.0);
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MIN_ZOOM_FACTOR <= DEFAULT_ZOOM_FACTOR);
    assert!(MAX_ZOOM_FACTOR >= DEFAULT_ZOOM_FACTOR);

    // Splitter validation
    assert!(SPLITTER_MARGIN > 0.0);
    assert!(SPLITTER_CLIP_X >= 0.0);

    // Grid validation
    assert!(MIN_GRID_SIZE > 0);
    assert!(MAX_GRID_SIZE >= MIN_GRID_SIZE);
    assert!(DEFAULT_GRID_SIZE >= MIN_GRID_SIZE);
    assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
    assert!(GRID_SIZE_STEP > 0);

    // Zoom box validation
    assert!(ZOOM_BOX_FACTOR > 1.0);
    assert!(ZOOM_BOX_SOURCE_PIXELS % 2 == 1);
    assert!(ZOOM_BOX_MARGIN >= 0.0);

    // Playback validation
    assert!(MIN_FPS > 0);
    assert!(MAX_FPS >= MIN_FPS);
    assert!(DEFAULT_FPS >= MIN_FPS);
    assert!(DEFAULT_FPS <= MAX_FPS);
};
