// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the split view overlays and the side panel.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Overlay opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//!
//! ```
//! use split_lens::ui::design_tokens::{opacity, palette};
//! use iced::Color;
//!
//! let panel_bg = Color {
//!     a: opacity::INFO_PANEL,
//!     ..palette::BLACK
//! };
//! assert!(panel_bg.a < 0.5);
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Background of the pixel info panel next to the zoom box.
    pub const INFO_PANEL: f32 = 70.0 / 255.0;
    /// Regular grid lines over the item.
    pub const GRID: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the controls side panel.
    pub const SIDE_PANEL_WIDTH: f32 = 290.0;

    pub const TOGGLER: f32 = 20.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Section headers of the side panel
    pub const TITLE_SM: f32 = 18.0;

    /// Standard body - labels, buttons
    pub const BODY: f32 = 14.0;

    /// Small body - file info values
    pub const BODY_SM: f32 = 13.0;

    /// Caption - warnings, frame readout
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::INFO_PANEL > 0.0 && opacity::INFO_PANEL < opacity::OPAQUE);
    assert!(opacity::GRID > 0.0 && opacity::GRID < opacity::OPAQUE);

    assert!(sizing::SIDE_PANEL_WIDTH > sizing::TOGGLER);

    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
    }
}
