// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the ten-foot (TV) interface.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Border**: Border width scale
//! - **Radius**: Border radii
//!
//! Tokens are designed to be consistent; keep the scale ratios intact when
//! modifying them and run the validation tests.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale, biased dark for living-room viewing
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_950: Color = Color::from_rgb(0.055, 0.063, 0.078);
    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.10, 0.125);
    pub const GRAY_800: Color = Color::from_rgb(0.13, 0.145, 0.18);
    pub const GRAY_700: Color = Color::from_rgb(0.19, 0.21, 0.25);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.58, 0.63);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.80, 0.84);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.93, 0.95);

    // Brand colors (violet scale)
    pub const ACCENT_200: Color = Color::from_rgb(0.80, 0.74, 0.98);
    pub const ACCENT_400: Color = Color::from_rgb(0.62, 0.52, 0.96);
    pub const ACCENT_500: Color = Color::from_rgb(0.52, 0.40, 0.92);
    pub const ACCENT_600: Color = Color::from_rgb(0.42, 0.30, 0.80);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Highlight fill behind selected/focused sidebar rows.
    pub const ROW_HIGHLIGHT: f32 = 0.16;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the settings category sidebar.
    pub const SIDEBAR_WIDTH: f32 = 300.0;

    /// Category glyph size inside sidebar rows.
    pub const ROW_GLYPH: f32 = 24.0;

    /// Vertical padding inside a sidebar row.
    pub const ROW_PADDING_Y: f32 = 14.0;

    /// Horizontal padding inside a sidebar row.
    pub const ROW_PADDING_X: f32 = 16.0;

    /// Toggler size used across settings views.
    pub const TOGGLER: f32 = 22.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - screen headings ("Settings", "Plugin Manager")
    pub const TITLE_LG: f32 = 34.0;

    /// Small title - content panel section headers
    pub const TITLE_SM: f32 = 22.0;

    /// Large body - sidebar row labels, setting names
    pub const BODY_LG: f32 = 18.0;

    /// Standard body - descriptions, helper text
    pub const BODY: f32 = 15.0;

    /// Caption - version strings, plugin metadata
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - focus ring around the focused row
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 16.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::ROW_HIGHLIGHT > 0.0 && opacity::ROW_HIGHLIGHT < 1.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Color validation
    assert!(palette::ACCENT_500.r >= 0.0 && palette::ACCENT_500.r <= 1.0);
};
