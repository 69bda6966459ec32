// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (VVS monochrome branding)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Monochrome brand scale. The site lives almost entirely in this column:
    // near-black surfaces with porcelain text, grayscale imagery.
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Deepest surface: gallery backdrop and footer (#0A0A0A).
    pub const INK: Color = Color::from_rgb(0.039, 0.039, 0.039);
    /// Primary page surface (#121212).
    pub const CHARCOAL: Color = Color::from_rgb(0.071, 0.071, 0.071);
    /// Alternate section surface (#1A1A1A).
    pub const SLATE: Color = Color::from_rgb(0.102, 0.102, 0.102);
    /// Card surface (#161616).
    pub const CARD: Color = Color::from_rgb(0.086, 0.086, 0.086);

    /// Foreground brand tone (#F5F5F5). Also the light section surface.
    pub const PORCELAIN: Color = Color::from_rgb(0.961, 0.961, 0.961);

    pub const GRAY_900: Color = Color::from_rgb(0.09, 0.09, 0.09);
    pub const GRAY_800: Color = Color::from_rgb(0.149, 0.149, 0.149);
    pub const GRAY_700: Color = Color::from_rgb(0.251, 0.251, 0.251);
    pub const GRAY_600: Color = Color::from_rgb(0.322, 0.322, 0.322);
    pub const GRAY_500: Color = Color::from_rgb(0.451, 0.451, 0.451);
    pub const GRAY_400: Color = Color::from_rgb(0.639, 0.639, 0.639);
    pub const GRAY_300: Color = Color::from_rgb(0.831, 0.831, 0.831);

    // Semantic colors (toasts only; the brand itself is monochrome)
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Condensed navbar background once the page has scrolled.
    pub const NAVBAR: f32 = 0.92;
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
    pub const SECTION: f32 = 96.0; // 12 units, vertical rhythm between sections
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Interactive element heights
    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const INPUT_HEIGHT: f32 = 40.0;

    // Layout
    pub const CONTENT_MAX_WIDTH: f32 = 1180.0;
    pub const NAVBAR_HEIGHT: f32 = 72.0;

    // Imagery
    pub const ALBUM_COVER_HEIGHT: f32 = 420.0;
    pub const PORTRAIT_HEIGHT: f32 = 520.0;
    /// Base row height of the gallery mosaic; tall tiles span two rows.
    pub const GALLERY_ROW_HEIGHT: f32 = 220.0;

    // Components
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the marketing layout.
    //!
    //! The display sizes are far larger than a utility app would use; the
    //! hero headline is the page's main visual.

    /// Hero headline.
    pub const DISPLAY: f32 = 88.0;

    /// Section headline (Contact, gallery-less hero on small windows).
    pub const TITLE_XL: f32 = 44.0;

    /// Large title - section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - card titles, brand wordmark.
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - stat values, subsection headers.
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - intro paragraphs.
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - most UI text.
    pub const BODY: f32 = 14.0;

    /// Caption - badges, labels.
    pub const CAPTION: f32 = 12.0;

    /// Fine print - kickers, specs lines, capture notes.
    pub const CAPTION_SM: f32 = 10.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Thin border - separators, cards, input underlines.
    pub const WIDTH_SM: f32 = 1.0;

    /// Medium border - emphasis borders, toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill/circle shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::SECTION > spacing::XXL);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::NAVBAR > 0.0 && opacity::NAVBAR < 1.0);

    // Sizing validation
    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::ICON_LG > sizing::ICON_MD);

    // Typography validation
    assert!(typography::DISPLAY > typography::TITLE_XL);
    assert!(typography::TITLE_XL > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::CAPTION > typography::CAPTION_SM);

    // Border validation
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    // Surfaces must stay darker than the foreground
    assert!(palette::CHARCOAL.r < palette::PORCELAIN.r);
    assert!(palette::INK.r < palette::CHARCOAL.r);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn surface_ordering_matches_branding() {
        // footer < page < alternate section < foreground
        assert!(palette::INK.r < palette::CHARCOAL.r);
        assert!(palette::CHARCOAL.r < palette::SLATE.r);
        assert!(palette::SLATE.r < palette::PORCELAIN.r);
    }
}
