//! Theme definitions for Canopy widgets.

use canopy_core::ThemeVariant;
use gpui::{hsla, Global, Hsla, WindowAppearance};

/// Color palette for UI rendering.
///
/// All colors use GPUI's `Hsla` type (Hue, Saturation, Lightness, Alpha).
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Window background color.
    pub background: Hsla,
    /// Panel/card background.
    pub surface: Hsla,
    /// Elevated panel background (popups, menus).
    pub elevated_surface: Hsla,
    /// Primary text color.
    pub text: Hsla,
    /// Secondary/dimmed text.
    pub text_muted: Hsla,
    /// Element border color.
    pub border: Hsla,
    /// Subtle border variant.
    pub border_variant: Hsla,
    /// Primary accent color.
    pub accent: Hsla,
    /// Hovered interactive element background.
    pub element_hover: Hsla,
    /// Pressed/active interactive element background.
    pub element_active: Hsla,
}

impl ThemeColors {
    /// Create the dark theme color palette.
    ///
    /// Based on Catppuccin Mocha palette.
    pub fn dark() -> Self {
        Self {
            // #1e1e2e - Mocha Base
            background: hsla(240.0 / 360.0, 0.21, 0.15, 1.0),
            // #313244 - Mocha Surface0
            surface: hsla(237.0 / 360.0, 0.16, 0.23, 1.0),
            // #45475a - Mocha Surface1
            elevated_surface: hsla(233.0 / 360.0, 0.13, 0.31, 1.0),
            // #cdd6f4 - Mocha Text
            text: hsla(226.0 / 360.0, 0.64, 0.88, 1.0),
            // #a6adc8 - Mocha Subtext0
            text_muted: hsla(228.0 / 360.0, 0.24, 0.72, 1.0),
            // #45475a - Mocha Surface1
            border: hsla(233.0 / 360.0, 0.13, 0.31, 1.0),
            // #313244 - Mocha Surface0
            border_variant: hsla(237.0 / 360.0, 0.16, 0.23, 1.0),
            // #89b4fa - Mocha Blue
            accent: hsla(217.0 / 360.0, 0.92, 0.76, 1.0),
            // #585b70 - Mocha Surface2
            element_hover: hsla(233.0 / 360.0, 0.12, 0.39, 1.0),
            // #6c7086 - Mocha Overlay0
            element_active: hsla(231.0 / 360.0, 0.11, 0.47, 1.0),
        }
    }

    /// Create the light theme color palette.
    ///
    /// Based on Catppuccin Latte palette.
    pub fn light() -> Self {
        Self {
            // #eff1f5 - Latte Base
            background: hsla(220.0 / 360.0, 0.23, 0.95, 1.0),
            // #e6e9ef - Latte Mantle
            surface: hsla(220.0 / 360.0, 0.21, 0.92, 1.0),
            // #dce0e8 - Latte Crust
            elevated_surface: hsla(220.0 / 360.0, 0.22, 0.90, 1.0),
            // #4c4f69 - Latte Text
            text: hsla(234.0 / 360.0, 0.16, 0.35, 1.0),
            // #6c6f85 - Latte Subtext0
            text_muted: hsla(233.0 / 360.0, 0.10, 0.47, 1.0),
            // #dce0e8 - Latte Crust
            border: hsla(220.0 / 360.0, 0.22, 0.90, 1.0),
            // #e6e9ef - Latte Mantle
            border_variant: hsla(220.0 / 360.0, 0.21, 0.92, 1.0),
            // #1e66f5 - Latte Blue
            accent: hsla(220.0 / 360.0, 0.91, 0.54, 1.0),
            // #ccd0da - Latte Surface0
            element_hover: hsla(223.0 / 360.0, 0.16, 0.83, 1.0),
            // #bcc0cc - Latte Surface1
            element_active: hsla(225.0 / 360.0, 0.14, 0.77, 1.0),
        }
    }
}

/// Theme configuration for widget styling.
#[derive(Debug, Clone)]
pub struct CanopyTheme {
    /// Theme identifier.
    pub name: String,
    /// GPUI appearance (Light/Dark).
    pub appearance: WindowAppearance,
    /// Color palette.
    pub colors: ThemeColors,
}

impl CanopyTheme {
    /// Create a new dark theme.
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            appearance: WindowAppearance::Dark,
            colors: ThemeColors::dark(),
        }
    }

    /// Create a new light theme.
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            appearance: WindowAppearance::Light,
            colors: ThemeColors::light(),
        }
    }

    /// Resolve a theme from a configuration variant.
    pub fn from_variant(variant: ThemeVariant) -> Self {
        match variant {
            ThemeVariant::Dark => Self::dark(),
            ThemeVariant::Light => Self::light(),
        }
    }
}

impl Default for CanopyTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Global for CanopyTheme {}
