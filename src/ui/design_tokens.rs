// SPDX-License-Identifier: MPL-2.0
#![doc = r##"
# Design Tokens

Visual constants for the toast stack, expressed as CSS-ready values.

## Organization

- **Palette**: Severity accent colors
- **Opacity**: Toast surface and shadow alpha levels
- **Spacing**: Gaps and offsets (px)
- **Sizing**: Toast widths (px)
- **Radius**: Corner radii (px)
- **Motion**: Slide-in and slide-out timing

## Examples

```
use stockpro_ui::ui::design_tokens::{opacity, palette};

assert_eq!(palette::SUCCESS_500.hex(), "#10b981");
assert_eq!(
    palette::SUCCESS_500.rgba(opacity::SHADOW),
    "rgba(16, 185, 129, 0.3)"
);
```
"##]

use std::fmt::Write as _;

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#rrggbb` notation.
    #[must_use]
    pub fn hex(self) -> String {
        let mut out = String::with_capacity(7);
        let _ = write!(out, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b);
        out
    }

    /// `rgba(r, g, b, a)` notation.
    #[must_use]
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Rgb;

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    // Semantic colors (500 = accent, 600 = gradient end)
    pub const SUCCESS_500: Rgb = Rgb::new(16, 185, 129);
    pub const SUCCESS_600: Rgb = Rgb::new(5, 150, 105);
    pub const ERROR_500: Rgb = Rgb::new(239, 68, 68);
    pub const ERROR_600: Rgb = Rgb::new(220, 38, 38);
    pub const WARNING_500: Rgb = Rgb::new(245, 158, 11);
    pub const WARNING_600: Rgb = Rgb::new(217, 119, 6);
    pub const INFO_500: Rgb = Rgb::new(59, 130, 246);
    pub const INFO_600: Rgb = Rgb::new(37, 99, 235);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Toast background gradient stops.
    pub const SURFACE: f32 = 0.95;

    /// Colored drop shadow under a toast.
    pub const SHADOW: f32 = 0.3;

    /// Dismiss button at rest.
    pub const DISMISS_IDLE: f32 = 0.6;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    /// Gap between stacked toasts.
    pub const STACK_GAP: u32 = 12;

    /// Distance of the stack from the top of the viewport (below the navbar).
    pub const STACK_TOP: u32 = 80;

    /// Distance of the stack from the right edge of the viewport.
    pub const STACK_RIGHT: u32 = 20;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const TOAST_MIN_WIDTH: u32 = 320;
    pub const TOAST_MAX_WIDTH: u32 = 400;
    pub const ACCENT_BORDER: u32 = 4;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const TOAST: u32 = 12;
    pub const BUTTON: u32 = 6;
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Shared easing curve for toast transitions.
    pub const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

    pub const SLIDE_IN: &str = "slideInRight";
    pub const SLIDE_OUT: &str = "slideOutRight";
}

/// Stacking order of the toast container above page content.
pub const TOAST_LAYER: u32 = 10001;

const _: () = {
    assert!(sizing::TOAST_MAX_WIDTH > sizing::TOAST_MIN_WIDTH);
    assert!(radius::TOAST > radius::BUTTON);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_and_padded() {
        assert_eq!(Rgb::new(5, 150, 105).hex(), "#059669");
        assert_eq!(palette::WHITE.hex(), "#ffffff");
    }

    #[test]
    fn rgba_includes_alpha() {
        assert_eq!(
            palette::INFO_500.rgba(opacity::SURFACE),
            "rgba(59, 130, 246, 0.95)"
        );
    }
}
