//! The color catalog: named constants, default role colors, and the
//! two ordered sequences used to color data series.

use lazy_static::lazy_static;
use rgb::RGBA8;

/// White.
pub const WHITE: RGBA8 = RGBA8 { r: 255, g: 255, b: 255, a: 255 };

/// A soft, flat blue.
pub const BLUE: RGBA8 = RGBA8 { r: 52, g: 152, b: 219, a: 255 };

/// A teal-like cyan.
pub const CYAN: RGBA8 = RGBA8 { r: 26, g: 188, b: 156, a: 255 };

/// A fresh green.
pub const GREEN: RGBA8 = RGBA8 { r: 46, g: 204, b: 113, a: 255 };

/// A softened red.
pub const RED: RGBA8 = RGBA8 { r: 231, g: 76, b: 60, a: 255 };

/// A warm amber orange.
pub const ORANGE: RGBA8 = RGBA8 { r: 243, g: 156, b: 18, a: 255 };

/// A gold-like yellow.
pub const YELLOW: RGBA8 = RGBA8 { r: 241, g: 196, b: 15, a: 255 };

/// A deep charcoal standing in for black.
pub const BLACK: RGBA8 = RGBA8 { r: 44, g: 62, b: 80, a: 255 };

/// An off-white light gray.
pub const LIGHT_GRAY: RGBA8 = RGBA8 { r: 236, g: 240, b: 241, a: 255 };

/// A soft pastel blue.
pub const ALTERNATE_BLUE: RGBA8 = RGBA8 { r: 116, g: 185, b: 255, a: 255 };

/// A mint green.
pub const ALTERNATE_GREEN: RGBA8 = RGBA8 { r: 85, g: 239, b: 196, a: 255 };

/// A medium cool gray.
pub const ALTERNATE_GRAY: RGBA8 = RGBA8 { r: 149, g: 165, b: 166, a: 255 };

/// A peachy yellow.
pub const ALTERNATE_YELLOW: RGBA8 = RGBA8 { r: 253, g: 203, b: 110, a: 255 };

/// A warm light gray.
pub const ALTERNATE_LIGHT_GRAY: RGBA8 =
    RGBA8 { r: 223, g: 228, b: 234, a: 255 };

/// A fully transparent sentinel color (alpha zero).
pub const TRANSPARENT: RGBA8 = RGBA8 { r: 1, g: 1, b: 1, a: 0 };


// Role defaults.  Every role resolves to exactly one named constant;
// none of these change after initialization.

/// Default chart background color.
pub const DEFAULT_BACKGROUND_COLOR: RGBA8 = WHITE;
/// Default chart border color.
pub const DEFAULT_BACKGROUND_STROKE_COLOR: RGBA8 = WHITE;
/// Default plotting-area fill color.
pub const DEFAULT_CANVAS_COLOR: RGBA8 = WHITE;
/// Default plotting-area border color.
pub const DEFAULT_CANVAS_STROKE_COLOR: RGBA8 = WHITE;
/// Default label and text color.
pub const DEFAULT_TEXT_COLOR: RGBA8 = BLACK;
/// Default axis line color.
pub const DEFAULT_AXIS_COLOR: RGBA8 = BLACK;
/// Default stroke color for series lines and borders.
pub const DEFAULT_STROKE_COLOR: RGBA8 = LIGHT_GRAY;
/// Default fill color.
pub const DEFAULT_FILL_COLOR: RGBA8 = BLUE;
/// Default annotation background color.
pub const DEFAULT_ANNOTATION_FILL_COLOR: RGBA8 = WHITE;
/// Default grid line color.
pub const DEFAULT_GRID_LINE_COLOR: RGBA8 = LIGHT_GRAY;

lazy_static! {
    /// The default series sequence: ordered colors assigned to
    /// successive data series.
    pub static ref DEFAULT_SERIES_COLORS: Vec<RGBA8> =
        vec![BLUE, GREEN, RED, CYAN, ORANGE];

    /// The alternate series sequence.  Its first four entries are
    /// pastel hues; the remaining five repeat the default sequence, so
    /// charts with many series fall back to the standard colors after
    /// the pastels are used up.
    pub static ref ALTERNATE_SERIES_COLORS: Vec<RGBA8> =
        vec![ALTERNATE_BLUE, ALTERNATE_GREEN, ALTERNATE_GRAY,
             ALTERNATE_YELLOW, BLUE, GREEN, RED, CYAN, ORANGE];
}

/// Returns the color for the series at ordinal `index` from the
/// default sequence.
///
/// The index wraps around: `index % len` selects the entry, so every
/// `usize` maps to a color and series 5 reuses the color of series 0.
///
/// # Example
///
/// ```
/// use chart_palette::colors;
/// assert_eq!(colors::default_series_color(0), colors::BLUE);
/// assert_eq!(colors::default_series_color(5), colors::BLUE);
/// ```
pub fn default_series_color(index: usize) -> RGBA8 {
    DEFAULT_SERIES_COLORS[index % DEFAULT_SERIES_COLORS.len()]
}

/// Returns the color for the series at ordinal `index` from the
/// alternate sequence, wrapping around like
/// [`default_series_color`].
pub fn alternate_series_color(index: usize) -> RGBA8 {
    ALTERNATE_SERIES_COLORS[index % ALTERNATE_SERIES_COLORS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_lengths() {
        assert_eq!(DEFAULT_SERIES_COLORS.len(), 5);
        assert_eq!(ALTERNATE_SERIES_COLORS.len(), 9);
    }

    #[test]
    fn default_selection_wraps() {
        for i in 0..40 {
            assert_eq!(default_series_color(i), default_series_color(i + 5),
                       "index {}", i);
        }
    }

    #[test]
    fn alternate_selection_wraps() {
        for i in 0..40 {
            assert_eq!(alternate_series_color(i),
                       alternate_series_color(i + 9),
                       "index {}", i);
        }
    }

    #[test]
    fn selection_is_total() {
        for i in 0..100 {
            assert!(DEFAULT_SERIES_COLORS.contains(&default_series_color(i)));
            assert!(ALTERNATE_SERIES_COLORS
                    .contains(&alternate_series_color(i)));
        }
        // The largest index must not overflow the modulo.
        let _ = default_series_color(usize::MAX);
        let _ = alternate_series_color(usize::MAX);
    }

    #[test]
    fn known_entries() {
        assert_eq!(default_series_color(0),
                   RGBA8 { r: 52, g: 152, b: 219, a: 255 });
        assert_eq!(default_series_color(5), BLUE);
        assert_eq!(alternate_series_color(0),
                   RGBA8 { r: 116, g: 185, b: 255, a: 255 });
        assert_eq!(alternate_series_color(8),
                   RGBA8 { r: 243, g: 156, b: 18, a: 255 });
    }

    #[test]
    fn role_defaults() {
        assert_eq!(DEFAULT_BACKGROUND_COLOR, WHITE);
        assert_eq!(DEFAULT_BACKGROUND_STROKE_COLOR, WHITE);
        assert_eq!(DEFAULT_CANVAS_COLOR, WHITE);
        assert_eq!(DEFAULT_CANVAS_STROKE_COLOR, WHITE);
        assert_eq!(DEFAULT_TEXT_COLOR, BLACK);
        assert_eq!(DEFAULT_AXIS_COLOR, BLACK);
        assert_eq!(DEFAULT_STROKE_COLOR, LIGHT_GRAY);
        assert_eq!(DEFAULT_FILL_COLOR, BLUE);
        assert_eq!(DEFAULT_ANNOTATION_FILL_COLOR, WHITE);
        assert_eq!(DEFAULT_GRID_LINE_COLOR, LIGHT_GRAY);
    }

    #[test]
    fn transparent_sentinel() {
        assert_eq!(TRANSPARENT.a, 0);
    }
}
