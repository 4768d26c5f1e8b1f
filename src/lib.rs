//! Named colors and series color palettes for charts.
//!
//! - [`colors`] — the color catalog: named [`RGBA8`] constants, the
//!   default role colors, and the two ordered series sequences with
//!   their wraparound selection functions.
//! - [`ColorPalette`] — the accessor set a renderer uses to theme a
//!   chart without knowing which palette is active, implemented by
//!   [`DefaultColorPalette`] and [`AlternateColorPalette`].
//!
//! A renderer picks one palette at chart-construction time and asks it
//! for role colors and per-series colors:
//!
//! ```
//! use chart_palette::{ColorPalette, DefaultColorPalette, colors};
//!
//! let palette: &dyn ColorPalette = &DefaultColorPalette;
//! assert_eq!(palette.background_color(), colors::WHITE);
//! assert_eq!(palette.series_color(2), colors::RED);
//! ```

use rgb::RGBA8;

pub mod colors;

/// The set of colors needed to render a chart.
///
/// All accessors are pure and total: they take no input other than
/// `series_color`'s index, never fail, and perform no side effects.
/// Implementations hold no state, so a palette may be shared across
/// threads without synchronization.
pub trait ColorPalette {
    /// The chart background color.
    fn background_color(&self) -> RGBA8;

    /// The chart border color.
    fn background_stroke_color(&self) -> RGBA8;

    /// The plotting-area fill color.
    fn canvas_color(&self) -> RGBA8;

    /// The plotting-area border color.
    fn canvas_stroke_color(&self) -> RGBA8;

    /// The axis line color.
    fn axis_stroke_color(&self) -> RGBA8;

    /// The label and text color.
    fn text_color(&self) -> RGBA8;

    /// The color for the series at ordinal `index`.
    ///
    /// Indices wrap around the palette's series sequence, so any
    /// number of series gets a color.
    fn series_color(&self, index: usize) -> RGBA8;
}

/// The default palette: white chrome, charcoal ink, and the default
/// series sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultColorPalette;

impl ColorPalette for DefaultColorPalette {
    #[inline]
    fn background_color(&self) -> RGBA8 { colors::DEFAULT_BACKGROUND_COLOR }

    #[inline]
    fn background_stroke_color(&self) -> RGBA8 {
        colors::DEFAULT_BACKGROUND_STROKE_COLOR
    }

    #[inline]
    fn canvas_color(&self) -> RGBA8 { colors::DEFAULT_CANVAS_COLOR }

    #[inline]
    fn canvas_stroke_color(&self) -> RGBA8 {
        colors::DEFAULT_CANVAS_STROKE_COLOR
    }

    #[inline]
    fn axis_stroke_color(&self) -> RGBA8 { colors::DEFAULT_AXIS_COLOR }

    #[inline]
    fn text_color(&self) -> RGBA8 { colors::DEFAULT_TEXT_COLOR }

    #[inline]
    fn series_color(&self, index: usize) -> RGBA8 {
        colors::default_series_color(index)
    }
}

/// The alternate palette.  Chrome and ink colors match
/// [`DefaultColorPalette`]; only the series coloring differs, drawing
/// from the alternate sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlternateColorPalette;

impl ColorPalette for AlternateColorPalette {
    #[inline]
    fn background_color(&self) -> RGBA8 { colors::DEFAULT_BACKGROUND_COLOR }

    #[inline]
    fn background_stroke_color(&self) -> RGBA8 {
        colors::DEFAULT_BACKGROUND_STROKE_COLOR
    }

    #[inline]
    fn canvas_color(&self) -> RGBA8 { colors::DEFAULT_CANVAS_COLOR }

    #[inline]
    fn canvas_stroke_color(&self) -> RGBA8 {
        colors::DEFAULT_CANVAS_STROKE_COLOR
    }

    #[inline]
    fn axis_stroke_color(&self) -> RGBA8 { colors::DEFAULT_AXIS_COLOR }

    #[inline]
    fn text_color(&self) -> RGBA8 { colors::DEFAULT_TEXT_COLOR }

    #[inline]
    fn series_color(&self, index: usize) -> RGBA8 {
        colors::alternate_series_color(index)
    }
}
