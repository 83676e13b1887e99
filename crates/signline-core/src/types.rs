// File: crates/signline-core/src/types.rs
// Summary: Shared types and layout constants (panel size, margins, offsets).

/// Default panel width in pixels.
pub const WIDTH: i32 = 700;
/// Default panel height in pixels.
pub const HEIGHT: i32 = 500;

/// Pixel position on the panel; origin top-left, y grows downward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
    /// Symmetric horizontal margins, as the value axis needs room on the left
    /// and the last marker needs the same room on the right.
    pub const fn symmetric(horizontal: f64, top: f64) -> Self {
        Self::new(horizontal, horizontal, top, 0.0)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
}

impl Default for Insets {
    fn default() -> Self {
        Self::symmetric(50.0, 10.0)
    }
}

/// Fixed layout constants of the chart. Every magic number of the drawing
/// pipeline lives here so hosts can tune them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Margin above the plot, also subtracted twice from the vertical span.
    pub top_margin: f64,
    /// Band kept free below the x axis when the axis is not split.
    pub reserved_band: f64,
    /// Added to the widest value label to size the left margin.
    pub label_padding: f64,
    /// Length of the value-axis ticks, drawn leftward from the axis.
    pub tick_length: f64,
    /// Half height of the category ticks in split mode.
    pub x_tick_half: f64,
    /// Length of the category ticks below the axis in non-split mode.
    pub x_tick_drop: f64,
    pub marker_radius: f64,
    pub line_width: f32,
    pub mean_thickness: f64,
    /// Tooltip offset from the pointer, both axes.
    pub tooltip_offset: f64,
    pub font_size: f32,
}

impl Layout {
    /// Distance of the zero row from the panel bottom in non-split mode.
    pub fn fixed_offset(&self) -> f64 {
        self.top_margin + self.reserved_band
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            top_margin: 10.0,
            reserved_band: 20.0,
            label_padding: 16.0,
            tick_length: 8.0,
            x_tick_half: 5.0,
            x_tick_drop: 10.0,
            marker_radius: 5.0,
            line_width: 3.0,
            mean_thickness: 4.0,
            tooltip_offset: 10.0,
            font_size: 12.0,
        }
    }
}
