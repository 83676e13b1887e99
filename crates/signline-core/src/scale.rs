// File: crates/signline-core/src/scale.rs
// Summary: Index (X) and signed value (Y) mapping around a zero reference row.

use crate::series::Extremes;
use crate::types::{Insets, Layout, Point};

/// Maps `(index, value)` pairs to panel pixels for one render pass.
#[derive(Clone, Copy, Debug)]
pub struct ScaleMapper {
    pub insets: Insets,
    pub split_axis: bool,
    /// Pixel row representing value 0.
    pub zero_row: f64,
    /// Horizontal distance between consecutive points.
    pub step: f64,
    /// Width between the two horizontal margins.
    pub usable_width: f64,
    scale_max: f64,
    span: f64,
}

impl ScaleMapper {
    /// Zero row is `(panel_height - top_margin) / 2` when split, otherwise
    /// `panel_height - top_margin - reserved_band`.
    pub fn new(
        extremes: Extremes,
        panel_width: f64,
        panel_height: f64,
        insets: Insets,
        split_axis: bool,
        point_count: usize,
        layout: &Layout,
    ) -> Self {
        let plot_height = panel_height - layout.top_margin;
        let zero_row = if split_axis {
            plot_height / 2.0
        } else {
            plot_height - layout.reserved_band
        };
        let usable_width = (panel_width - insets.hsum()).max(0.0);
        let step = if point_count == 0 { 0.0 } else { usable_width / point_count as f64 };
        Self {
            insets,
            split_axis,
            zero_row,
            step,
            usable_width,
            scale_max: extremes.scale_max(),
            // zero_row is already measured past the fixed offset in both modes
            span: zero_row - 2.0 * layout.top_margin,
        }
    }

    #[inline]
    pub fn x_at(&self, index: usize) -> f64 {
        self.insets.left + index as f64 * self.step
    }

    /// Signed pixel distance of `value` from the zero row (positive = upward).
    #[inline]
    pub fn pixel_offset(&self, value: f64) -> f64 {
        self.span * value / self.scale_max
    }

    #[inline]
    pub fn y_at(&self, value: f64) -> f64 {
        let off = self.pixel_offset(value);
        if value >= 0.0 {
            self.zero_row - off
        } else {
            self.zero_row + off.abs()
        }
    }

    #[inline]
    pub fn map(&self, index: usize, value: f64) -> Point {
        Point::new(self.x_at(index), self.y_at(value))
    }

    /// Inverse of `y_at`.
    pub fn value_at(&self, y: f64) -> f64 {
        if self.span == 0.0 {
            return 0.0;
        }
        (self.zero_row - y) * self.scale_max / self.span
    }

    /// Right edge of the drawable area.
    pub fn right_edge(&self) -> f64 {
        self.insets.left + self.usable_width
    }
}
