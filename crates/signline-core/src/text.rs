// File: crates/signline-core/src/text.rs
// Summary: Text measurement capability supplied by the host surface.

/// Extent of a single line of text; ascent and descent are positive distances
/// from the baseline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextExtent {
    pub width: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl TextExtent {
    /// Offset that vertically centers the glyphs on a baseline.
    pub fn center_offset(&self) -> f64 {
        (self.ascent - self.descent) / 2.0
    }

    pub fn height(&self) -> f64 {
        self.ascent + self.descent
    }
}

pub trait TextMeasure {
    fn measure(&self, text: &str, size: f32) -> TextExtent;
}

/// Monospace approximation: every char advances `advance * size`.
/// Deterministic, so it is what tests and headless hosts use.
#[derive(Clone, Copy, Debug)]
pub struct FixedMetrics {
    pub advance: f64,
    pub ascent: f64,
    pub descent: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self { advance: 0.6, ascent: 0.8, descent: 0.2 }
    }
}

impl TextMeasure for FixedMetrics {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let size = size.max(1.0) as f64;
        TextExtent {
            width: text.chars().count() as f64 * self.advance * size,
            ascent: self.ascent * size,
            descent: self.descent * size,
        }
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        (**self).measure(text, size)
    }
}
