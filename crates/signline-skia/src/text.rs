// File: crates/signline-skia/src/text.rs
// Summary: Text shaper/measurer using Skia textlayout with system font fallback.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

use signline_core::{TextExtent, TextMeasure};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        // Axis labels are mostly digits; tabular families keep them aligned
        ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw a single line with `(x, y)` as the left end of its baseline.
    pub fn draw_baseline(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let p = self.layout(text, size, color);
        // Paragraph paints from its top-left corner
        p.paint(canvas, (x, y - p.alphabetic_baseline()));
    }
}

impl TextMeasure for TextShaper {
    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        let ascent = p.alphabetic_baseline() as f64;
        TextExtent {
            width: p.longest_line() as f64,
            ascent,
            descent: (p.height() as f64 - ascent).max(0.0),
        }
    }
}
