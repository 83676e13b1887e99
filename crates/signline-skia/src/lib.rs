// File: crates/signline-skia/src/lib.rs
// Summary: Skia renderer crate. Replays core draw lists onto CPU raster surfaces and encodes PNG.

use anyhow::{Context, Result};
use skia_safe as skia;
use tracing::debug;

use signline_core::types::{HEIGHT, WIDTH};
use signline_core::{Color, DrawOp, LineChart, RenderOutput};

pub mod text;

pub use text::TextShaper;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT }
    }
}

#[inline]
pub fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(255, c.r, c.g, c.b)
}

/// Replays draw ops onto a Skia canvas.
pub struct SkiaPainter<'a> {
    shaper: &'a TextShaper,
}

impl<'a> SkiaPainter<'a> {
    pub fn new(shaper: &'a TextShaper) -> Self {
        Self { shaper }
    }

    pub fn paint(&self, canvas: &skia::Canvas, ops: &[DrawOp]) {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);

        for op in ops {
            match op {
                DrawOp::Clear { width, height, color } => {
                    fill.set_color(to_skia(*color));
                    canvas.draw_rect(skia::Rect::from_wh(*width as f32, *height as f32), &fill);
                }
                DrawOp::Line { from, to, color, width } => {
                    stroke.set_color(to_skia(*color));
                    stroke.set_stroke_width(*width);
                    canvas.draw_line((from.x as f32, from.y as f32), (to.x as f32, to.y as f32), &stroke);
                }
                DrawOp::FillCircle { center, radius, color } => {
                    fill.set_color(to_skia(*color));
                    canvas.draw_circle((center.x as f32, center.y as f32), *radius as f32, &fill);
                }
                DrawOp::FillRect { rect, color } => {
                    fill.set_color(to_skia(*color));
                    let r = skia::Rect::from_ltrb(rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
                    canvas.draw_rect(r, &fill);
                }
                DrawOp::Text { text, origin, size, color } => {
                    self.shaper
                        .draw_baseline(canvas, text, origin.x as f32, origin.y as f32, *size, to_skia(*color));
                }
            }
        }
    }
}

/// Paint `ops` on a fresh CPU raster surface and return the PNG bytes.
pub fn render_ops_to_png_bytes(ops: &[DrawOp], opts: &RenderOptions, shaper: &TextShaper) -> Result<Vec<u8>> {
    let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
        .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
    SkiaPainter::new(shaper).paint(surface.canvas(), ops);

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
    debug!(ops = ops.len(), bytes = data.len(), "encoded chart PNG");
    Ok(data.as_bytes().to_vec())
}

/// Render `chart` (installing its hover regions) and encode it as PNG.
pub fn render_chart_png_bytes(chart: &mut LineChart, opts: &RenderOptions, shaper: &TextShaper) -> Result<(Vec<u8>, RenderOutput)> {
    let out = chart
        .render_output(opts.width as f64, opts.height as f64, shaper)
        .context("render pass failed")?;
    let bytes = render_ops_to_png_bytes(&out.ops, opts, shaper)?;
    Ok((bytes, out))
}

/// Render `chart` to a PNG file at `output_png_path`.
pub fn render_chart_png(
    chart: &mut LineChart,
    opts: &RenderOptions,
    shaper: &TextShaper,
    output_png_path: impl AsRef<std::path::Path>,
) -> Result<RenderOutput> {
    let (bytes, out) = render_chart_png_bytes(chart, opts, shaper)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(out)
}
