// File: crates/signline-core/src/render.rs
// Summary: Render pipeline producing an ordered draw list and the hover regions
// of one pass (axes, signed segments, markers, ticks, labels, mean band).

use num_format::Locale;
use tracing::{debug, trace};

use crate::error::Result;
use crate::format::{round, NumberFormatter};
use crate::geometry::{Rect, Shape};
use crate::scale::ScaleMapper;
use crate::segment::{classify, SegmentPlan, Tone};
use crate::series::DataSet;
use crate::text::TextMeasure;
use crate::theme::{Color, Theme};
use crate::types::{Insets, Layout, Point};

/// Chart switches and colors. Changed only through the chart setters.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    pub theme: Theme,
    /// Center the zero row and show both signs; otherwise pin it near the bottom.
    pub split_axis: bool,
    pub show_mean_line: bool,
    pub currency_format: bool,
    pub show_label_in_tooltip: bool,
    pub locale: Locale,
    pub currency_symbol: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            split_axis: true,
            show_mean_line: false,
            currency_format: false,
            show_label_in_tooltip: false,
            locale: Locale::en,
            currency_symbol: "$".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn formatter(&self) -> NumberFormatter {
        NumberFormatter::new(self.currency_format, self.locale, self.currency_symbol.as_str())
    }
}

/// Backend-neutral drawing primitive. Coordinates are panel pixels, origin
/// top-left; text origin is the left end of the baseline.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64, color: Color },
    Line { from: Point, to: Point, color: Color, width: f32 },
    FillCircle { center: Point, radius: f64, color: Color },
    FillRect { rect: Rect, color: Color },
    Text { text: String, origin: Point, size: f32, color: Color },
}

/// Screen area that shows a tooltip while the pointer is inside it.
#[derive(Clone, Debug, PartialEq)]
pub struct InteractiveRegion {
    pub shape: Shape,
    pub tooltip_text: String,
    pub bg: Color,
    pub fg: Color,
}

/// Everything one render pass produced.
#[derive(Clone, Debug, Default)]
pub struct RenderOutput {
    pub ops: Vec<DrawOp>,
    /// One region per marker in point order, preceded by the mean region when shown.
    pub regions: Vec<InteractiveRegion>,
    /// Plan of every consecutive pair, in point order.
    pub plans: Vec<SegmentPlan>,
    pub points: Vec<Point>,
    pub zero_row: f64,
    pub insets: Insets,
    /// Set when installing this pass's regions hid a visible tooltip.
    pub tooltip_hidden: bool,
}

pub struct Renderer<M: TextMeasure> {
    pub measure: M,
    pub layout: Layout,
}

impl<M: TextMeasure> Renderer<M> {
    pub fn new(measure: M) -> Self {
        Self { measure, layout: Layout::default() }
    }

    pub fn with_layout(measure: M, layout: Layout) -> Self {
        Self { measure, layout }
    }

    /// Recompute the full geometry of `data` for a `width` x `height` panel.
    pub fn render(&self, data: &DataSet, config: &ChartConfig, width: f64, height: f64) -> Result<RenderOutput> {
        let extremes = data.extremes()?;
        let lay = &self.layout;
        let theme = &config.theme;
        let fmt = config.formatter();

        let mut out = RenderOutput::default();
        out.ops.push(DrawOp::Clear { width, height, color: theme.background });

        let value_labels: Vec<String> = data.points().iter().map(|p| fmt.format(p.value)).collect();
        let mean_label = if config.show_mean_line {
            Some(fmt.format(round(data.mean(), 2)?))
        } else {
            None
        };
        let widest = value_labels
            .iter()
            .chain(mean_label.iter())
            .map(|t| self.measure.measure(t, lay.font_size).width)
            .fold(0.0, f64::max);
        let insets = Insets::symmetric(widest + lay.label_padding, lay.top_margin);

        let n = data.len();
        let scale = ScaleMapper::new(extremes, width, height, insets, config.split_axis, n, lay);
        out.zero_row = scale.zero_row;
        out.insets = insets;

        if let Some(label) = mean_label {
            self.draw_mean(&mut out, &scale, theme, data.mean(), label);
        }
        self.draw_axes(&mut out, &scale, theme, height);

        // Fold over the points carrying the previous mapped point and value.
        data.points().iter().enumerate().fold(None, |prev: Option<(Point, f64)>, (i, dp)| {
            let pt = scale.map(i, dp.value);
            if let Some((p0, v0)) = prev {
                let plan = classify(p0, v0, pt, dp.value, scale.zero_row);
                trace!(index = i, ?plan, "segment");
                for piece in plan.pieces(p0, pt) {
                    let color = match piece.tone {
                        Tone::Positive => theme.positive,
                        Tone::Negative => theme.negative,
                        Tone::Neutral => theme.foreground,
                    };
                    out.ops.push(DrawOp::Line { from: piece.from, to: piece.to, color, width: lay.line_width });
                }
                out.plans.push(plan);
            }

            let non_negative = dp.is_non_negative();
            let sign = theme.sign_color(non_negative);
            let category = dp.label.clone().unwrap_or_else(|| (i + 1).to_string());

            self.value_tick(&mut out, &scale, pt.y, &value_labels[i], sign);
            self.category_tick(&mut out, &scale, pt.x, &category, sign, theme.foreground, non_negative);
            out.ops.push(DrawOp::FillCircle { center: pt, radius: lay.marker_radius, color: sign });

            let tooltip_text = if config.show_label_in_tooltip {
                format!("{}\n{}", category, value_labels[i])
            } else {
                value_labels[i].clone()
            };
            out.regions.push(InteractiveRegion {
                shape: Shape::Circle { center: pt, radius: lay.marker_radius },
                tooltip_text,
                bg: sign,
                fg: if non_negative { theme.background } else { theme.foreground },
            });
            out.points.push(pt);
            Some((pt, dp.value))
        });

        debug!(
            points = n,
            regions = out.regions.len(),
            crossings = out.plans.iter().filter(|p| p.is_crossing()).count(),
            zero_row = out.zero_row,
            left_margin = insets.left,
            "rendered line chart"
        );
        Ok(out)
    }

    fn draw_mean(&self, out: &mut RenderOutput, scale: &ScaleMapper, theme: &Theme, mean: f64, label: String) {
        let lay = &self.layout;
        let y = scale.y_at(mean);
        let left = scale.insets.left;
        let color = theme.mean();
        let rect = Rect::from_ltwh(left, y - lay.mean_thickness / 2.0, scale.usable_width, lay.mean_thickness);
        out.ops.push(DrawOp::FillRect { rect, color });
        self.value_tick(out, scale, y, &label, color.darker().darker());
        out.regions.push(InteractiveRegion {
            shape: Shape::Rect(rect),
            tooltip_text: format!("Mean: {label}"),
            bg: color,
            fg: theme.foreground,
        });
    }

    fn draw_axes(&self, out: &mut RenderOutput, scale: &ScaleMapper, theme: &Theme, height: f64) {
        let lay = &self.layout;
        let color = theme.axis();
        let left = scale.insets.left;
        let bottom = if scale.split_axis { height - lay.top_margin } else { scale.zero_row };
        out.ops.push(DrawOp::Line {
            from: Point::new(left, lay.top_margin),
            to: Point::new(left, bottom),
            color,
            width: 2.5,
        });
        out.ops.push(DrawOp::Line {
            from: Point::new(left, scale.zero_row),
            to: Point::new(scale.right_edge(), scale.zero_row),
            color,
            width: 2.0,
        });
    }

    /// Tick left of the value axis with its label right-aligned against it.
    fn value_tick(&self, out: &mut RenderOutput, scale: &ScaleMapper, y: f64, label: &str, color: Color) {
        let lay = &self.layout;
        let axis_x = scale.insets.left;
        let tick_end = axis_x - lay.tick_length;
        out.ops.push(DrawOp::Line { from: Point::new(axis_x, y), to: Point::new(tick_end, y), color, width: 1.0 });
        let ext = self.measure.measure(label, lay.font_size);
        out.ops.push(DrawOp::Text {
            text: label.to_string(),
            origin: Point::new(tick_end - ext.width, y + ext.center_offset()),
            size: lay.font_size,
            color,
        });
    }

    /// Tick on the zero row with the category label centered on it.
    #[allow(clippy::too_many_arguments)]
    fn category_tick(
        &self,
        out: &mut RenderOutput,
        scale: &ScaleMapper,
        x: f64,
        label: &str,
        tick_color: Color,
        text_color: Color,
        non_negative: bool,
    ) {
        let lay = &self.layout;
        let zero = scale.zero_row;
        let (top, bottom) = if scale.split_axis {
            (zero - lay.x_tick_half, zero + lay.x_tick_half)
        } else {
            (zero, zero + lay.x_tick_drop)
        };
        out.ops.push(DrawOp::Line {
            from: Point::new(x, top),
            to: Point::new(x, bottom),
            color: tick_color,
            width: 1.0,
        });
        let ext = self.measure.measure(label, lay.font_size);
        // negative points sit below the split axis, so their label goes above it
        let baseline = if scale.split_axis && !non_negative {
            top - ext.descent
        } else {
            bottom + ext.height()
        };
        out.ops.push(DrawOp::Text {
            text: label.to_string(),
            origin: Point::new(x - ext.width / 2.0, baseline),
            size: lay.font_size,
            color: text_color,
        });
    }
}
