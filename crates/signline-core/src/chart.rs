// File: crates/signline-core/src/chart.rs
// Summary: LineChart facade: holds data, config and hover state; renders to a draw list.

use num_format::Locale;

use crate::error::Result;
use crate::hover::{HoverController, HoverEvent};
use crate::render::{ChartConfig, DrawOp, RenderOutput, Renderer};
use crate::series::{DataPoint, DataSet};
use crate::text::TextMeasure;
use crate::theme::Color;
use crate::types::{Layout, Point};

pub struct LineChart {
    data: DataSet,
    config: ChartConfig,
    layout: Layout,
    hover: HoverController,
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new()
    }
}

impl LineChart {
    pub fn new() -> Self {
        let layout = Layout::default();
        Self {
            data: DataSet::new(),
            config: ChartConfig::default(),
            layout,
            hover: HoverController::new(layout.tooltip_offset),
        }
    }

    pub fn add_point(&mut self, value: f64) {
        self.data.push(DataPoint::new(value));
    }

    pub fn add_labeled_point(&mut self, value: f64, label: impl Into<String>) {
        self.data.push(DataPoint::labeled(value, label));
    }

    /// Drop all points and regions and go back to the split axis. Colors and
    /// the other switches are kept.
    pub fn reset(&mut self) -> Option<HoverEvent> {
        self.data.clear();
        self.config.split_axis = true;
        self.hover.clear()
    }

    pub fn set_colors(&mut self, positive: Color, negative: Color, background: Color, foreground: Color) {
        let theme = &mut self.config.theme;
        theme.positive = positive;
        theme.negative = negative;
        theme.background = background;
        theme.foreground = foreground;
    }

    pub fn set_split_axis(&mut self, split: bool) {
        self.config.split_axis = split;
    }

    pub fn set_show_mean_line(&mut self, show: bool) {
        self.config.show_mean_line = show;
    }

    pub fn set_show_label_in_tooltip(&mut self, show: bool) {
        self.config.show_label_in_tooltip = show;
    }

    pub fn set_currency_format(&mut self, currency: bool) {
        self.config.currency_format = currency;
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.config.locale = locale;
    }

    pub fn set_currency_symbol(&mut self, symbol: impl Into<String>) {
        self.config.currency_symbol = symbol.into();
    }

    /// Takes effect on the next render. Installed regions and the panel
    /// origin are kept until then.
    pub fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
        self.hover.set_tooltip_offset(layout.tooltip_offset);
    }

    pub fn data(&self) -> &DataSet {
        &self.data
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn hover(&self) -> &HoverController {
        &self.hover
    }

    /// Full render pass. The produced regions replace the installed set.
    pub fn render_output<M: TextMeasure>(&mut self, width: f64, height: f64, measure: M) -> Result<RenderOutput> {
        let mut out = Renderer::with_layout(measure, self.layout).render(&self.data, &self.config, width, height)?;
        out.tooltip_hidden = self.hover.install(out.regions.clone()).is_some();
        Ok(out)
    }

    pub fn render<M: TextMeasure>(&mut self, width: f64, height: f64, measure: M) -> Result<Vec<DrawOp>> {
        self.render_output(width, height, measure).map(|out| out.ops)
    }

    pub fn set_panel_origin(&mut self, origin: Point) {
        self.hover.set_panel_origin(origin);
    }

    pub fn pointer_moved(&mut self, screen: Point) -> Option<HoverEvent> {
        self.hover.pointer_moved(screen)
    }

    pub fn pointer_left(&mut self) -> Option<HoverEvent> {
        self.hover.pointer_left()
    }
}
