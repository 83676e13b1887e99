// File: crates/signline-core/src/hover.rs
// Summary: Pointer tracking against the installed region set; emits show/hide tooltip events.

use tracing::debug;

use crate::render::InteractiveRegion;
use crate::theme::Color;
use crate::types::Point;

/// Tooltip to display next to the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub text: String,
    pub bg: Color,
    pub fg: Color,
    /// Screen position of the tooltip's top-left corner.
    pub at: Point,
    /// Index of the region in registration order.
    pub region: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum HoverEvent {
    /// Show this tooltip, replacing any visible one.
    Show(Tooltip),
    Hide,
}

/// Owns the current region set. At most one tooltip is visible at a time.
#[derive(Debug)]
pub struct HoverController {
    regions: Vec<InteractiveRegion>,
    panel_origin: Point,
    offset: f64,
    visible: Option<Tooltip>,
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl HoverController {
    pub fn new(tooltip_offset: f64) -> Self {
        Self { regions: Vec::new(), panel_origin: Point::default(), offset: tooltip_offset, visible: None }
    }

    /// Replace the whole region set. The previous set is dropped first, and a
    /// visible tooltip (which belonged to it) is hidden.
    pub fn install(&mut self, regions: Vec<InteractiveRegion>) -> Option<HoverEvent> {
        let hidden = self.hide();
        let old = std::mem::replace(&mut self.regions, regions);
        debug!(released = old.len(), installed = self.regions.len(), "swapped hover regions");
        drop(old);
        hidden
    }

    /// Drop every region; used when the chart is reset.
    pub fn clear(&mut self) -> Option<HoverEvent> {
        self.install(Vec::new())
    }

    /// Screen position of the panel's top-left corner.
    pub fn set_panel_origin(&mut self, origin: Point) {
        self.panel_origin = origin;
    }

    /// Distance from the pointer to the tooltip corner on both axes.
    pub fn set_tooltip_offset(&mut self, offset: f64) {
        self.offset = offset;
    }

    pub fn regions(&self) -> &[InteractiveRegion] {
        &self.regions
    }

    pub fn visible(&self) -> Option<&Tooltip> {
        self.visible.as_ref()
    }

    /// Hit-test a pointer position given in screen coordinates. The first
    /// region in registration order that contains it wins.
    pub fn pointer_moved(&mut self, screen: Point) -> Option<HoverEvent> {
        let local = Point::new(screen.x - self.panel_origin.x, screen.y - self.panel_origin.y);
        match self.regions.iter().position(|r| r.shape.contains(local)) {
            Some(idx) => {
                let region = &self.regions[idx];
                let tip = Tooltip {
                    text: region.tooltip_text.clone(),
                    bg: region.bg,
                    fg: region.fg,
                    at: screen.offset(self.offset, self.offset),
                    region: idx,
                };
                self.visible = Some(tip.clone());
                Some(HoverEvent::Show(tip))
            }
            None => self.hide(),
        }
    }

    /// Pointer left the panel.
    pub fn pointer_left(&mut self) -> Option<HoverEvent> {
        self.hide()
    }

    fn hide(&mut self) -> Option<HoverEvent> {
        self.visible.take().map(|_| HoverEvent::Hide)
    }
}
