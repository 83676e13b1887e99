// File: crates/signline-core/src/lib.rs
// Summary: Core library entry point; exports the signed line chart model, render pipeline and hover API.

pub mod chart;
pub mod error;
pub mod format;
pub mod geometry;
pub mod hover;
pub mod render;
pub mod scale;
pub mod segment;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::LineChart;
pub use error::ChartError;
pub use format::{round, NumberFormatter};
pub use geometry::{Rect, Shape};
pub use hover::{HoverController, HoverEvent, Tooltip};
pub use render::{ChartConfig, DrawOp, InteractiveRegion, RenderOutput, Renderer};
pub use scale::ScaleMapper;
pub use segment::{classify, SegmentPlan, Tone};
pub use series::{DataPoint, DataSet, Extremes};
pub use text::{FixedMetrics, TextExtent, TextMeasure};
pub use theme::{palette, Color, Theme};
pub use types::{Insets, Layout, Point};
pub use num_format::Locale;
