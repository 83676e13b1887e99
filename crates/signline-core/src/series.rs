// File: crates/signline-core/src/series.rs
// Summary: Data model: labelled points in insertion order plus the extremes used for scaling.

use crate::error::{ChartError, Result};

/// One chart value. Position on the x axis is its insertion index.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub label: Option<String>,
}

impl DataPoint {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: Some(label.into()) }
    }

    pub fn is_non_negative(&self) -> bool {
        self.value >= 0.0
    }
}

/// Largest magnitudes on both sides of zero. Recomputed on every render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extremes {
    pub max_positive_magnitude: f64,
    pub max_negative_magnitude: f64,
}

impl Extremes {
    /// Value mapped to the full vertical span. A zero (or non-finite) maximum
    /// becomes 1 so an all-zero series draws flat instead of NaN.
    pub fn scale_max(&self) -> f64 {
        let m = self.max_positive_magnitude.max(self.max_negative_magnitude);
        if m == 0.0 || !m.is_finite() { 1.0 } else { m }
    }
}

/// Ordered collection of points; insertion order is the x-axis order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    points: Vec<DataPoint>,
}

impl DataSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Largest value by numeric comparison.
    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }

    /// Smallest value by numeric comparison.
    pub fn min_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::min)
    }

    /// Arithmetic mean; 0 for an empty set.
    pub fn mean(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.value).sum::<f64>() / self.points.len() as f64
    }

    pub fn extremes(&self) -> Result<Extremes> {
        let (max, min) = self
            .max_value()
            .zip(self.min_value())
            .ok_or(ChartError::EmptyDataset)?;
        Ok(Extremes {
            max_positive_magnitude: max,
            max_negative_magnitude: min.abs(),
        })
    }
}

impl FromIterator<DataPoint> for DataSet {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
