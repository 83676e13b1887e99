// File: crates/signline-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and hit-testing.

use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f64 { self.right - self.left }
    pub fn height(&self) -> f64 { self.bottom - self.top }

    /// Half-open containment: left/top edges inside, right/bottom outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.y >= self.top && p.x < self.right && p.y < self.bottom
    }
}

/// Hit-test shape of an interactive region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { center: Point, radius: f64 },
    Rect(Rect),
}

impl Shape {
    pub fn contains(&self, p: Point) -> bool {
        match *self {
            // strict interior
            Shape::Circle { center, radius } => {
                if radius <= 0.0 {
                    return false;
                }
                let dx = p.x - center.x;
                let dy = p.y - center.y;
                dx * dx + dy * dy < radius * radius
            }
            Shape::Rect(r) => r.contains(p),
        }
    }
}
