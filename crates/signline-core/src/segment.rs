// File: crates/signline-core/src/segment.rs
// Summary: Classifies the segment between two mapped points against the zero row
// and splits sign-changing segments at the exact crossing.

use crate::types::Point;

/// Which chart color a piece of line is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Negative,
    /// Fallback for pairs that cannot be ordered against the zero row.
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentPlan {
    /// Both endpoints on or above the zero row (screen-up is positive).
    AboveOnly,
    /// Both endpoints on or below the zero row.
    BelowOnly,
    /// First endpoint above, second below; `at` lies on the zero row.
    CrossingDown { at: Point },
    /// First endpoint below, second above.
    CrossingUp { at: Point },
    /// A coordinate is NaN.
    Unordered,
}

/// One colored straight piece of a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub from: Point,
    pub to: Point,
    pub tone: Tone,
}

impl SegmentPlan {
    /// Sub-segments to draw, in path order.
    pub fn pieces(&self, p1: Point, p2: Point) -> Vec<Piece> {
        let piece = |from, to, tone| Piece { from, to, tone };
        match *self {
            SegmentPlan::AboveOnly => vec![piece(p1, p2, Tone::Positive)],
            SegmentPlan::BelowOnly => vec![piece(p1, p2, Tone::Negative)],
            SegmentPlan::CrossingDown { at } => {
                vec![piece(p1, at, Tone::Positive), piece(at, p2, Tone::Negative)]
            }
            SegmentPlan::CrossingUp { at } => {
                vec![piece(p1, at, Tone::Negative), piece(at, p2, Tone::Positive)]
            }
            SegmentPlan::Unordered => vec![piece(p1, p2, Tone::Neutral)],
        }
    }

    pub fn is_crossing(&self) -> bool {
        matches!(self, SegmentPlan::CrossingDown { .. } | SegmentPlan::CrossingUp { .. })
    }
}

/// X coordinate where the line through `(x1, y1)` and `(x2, y2)` reaches `y0`.
/// Returns `None` for vertical or horizontal lines.
pub fn x_at_y(x1: f64, y1: f64, x2: f64, y2: f64, y0: f64) -> Option<f64> {
    if x1 == x2 || y1 == y2 {
        return None;
    }
    let t = (y1 - y0) / (y1 - y2);
    Some(x1 + t * (x2 - x1))
}

/// Decide how the segment `p1 -> p2` is drawn relative to `zero_row`.
///
/// Exact equality with the zero row satisfies both the above and the below
/// test; the above test runs first. Either branch draws the same endpoints.
pub fn classify(p1: Point, v1: f64, p2: Point, v2: f64, zero_row: f64) -> SegmentPlan {
    if v1.is_nan() || v2.is_nan() || p1.y.is_nan() || p2.y.is_nan() {
        return SegmentPlan::Unordered;
    }
    let (y1, y2) = (p1.y, p2.y);
    if y1 <= zero_row && y2 <= zero_row {
        return SegmentPlan::AboveOnly;
    }
    if y1 >= zero_row && y2 >= zero_row {
        return SegmentPlan::BelowOnly;
    }

    // Work in a frame where the zero row is y = 0 and up is positive.
    let y1t = zero_row - y1;
    let y2t = zero_row - y2;
    let at = |x: f64| Point::new(x, zero_row);
    let crossing_x = x_at_y(p1.x, y1t, p2.x, y2t, 0.0).unwrap_or(p1.x);

    if y1 < zero_row {
        SegmentPlan::CrossingDown { at: at(crossing_x) }
    } else {
        SegmentPlan::CrossingUp { at: at(crossing_x) }
    }
}
