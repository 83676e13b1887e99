// File: crates/signline-core/tests/segment.rs
// Purpose: Segment classification against the zero row and crossing interpolation.

use signline_core::segment::{x_at_y, Piece};
use signline_core::{classify, Point, SegmentPlan, Tone};

const ZERO: f64 = 200.0;

#[test]
fn both_above_is_above_only() {
    let plan = classify(Point::new(0.0, 100.0), 5.0, Point::new(10.0, 50.0), 8.0, ZERO);
    assert_eq!(plan, SegmentPlan::AboveOnly);
}

#[test]
fn both_below_is_below_only() {
    let plan = classify(Point::new(0.0, 250.0), -3.0, Point::new(10.0, 300.0), -5.0, ZERO);
    assert_eq!(plan, SegmentPlan::BelowOnly);
}

#[test]
fn crossing_down_hits_zero_row_between_endpoints() {
    let p1 = Point::new(10.0, 100.0);
    let p2 = Point::new(30.0, 300.0);
    match classify(p1, 5.0, p2, -5.0, ZERO) {
        SegmentPlan::CrossingDown { at } => {
            assert_eq!(at.y, ZERO);
            assert!(at.x > p1.x && at.x < p2.x, "crossing x {} not inside", at.x);
            assert!((at.x - 20.0).abs() < 1e-9);
        }
        other => panic!("expected CrossingDown, got {other:?}"),
    }
}

#[test]
fn crossing_up_interpolates_unevenly() {
    // 150 px below, 50 px above: crossing at three quarters of the run
    let p1 = Point::new(0.0, 350.0);
    let p2 = Point::new(100.0, 150.0);
    match classify(p1, -3.0, p2, 1.0, ZERO) {
        SegmentPlan::CrossingUp { at } => {
            assert_eq!(at.y, ZERO);
            assert!((at.x - 75.0).abs() < 1e-9);
        }
        other => panic!("expected CrossingUp, got {other:?}"),
    }
}

#[test]
fn crossing_pieces_switch_tone_at_crossing() {
    let p1 = Point::new(10.0, 100.0);
    let p2 = Point::new(30.0, 300.0);
    let plan = classify(p1, 5.0, p2, -5.0, ZERO);
    let pieces: Vec<Piece> = plan.pieces(p1, p2);
    assert_eq!(pieces.len(), 2);
    assert_eq!(pieces[0].tone, Tone::Positive);
    assert_eq!(pieces[1].tone, Tone::Negative);
    assert_eq!(pieces[0].from, p1);
    assert_eq!(pieces[0].to, pieces[1].from);
    assert_eq!(pieces[1].to, p2);
    assert_eq!(pieces[0].to.y, ZERO);
}

#[test]
fn endpoint_on_zero_row_never_crosses() {
    let on = Point::new(0.0, ZERO);
    assert_eq!(classify(on, 0.0, Point::new(10.0, 120.0), 4.0, ZERO), SegmentPlan::AboveOnly);
    assert_eq!(classify(on, 0.0, Point::new(10.0, 320.0), -4.0, ZERO), SegmentPlan::BelowOnly);
    // both on the row satisfies both tests; the above test wins
    assert_eq!(classify(on, 0.0, Point::new(10.0, ZERO), 0.0, ZERO), SegmentPlan::AboveOnly);
}

#[test]
fn vertical_segment_skips_interpolation() {
    let plan = classify(Point::new(40.0, 100.0), 2.0, Point::new(40.0, 300.0), -2.0, ZERO);
    assert_eq!(plan, SegmentPlan::CrossingDown { at: Point::new(40.0, ZERO) });
    assert!(plan.is_crossing());
}

#[test]
fn nan_coordinates_are_unordered() {
    let plan = classify(Point::new(0.0, f64::NAN), f64::NAN, Point::new(10.0, 50.0), 1.0, ZERO);
    assert_eq!(plan, SegmentPlan::Unordered);
    let pieces = plan.pieces(Point::new(0.0, 0.0), Point::new(10.0, 50.0));
    assert_eq!(pieces.len(), 1);
    assert_eq!(pieces[0].tone, Tone::Neutral);
}

#[test]
fn x_at_y_solves_line_and_rejects_degenerate() {
    assert_eq!(x_at_y(0.0, 0.0, 10.0, 10.0, 5.0), Some(5.0));
    assert_eq!(x_at_y(0.0, 100.0, 10.0, -100.0, 0.0), Some(5.0));
    assert_eq!(x_at_y(3.0, 0.0, 3.0, 10.0, 5.0), None);
    assert_eq!(x_at_y(0.0, 4.0, 10.0, 4.0, 5.0), None);
}
