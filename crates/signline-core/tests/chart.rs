// File: crates/signline-core/tests/chart.rs
// Purpose: LineChart facade: setters, region installation and reset behaviour.

use signline_core::{palette, ChartError, FixedMetrics, HoverEvent, LineChart, Point};

fn fill(chart: &mut LineChart) {
    chart.add_labeled_point(12.5, "Jan");
    chart.add_labeled_point(-4.0, "Feb");
    chart.add_point(8.0);
    chart.add_labeled_point(-9.75, "Apr");
}

#[test]
fn render_installs_regions_for_hover() {
    let mut chart = LineChart::new();
    fill(&mut chart);
    chart.set_show_mean_line(true);
    let out = chart.render_output(700.0, 500.0, FixedMetrics::default()).unwrap();
    assert_eq!(chart.hover().regions().len(), 5);
    assert!(!out.tooltip_hidden);

    let second = out.points[1];
    match chart.pointer_moved(second) {
        Some(HoverEvent::Show(tip)) => assert_eq!(tip.text, "-4.0"),
        other => panic!("expected tooltip, got {other:?}"),
    }
    // a new pass swaps regions and hides the tooltip of the old set
    let again = chart.render_output(700.0, 500.0, FixedMetrics::default()).unwrap();
    assert!(again.tooltip_hidden);
    assert_eq!(chart.hover().regions().len(), 5);
}

#[test]
fn reset_then_refill_matches_fresh_chart() {
    let mut fresh = LineChart::new();
    fill(&mut fresh);
    let want = fresh.render(700.0, 500.0, FixedMetrics::default()).unwrap();

    let mut reused = LineChart::new();
    reused.add_point(1_000_000.0);
    reused.add_point(-3.0);
    reused.set_split_axis(false);
    reused.render(700.0, 500.0, FixedMetrics::default()).unwrap();
    reused.pointer_moved(Point::new(0.0, 0.0));

    reused.reset();
    assert!(reused.data().is_empty());
    assert!(reused.hover().regions().is_empty());
    assert!(reused.config().split_axis);

    fill(&mut reused);
    let got = reused.render(700.0, 500.0, FixedMetrics::default()).unwrap();
    assert_eq!(got, want);
    assert_eq!(reused.hover().regions(), fresh.hover().regions());
}

#[test]
fn reset_drops_stale_regions() {
    let mut chart = LineChart::new();
    fill(&mut chart);
    let out = chart.render_output(700.0, 500.0, FixedMetrics::default()).unwrap();
    let first = out.points[0];
    assert!(chart.pointer_moved(first).is_some());

    assert_eq!(chart.reset(), Some(HoverEvent::Hide));
    assert!(chart.pointer_moved(first).is_none());
    assert_eq!(chart.render(700.0, 500.0, FixedMetrics::default()).unwrap_err(), ChartError::EmptyDataset);
}

#[test]
fn setters_reach_the_draw_list() {
    let mut chart = LineChart::new();
    chart.add_point(2500.0);
    chart.add_point(-1200.5);
    chart.set_colors(palette::WHITE, palette::ORANGE, palette::NAVY, palette::YELLOW);
    chart.set_currency_format(true);
    chart.set_show_label_in_tooltip(true);
    let out = chart.render_output(600.0, 400.0, FixedMetrics::default()).unwrap();

    assert_eq!(
        out.ops[0],
        signline_core::DrawOp::Clear { width: 600.0, height: 400.0, color: palette::NAVY }
    );
    assert_eq!(out.regions[0].tooltip_text, "1\n$ 2,500");
    assert_eq!(out.regions[1].tooltip_text, "2\n$ -1,200.5");
    assert_eq!(out.regions[1].bg, palette::ORANGE);
    assert_eq!(out.regions[1].fg, palette::YELLOW);
}

#[test]
fn layout_change_keeps_panel_origin_and_hides_on_next_pass() {
    let mut chart = LineChart::new();
    fill(&mut chart);
    chart.set_panel_origin(Point::new(100.0, 100.0));
    let out = chart.render_output(700.0, 500.0, FixedMetrics::default()).unwrap();
    let screen = Point::new(out.points[0].x + 100.0, out.points[0].y + 100.0);
    assert!(matches!(chart.pointer_moved(screen), Some(HoverEvent::Show(_))));

    let layout = signline_core::Layout { tooltip_offset: 4.0, ..Default::default() };
    chart.set_layout(layout);
    // regions of the previous pass stay live until the next render
    assert_eq!(chart.hover().regions().len(), 4);

    let again = chart.render_output(700.0, 500.0, FixedMetrics::default()).unwrap();
    assert!(again.tooltip_hidden);
    match chart.pointer_moved(screen) {
        Some(HoverEvent::Show(tip)) => {
            assert_eq!(tip.region, 0);
            assert_eq!(tip.at, Point::new(screen.x + 4.0, screen.y + 4.0));
        }
        other => panic!("expected tooltip, got {other:?}"),
    }
}
