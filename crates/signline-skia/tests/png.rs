// File: crates/signline-skia/tests/png.rs
// Purpose: End-to-end render through Skia: PNG shape, background pixel, region install.

use signline_core::{palette, LineChart};
use signline_skia::{render_chart_png, render_chart_png_bytes, RenderOptions, TextShaper};

fn sample_chart() -> LineChart {
    let mut chart = LineChart::new();
    chart.add_labeled_point(5000.0, "Dato1");
    chart.add_labeled_point(100000.0, "Dato2");
    chart.add_labeled_point(30000.0, "Dato3");
    chart.add_labeled_point(0.0, "Dato4");
    chart.add_labeled_point(80000.0, "Dato5");
    chart.set_split_axis(false);
    chart.set_currency_format(true);
    chart.set_show_mean_line(true);
    chart
}

#[test]
fn render_png_bytes_decode_to_panel_size() {
    let mut chart = sample_chart();
    let shaper = TextShaper::new();
    let opts = RenderOptions::default();
    let (bytes, out) = render_chart_png_bytes(&mut chart, &opts, &shaper).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    assert_eq!(out.regions.len(), 6);
    assert_eq!(chart.hover().regions().len(), 6);

    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (opts.width as u32, opts.height as u32));
    let bg = palette::GRAY;
    assert_eq!(img.get_pixel(0, 0).0, [bg.r, bg.g, bg.b, 255]);
}

#[test]
fn render_png_file_smoke() {
    let mut chart = sample_chart();
    let out = std::path::PathBuf::from("target/test_out/signline_smoke.png");
    render_chart_png(&mut chart, &RenderOptions { width: 640, height: 360 }, &TextShaper::new(), &out)
        .expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");
}

#[test]
fn empty_chart_is_an_error() {
    let mut chart = LineChart::new();
    let err = render_chart_png_bytes(&mut chart, &RenderOptions::default(), &TextShaper::new()).unwrap_err();
    assert!(format!("{err:#}").contains("no data points"));
}
