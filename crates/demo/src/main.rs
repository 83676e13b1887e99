// File: crates/demo/src/main.rs
// Summary: Demo loads `label,value` rows from CSV (or the built-in sample), renders a PNG
// through Skia and optionally simulates one pointer move over the result.

use anyhow::{Context, Result};
use signline_core::{palette, HoverEvent, LineChart, Point};
use signline_skia::{render_chart_png, RenderOptions, TextShaper};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Args {
    input: Option<PathBuf>,
    out: PathBuf,
    opts: RenderOptions,
    split: Option<bool>,
    mean: bool,
    currency: bool,
    labels: bool,
    colors: Option<[String; 4]>,
    hover: Option<Point>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut chart = LineChart::new();

    match &args.input {
        Some(path) => {
            let rows = load_points_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            info!(rows = rows.len(), path = %path.display(), "loaded points");
            if rows.is_empty() {
                anyhow::bail!("no points loaded; check headers/delimiter.");
            }
            for (label, value) in rows {
                match label {
                    Some(l) => chart.add_labeled_point(value, l),
                    None => chart.add_point(value),
                }
            }
            chart.set_split_axis(args.split.unwrap_or(true));
        }
        None => {
            // Sample: positive values on a pinned axis with currency labels and the mean band
            for (v, l) in [(5000.0, "Dato1"), (100000.0, "Dato2"), (30000.0, "Dato3"), (0.0, "Dato4"), (80000.0, "Dato5")] {
                chart.add_labeled_point(v, l);
            }
            chart.set_split_axis(args.split.unwrap_or(false));
            chart.set_currency_format(true);
            chart.set_show_mean_line(true);
        }
    }
    if args.currency {
        chart.set_currency_format(true);
    }
    if args.mean {
        chart.set_show_mean_line(true);
    }
    chart.set_show_label_in_tooltip(args.labels);
    if let Some([pos, neg, bg, fg]) = &args.colors {
        let pick = |name: &str| palette::find(name).with_context(|| format!("unknown palette color '{name}'"));
        chart.set_colors(pick(pos)?, pick(neg)?, pick(bg)?, pick(fg)?);
    }

    let shaper = TextShaper::new();
    let out = render_chart_png(&mut chart, &args.opts, &shaper, &args.out)?;
    println!("Wrote {} ({} regions)", args.out.display(), out.regions.len());

    if let Some(p) = args.hover {
        match chart.pointer_moved(p) {
            Some(HoverEvent::Show(tip)) => println!(
                "Tooltip at ({:.0}, {:.0}) [{} on {}]: {}",
                tip.at.x,
                tip.at.y,
                tip.fg.to_hex(),
                tip.bg.to_hex(),
                tip.text.replace('\n', " / ")
            ),
            Some(HoverEvent::Hide) | None => println!("No region under ({:.0}, {:.0})", p.x, p.y),
        }
    }
    Ok(())
}

fn usage() -> &'static str {
    "usage: signline-demo [CSV] [--out PATH] [--width W] [--height H] [--split|--no-split] \
     [--mean] [--currency] [--labels] [--colors POS,NEG,BG,FG] [--hover X,Y]"
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args {
        input: None,
        out: PathBuf::from("target/out/signline.png"),
        opts: RenderOptions::default(),
        split: None,
        mean: false,
        currency: false,
        labels: false,
        colors: None,
        hover: None,
    };
    while let Some(a) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value\n{}", usage()));
        match a.as_str() {
            "--out" => args.out = PathBuf::from(value("--out")?),
            "--width" => args.opts.width = value("--width")?.parse().context("--width")?,
            "--height" => args.opts.height = value("--height")?.parse().context("--height")?,
            "--split" => args.split = Some(true),
            "--no-split" => args.split = Some(false),
            "--mean" => args.mean = true,
            "--currency" => args.currency = true,
            "--labels" => args.labels = true,
            "--colors" => {
                let raw = value("--colors")?;
                let parts: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
                let four: [String; 4] = parts
                    .try_into()
                    .map_err(|_| anyhow::anyhow!("--colors expects four names, got '{raw}'"))?;
                args.colors = Some(four);
            }
            "--hover" => {
                let raw = value("--hover")?;
                let (x, y) = raw.split_once(',').with_context(|| format!("--hover expects X,Y, got '{raw}'"))?;
                args.hover = Some(Point::new(x.trim().parse()?, y.trim().parse()?));
            }
            "-h" | "--help" => {
                println!("{}", usage());
                std::process::exit(0);
            }
            s if s.starts_with("--") => anyhow::bail!("unknown flag {s}\n{}", usage()),
            path => args.input = Some(PathBuf::from(path)),
        }
    }
    Ok(args)
}

/// Load `label,value` rows. A value-only file works too; missing labels fall
/// back to the point index on the chart.
fn load_points_csv(path: &Path) -> Result<Vec<(Option<String>, f64)>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_label = idx(&["label", "name", "category", "date"]);
    let i_value = idx(&["value", "amount", "y", "total"]).unwrap_or(if headers.len() > 1 { 1 } else { 0 });

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let value = rec.get(i_value).and_then(|s| s.trim().parse::<f64>().ok());
        let label = i_label.and_then(|i| rec.get(i)).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        match value {
            Some(v) => out.push((label, v)),
            None => warn!(row = row + 2, "skipping row without a numeric value"),
        }
    }
    Ok(out)
}
