use anyhow::{Context, Result, bail};

use nabu_path::logging::{LoggingConfig, init_logging};
use nabu_path::{Path, PathMeasure};
use nabu_svg::{Coordinates, from_svg, to_svg};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut relative = false;
    let mut input: Option<String> = None;
    for arg in std::env::args().skip(1) {
        if arg == "--relative" {
            relative = true;
        } else if arg == "--help" || arg == "-h" {
            print_usage();
            return Ok(());
        } else if input.is_none() {
            input = Some(arg);
        } else {
            bail!("unexpected argument {arg:?}");
        }
    }
    let Some(d) = input else {
        print_usage();
        bail!("missing path data argument");
    };

    let path = from_svg(&d).with_context(|| format!("cannot parse {d:?}"))?;
    log::debug!("parsed {} verbs over {} points", path.count_verbs(), path.count_points());
    report(&path, relative);
    Ok(())
}

fn print_usage() {
    println!("usage: nabu-inspect [--relative] \"<svg path data>\"");
    println!();
    println!("  Parses the path, prints its structure, classification, and");
    println!("  per-contour arc lengths, then re-encodes it.");
}

fn report(path: &Path, relative: bool) {
    println!("verbs:   {}", path.count_verbs());
    println!("points:  {}", path.count_points());
    println!("fill:    {:?}", path.fill_type());

    let b = path.bounds();
    println!(
        "bounds:  ({}, {}) .. ({}, {})",
        b.left(),
        b.top(),
        b.right(),
        b.bottom()
    );

    if let Some([a, b]) = path.is_line() {
        println!("shape:   line ({}, {}) -> ({}, {})", a.x, a.y, b.x, b.y);
    } else if let Some(info) = path.is_rect() {
        println!(
            "shape:   rect {:?} ({:?}, {})",
            info.rect,
            info.direction,
            if info.is_closed { "closed" } else { "open" }
        );
    } else if let Some(bounds) = path.is_oval() {
        println!("shape:   oval in {bounds:?}");
    } else if let Some(rr) = path.is_rrect() {
        println!("shape:   round rect {:?} radii ({}, {})", rr.rect, rr.radii.x, rr.radii.y);
    } else {
        println!("shape:   freeform");
    }

    let measure = PathMeasure::new(path);
    for (i, contour) in measure.contours().iter().enumerate() {
        println!(
            "contour {i}: {} segment(s), length {:.3}{}",
            contour.segments().len(),
            contour.total_length(),
            if contour.is_closed() { ", closed" } else { "" }
        );
    }

    let style = if relative { Coordinates::Relative } else { Coordinates::Absolute };
    println!("encoded: {}", to_svg(path, style));
}
