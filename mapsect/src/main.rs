#![allow(clippy::cast_possible_truncation)]

mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use itertools::Itertools;
use options::{Cli, Command as CliCmd};
use plotters::prelude::*;
use section::{Profile, SampleSet};
use serde::Serialize;
use std::{io::Write, path::Path};
use textplots::{Chart, Plot, Shape};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let Cli {
        scale,
        distances,
        altitudes,
        cmd,
    } = Cli::parse();

    let samples = SampleSet::from_text(&distances, &altitudes)?;
    let profile = Profile::builder().samples(samples).scale(scale).build()?;

    match cmd {
        CliCmd::Csv => print_csv(&profile)?,
        CliCmd::Json => print_json(&profile)?,
        CliCmd::Plot => plot_ascii(&profile),
        CliCmd::Render { out } => render_png(&profile, &out)?,
        CliCmd::Stats => print_stats(&profile),
    };
    Ok(())
}

fn print_csv(profile: &Profile) -> Result<(), AnyError> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "Distance,Altitude")?;
    for (distance, altitude) in profile.x_grid.iter().zip(profile.y_smooth.iter()) {
        writeln!(stdout, "{distance},{altitude}")?;
    }
    Ok(())
}

fn print_json(profile: &Profile) -> Result<(), AnyError> {
    #[derive(Serialize)]
    struct JsonEntry {
        distance_km: f64,
        altitude_m: f64,
    }

    #[derive(Serialize)]
    struct JsonProfile {
        scale: String,
        y_min: f64,
        y_max: f64,
        knots: Vec<JsonEntry>,
        curve: Vec<JsonEntry>,
    }

    let entries = |xs: &[f64], ys: &[f64]| {
        xs.iter()
            .zip(ys.iter())
            .map(|(&distance_km, &altitude_m)| JsonEntry {
                distance_km,
                altitude_m,
            })
            .collect::<Vec<JsonEntry>>()
    };

    let json = serde_json::to_string(&JsonProfile {
        scale: profile.scale.to_string(),
        y_min: profile.y_min,
        y_max: profile.y_max,
        knots: entries(&profile.distances_km, &profile.altitudes_m),
        curve: entries(&profile.x_grid, &profile.y_smooth),
    })?;
    println!("{json}");
    Ok(())
}

fn plot_ascii(profile: &Profile) {
    let plot_data: Vec<(f32, f32)> = profile
        .x_grid
        .iter()
        .zip(profile.y_smooth.iter())
        .map(|(&distance, &altitude)| (distance as f32, altitude as f32))
        .collect();
    // Unwrap is fine: the grid always has 600 points.
    Chart::new(
        300,
        150,
        profile.x_grid[0] as f32,
        *profile.x_grid.last().unwrap() as f32,
    )
    .lineplot(&Shape::Lines(&plot_data))
    .display();
}

/// Terrain line and fill colors, matching the usual sepia cross-section
/// styling.
const LINE: RGBColor = RGBColor(78, 52, 46);
const FILL: RGBColor = RGBColor(141, 110, 99);

fn render_png(profile: &Profile, out: &Path) -> Result<(), AnyError> {
    let root = BitMapBackend::new(out, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let x_min = profile.x_grid[0];
    let x_max = *profile.x_grid.last().unwrap();

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Topographic cross-section ({})", profile.scale),
            ("sans-serif", 28),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, profile.y_min..profile.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Cumulative distance (km)")
        .y_desc("Altitude (m)")
        .draw()?;

    let curve = || {
        profile
            .x_grid
            .iter()
            .copied()
            .zip(profile.y_smooth.iter().copied())
    };

    chart.draw_series(AreaSeries::new(curve(), profile.y_min, &FILL.mix(0.3)))?;
    chart
        .draw_series(LineSeries::new(curve(), LINE.stroke_width(3)))?
        .label("Topography")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &LINE));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;
    Ok(())
}

fn print_stats(profile: &Profile) {
    let (ascent_m, descent_m) = profile
        .y_smooth
        .iter()
        .copied()
        .tuple_windows::<(f64, f64)>()
        .fold((0.0, 0.0), |(up, down), (y0, y1)| {
            let dy = y1 - y0;
            if dy > 0.0 {
                (up + dy, down)
            } else {
                (up, down - dy)
            }
        });
    let (lo_m, hi_m) = profile
        .altitudes_m
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &alt| {
            (lo.min(alt), hi.max(alt))
        });
    // Unwrap is fine: the grid always has 600 points.
    let span_km = profile.x_grid.last().unwrap() - profile.x_grid[0];

    println!("scale:    {}", profile.scale);
    println!("span:     {span_km:.3} km");
    println!("altitude: {lo_m:.1}..{hi_m:.1} m");
    println!("ascent:   {ascent_m:.1} m");
    println!("descent:  {descent_m:.1} m");
}
