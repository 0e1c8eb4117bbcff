// Radar (spider) charts of keyword shares.
//
// One axis per keyword, evenly spaced around the circle starting at 12
// o'clock and running clockwise. Each series is drawn as a filled polygon
// closed by repeating its first point. The radial limit is 5% above the
// largest share across all series.

use std::f64::consts::{PI, TAU};
use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::{chart_err, BACKGROUND, GRID, INK};
use crate::keywords::comparison::KeywordComparison;
use crate::keywords::summarizer::KeywordDistribution;

pub const SINGLE_COLOR: RGBColor = RGBColor(0xD6, 0x27, 0x28);
pub const UP_COLOR: RGBColor = RGBColor(0x1A, 0xAF, 0x6C);
pub const DOWN_COLOR: RGBColor = RGBColor(0x42, 0x9B, 0xF4);

const SIZE: (u32, u32) = (640, 640);
const CENTER: (i32, i32) = (320, 335);
const RADIUS: f64 = 210.0;
const RINGS: usize = 4;

/// A named set of values, one per axis.
#[derive(Debug, Clone)]
pub struct RadarSeries {
    pub label: String,
    pub values: Vec<f64>,
    pub color: RGBColor,
}

/// Angle of each of `k` axes, in radians clockwise from 12 o'clock.
pub fn axis_angles(k: usize) -> Vec<f64> {
    (0..k).map(|i| i as f64 * TAU / k as f64).collect()
}

/// Repeat the first element at the end so a polygon closes.
pub fn closed<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    if let Some(first) = items.first() {
        out.push(first.clone());
    }
    out
}

/// Outer radius value: 1.05 × the largest value, or 1.0 if all are zero.
pub fn radial_limit(series: &[RadarSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|s| s.values.iter().copied())
        .fold(0.0_f64, f64::max);
    if max > 0.0 {
        max * 1.05
    } else {
        1.0
    }
}

/// Pixel position of `value` on the axis at `angle`. Values above `limit`
/// land outside the outer ring, which is where axis labels go.
pub fn to_pixel(value: f64, limit: f64, angle: f64) -> (i32, i32) {
    let r = (value / limit).max(0.0) * RADIUS;
    let x = CENTER.0 as f64 + r * angle.sin();
    let y = CENTER.1 as f64 - r * angle.cos();
    (x.round() as i32, y.round() as i32)
}

/// Horizontal anchor for an axis label: centered at top and bottom, left
/// on the right half of the circle, right on the left half.
pub fn label_anchor(angle: f64) -> HPos {
    const EPS: f64 = 1e-9;
    if angle.abs() < EPS || (angle - PI).abs() < EPS {
        HPos::Center
    } else if angle < PI {
        HPos::Left
    } else {
        HPos::Right
    }
}

/// Radar chart of a single keyword distribution.
pub fn render_distribution(
    path: &Path,
    title: &str,
    distribution: &KeywordDistribution,
) -> Result<()> {
    let labels: Vec<String> = distribution.tokens().map(str::to_string).collect();
    let series = RadarSeries {
        label: title.to_string(),
        values: distribution
            .entries()
            .iter()
            .map(|e| e.relative_share)
            .collect(),
        color: SINGLE_COLOR,
    };
    render(path, title, &labels, &[series], false)
}

/// Overlaid up/down radar chart of a keyword comparison.
pub fn render_comparison(path: &Path, title: &str, comparison: &KeywordComparison) -> Result<()> {
    let labels: Vec<String> = comparison.tokens().map(str::to_string).collect();
    let series = [
        RadarSeries {
            label: "up".to_string(),
            values: comparison.up_values(),
            color: UP_COLOR,
        },
        RadarSeries {
            label: "down".to_string(),
            values: comparison.down_values(),
            color: DOWN_COLOR,
        },
    ];
    render(path, title, &labels, &series, true)
}

/// Draw the chart and write it to `path` as SVG.
pub fn render(
    path: &Path,
    title: &str,
    labels: &[String],
    series: &[RadarSeries],
    legend: bool,
) -> Result<()> {
    if labels.is_empty() {
        anyhow::bail!("Radar chart '{title}' has no axes to draw");
    }
    if let Some(bad) = series.iter().find(|s| s.values.len() != labels.len()) {
        anyhow::bail!(
            "Series '{}' has {} values for {} axes",
            bad.label,
            bad.values.len(),
            labels.len()
        );
    }

    let angles = axis_angles(labels.len());
    let limit = radial_limit(series);

    let root = SVGBackend::new(path, SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    // Background disc and concentric grid rings with their values
    root.draw(&Circle::new(CENTER, RADIUS as u32, BACKGROUND.filled()))
        .map_err(chart_err)?;
    let ring_label_angle = PI / labels.len() as f64;
    let small = ("sans-serif", 11).into_font().color(&INK);
    for ring in 1..=RINGS {
        let value = limit * ring as f64 / RINGS as f64;
        let ring_radius = (RADIUS * ring as f64 / RINGS as f64).round() as u32;
        root.draw(&Circle::new(CENTER, ring_radius, GRID.stroke_width(1)))
            .map_err(chart_err)?;
        root.draw(&Text::new(
            format!("{value:.2}"),
            to_pixel(value, limit, ring_label_angle),
            small.clone(),
        ))
        .map_err(chart_err)?;
    }

    // Spokes and keyword labels
    let label_style = ("sans-serif", 13).into_font().color(&INK);
    for (label, &angle) in labels.iter().zip(&angles) {
        root.draw(&PathElement::new(
            vec![CENTER, to_pixel(limit, limit, angle)],
            GRID.stroke_width(1),
        ))
        .map_err(chart_err)?;

        let anchor = Pos::new(label_anchor(angle), VPos::Center);
        root.draw(&Text::new(
            label.clone(),
            to_pixel(limit * 1.08, limit, angle),
            label_style.clone().pos(anchor),
        ))
        .map_err(chart_err)?;
    }
    root.draw(&Circle::new(CENTER, RADIUS as u32, INK.stroke_width(1)))
        .map_err(chart_err)?;

    // Data polygons
    for s in series {
        let points: Vec<(i32, i32)> = s
            .values
            .iter()
            .zip(&angles)
            .map(|(&v, &a)| to_pixel(v, limit, a))
            .collect();
        root.draw(&Polygon::new(points.clone(), s.color.mix(0.25).filled()))
            .map_err(chart_err)?;
        root.draw(&PathElement::new(closed(&points), s.color.stroke_width(1)))
            .map_err(chart_err)?;
    }

    let title_style = ("sans-serif", 20)
        .into_font()
        .color(&INK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(title.to_string(), (CENTER.0, 12), title_style))
        .map_err(chart_err)?;

    if legend {
        draw_legend(&root, series)?;
    }

    root.present().map_err(chart_err)?;
    info!(path = %path.display(), axes = labels.len(), "Saved radar chart");
    Ok(())
}

fn draw_legend(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    series: &[RadarSeries],
) -> Result<()> {
    let text_style = ("sans-serif", 13)
        .into_font()
        .color(&INK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    let x = SIZE.0 as i32 - 110;
    for (i, s) in series.iter().enumerate() {
        let y = 50 + i as i32 * 22;
        root.draw(&Rectangle::new([(x, y - 6), (x + 18, y + 6)], s.color.mix(0.6).filled()))
            .map_err(chart_err)?;
        root.draw(&Text::new(s.label.clone(), (x + 26, y), text_style.clone()))
            .map_err(chart_err)?;
    }
    Ok(())
}
