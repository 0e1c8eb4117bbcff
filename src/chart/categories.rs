// Bar chart of enrichment rows per category.

use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use tracing::info;

use super::{chart_err, GRID, INK};
use crate::output::truncate_chars;

const BAR_COLOR: RGBColor = RGBColor(0x4C, 0x72, 0xB0);
const HEIGHT: u32 = 420;
const MARGIN_LEFT: i32 = 60;
const MARGIN_RIGHT: i32 = 20;
const MARGIN_TOP: i32 = 50;
const MARGIN_BOTTOM: i32 = 70;
const SLOT_WIDTH: i32 = 90;

/// Tick step giving at most five intervals up to `max`.
pub fn tick_step(max: usize) -> usize {
    max.div_ceil(5).max(1)
}

/// Left and right pixel edges of each of `n` bars inside `[x0, x0 + width)`.
/// Bars fill 70% of their slot and are centered in it.
pub fn bar_spans(n: usize, x0: i32, width: i32) -> Vec<(i32, i32)> {
    if n == 0 {
        return Vec::new();
    }
    // Edges at width * (20i + k) / 20n, rounded half up in integers
    let denom = 20 * n as i64;
    let edge = |twentieths: i64| {
        let numer = width as i64 * twentieths;
        x0 + ((2 * numer + denom) / (2 * denom)) as i32
    };
    (0..n as i64)
        .map(|i| (edge(20 * i + 3), edge(20 * i + 17)))
        .collect()
}

/// Write a bar chart of `counts` to `path` as SVG.
pub fn render_category_counts(path: &Path, title: &str, counts: &[(String, usize)]) -> Result<()> {
    if counts.is_empty() {
        anyhow::bail!("Category chart '{title}' has no categories to draw");
    }

    let plot_width = SLOT_WIDTH * counts.len() as i32;
    let width = (MARGIN_LEFT + plot_width + MARGIN_RIGHT).max(400) as u32;
    let plot_bottom = HEIGHT as i32 - MARGIN_BOTTOM;
    let plot_height = plot_bottom - MARGIN_TOP;

    let max = counts.iter().map(|(_, c)| *c).max().unwrap_or(0);
    let step = tick_step(max);
    let axis_max = (max.div_ceil(step) * step).max(step);
    let y_of = |v: usize| {
        plot_bottom - (v as f64 / axis_max as f64 * plot_height as f64).round() as i32
    };

    let root = SVGBackend::new(path, (width, HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    // Horizontal grid lines with count labels
    let tick_style = ("sans-serif", 11)
        .into_font()
        .color(&INK)
        .pos(Pos::new(HPos::Right, VPos::Center));
    for v in (0..=axis_max).step_by(step) {
        let y = y_of(v);
        root.draw(&PathElement::new(
            vec![(MARGIN_LEFT, y), (MARGIN_LEFT + plot_width, y)],
            GRID.stroke_width(1),
        ))
        .map_err(chart_err)?;
        root.draw(&Text::new(v.to_string(), (MARGIN_LEFT - 6, y), tick_style.clone()))
            .map_err(chart_err)?;
    }

    let label_style = ("sans-serif", 12)
        .into_font()
        .color(&INK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for ((category, count), (left, right)) in counts
        .iter()
        .zip(bar_spans(counts.len(), MARGIN_LEFT, plot_width))
    {
        root.draw(&Rectangle::new(
            [(left, y_of(*count)), (right, plot_bottom)],
            BAR_COLOR.filled(),
        ))
        .map_err(chart_err)?;
        root.draw(&Text::new(
            truncate_chars(category, 12),
            ((left + right) / 2, plot_bottom + 8),
            label_style.clone(),
        ))
        .map_err(chart_err)?;
    }

    root.draw(&PathElement::new(
        vec![
            (MARGIN_LEFT, MARGIN_TOP),
            (MARGIN_LEFT, plot_bottom),
            (MARGIN_LEFT + plot_width, plot_bottom),
        ],
        INK.stroke_width(1),
    ))
    .map_err(chart_err)?;

    let title_style = ("sans-serif", 18)
        .into_font()
        .color(&INK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    root.draw(&Text::new(title.to_string(), (width as i32 / 2, 12), title_style))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    info!(path = %path.display(), categories = counts.len(), "Saved category chart");
    Ok(())
}
