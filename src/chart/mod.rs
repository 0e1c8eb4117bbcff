// SVG charts — keyword radar charts and the category count bar chart.
//
// Charts are drawn straight onto a plotters SVG drawing area in pixel
// coordinates. Nothing here measures text, so no system fonts are needed.

pub mod categories;
pub mod radar;

use plotters::style::RGBColor;

pub const BACKGROUND: RGBColor = RGBColor(0xFA, 0xFA, 0xFA);
pub const GRID: RGBColor = RGBColor(0xAA, 0xAA, 0xAA);
pub const INK: RGBColor = RGBColor(0x22, 0x22, 0x22);

/// Flatten a plotters drawing error into anyhow.
pub(crate) fn chart_err<E: std::fmt::Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("Chart rendering failed: {e}")
}
