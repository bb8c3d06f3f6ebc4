// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::Text;
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::error::Error;
use std::path::Path;

use crate::constants::{
    CHART_MARGIN, FONT_SIZE_CHART_TITLE, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FLAT,
    RANGE_PADDING_FRACTION, X_LABEL_AREA_SIZE, Y_LABEL_AREA_SIZE,
};
use crate::font_config::{
    FONT_FAMILY_SYSTEM, FONT_TUPLE_AXIS_DESC, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_TICK_LABEL,
};
use crate::types::{ChartRanges, PlotSegments, Sample};

/// Calculate plot range with padding.
/// Adds 5% padding on each side, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 {
        RANGE_PADDING_FLAT
    } else {
        range * RANGE_PADDING_FRACTION
    };
    (min - padding, max + padding)
}

/// Splits a sampled line into continuous segments. A missing y value ends
/// the current segment, so lines never bridge gaps in the data.
pub fn split_into_segments(points: &[(f64, Sample)]) -> PlotSegments {
    let mut segments: PlotSegments = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    for &(x, y) in points {
        match y {
            Some(y) if x.is_finite() && y.is_finite() => current.push((x, y)),
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Padded x and y ranges covering every point of `segments`, `None` if there are no points.
pub fn segment_ranges(segments: &PlotSegments) -> Option<ChartRanges> {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for &(x, y) in segments.iter().flatten() {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    if !x_min.is_finite() || !y_min.is_finite() {
        return None;
    }
    let (x_lo, x_hi) = calculate_range(x_min, x_max);
    let (y_lo, y_hi) = calculate_range(y_min, y_max);
    Some((x_lo..x_hi, y_lo..y_hi))
}

/// Tick label formatting shared by both axes.
/// Large magnitudes use "k"/"M" notation, fractional values below 10 get one decimal.
pub fn format_axis_value(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if magnitude >= 10_000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else if magnitude < 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

#[derive(Clone)]
pub struct PlotSeries {
    pub segments: PlotSegments,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: PlotSeries,
}

impl PlotConfig {
    pub fn ranges(&self) -> Option<ChartRanges> {
        segment_ranges(&self.series.segments)
    }
}

/// Draw a "Data Unavailable" message in the middle of a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_title: &str,
    reason: &str,
) -> Result<(), Box<dyn Error>> {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (x_range, y_range) = area.get_pixel_range();
    let (width, height) = (x_range.end - x_range.start, y_range.end - y_range.start);
    let message = format!("{plot_title}: Data Unavailable ({reason})");

    let estimated_text_width =
        (message.chars().count() as f32 * FONT_SIZE_CHART_TITLE as f32 * CHAR_WIDTH_RATIO) as i32;
    let center_x = (width / 2 - estimated_text_width / 2).max(0);
    let center_y = height / 2 - FONT_SIZE_CHART_TITLE / 2;

    let text_style = (FONT_FAMILY_SYSTEM, FONT_SIZE_CHART_TITLE)
        .into_font()
        .color(&RED);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

/// Renders one line chart to a PNG at `output_path`, replacing any existing file.
/// The bitmap backend lives only for the duration of this call.
pub fn draw_line_chart(output_path: &Path, config: &PlotConfig) -> Result<(), Box<dyn Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let Some((x_range, y_range)) = config.ranges() else {
        draw_unavailable_message(&root_area, &config.title, "no valid samples")?;
        root_area.present()?;
        return Ok(());
    };

    let mut chart = ChartBuilder::on(&root_area)
        .caption(&config.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(BLACK.mix(0.05))
        .bold_line_style(BLACK.mix(0.15))
        .axis_desc_style(FONT_TUPLE_AXIS_DESC)
        .label_style(FONT_TUPLE_TICK_LABEL)
        .draw()?;

    let style = config.series.color.stroke_width(config.series.stroke_width);
    for segment in &config.series.segments {
        chart.draw_series(LineSeries::new(segment.iter().copied(), style))?;
    }

    root_area.present()?;
    Ok(())
}


// src/plot_framework.rs
