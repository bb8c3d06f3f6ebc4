// src/plot_functions/plot_elevation.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_ELEVATION, FILE_ELEVATION, LABEL_ELEVATION, LABEL_TIME, LINE_WIDTH_PLOT,
    TITLE_ELEVATION,
};
use crate::data_input::log_data::NormalizedSeries;
use crate::plot_framework::{draw_line_chart, split_into_segments, PlotConfig, PlotSeries};

/// Builds the elevation-vs-time chart, `None` when the log carries no elevation.
pub fn elevation_plot_config(series: &NormalizedSeries) -> Option<PlotConfig> {
    let points = series.elevation_points()?;
    Some(PlotConfig {
        title: TITLE_ELEVATION.to_string(),
        x_label: LABEL_TIME.to_string(),
        y_label: LABEL_ELEVATION.to_string(),
        series: PlotSeries {
            segments: split_into_segments(&points),
            color: *COLOR_ELEVATION,
            stroke_width: LINE_WIDTH_PLOT,
        },
    })
}

/// Generates the elevation chart in `output_dir`. Returns the written path,
/// or `None` if the chart was skipped for lack of elevation data.
pub fn plot_elevation(
    series: &NormalizedSeries,
    output_dir: &Path,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let Some(config) = elevation_plot_config(series) else {
        return Ok(None);
    };
    let output_file = output_dir.join(FILE_ELEVATION);
    draw_line_chart(&output_file, &config)?;
    Ok(Some(output_file))
}

// src/plot_functions/plot_elevation.rs
