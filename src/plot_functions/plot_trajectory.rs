// src/plot_functions/plot_trajectory.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_TRAJECTORY, FILE_TRAJECTORY, LABEL_X, LABEL_Z, LINE_WIDTH_PLOT, TITLE_TRAJECTORY,
};
use crate::data_input::log_data::NormalizedSeries;
use crate::plot_framework::{draw_line_chart, split_into_segments, PlotConfig, PlotSeries};

/// Builds the planar X-Z path chart. Points are drawn in sample order.
pub fn trajectory_plot_config(series: &NormalizedSeries) -> PlotConfig {
    PlotConfig {
        title: TITLE_TRAJECTORY.to_string(),
        x_label: LABEL_X.to_string(),
        y_label: LABEL_Z.to_string(),
        series: PlotSeries {
            segments: split_into_segments(&series.trajectory_points()),
            color: *COLOR_TRAJECTORY,
            stroke_width: LINE_WIDTH_PLOT,
        },
    }
}

pub fn plot_trajectory(
    series: &NormalizedSeries,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(FILE_TRAJECTORY);
    draw_line_chart(&output_file, &trajectory_plot_config(series))?;
    Ok(output_file)
}

// src/plot_functions/plot_trajectory.rs
