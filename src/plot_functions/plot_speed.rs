// src/plot_functions/plot_speed.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_SPEED, FILE_SPEED, LABEL_SPEED, LABEL_TIME, LINE_WIDTH_PLOT, TITLE_SPEED,
};
use crate::data_analysis::kinematics::speed_points;
use crate::data_input::log_data::NormalizedSeries;
use crate::plot_framework::{draw_line_chart, split_into_segments, PlotConfig, PlotSeries};
use crate::types::Sample;

/// Builds the speed-vs-time chart. Undefined speed samples leave gaps in the line.
pub fn speed_plot_config(series: &NormalizedSeries, speeds: &[Sample]) -> PlotConfig {
    PlotConfig {
        title: TITLE_SPEED.to_string(),
        x_label: LABEL_TIME.to_string(),
        y_label: LABEL_SPEED.to_string(),
        series: PlotSeries {
            segments: split_into_segments(&speed_points(series, speeds)),
            color: *COLOR_SPEED,
            stroke_width: LINE_WIDTH_PLOT,
        },
    }
}

pub fn plot_speed(
    series: &NormalizedSeries,
    speeds: &[Sample],
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(FILE_SPEED);
    draw_line_chart(&output_file, &speed_plot_config(series, speeds))?;
    Ok(output_file)
}

// src/plot_functions/plot_speed.rs
