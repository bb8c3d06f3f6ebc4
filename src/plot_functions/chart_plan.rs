// src/plot_functions/chart_plan.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{FILE_ELEVATION, FILE_SPEED, FILE_TRAJECTORY};
use crate::data_input::log_data::NormalizedSeries;
use crate::plot_functions::plot_elevation::plot_elevation;
use crate::plot_functions::plot_speed::plot_speed;
use crate::plot_functions::plot_trajectory::plot_trajectory;
use crate::types::Sample;

/// The charts a run can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Elevation,
    Trajectory,
    Speed,
}

impl ChartKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Elevation => FILE_ELEVATION,
            ChartKind::Trajectory => FILE_TRAJECTORY,
            ChartKind::Speed => FILE_SPEED,
        }
    }
}

/// Charts to produce for `series`, in output order. Elevation is skipped without elevation data.
pub fn planned_charts(series: &NormalizedSeries) -> Vec<ChartKind> {
    let mut charts = Vec::with_capacity(3);
    if series.has_elevation() {
        charts.push(ChartKind::Elevation);
    }
    charts.push(ChartKind::Trajectory);
    charts.push(ChartKind::Speed);
    charts
}

/// Renders one chart into `output_dir` and returns the written file.
pub fn render_chart(
    kind: ChartKind,
    series: &NormalizedSeries,
    speeds: &[Sample],
    output_dir: &Path,
) -> Result<Option<PathBuf>, Box<dyn Error>> {
    match kind {
        ChartKind::Elevation => plot_elevation(series, output_dir),
        ChartKind::Trajectory => plot_trajectory(series, output_dir).map(Some),
        ChartKind::Speed => plot_speed(series, speeds, output_dir).map(Some),
    }
}


// src/plot_functions/chart_plan.rs
