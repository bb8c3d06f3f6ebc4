// src/app.rs

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{expand_home, AppConfig};
use crate::data_analysis::kinematics::compute_speed;
use crate::data_input::file_locator::{ensure_output_dir, find_latest_log};
use crate::data_input::log_parser::parse_log_file;
use crate::plot_functions::chart_plan::{planned_charts, render_chart};

/// Files produced by one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub charts: Vec<PathBuf>,
}

/// Locates the newest log in `dir` (or the configured default directory),
/// normalizes it and renders every applicable chart.
/// The progress trace is written to `out`.
pub fn run<W: Write>(
    dir: Option<&Path>,
    config: &AppConfig,
    out: &mut W,
) -> Result<RunSummary, Box<dyn Error>> {
    let base_dir = match dir {
        Some(dir) => expand_home(dir),
        None => config.default_log_dir.clone(),
    };
    debug!("Scanning {:?} for .{} files", base_dir, config.input_extension);

    let input_file = find_latest_log(&base_dir, &config.input_extension)?;
    writeln!(out, "[OK] Latest log: {}", input_file.display())?;

    let series = parse_log_file(&input_file)?;
    let output_dir = ensure_output_dir(&input_file, &config.output_subdir)?;
    writeln!(out, "[OK] Writing charts to: {}", output_dir.display())?;

    let speeds = compute_speed(&series);
    let mut charts = Vec::new();
    for kind in planned_charts(&series) {
        if let Some(path) = render_chart(kind, &series, &speeds, &output_dir)? {
            writeln!(out, "[OK] {}", kind.file_name())?;
            charts.push(path);
        }
    }

    writeln!(out, "\nDone. Output directory: {}", output_dir.display())?;
    Ok(RunSummary {
        input_file,
        output_dir,
        charts,
    })
}

// src/app.rs
