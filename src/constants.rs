// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, GREEN_700, ORANGE_800};
use plotters::style::RGBColor;

// Plot dimensions: 6.4 x 4.8 inch figure at 300 DPI.
pub const PLOT_WIDTH: u32 = 1920;
pub const PLOT_HEIGHT: u32 = 1440;

// Fraction of the data range added on each side of a chart axis.
pub const RANGE_PADDING_FRACTION: f64 = 0.05;
// Padding used when the data range collapses to (almost) a single value.
pub const RANGE_PADDING_FLAT: f64 = 0.5;

// Font sizes in pixels (roughly 12pt / 10pt / 8pt at 300 DPI).
pub const FONT_SIZE_CHART_TITLE: i32 = 50;
pub const FONT_SIZE_AXIS_DESC: i32 = 42;
pub const FONT_SIZE_TICK_LABEL: i32 = 33;

// Chart margins and label areas in pixels.
pub const CHART_MARGIN: i32 = 40;
pub const X_LABEL_AREA_SIZE: i32 = 120;
pub const Y_LABEL_AREA_SIZE: i32 = 160;

// --- Plot Color Assignments ---
pub const COLOR_ELEVATION: &RGBColor = &GREEN_700;
pub const COLOR_TRAJECTORY: &RGBColor = &BLUE_700;
pub const COLOR_SPEED: &RGBColor = &ORANGE_800;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 4;

// --- Chart text ---
pub const TITLE_ELEVATION: &str = "Elevation vs time";
pub const TITLE_TRAJECTORY: &str = "X–Z Trajectory";
pub const TITLE_SPEED: &str = "Speed vs time";
pub const LABEL_TIME: &str = "Time (s)";
pub const LABEL_ELEVATION: &str = "Elevation (m)";
pub const LABEL_X: &str = "X";
pub const LABEL_Z: &str = "Z";
pub const LABEL_SPEED: &str = "Speed (m/s)";

// --- Output file names ---
pub const FILE_ELEVATION: &str = "elevation_vs_time.png";
pub const FILE_TRAJECTORY: &str = "trajectory_xz.png";
pub const FILE_SPEED: &str = "speed_vs_time.png";

// --- Input / output defaults ---
pub const DEFAULT_INPUT_EXTENSION: &str = "csv";
pub const DEFAULT_OUTPUT_SUBDIR: &str = "figs";
// Relative to the user's home directory.
pub const DEFAULT_LOG_SUBPATH: [&str; 2] = ["Desktop", "UnityLogs"];
// Environment variable overriding the default log directory.
pub const LOG_DIR_ENV_VAR: &str = "POSLOG_LOG_DIR";

// Minimum number of retained samples needed to draw anything.
pub const MIN_VALID_ROWS: usize = 2;

// src/constants.rs
