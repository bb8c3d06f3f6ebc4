// src/types.rs
// Type aliases shared by the normalizer, the deriver and the charts

use std::ops::Range;

/// One measurement for one role; `None` marks "no valid value" for the sample.
pub type Sample = Option<f64>;

/// A single raw data row, cells in header order.
pub type RawRow = Vec<String>;

/// Points of one chart line, `None` y values break the line.
pub type PlotPoints = Vec<(f64, Sample)>;

/// Continuous line segments ready for drawing.
pub type PlotSegments = Vec<Vec<(f64, f64)>>;

// (x_range, y_range) of a chart
pub type ChartRanges = (Range<f64>, Range<f64>);
