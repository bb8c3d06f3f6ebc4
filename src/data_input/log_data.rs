// src/data_input/log_data.rs

use crate::types::{PlotPoints, Sample};

/// Column-wise, index-aligned samples of one positional log.
/// Sample `i` of every sequence describes the same observation instant.
/// Built once by the parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSeries {
    pub time: Option<Vec<Sample>>, // Raw timestamp column, `None` if the log has no time column.
    pub elapsed: Vec<f64>,         // Session-relative time in seconds.
    pub x: Vec<f64>,
    pub y: Option<Vec<Sample>>, // Elevation, `None` when no row carried a valid value.
    pub z: Vec<f64>,
}

impl NormalizedSeries {
    pub fn len(&self) -> usize {
        self.elapsed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elapsed.is_empty()
    }

    pub fn has_elevation(&self) -> bool {
        self.y.is_some()
    }

    /// Elapsed time paired with elevation, for the elevation chart.
    pub fn elevation_points(&self) -> Option<PlotPoints> {
        self.y
            .as_ref()
            .map(|y| self.elapsed.iter().copied().zip(y.iter().copied()).collect())
    }

    /// X/Z path of the session, in sample order.
    pub fn trajectory_points(&self) -> PlotPoints {
        self.x.iter().copied().zip(self.z.iter().map(|&z| Some(z))).collect()
    }
}

// src/data_input/log_data.rs
