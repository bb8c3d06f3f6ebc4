// src/data_analysis/kinematics.rs

use crate::data_input::log_data::NormalizedSeries;
use crate::types::{PlotPoints, Sample};

/// Instantaneous speed by backward finite differences.
///
/// `speed[0]` is always `None`. For `i >= 1`, `speed[i]` is the 3D distance
/// between samples `i-1` and `i` divided by the elapsed-time delta, or the
/// planar X/Z distance when the log has no elevation. A non-positive delta
/// gives `None` for that sample; so does a missing elevation value on either
/// side when elevation is present. No smoothing or outlier rejection.
pub fn compute_speed(series: &NormalizedSeries) -> Vec<Sample> {
    let n = series.len();
    let mut speeds = Vec::with_capacity(n);
    if n == 0 {
        return speeds;
    }
    speeds.push(None);

    for i in 1..n {
        let dt = series.elapsed[i] - series.elapsed[i - 1];
        if dt <= 0.0 {
            speeds.push(None);
            continue;
        }

        let dy = match &series.y {
            Some(y) => match (y[i], y[i - 1]) {
                (Some(curr), Some(prev)) => curr - prev,
                _ => {
                    speeds.push(None);
                    continue;
                }
            },
            None => 0.0,
        };
        let dx = series.x[i] - series.x[i - 1];
        let dz = series.z[i] - series.z[i - 1];

        let distance = (dx * dx + dy * dy + dz * dz).sqrt();
        speeds.push(Some(distance / dt));
    }

    speeds
}

/// Pairs each speed sample with its elapsed time.
pub fn speed_points(series: &NormalizedSeries, speeds: &[Sample]) -> PlotPoints {
    series
        .elapsed
        .iter()
        .copied()
        .zip(speeds.iter().copied())
        .collect()
}


// src/data_analysis/kinematics.rs
