//! Matrix expansion
//!
//! Expands the axes a file spec varies over into the full cross-product of
//! matrix points. Points come out in row-major order: axes in their global
//! declaration order with earlier axes varying slowest, values in their
//! declared order. Downstream file naming and iteration order rely on this.

use crate::domain::{AxisTable, Coord, MatrixPoint};

/// Expands the cross-product of matrix points for a file spec.
///
/// `varied` lists the axis names the file spec varies over; the remaining
/// global axes are pinned to their default (first declared) value so every
/// point is a total assignment. Zero varied axes yield exactly one
/// fully-pinned point, the unconditional output.
pub fn expand(axes: &AxisTable, varied: &[String]) -> Vec<MatrixPoint> {
    // Per-axis candidate values, global declaration order
    let lanes: Vec<(&str, Vec<&str>, bool)> = axes
        .iter()
        .map(|axis| {
            let is_varied = varied.iter().any(|v| v == &axis.name);
            let values: Vec<&str> = if is_varied {
                axis.values.iter().map(String::as_str).collect()
            } else {
                vec![axis.default_value()]
            };
            (axis.name.as_str(), values, is_varied)
        })
        .collect();

    let total: usize = lanes.iter().map(|(_, values, _)| values.len()).product();
    let mut points = Vec::with_capacity(total);

    // Odometer over the lanes, last axis ticking fastest
    let mut indices = vec![0usize; lanes.len()];
    for _ in 0..total {
        let coords = lanes
            .iter()
            .zip(&indices)
            .map(|((name, values, is_varied), &i)| Coord {
                axis: (*name).to_string(),
                value: values[i].to_string(),
                varied: *is_varied,
            })
            .collect();
        points.push(MatrixPoint::new(coords));

        for lane in (0..lanes.len()).rev() {
            indices[lane] += 1;
            if indices[lane] < lanes[lane].1.len() {
                break;
            }
            indices[lane] = 0;
        }
    }

    points
}
