//! Circle, arc and ellipse sampling

use super::segments_for_sweep;
use crate::types::Coordinate;
use std::f64::consts::TAU;

fn on_circle(center: &Coordinate, radius: f64, angle: f64) -> Coordinate {
    let (sin, cos) = angle.sin_cos();
    Coordinate {
        x: center.x + radius * cos,
        y: center.y + radius * sin,
        z: center.z,
    }
}

/// Sample a full circle as a closed ring of `segments + 1` points.
///
/// The last point repeats the first exactly. Z is carried from the center.
pub fn tessellate_circle(center: &Coordinate, radius: f64, segments: usize) -> Vec<Coordinate> {
    let segments = segments.max(1);
    let mut ring: Vec<Coordinate> = (0..segments)
        .map(|i| on_circle(center, radius, i as f64 / segments as f64 * TAU))
        .collect();
    ring.push(ring[0]);
    ring
}

/// Sample a counter-clockwise arc given in degrees.
///
/// An end angle at or before the start wraps around a full turn.
pub fn tessellate_arc(
    center: &Coordinate,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
) -> Vec<Coordinate> {
    let start = start_angle.to_radians();
    let mut end = end_angle.to_radians();
    if end <= start {
        end += TAU;
    }
    sample_sweep(center, radius, start, end - start, segments)
}

/// Sample an arc given in radians with an explicit direction.
///
/// The sweep is positive for counter-clockwise arcs and negative otherwise,
/// wrapping a full turn when the angles would give the wrong sign.
pub fn tessellate_arc_radians(
    center: &Coordinate,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
    counter_clockwise: bool,
    segments: usize,
) -> Vec<Coordinate> {
    let sweep = if counter_clockwise {
        positive_sweep(end_angle - start_angle)
    } else {
        -positive_sweep(start_angle - end_angle)
    };
    sample_sweep(center, radius, start_angle, sweep, segments)
}

/// Sample an ellipse or elliptical arc.
///
/// `major_axis` is the major axis endpoint relative to the center, `ratio`
/// the minor to major length ratio and the parameters are in radians. A
/// sweep covering the whole ellipse yields a closed ring.
pub fn tessellate_ellipse(
    center: &Coordinate,
    major_axis: &Coordinate,
    ratio: f64,
    start_parameter: f64,
    end_parameter: f64,
    segments: usize,
) -> Vec<Coordinate> {
    let major = major_axis.x.hypot(major_axis.y);
    let minor = major * ratio;
    let (sin_r, cos_r) = major_axis.y.atan2(major_axis.x).sin_cos();
    let sweep = positive_sweep(end_parameter - start_parameter);
    let count = segments_for_sweep(sweep, segments);

    let mut points: Vec<Coordinate> = (0..=count)
        .map(|i| {
            let (sin, cos) = (start_parameter + sweep * i as f64 / count as f64).sin_cos();
            let (ex, ey) = (major * cos, minor * sin);
            Coordinate {
                x: center.x + ex * cos_r - ey * sin_r,
                y: center.y + ex * sin_r + ey * cos_r,
                z: center.z,
            }
        })
        .collect();

    if (sweep - TAU).abs() < 1e-9 {
        points[count] = points[0];
    }
    points
}

fn positive_sweep(sweep: f64) -> f64 {
    if sweep <= 0.0 {
        sweep + TAU
    } else {
        sweep
    }
}

fn sample_sweep(
    center: &Coordinate,
    radius: f64,
    start: f64,
    sweep: f64,
    segments: usize,
) -> Vec<Coordinate> {
    let count = segments_for_sweep(sweep, segments);
    (0..=count)
        .map(|i| on_circle(center, radius, start + sweep * i as f64 / count as f64))
        .collect()
}
