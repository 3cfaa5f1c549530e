//! Polyline bulge segments
//!
//! A bulge on a polyline vertex turns the segment to the next vertex into a
//! circular arc. The bulge is the tangent of a quarter of the included angle;
//! positive bulges run counter-clockwise.

use super::{segments_for_sweep, EPSILON};
use crate::types::Coordinate;
use nalgebra::Vector2;
use std::f64::consts::TAU;

/// Interior points of the arc from `start` to `end` with the given bulge.
///
/// The endpoints themselves are not included. A near-zero bulge or chord
/// yields no points. Interior points take the Z of `start`.
pub fn bulge_to_arc_points(
    start: &Coordinate,
    end: &Coordinate,
    bulge: f64,
    segments: usize,
) -> Vec<Coordinate> {
    if bulge.abs() < EPSILON {
        return Vec::new();
    }

    let chord = end.xy() - start.xy();
    let chord_length = chord.norm();
    if chord_length < EPSILON {
        return Vec::new();
    }

    let sagitta = bulge * chord_length / 2.0;
    let half_chord = chord_length / 2.0;
    let radius = ((half_chord * half_chord + sagitta * sagitta) / (2.0 * sagitta)).abs();
    let included_angle = 4.0 * bulge.atan();

    let midpoint = nalgebra::center(&start.xy(), &end.xy());
    let normal = Vector2::new(-chord.y, chord.x) / chord_length;
    let center = midpoint + normal * (radius - sagitta.abs()) * bulge.signum();

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let end_angle = (end.y - center.y).atan2(end.x - center.x);
    let sweep = if bulge > 0.0 {
        normalize_angle(end_angle - start_angle)
    } else {
        -normalize_angle(start_angle - end_angle)
    };

    let count = segments_for_sweep(included_angle, segments);
    (1..count)
        .map(|i| {
            let angle = start_angle + sweep * i as f64 / count as f64;
            Coordinate {
                x: center.x + radius * angle.cos(),
                y: center.y + radius * angle.sin(),
                z: start.z,
            }
        })
        .collect()
}

/// Bring an angle into `[0, 2π]`
fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    if wrapped == 0.0 && angle > 0.0 {
        TAU
    } else {
        wrapped
    }
}
