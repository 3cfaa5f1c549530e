//! Rational B-spline evaluation

use super::EPSILON;
use crate::types::Coordinate;
use nalgebra::Vector4;
use std::borrow::Cow;

/// Sample a (rational) B-spline at `num_points` uniform parameter values.
///
/// The curve is evaluated with De Boor's algorithm on homogeneous points, so
/// weighted and unweighted splines share one path. `knots` must hold
/// `n + degree + 1` values; any other length is replaced by a clamped
/// uniform vector. `weights` are used only when there is one per control
/// point. The degree is clamped to `1..=n-1`.
pub fn evaluate_bspline(
    degree: usize,
    control_points: &[Coordinate],
    knots: &[f64],
    weights: &[f64],
    num_points: usize,
) -> Vec<Coordinate> {
    let n = control_points.len();
    match n {
        0 => return Vec::new(),
        1 => return vec![control_points[0]],
        _ => {}
    }

    let degree = degree.clamp(1, n - 1);
    let knots: Cow<'_, [f64]> = if knots.len() == n + degree + 1 {
        Cow::Borrowed(knots)
    } else {
        Cow::Owned(clamped_uniform_knots(n, degree))
    };
    let weights = (weights.len() == n).then_some(weights);
    let spatial = control_points.iter().any(Coordinate::is_3d);

    let t_min = knots[degree];
    let t_max = knots[n];
    let steps = num_points.saturating_sub(1).max(1) as f64;

    (0..num_points)
        .map(|i| {
            let t = t_min + (i as f64 / steps) * (t_max - t_min);
            let h = de_boor(degree, control_points, &knots, weights, t);
            let (x, y, z) = if h.w > EPSILON {
                (h.x / h.w, h.y / h.w, h.z / h.w)
            } else {
                (h.x, h.y, h.z)
            };
            if spatial {
                Coordinate::new_3d(x, y, z)
            } else {
                Coordinate::new(x, y)
            }
        })
        .collect()
}

/// Knot vector with `degree + 1` zeros, `degree + 1` ones and uniform
/// interior knots.
pub(crate) fn clamped_uniform_knots(n: usize, degree: usize) -> Vec<f64> {
    let count = n + degree + 1;
    let interior = (count - 2 * degree - 1) as f64;
    (0..count)
        .map(|i| {
            if i <= degree {
                0.0
            } else if i >= n {
                1.0
            } else {
                (i - degree) as f64 / interior
            }
        })
        .collect()
}

fn de_boor(
    degree: usize,
    control_points: &[Coordinate],
    knots: &[f64],
    weights: Option<&[f64]>,
    t: f64,
) -> Vector4<f64> {
    let n = control_points.len();

    let span = if t >= knots[n] {
        n - 1
    } else {
        (degree..n)
            .find(|&i| t >= knots[i] && t < knots[i + 1])
            .unwrap_or(degree)
    };

    let mut d: Vec<Vector4<f64>> = (0..=degree)
        .map(|j| {
            let index = (span + j - degree).min(n - 1);
            let point = &control_points[index];
            let w = weights.map_or(1.0, |weights| weights[index]);
            Vector4::new(point.x * w, point.y * w, point.z_or_zero() * w, w)
        })
        .collect();

    for r in 1..=degree {
        for j in (r..=degree).rev() {
            let index = span + j - degree;
            let left = knots[index];
            let right = knots[index + degree - r + 1];
            let denom = right - left;
            let alpha = if denom > EPSILON {
                (t - left) / denom
            } else {
                0.0
            };
            d[j] = d[j - 1] * (1.0 - alpha) + d[j] * alpha;
        }
    }

    d[degree]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn square_points() -> Vec<Coordinate> {
        vec![
            Coordinate::new(0.0, 0.0),
            Coordinate::new(0.0, 10.0),
            Coordinate::new(10.0, 10.0),
            Coordinate::new(10.0, 0.0),
        ]
    }

    #[test]
    fn test_clamped_uniform_knots() {
        assert_eq!(
            clamped_uniform_knots(4, 3),
            vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]
        );
        assert_eq!(
            clamped_uniform_knots(5, 2),
            vec![0.0, 0.0, 0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn test_endpoints_interpolated() {
        let points = square_points();
        let curve = evaluate_bspline(3, &points, &[], &[], 21);
        assert_eq!(curve.len(), 21);
        assert_abs_diff_eq!(curve[0].x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[0].y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[20].x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[20].y, 0.0, epsilon = 1e-12);
        assert!(curve.iter().all(|p| !p.is_3d()));
    }

    #[test]
    fn test_bezier_midpoint() {
        // Cubic Bezier midpoint: (P0 + 3 P1 + 3 P2 + P3) / 8
        let curve = evaluate_bspline(3, &square_points(), &[], &[], 3);
        assert_abs_diff_eq!(curve[1].x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(curve[1].y, 7.5, epsilon = 1e-12);
    }

    #[test]
    fn test_unit_weights_match_unweighted() {
        let points = square_points();
        let plain = evaluate_bspline(3, &points, &[], &[], 9);
        let weighted = evaluate_bspline(3, &points, &[], &[1.0; 4], 9);
        for (a, b) in plain.iter().zip(&weighted) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rational_quarter_circle() {
        // Quadratic NURBS quarter circle
        let points = vec![
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
            Coordinate::new(0.0, 1.0),
        ];
        let weights = [1.0, std::f64::consts::FRAC_1_SQRT_2, 1.0];
        let knots = [0.0, 0.0, 0.0, 1.0, 1.0, 1.0];
        let curve = evaluate_bspline(2, &points, &knots, &weights, 11);
        for p in &curve {
            assert_abs_diff_eq!(p.x.hypot(p.y), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(evaluate_bspline(3, &[], &[], &[], 10).is_empty());

        let single = [Coordinate::new(2.0, 3.0)];
        assert_eq!(evaluate_bspline(3, &single, &[], &[], 10), vec![single[0]]);

        // Degree above n - 1 falls back to a polyline through the points
        let two = [Coordinate::new(0.0, 0.0), Coordinate::new(4.0, 2.0)];
        let line = evaluate_bspline(3, &two, &[], &[], 3);
        assert_abs_diff_eq!(line[1].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(line[1].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_spatial_points_keep_z() {
        let points = [
            Coordinate::new_3d(0.0, 0.0, 0.0),
            Coordinate::new_3d(1.0, 1.0, 2.0),
            Coordinate::new_3d(2.0, 0.0, 4.0),
        ];
        let curve = evaluate_bspline(2, &points, &[], &[], 5);
        assert!(curve.iter().all(Coordinate::is_3d));
        assert_abs_diff_eq!(curve[4].z_or_zero(), 4.0, epsilon = 1e-12);
    }
}
