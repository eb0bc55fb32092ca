use super::{Point2, Vector2, TOLERANCE};

/// Returns the direction vector of the directed segment from `to` toward
/// `from`, i.e. `from − to`.
///
/// Cephalometric angle definitions give each line as an ordered landmark
/// pair whose direction is `start − end`; this helper keeps that convention
/// in one place.
#[must_use]
pub fn vector_between(from: Point2, to: Point2) -> Vector2 {
    from - to
}

/// Returns the unsigned angle between two vectors, in degrees in `[0, 180]`.
///
/// Returns `None` if either vector is numerically zero-length; the caller
/// must treat this as an undefined measurement, not as zero.
///
/// The cosine is clamped to `[-1, 1]` before `acos`: floating-point error on
/// near-collinear vectors can push the raw ratio slightly outside that range,
/// which would turn a valid 0° or 180° angle into NaN.
#[must_use]
pub fn angle_between_vectors(a: Vector2, b: Vector2) -> Option<f64> {
    let len_a = a.norm();
    let len_b = b.norm();
    if len_a < TOLERANCE || len_b < TOLERANCE {
        return None;
    }
    let cos_theta = (a.dot(&b) / (len_a * len_b)).clamp(-1.0, 1.0);
    Some(cos_theta.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn perpendicular_vectors() {
        let angle = angle_between_vectors(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0));
        assert!(angle.is_some_and(|a| (a - 90.0).abs() < TOL), "angle={angle:?}");
    }

    #[test]
    fn symmetric_in_arguments() {
        let a = Vector2::new(3.0, -1.5);
        let b = Vector2::new(-0.25, 7.0);
        assert_eq!(angle_between_vectors(a, b), angle_between_vectors(b, a));
    }

    #[test]
    fn same_vector_is_zero_degrees() {
        let v = Vector2::new(2.0, 5.0);
        let angle = angle_between_vectors(v, v);
        assert!(angle.is_some_and(|a| a.abs() < TOL), "angle={angle:?}");
    }

    #[test]
    fn zero_vector_is_undefined() {
        let v = Vector2::new(1.0, 2.0);
        assert!(angle_between_vectors(Vector2::zeros(), v).is_none());
        assert!(angle_between_vectors(v, Vector2::zeros()).is_none());
        assert!(angle_between_vectors(Vector2::zeros(), Vector2::zeros()).is_none());
    }

    #[test]
    fn antiparallel_is_exactly_180() {
        // The clamp must keep acos in range even when rounding pushes the
        // cosine ratio past -1.
        let angle = angle_between_vectors(Vector2::new(1.0, 0.0), Vector2::new(-1.0, 0.0));
        assert_eq!(angle, Some(180.0));
    }

    #[test]
    fn result_stays_in_range() {
        let samples = [
            (Vector2::new(1.0, 0.0), Vector2::new(1.0, 1e-8)),
            (Vector2::new(-3.0, 4.0), Vector2::new(6.0, -8.0)),
            (Vector2::new(0.3, 0.7), Vector2::new(-11.0, 2.0)),
            (Vector2::new(1e-3, -1e-3), Vector2::new(1e3, 1e3)),
        ];
        for (a, b) in samples {
            let angle = angle_between_vectors(a, b);
            assert!(
                angle.is_some_and(|v| (0.0..=180.0).contains(&v)),
                "angle={angle:?} for a={a:?} b={b:?}"
            );
        }
    }

    #[test]
    fn vector_between_is_from_minus_to() {
        let v = vector_between(Point2::new(5.0, 3.0), Point2::new(2.0, 7.0));
        assert!((v.x - 3.0).abs() < TOL && (v.y + 4.0).abs() < TOL, "v={v:?}");
    }
}
