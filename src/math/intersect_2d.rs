use super::vector_2d::{cross, rot90};
use super::{Point2, Vector2};

/// Intersects two lines that are each offset sideways from a shared anchor.
///
/// Line `i` passes through `anchor + rot90(dir_i) * offset_i` along `dir_i`.
/// Positive offsets move a line to the left of its direction.
///
/// Returns `None` when `|cross(dir1, dir2)| < parallel_tolerance`.
#[must_use]
pub fn offset_line_intersect_2d(
    anchor: &Point2,
    dir1: &Vector2,
    offset1: f64,
    dir2: &Vector2,
    offset2: f64,
    parallel_tolerance: f64,
) -> Option<Point2> {
    let start1 = anchor + rot90(dir1) * offset1;
    let start2 = anchor + rot90(dir2) * offset2;

    let det = cross(dir1, dir2);
    if det.abs() < parallel_tolerance {
        return None;
    }

    let t = cross(&(start2 - start1), dir2) / det;
    Some(start1 + dir1 * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn perpendicular_offsets_meet_at_corner() {
        // +x line shifted up by 0.1, +y line shifted right by 0.1.
        let p = offset_line_intersect_2d(
            &Point2::origin(),
            &Vector2::new(1.0, 0.0),
            0.1,
            &Vector2::new(0.0, 1.0),
            -0.1,
            1e-4,
        )
        .unwrap();
        assert_relative_eq!(p, Point2::new(0.1, 0.1), epsilon = 1e-12);
    }

    #[test]
    fn oblique_lines_meet_on_both() {
        let d1 = Vector2::new(1.0, 0.0);
        let d2 = Vector2::new(1.0, 1.0).normalize();
        let p = offset_line_intersect_2d(&Point2::new(2.0, 3.0), &d1, 0.5, &d2, -0.25, 1e-4)
            .unwrap();
        // On line 1: y = 3.5.
        assert!((p.y - 3.5).abs() < 1e-9);
        // On line 2: signed distance from the anchor line equals the offset.
        let rel = p - Point2::new(2.0, 3.0);
        assert!((cross(&d2, &rel) + 0.25).abs() < 1e-9);
    }

    #[test]
    fn parallel_lines_have_no_intersection() {
        let d = Vector2::new(0.0, 1.0);
        assert!(offset_line_intersect_2d(&Point2::origin(), &d, 0.1, &-d, -0.1, 1e-4).is_none());
        assert!(offset_line_intersect_2d(&Point2::origin(), &d, 0.1, &d, 0.2, 1e-4).is_none());
    }
}
