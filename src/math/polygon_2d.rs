use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn winding_sets_sign() {
        let mut square = vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        assert!((signed_area_2d(&square) - 4.0).abs() < 1e-12);
        square.reverse();
        assert!((signed_area_2d(&square) + 4.0).abs() < 1e-12);
    }

    #[test]
    fn fewer_than_three_points_has_no_area() {
        assert!(signed_area_2d(&[Point2::origin(), Point2::new(1.0, 1.0)]).abs() < f64::EPSILON);
    }
}
