use super::{Point2, Vector2, TOLERANCE};

/// Rotates a vector 90° counter-clockwise, i.e. towards its left side.
#[must_use]
pub fn rot90(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// The z component of the 3D cross product of two planar vectors.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Normalizes `v`, returning the zero vector for zero-length input.
#[must_use]
pub fn normalize_or_zero(v: &Vector2) -> Vector2 {
    let len = v.norm();
    if len < TOLERANCE {
        Vector2::zeros()
    } else {
        v / len
    }
}

/// Unit direction from `from` towards `to` (zero if the points coincide).
#[must_use]
pub fn direction(from: &Point2, to: &Point2) -> Vector2 {
    normalize_or_zero(&(to - from))
}

/// Linear interpolation between two points.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}
