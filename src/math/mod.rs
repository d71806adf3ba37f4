pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type (plan coordinates, meters).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (scene coordinates, Y up).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Lifts a plan point to scene space at the given height.
///
/// Plan `y` maps to scene `-z` so that a plan viewed from above keeps its
/// handedness in the Y-up scene.
#[must_use]
pub fn lift(p: &Point2, height: f64) -> Point3 {
    Point3::new(p.x, height, -p.y)
}
