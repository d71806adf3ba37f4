use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a node within its layer.
    pub struct NodeId;
}

/// A point in plan coordinates anchoring one or more wall endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Plan position in meters.
    pub position: Point2,
}

impl Node {
    /// Creates a node at `(x, y)`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
        }
    }
}
