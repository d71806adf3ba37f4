use tracing::debug;

use crate::math::polygon_2d::signed_area_2d;
use crate::math::Point2;
use crate::operations::KernelParams;
use crate::plan::{Layer, WallId};

use super::corner::resolve_corner;

/// The mitered 2D quadrilateral outline of one wall.
///
/// The end node's left offset lies on the same physical side as the start
/// node's right offset, since "left" is measured looking out of each node.
/// The `right` edge therefore runs `start_right -> end_left` and the `left`
/// edge runs `start_left -> end_right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFootprint {
    pub start_right: Point2,
    pub end_left: Point2,
    pub end_right: Point2,
    pub start_left: Point2,
}

impl WallFootprint {
    /// Builds the footprint of `wall` from the corners at both its nodes.
    ///
    /// Returns `None` for a dangling wall (missing endpoint node).
    #[must_use]
    pub fn build(layer: &Layer, wall: WallId, params: &KernelParams) -> Option<Self> {
        let Some(w) = layer.walls.get(wall) else {
            debug!(?wall, "footprint requested for unknown wall");
            return None;
        };
        let (Some(start), Some(end)) = (layer.nodes.get(w.start), layer.nodes.get(w.end)) else {
            debug!(?wall, "dangling wall has no footprint");
            return None;
        };

        let start_offset = resolve_corner(layer, w.start, wall, params)?;
        let end_offset = resolve_corner(layer, w.end, wall, params)?;

        Some(Self {
            start_right: start.position + start_offset.right,
            end_left: end.position + end_offset.left,
            end_right: end.position + end_offset.right,
            start_left: start.position + start_offset.left,
        })
    }

    /// The outline as an ordered, non-self-intersecting polygon.
    #[must_use]
    pub fn points(&self) -> [Point2; 4] {
        [self.start_right, self.end_left, self.end_right, self.start_left]
    }

    /// Signed area (positive when counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points())
    }
}
