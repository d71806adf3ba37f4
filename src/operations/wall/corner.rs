use crate::math::intersect_2d::offset_line_intersect_2d;
use crate::math::vector_2d::{direction, rot90};
use crate::math::Vector2;
use crate::operations::KernelParams;
use crate::plan::{Layer, NodeId, WallId};

/// Where a wall's two boundary edges end at one of its nodes.
///
/// Offsets are relative to the node position. "Left" is the side
/// `rot90(direction)` points to, with `direction` pointing out of the node
/// along the wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerOffsets {
    pub left: Vector2,
    pub right: Vector2,
}

/// A wall leaving the node, with its outward direction and polar angle.
#[derive(Debug, Clone, Copy)]
struct Spoke {
    wall: WallId,
    dir: Vector2,
    half_thickness: f64,
    angle: f64,
}

/// Resolves the mitered corner of `wall` at `node`.
///
/// A dead end (the only wall at the node) gets a square cut. At a junction
/// the walls are ordered by polar angle around the node; the left edge is
/// clipped against the counter-clockwise neighbour's right edge, and the right
/// edge against the clockwise neighbour's left edge. Near-parallel edge pairs
/// fall back to the square cut on that side.
///
/// Returns `None` if the wall does not touch the node, or the node or the
/// wall's far endpoint is missing. Neighbouring walls with a missing far
/// endpoint are ignored.
#[must_use]
pub fn resolve_corner(
    layer: &Layer,
    node: NodeId,
    wall: WallId,
    params: &KernelParams,
) -> Option<CornerOffsets> {
    let current = layer.walls.get(wall)?;
    if !current.touches(node) {
        return None;
    }
    let origin = layer.nodes.get(node)?.position;

    let mut spokes: Vec<Spoke> = layer
        .incident_walls(node)
        .filter_map(|id| {
            let w = &layer.walls[id];
            let far = layer.nodes.get(w.other_end(node))?;
            let dir = direction(&origin, &far.position);
            Some(Spoke {
                wall: id,
                dir,
                half_thickness: w.thickness / 2.0,
                angle: dir.y.atan2(dir.x),
            })
        })
        .collect();

    // Stable: equal angles keep arena order.
    spokes.sort_by(|a, b| a.angle.total_cmp(&b.angle));
    let idx = spokes.iter().position(|s| s.wall == wall)?;
    let this = spokes[idx];
    let perp = rot90(&this.dir);
    let square_left = perp * this.half_thickness;

    if spokes.len() == 1 {
        return Some(CornerOffsets {
            left: square_left,
            right: -square_left,
        });
    }

    let n = spokes.len();
    let ccw = spokes[(idx + 1) % n];
    let cw = spokes[(idx + n - 1) % n];

    let left = offset_line_intersect_2d(
        &origin,
        &this.dir,
        this.half_thickness,
        &ccw.dir,
        -ccw.half_thickness,
        params.parallel_tolerance,
    )
    .map_or(square_left, |p| p - origin);

    let right = offset_line_intersect_2d(
        &origin,
        &this.dir,
        -this.half_thickness,
        &cw.dir,
        cw.half_thickness,
        params.parallel_tolerance,
    )
    .map_or(-square_left, |p| p - origin);

    Some(CornerOffsets { left, right })
}
