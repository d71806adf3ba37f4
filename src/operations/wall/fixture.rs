use std::f64::consts::FRAC_PI_2;

use crate::math::{Point3, Vector3};
use crate::operations::KernelParams;
use crate::plan::{Layer, OpeningId, OpeningKind, WallId};

use super::segments::applicable_openings;

/// Where the renderer should place the door or window model of an opening.
#[derive(Debug, Clone, PartialEq)]
pub struct FixturePlacement {
    pub opening: OpeningId,
    pub kind: OpeningKind,
    /// Scene-space centre of the fixture.
    pub position: Point3,
    /// Rotation about the vertical axis, radians.
    pub rotation_y: f64,
    /// Width, height and depth of the fixture's bounding box.
    pub size: Vector3,
    /// Swing of the moving part relative to the frame, radians.
    pub swing: f64,
}

/// Placements for every opening cut into `wall`, in the order they appear
/// along it.
///
/// Openings dropped from the wall mesh for being too wide get no fixture.
/// Returns an empty list for a dangling wall.
#[must_use]
pub fn place_fixtures(
    layer: &Layer,
    wall: WallId,
    elevation: f64,
    params: &KernelParams,
) -> Vec<FixturePlacement> {
    let (Some(w), Some((start, end))) = (layer.walls.get(wall), layer.wall_endpoints(wall)) else {
        return Vec::new();
    };
    let axis = end - start;
    let length = axis.norm();
    // Scene-space heading: plan y is flipped into -z.
    let rotation_y = axis.x.atan2(-axis.y) - FRAC_PI_2;

    applicable_openings(layer, wall, length, params)
        .into_iter()
        .map(|(id, opening)| {
            let centre = start + axis * opening.clamped_dist();
            FixturePlacement {
                opening: id,
                kind: opening.kind,
                position: Point3::new(
                    centre.x,
                    opening.sill + opening.height / 2.0 + elevation,
                    -centre.y,
                ),
                rotation_y,
                size: Vector3::new(
                    opening.width,
                    opening.height,
                    w.thickness + params.fixture_depth_padding,
                ),
                swing: opening.kind.swing(),
            }
        })
        .collect()
}
