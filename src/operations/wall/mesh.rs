use tracing::{debug, trace};

use crate::math::vector_2d::lerp;
use crate::math::lift;
use crate::operations::KernelParams;
use crate::plan::{Layer, WallId};
use crate::tessellation::TriangleMesh;

use super::footprint::WallFootprint;
use super::segments::{applicable_openings, segment_wall, Segment, SegmentKind};

/// Assembles the solid 3D mesh of one wall with its openings cut out.
///
/// The wall is split along its length into solid and hole segments. Solid
/// segments become one full-height box; hole segments keep a sill box below
/// the opening and a header box above it. Boxes are emitted with unshared
/// vertices and outward winding; vertex normals are computed once the whole
/// wall is assembled.
///
/// End caps at a node shared with other walls are left out, as the
/// neighbouring wall closes the joint.
#[derive(Debug, Clone, Copy)]
pub struct WallMesh {
    wall: WallId,
    height: f64,
    elevation: f64,
}

/// Per-wall state shared by every block.
struct Blocks<'a> {
    footprint: &'a WallFootprint,
    elevation: f64,
    skip_start_cap: bool,
    skip_end_cap: bool,
    cap_tolerance: f64,
}

impl WallMesh {
    /// Creates a new `WallMesh` operation.
    #[must_use]
    pub fn new(wall: WallId, height: f64, elevation: f64) -> Self {
        Self {
            wall,
            height,
            elevation,
        }
    }

    /// Executes the assembly.
    ///
    /// Returns `None` for a dangling wall; such a wall is simply not drawn.
    #[must_use]
    pub fn execute(&self, layer: &Layer, params: &KernelParams) -> Option<TriangleMesh> {
        let footprint = WallFootprint::build(layer, self.wall, params)?;
        self.execute_with_footprint(layer, &footprint, params)
    }

    /// Executes the assembly over an already built footprint.
    ///
    /// Returns `None` for a dangling wall.
    #[must_use]
    pub fn execute_with_footprint(
        &self,
        layer: &Layer,
        footprint: &WallFootprint,
        params: &KernelParams,
    ) -> Option<TriangleMesh> {
        let wall = layer.walls.get(self.wall)?;
        let Some((start, end)) = layer.wall_endpoints(self.wall) else {
            debug!(wall = ?self.wall, "skipping dangling wall");
            return None;
        };
        let length = (end - start).norm();

        let openings = applicable_openings(layer, self.wall, length, params);
        let segments = segment_wall(length, &openings);

        let blocks = Blocks {
            footprint,
            elevation: self.elevation,
            skip_start_cap: layer.valence(wall.start) > 1,
            skip_end_cap: layer.valence(wall.end) > 1,
            cap_tolerance: params.cap_tolerance,
        };

        let mut mesh = TriangleMesh::default();
        for segment in &segments {
            match segment.kind {
                SegmentKind::Solid => blocks.push(&mut mesh, segment, 0.0, self.height),
                SegmentKind::Hole(id) => {
                    let opening = &layer.openings[id];
                    let head = opening.sill + opening.height;
                    if opening.sill > 0.0 {
                        blocks.push(&mut mesh, segment, 0.0, opening.sill.min(self.height));
                    }
                    if head < self.height {
                        blocks.push(&mut mesh, segment, head.max(0.0), self.height);
                    }
                }
            }
        }

        trace!(
            wall = ?self.wall,
            segments = segments.len(),
            triangles = mesh.indices.len(),
            "assembled wall mesh"
        );
        mesh.compute_vertex_normals();
        Some(mesh)
    }
}

impl Blocks<'_> {
    /// Emits the box between `t0..t1` along the wall and `bottom..top`
    /// vertically.
    fn push(&self, mesh: &mut TriangleMesh, segment: &Segment, bottom: f64, top: f64) {
        let fp = self.footprint;
        let (t0, t1) = (segment.t0, segment.t1);

        let r0 = lerp(&fp.start_right, &fp.end_left, t0);
        let r1 = lerp(&fp.start_right, &fp.end_left, t1);
        let l0 = lerp(&fp.start_left, &fp.end_right, t0);
        let l1 = lerp(&fp.start_left, &fp.end_right, t1);

        let bottom = bottom + self.elevation;
        let top = top + self.elevation;

        let br0 = lift(&r0, bottom);
        let bl0 = lift(&l0, bottom);
        let bl1 = lift(&l1, bottom);
        let br1 = lift(&r1, bottom);
        let tr0 = lift(&r0, top);
        let tl0 = lift(&l0, top);
        let tl1 = lift(&l1, top);
        let tr1 = lift(&r1, top);

        mesh.push_quad(tl0, tr0, tr1, tl1);
        mesh.push_quad(br0, bl0, bl1, br1);
        mesh.push_quad(br0, br1, tr1, tr0);
        mesh.push_quad(bl1, bl0, tl0, tl1);

        if t0 > self.cap_tolerance || !self.skip_start_cap {
            mesh.push_quad(bl0, br0, tr0, tl0);
        }
        if t1 < 1.0 - self.cap_tolerance || !self.skip_end_cap {
            mesh.push_quad(br1, bl1, tl1, tr1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::{Point3, Vector3};
    use crate::operations::wall::fixtures::{square, straight};
    use crate::plan::Opening;

    fn params() -> KernelParams {
        KernelParams::default()
    }

    /// Counts quads whose normal is ±x, i.e. caps of an x-aligned wall.
    fn count_caps(mesh: &TriangleMesh) -> usize {
        (0..mesh.indices.len())
            .step_by(2)
            .filter(|&i| mesh.face_normal(i).x.abs() > 0.99)
            .count()
    }

    #[test]
    fn free_standing_wall_is_a_closed_box() {
        let (layer, w) = straight(4.0, 0.2);
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        assert_eq!(count_caps(&mesh), 2);

        let ys: Vec<f64> = mesh.vertices.iter().map(|v| v.y).collect();
        assert!(ys.iter().all(|&y| y.abs() < 1e-12 || (y - 2.5).abs() < 1e-12));
    }

    #[test]
    fn faces_wind_outward() {
        let (mut layer, w) = straight(4.0, 0.2);
        layer.add_opening(Opening::window(w)).unwrap();
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();

        // Every quad's normal points away from the centre of its own box.
        for quad in 0..mesh.vertices.len() / 4 {
            let normal = mesh.face_normal(quad * 2);
            let face_centre = mesh.vertices[quad * 4..quad * 4 + 4]
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / 4.0;
            let box_centre = box_centre_of(&mesh, quad);
            assert!(
                normal.dot(&(face_centre - box_centre)) > 0.0,
                "quad {quad} faces inward"
            );
        }
    }

    /// Centre of the box a quad belongs to: boxes are emitted as runs of
    /// quads sharing one vertical and one longitudinal extent.
    fn box_centre_of(mesh: &TriangleMesh, quad: usize) -> Vector3 {
        // Top quad of each box comes first; find the run start by walking back
        // to a quad whose normal is +y and that is followed by a -y quad.
        let mut start = quad;
        loop {
            let is_top = mesh.face_normal(start * 2).y > 0.99
                && mesh.face_normal(start * 2 + 2).y < -0.99;
            if is_top {
                break;
            }
            start -= 1;
        }
        let top = &mesh.vertices[start * 4..start * 4 + 4];
        let bottom = &mesh.vertices[start * 4 + 4..start * 4 + 8];
        top.iter()
            .chain(bottom)
            .fold(Vector3::zeros(), |acc, p: &Point3| acc + p.coords)
            / 8.0
    }

    #[test]
    fn joined_ends_drop_caps() {
        let sq = square(0.2);
        let mesh = WallMesh::new(sq.walls[0], 2.5, 0.0)
            .execute(&sq.layer, &params())
            .unwrap();
        // Top, bottom, two sides.
        assert_eq!(mesh.indices.len(), 8);
        assert_eq!(count_caps(&mesh), 0);
    }

    #[test]
    fn one_joined_end_keeps_the_other_cap() {
        let (mut layer, w) = straight(4.0, 0.2);
        let end = layer.wall(w).unwrap().end;
        let up = layer.add_node(4.0, 3.0);
        layer.add_wall(end, up, 0.2).unwrap();

        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        assert_eq!(mesh.indices.len(), 10);
        // The remaining cap is at x = 0.
        let cap = (0..mesh.indices.len())
            .step_by(2)
            .find(|&i| mesh.face_normal(i).x.abs() > 0.99)
            .unwrap();
        assert!(mesh.face_normal(cap).x < 0.0);
        let [a, _, _] = mesh.indices[cap].map(|k| mesh.vertices[k as usize]);
        assert!(a.x.abs() < 1e-12);
    }

    #[test]
    fn window_leaves_sill_and_header() {
        let (mut layer, w) = straight(4.0, 0.2);
        layer.add_opening(Opening::window(w)).unwrap();
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();

        // Solid + sill + header + solid; interior boundaries get caps, wall
        // ends are dead ends and keep theirs: 4 boxes × 6 quads.
        assert_eq!(mesh.indices.len(), 4 * 6 * 2);

        let has_level = |y: f64| mesh.vertices.iter().any(|v| (v.y - y).abs() < 1e-12);
        assert!(has_level(0.9));
        assert!(has_level(2.1));
    }

    #[test]
    fn door_on_the_floor_has_no_sill() {
        let (mut layer, w) = straight(4.0, 0.2);
        layer.add_opening(Opening::door(w)).unwrap();
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        // Solid + header + solid.
        assert_eq!(mesh.indices.len(), 3 * 6 * 2);
    }

    #[test]
    fn full_height_opening_is_an_archway() {
        let (mut layer, w) = straight(4.0, 0.2);
        layer
            .add_opening(Opening::door(w).sized(1.0, 2.5))
            .unwrap();
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        assert_eq!(mesh.indices.len(), 2 * 6 * 2);
        // Nothing spans the opening's centre.
        assert!(mesh.vertices.iter().all(|v| (v.x - 2.0).abs() > 0.49));
    }

    #[test]
    fn elevation_lifts_every_vertex() {
        let (layer, w) = straight(4.0, 0.2);
        let mesh = WallMesh::new(w, 2.5, 3.0).execute(&layer, &params()).unwrap();
        assert!(mesh
            .vertices
            .iter()
            .all(|v| (v.y - 3.0).abs() < 1e-12 || (v.y - 5.5).abs() < 1e-12));
    }

    #[test]
    fn plan_y_maps_to_negative_z() {
        let (layer, w) = straight(4.0, 0.2);
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        // Footprint spans plan y in [-0.1, 0.1]; the right side (plan y < 0)
        // ends up at z > 0.
        let zs: Vec<f64> = mesh.vertices.iter().map(|v| v.z).collect();
        assert!(zs.iter().all(|z| (z.abs() - 0.1).abs() < 1e-12));
    }

    #[test]
    fn too_wide_opening_is_not_cut() {
        let (mut layer, w) = straight(4.0, 0.2);
        layer
            .add_opening(Opening::window(w).sized(3.9, 1.0))
            .unwrap();
        let mesh = WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).unwrap();
        assert_eq!(mesh.indices.len(), 12);
    }

    #[test]
    fn dangling_wall_produces_nothing() {
        let (mut layer, w) = straight(4.0, 0.2);
        let end = layer.wall(w).unwrap().end;
        layer.nodes.remove(end);
        assert!(WallMesh::new(w, 2.5, 0.0).execute(&layer, &params()).is_none());
    }

    #[test]
    fn assembly_is_deterministic() {
        let sq = square(0.2);
        let mut layer = sq.layer;
        layer.add_opening(Opening::window(sq.walls[1]).at(0.3)).unwrap();
        layer.add_opening(Opening::door(sq.walls[1]).at(0.75)).unwrap();

        let build = || {
            WallMesh::new(sq.walls[1], 2.5, 0.0)
                .execute(&layer, &params())
                .unwrap()
        };
        let (a, b) = (build(), build());
        let bits = |m: &TriangleMesh| -> Vec<u64> {
            m.vertices
                .iter()
                .flat_map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(a.indices, b.indices);
    }
}
