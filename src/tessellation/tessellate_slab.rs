use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::{FixedFaceHandle, InnerTag};
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{lift, Point2, TOLERANCE};

use super::TriangleMesh;

type Cdt = ConstrainedDelaunayTriangulation<SpadePoint2<f64>>;

/// Extrudes a closed plan outline into a solid slab mesh.
///
/// The slab spans `elevation ..= elevation + thickness`. Top and bottom are
/// triangulated with a constrained Delaunay triangulation of the outline, so
/// concave rooms are handled; the sides are one quad per outline edge.
pub struct TessellateSlab<'a> {
    outline: &'a [Point2],
    elevation: f64,
    thickness: f64,
}

impl<'a> TessellateSlab<'a> {
    /// Creates a new `TessellateSlab` operation.
    #[must_use]
    pub fn new(outline: &'a [Point2], elevation: f64, thickness: f64) -> Self {
        Self {
            outline,
            elevation,
            thickness,
        }
    }

    /// Executes the tessellation, returning a mesh with vertex normals.
    ///
    /// # Errors
    ///
    /// Returns `TessellationError::Failed` if the outline has fewer than 3
    /// points, crosses itself, or a point cannot be inserted into the
    /// triangulation.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.outline.len() < 3 {
            return Err(
                TessellationError::Failed("slab outline needs at least 3 points".into()).into(),
            );
        }

        // Sides face outward only for a counter-clockwise outline.
        let outline: Vec<Point2> = if signed_area_2d(self.outline) < 0.0 {
            self.outline.iter().rev().copied().collect()
        } else {
            self.outline.to_vec()
        };

        let spade_points: Vec<SpadePoint2<f64>> =
            outline.iter().map(|p| SpadePoint2::new(p.x, p.y)).collect();
        let mut cdt = Cdt::new();
        insert_constraint_loop(&mut cdt, &spade_points)?;
        let interior = classify_interior_faces(&cdt);

        let bottom = self.elevation;
        let top = self.elevation + self.thickness;

        let mut mesh = TriangleMesh::default();
        let mut top_map: HashMap<usize, u32> = HashMap::new();
        let mut bottom_map: HashMap<usize, u32> = HashMap::new();

        for face in cdt.inner_faces() {
            if !interior.contains(&face.fix().index()) {
                continue;
            }
            let mut top_tri = [0u32; 3];
            let mut bottom_tri = [0u32; 3];
            for (i, vh) in face.vertices().iter().enumerate() {
                let pos = vh.position();
                let plan = Point2::new(pos.x, pos.y);
                let idx = vh.fix().index();
                top_tri[i] = *top_map.entry(idx).or_insert_with(|| {
                    mesh.vertices.push(lift(&plan, top));
                    (mesh.vertices.len() - 1) as u32
                });
                bottom_tri[i] = *bottom_map.entry(idx).or_insert_with(|| {
                    mesh.vertices.push(lift(&plan, bottom));
                    (mesh.vertices.len() - 1) as u32
                });
            }
            // CCW in plan faces up once lifted; the bottom is reversed.
            mesh.indices.push(top_tri);
            mesh.indices.push([bottom_tri[0], bottom_tri[2], bottom_tri[1]]);
        }

        let n = outline.len();
        for i in 0..n {
            let a = outline[i];
            let b = outline[(i + 1) % n];
            if (b - a).norm_squared() < TOLERANCE * TOLERANCE {
                continue;
            }
            mesh.push_quad(
                lift(&a, bottom),
                lift(&b, bottom),
                lift(&b, top),
                lift(&a, top),
            );
        }

        mesh.compute_vertex_normals();
        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(cdt: &mut Cdt, points: &[SpadePoint2<f64>]) -> Result<()> {
    let mut handles = Vec::with_capacity(points.len());
    for &pt in points {
        let h = cdt
            .insert(pt)
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from == to {
            continue;
        }
        if !cdt.can_add_constraint(from, to) {
            return Err(TessellationError::Failed(
                "slab outline intersects itself".into(),
            )
            .into());
        }
        cdt.add_constraint(from, to);
    }

    Ok(())
}

/// Selects the inner CDT faces inside the outline.
///
/// Flood-fills from the faces bordering the outer face; crossing a
/// constraint edge increments the depth, and odd depth is interior.
fn classify_interior_faces(cdt: &Cdt) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() != outer_fix {
            continue;
        }
        if let Some(inner) = edge.rev().face().as_inner() {
            let idx = inner.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, depth);
            if depth % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((inner.fix(), depth));
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            let Some(neighbor) = edge.rev().face().as_inner() else {
                continue;
            };
            let idx = neighbor.fix().index();
            if depth_map.contains_key(&idx) {
                continue;
            }
            let next = depth + u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
            depth_map.insert(idx, next);
            if next % 2 == 1 {
                interior.insert(idx);
            }
            queue.push_back((neighbor.fix(), next));
        }
    }

    interior
}
