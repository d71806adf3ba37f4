mod tessellate_slab;

pub use tessellate_slab::TessellateSlab;

use crate::math::{Point3, Vector3, TOLERANCE};

/// An indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals; empty until [`TriangleMesh::compute_vertex_normals`] runs.
    pub normals: Vec<Vector3>,
    /// Triangle indices (each triple defines a counter-clockwise triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends a planar quad `a b c d` as the fan `(a, b, c), (a, c, d)`.
    ///
    /// The quad gets its own four vertices; nothing is shared with
    /// previously pushed faces.
    #[allow(clippy::cast_possible_truncation)]
    pub fn push_quad(&mut self, a: Point3, b: Point3, c: Point3, d: Point3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend([a, b, c, d]);
        self.indices.push([base, base + 1, base + 2]);
        self.indices.push([base, base + 2, base + 3]);
    }

    /// Appends another mesh, re-indexing its triangles.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + base, t[1] + base, t[2] + base]));
    }

    /// Recomputes per-vertex normals by accumulating area-weighted face
    /// normals over every triangle touching a vertex.
    pub fn compute_vertex_normals(&mut self) {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];
        for tri in &self.indices {
            let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
            let face = (b - a).cross(&(c - a));
            for &i in tri {
                normals[i as usize] += face;
            }
        }
        for n in &mut normals {
            let len = n.norm();
            if len > TOLERANCE {
                *n /= len;
            }
        }
        self.normals = normals;
    }

    /// Unit normal of triangle `index`, or zero for a degenerate triangle.
    #[must_use]
    pub fn face_normal(&self, index: usize) -> Vector3 {
        let [a, b, c] = self.indices[index].map(|i| self.vertices[i as usize]);
        let n = (b - a).cross(&(c - a));
        let len = n.norm();
        if len > TOLERANCE {
            n / len
        } else {
            Vector3::zeros()
        }
    }

    /// Flat `x, y, z, x, y, z, ...` position buffer for GPU upload.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn position_buffer(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    /// Flat normal buffer, same layout as [`TriangleMesh::position_buffer`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn normal_buffer(&self) -> Vec<f32> {
        self.normals
            .iter()
            .flat_map(|n| [n.x as f32, n.y as f32, n.z as f32])
            .collect()
    }

    /// Flat triangle index buffer.
    #[must_use]
    pub fn index_buffer(&self) -> Vec<u32> {
        self.indices.iter().flatten().copied().collect()
    }
}
