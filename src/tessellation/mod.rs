mod tessellate_roof;

pub use tessellate_roof::TessellateRoof;

use crate::math::{Point2, Point3, Vector3};

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Appends `other`, offsetting its indices past this mesh's vertices.
    #[allow(clippy::cast_possible_truncation)]
    pub fn merge(&mut self, other: &TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(
            other
                .indices
                .iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Total area of all triangles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.indices
            .iter()
            .map(|&[a, b, c]| {
                let pa = self.vertices[a as usize];
                let pb = self.vertices[b as usize];
                let pc = self.vertices[c as usize];
                (pb - pa).cross(&(pc - pa)).norm() / 2.0
            })
            .sum()
    }
}
