use crate::constants::DEFAULT_MESH_NAME;
use glam::{Vec2, Vec3};

/// Axis-aligned bounding box of a mesh
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Bounds {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Triangle mesh produced by a generation call.
///
/// `vertices`, `uvs` and `normals` share one index space. `triangles` is a flat
/// list of vertex indices, three per triangle.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedMesh {
    pub name: String,
    pub vertices: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

impl Default for GeneratedMesh {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratedMesh {
    pub fn new() -> Self {
        Self {
            name: DEFAULT_MESH_NAME.to_string(),
            vertices: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            triangles: Vec::new(),
        }
    }

    pub fn with_capacity(vertex_capacity: usize, index_capacity: usize) -> Self {
        Self {
            name: DEFAULT_MESH_NAME.to_string(),
            vertices: Vec::with_capacity(vertex_capacity),
            uvs: Vec::with_capacity(vertex_capacity),
            normals: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(index_capacity),
        }
    }

    /// Drop all geometry but keep the allocations for the next regeneration
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.uvs.clear();
        self.normals.clear();
        self.triangles.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Iterate triangles as index triples
    pub fn triangles_iter(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles
            .chunks_exact(3)
            .map(|tri| [tri[0], tri[1], tri[2]])
    }

    /// Bounding box of all vertices, `None` for an empty mesh
    pub fn bounds(&self) -> Option<Bounds> {
        let first = *self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(Bounds { min, max })
    }

    /// Sum of the signed XY areas of all triangles.
    ///
    /// Positive when triangles wind counter-clockwise seen from +Z. Degenerate
    /// triangles contribute zero.
    pub fn signed_area(&self) -> f32 {
        self.triangles_iter()
            .map(|[a, b, c]| {
                let a = self.vertices[a as usize].truncate();
                let b = self.vertices[b as usize].truncate();
                let c = self.vertices[c as usize].truncate();
                (b - a).perp_dot(c - a) * 0.5
            })
            .sum()
    }
}
