use crate::constants::*;
use crate::error::MeshResult;
use crate::mesh::GeneratedMesh;
use crate::params::{clamp_radius, clamp_segments, ShapeParameters};
use glam::{Vec2, Vec3};

/// Winding that the rendering surface treats as front-facing.
///
/// Either way the quad faces +Z; only the index order of each triangle changes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FrontFace {
    /// Triangles are emitted as `(center, i, i + 1)`
    #[default]
    CounterClockwise,
    /// Triangles are emitted as `(center, i + 1, i)`
    Clockwise,
}

impl FrontFace {
    #[inline]
    fn push(self, indices: &mut Vec<u32>, a: u32, b: u32, c: u32) {
        match self {
            FrontFace::CounterClockwise => indices.extend_from_slice(&[a, b, c]),
            FrontFace::Clockwise => indices.extend_from_slice(&[a, c, b]),
        }
    }
}

/// Index of the first arc sample of `corner`
#[inline]
fn corner_start(corner: u32, segments: u32) -> u32 {
    1 + corner * segments
}

/// Arc centers, inset from each rectangle corner by the radius.
/// Order: top-right, top-left, bottom-left, bottom-right.
fn corner_centers(half_width: f32, half_height: f32, radius: f32) -> [Vec2; 4] {
    let x = half_width - radius;
    let y = half_height - radius;
    [
        Vec2::new(x, y),
        Vec2::new(-x, y),
        Vec2::new(-x, -y),
        Vec2::new(x, -y),
    ]
}

/// Build the vertex and UV streams.
///
/// Index 0 is the center; each corner then contributes `corner_segments`
/// samples evenly spread across its 90 degree arc, in increasing angle.
/// With a zero radius every sample of a corner lands on the sharp corner.
/// The parameters are validated and clamped first, like [`generate`].
pub fn synthesize_vertices(params: &ShapeParameters) -> MeshResult<(Vec<Vec3>, Vec<Vec2>)> {
    let params = params.clamped()?;
    let mut vertices = Vec::with_capacity(params.vertex_count());
    let mut uvs = Vec::with_capacity(params.vertex_count());
    synthesize_into(&params, &mut vertices, &mut uvs);
    Ok((vertices, uvs))
}

fn synthesize_into(params: &ShapeParameters, vertices: &mut Vec<Vec3>, uvs: &mut Vec<Vec2>) {
    let segments = clamp_segments(params.corner_segments);
    let radius = clamp_radius(params.width, params.height, params.corner_radius);
    let half_width = params.width * 0.5;
    let half_height = params.height * 0.5;
    let size = Vec2::new(params.width, params.height);
    let half_size = Vec2::new(half_width, half_height);
    let step = CORNER_SWEEP / (segments - 1) as f32;

    vertices.push(Vec3::ZERO);
    uvs.push(Vec2::from(CENTER_UV));

    let centers = corner_centers(half_width, half_height, radius);
    for (corner, (center, start_angle)) in centers.iter().zip(CORNER_START_ANGLES).enumerate() {
        log::trace!(
            "corner {} center=({}, {}) start={}",
            corner,
            center.x,
            center.y,
            start_angle
        );

        for i in 0..segments {
            let angle = start_angle + i as f32 * step;
            let point = *center + radius * Vec2::new(angle.cos(), angle.sin());
            vertices.push(point.extend(0.0));
            uvs.push((point + half_size) / size);
        }
    }
}

/// Fan each corner arc from the center vertex.
///
/// Emits `corner_segments - 1` triangles per corner.
pub fn triangulate_corner_fans(
    corner_segments: u32,
    front_face: FrontFace,
    indices: &mut Vec<u32>,
) {
    let segments = clamp_segments(corner_segments);
    for corner in 0..CORNER_COUNT {
        let start = corner_start(corner, segments);
        for i in 0..segments - 1 {
            front_face.push(indices, 0, start + i, start + i + 1);
        }
    }
}

/// Close the straight edge between each corner and the next one.
///
/// The last sample of a corner and the first sample of the following corner
/// sit at the same angle on opposite ends of one straight side, so each
/// connector triangle spans exactly that side's strip. Emits four triangles.
pub fn triangulate_connectors(
    corner_segments: u32,
    front_face: FrontFace,
    indices: &mut Vec<u32>,
) {
    let segments = clamp_segments(corner_segments);
    for corner in 0..CORNER_COUNT {
        let current_end = corner_start(corner, segments) + segments - 1;
        let next_start = corner_start((corner + 1) % CORNER_COUNT, segments);
        front_face.push(indices, 0, current_end, next_start);
    }
}

/// Generate a rounded quad with counter-clockwise front faces.
pub fn generate(params: &ShapeParameters) -> MeshResult<GeneratedMesh> {
    generate_with(params, FrontFace::default())
}

/// Generate a rounded quad with the given winding.
pub fn generate_with(
    params: &ShapeParameters,
    front_face: FrontFace,
) -> MeshResult<GeneratedMesh> {
    let mut mesh = GeneratedMesh::new();
    generate_into(params, front_face, &mut mesh)?;
    Ok(mesh)
}

/// Regenerate `mesh` in place, reusing its allocations.
///
/// All four buffers are rebuilt from scratch. On error `mesh` is left
/// untouched.
pub fn generate_into(
    params: &ShapeParameters,
    front_face: FrontFace,
    mesh: &mut GeneratedMesh,
) -> MeshResult<()> {
    let params = params.clamped()?;
    let vertex_count = params.vertex_count();
    let index_count = params.index_count();

    mesh.clear();
    mesh.vertices.reserve_exact(vertex_count);
    mesh.uvs.reserve_exact(vertex_count);
    mesh.normals.reserve_exact(vertex_count);
    mesh.triangles.reserve_exact(index_count);

    synthesize_into(&params, &mut mesh.vertices, &mut mesh.uvs);
    mesh.normals.resize(vertex_count, Vec3::Z);

    triangulate_corner_fans(params.corner_segments, front_face, &mut mesh.triangles);
    triangulate_connectors(params.corner_segments, front_face, &mut mesh.triangles);

    debug_assert_eq!(mesh.vertices.len(), vertex_count);
    debug_assert_eq!(mesh.triangles.len(), index_count);

    log::debug!(
        "generated '{}': {}x{} r={} segments={} -> {} vertices, {} triangles",
        mesh.name,
        params.width,
        params.height,
        params.corner_radius,
        params.corner_segments,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(())
}
