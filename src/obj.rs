//! Wavefront OBJ output

use quad_mesh::GeneratedMesh;
use std::io::{self, Write};

/// Write `mesh` as OBJ with positions, UVs and normals.
///
/// OBJ indices are 1-based and every stream shares the mesh's index space,
/// so each face corner is written as `i/i/i`.
pub fn write_obj<W: Write>(mesh: &GeneratedMesh, out: &mut W) -> io::Result<()> {
    writeln!(out, "o {}", mesh.name)?;

    for v in &mesh.vertices {
        writeln!(out, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(out, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for [a, b, c] in mesh.triangles_iter() {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    Ok(())
}
