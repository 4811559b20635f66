use crate::mesh::GeneratedMesh;

/// Interleaved vertex format with Pod/Zeroable for buffer uploading
///
/// 32 bytes per vertex: position, normal, then UV.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuVertex {
    pub position: [f32; 3], // 12 bytes
    pub normal: [f32; 3],   // 12 bytes
    pub uv: [f32; 2],       // 8 bytes
}

impl GeneratedMesh {
    /// Interleave the vertex streams into one upload-ready buffer
    pub fn interleaved(&self) -> Vec<GpuVertex> {
        self.vertices
            .iter()
            .zip(&self.uvs)
            .zip(&self.normals)
            .map(|((position, uv), normal)| GpuVertex {
                position: position.to_array(),
                normal: normal.to_array(),
                uv: uv.to_array(),
            })
            .collect()
    }

    /// Interleaved vertices as raw bytes
    pub fn vertex_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.interleaved()).to_vec()
    }

    /// Triangle indices as raw bytes (u32, native endian)
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}
