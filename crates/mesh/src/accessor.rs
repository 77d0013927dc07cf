use crate::{geometry::as_floats, indexed::Mesh};

/// Borrowed, renderer-facing view of a mesh.
///
/// Positions and normals are flattened to `x, y, z` triples so they can be
/// uploaded to a vertex buffer directly. Indices are valid 0-based offsets into
/// both, and their count is a multiple of 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshBuffers<'a> {
    pub positions: &'a [f32],
    pub normals: &'a [f32],
    pub indices: &'a [u32],
}

impl<'a> MeshBuffers<'a> {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// The index buffer as raw bytes in native byte order.
    pub fn index_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.indices)
    }

    /// The position buffer as raw bytes in native byte order.
    pub fn position_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.positions)
    }
}

impl Mesh {
    /// Hands the current buffers to a renderer without copying them.
    pub fn buffers(&self) -> MeshBuffers<'_> {
        MeshBuffers {
            positions: as_floats(self.vertices()),
            normals: as_floats(self.normals()),
            indices: self.indices(),
        }
    }
}
