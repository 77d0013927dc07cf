use thiserror::Error;

/// Ways in which a set of mesh buffers can fail to describe a valid mesh.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The index list does not divide into whole triangles.
    #[error("index count {len} is not a multiple of 3")]
    IncompleteTriangle { len: usize },

    /// A face references a vertex that does not exist.
    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        index: u32,
        position: usize,
        vertex_count: usize,
    },

    /// Normals must be absent or supplied one per vertex.
    #[error("mesh has {normals} normals but {vertices} vertices")]
    NormalCountMismatch { normals: usize, vertices: usize },

    /// A replacement vertex buffer changes the number of vertices.
    #[error("expected {expected} vertices, got {actual}")]
    VertexCountMismatch { expected: usize, actual: usize },
}
