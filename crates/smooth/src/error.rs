use smoothie_mesh::MeshError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SmoothError {
    /// The adjacency graph was built for a mesh with a different vertex count.
    #[error("adjacency graph covers {graph} vertices but {vertices} were supplied")]
    VertexCountMismatch { graph: usize, vertices: usize },

    #[error(transparent)]
    Mesh(#[from] MeshError),
}
