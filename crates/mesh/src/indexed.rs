use crate::{
    error::MeshError,
    geometry::{Facet, Triangle, Vector3},
};

/// An indexed triangle mesh.
///
/// Vertices are stored once and referenced by index from the face list, which
/// is a flat sequence of `3 * triangle_count()` indices. Normals, when present,
/// share the vertex indexing.
///
/// The topology (indices) and the normals are fixed at construction. Only vertex
/// positions may change afterwards, and never their count, so an index that was
/// valid when the mesh was built stays valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vector3>,
    normals: Vec<Vector3>,
    indices: Vec<u32>,
}

/// Checks that `indices` forms whole triangles over `vertex_count` vertices.
pub fn validate_indices(indices: &[u32], vertex_count: usize) -> Result<(), MeshError> {
    if indices.len() % 3 != 0 {
        return Err(MeshError::IncompleteTriangle { len: indices.len() });
    }
    match indices
        .iter()
        .enumerate()
        .find(|&(_, &index)| index as usize >= vertex_count)
    {
        Some((position, &index)) => Err(MeshError::IndexOutOfRange {
            index,
            position,
            vertex_count,
        }),
        None => Ok(()),
    }
}

impl Mesh {
    /// Builds a mesh from its buffers, rejecting any index that would point
    /// past the vertex list.
    pub fn new(
        vertices: Vec<Vector3>,
        normals: Vec<Vector3>,
        indices: Vec<u32>,
    ) -> Result<Self, MeshError> {
        validate_indices(&indices, vertices.len())?;
        if !normals.is_empty() && normals.len() != vertices.len() {
            return Err(MeshError::NormalCountMismatch {
                normals: normals.len(),
                vertices: vertices.len(),
            });
        }
        Ok(Self {
            vertices,
            normals,
            indices,
        })
    }

    pub fn vertices(&self) -> &[Vector3] {
        &self.vertices
    }

    /// Mutable access to vertex positions. The slice cannot grow or shrink.
    pub fn vertices_mut(&mut self) -> &mut [Vector3] {
        &mut self.vertices
    }

    /// Replaces every vertex position at once, returning the previous buffer.
    pub fn set_vertices(&mut self, vertices: Vec<Vector3>) -> Result<Vec<Vector3>, MeshError> {
        if vertices.len() != self.vertices.len() {
            return Err(MeshError::VertexCountMismatch {
                expected: self.vertices.len(),
                actual: vertices.len(),
            });
        }
        Ok(std::mem::replace(&mut self.vertices, vertices))
    }

    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates over the index triple of every face.
    pub fn facets(&self) -> impl Iterator<Item = Facet> + '_ {
        self.indices.chunks_exact(3).map(|c| Facet {
            p0: c[0],
            p1: c[1],
            p2: c[2],
        })
    }

    /// Iterates over the positions of every face.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.facets().map(|f| Triangle {
            p0: self.vertices[f.p0 as usize],
            p1: self.vertices[f.p1 as usize],
            p2: self.vertices[f.p2 as usize],
        })
    }

    /// Consumes the mesh, returning `(vertices, normals, indices)`.
    pub fn into_parts(self) -> (Vec<Vector3>, Vec<Vector3>, Vec<u32>) {
        (self.vertices, self.normals, self.indices)
    }
}
