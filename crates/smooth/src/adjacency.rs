use std::collections::{btree_map, BTreeMap, BTreeSet};

use smoothie_mesh::{validate_indices, Mesh, MeshError};

/// Vertex-to-vertex connectivity of a triangle mesh.
///
/// Two vertices are neighbors when they share a triangle edge. Every vertex
/// referenced by at least one triangle has an entry; unreferenced vertices have
/// none. Neighbor sets are ordered, so iterating them (and summing over them)
/// always happens in ascending index order.
///
/// The graph only depends on the index list, so it is built once per topology
/// and reused for every smoothing pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighbors: BTreeMap<u32, BTreeSet<u32>>,
    vertex_count: usize,
}

impl AdjacencyGraph {
    pub fn from_mesh(mesh: &Mesh) -> Self {
        // Mesh construction already checked the indices.
        Self::build(mesh.indices(), mesh.vertex_count())
    }

    /// Builds the graph for a raw index list over `vertex_count` vertices.
    ///
    /// Fails if the list does not form whole triangles or points past the end
    /// of the vertex list.
    pub fn from_indices(indices: &[u32], vertex_count: usize) -> Result<Self, MeshError> {
        validate_indices(indices, vertex_count)?;
        Ok(Self::build(indices, vertex_count))
    }

    fn build(indices: &[u32], vertex_count: usize) -> Self {
        let mut neighbors: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
        for t in indices.chunks_exact(3) {
            let (a, b, c) = (t[0], t[1], t[2]);
            for (v, others) in [(a, [b, c]), (b, [a, c]), (c, [a, b])] {
                // A degenerate triangle may name the same vertex twice. A vertex
                // is never its own neighbor, but it still gets an entry.
                neighbors
                    .entry(v)
                    .or_default()
                    .extend(others.into_iter().filter(|&n| n != v));
            }
        }
        Self {
            neighbors,
            vertex_count,
        }
    }

    /// Returns the neighbors of `v`, or `None` if no triangle references it.
    pub fn neighbors(&self, v: u32) -> Option<&BTreeSet<u32>> {
        self.neighbors.get(&v)
    }

    pub fn contains(&self, v: u32) -> bool {
        self.neighbors.contains_key(&v)
    }

    /// Number of vertices with an entry in the graph.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Size of the vertex list this graph was built against.
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Iterates over `(vertex, neighbors)` in ascending vertex order.
    pub fn iter(&self) -> AdjacencyIter<'_> {
        AdjacencyIter {
            inner: self.neighbors.iter(),
        }
    }

    /// Number of vertices that no triangle references.
    pub fn isolated_count(&self) -> usize {
        self.vertex_count - self.neighbors.len()
    }

    /// Checks that `u ∈ N(v)` exactly when `v ∈ N(u)`.
    pub fn is_symmetric(&self) -> bool {
        self.iter().all(|(v, ns)| {
            ns.iter()
                .all(|n| self.neighbors(*n).map_or(false, |back| back.contains(&v)))
        })
    }
}

pub struct AdjacencyIter<'a> {
    inner: btree_map::Iter<'a, u32, BTreeSet<u32>>,
}

impl<'a> Iterator for AdjacencyIter<'a> {
    type Item = (u32, &'a BTreeSet<u32>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(v, ns)| (*v, ns))
    }
}

impl<'a> IntoIterator for &'a AdjacencyGraph {
    type Item = (u32, &'a BTreeSet<u32>);
    type IntoIter = AdjacencyIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
