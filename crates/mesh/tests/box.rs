use smoothie_mesh::{Facet, Mesh, MeshError, Triangle, Vector3};

// Flat-shaded box: four vertices per side so every side keeps its own normal.
#[rustfmt::skip]
const BOX_POSITIONS: [[f32; 3]; 24] = [
    // Top
    [-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0],
    // Left
    [-1.0, 1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0],
    // Right
    [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0], [1.0, 1.0, -1.0],
    // Front
    [1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0],
    // Back
    [1.0, 1.0, -1.0], [1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0],
    // Bottom
    [-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, -1.0, -1.0],
];

#[rustfmt::skip]
const BOX_INDICES: [u32; 36] = [
    0, 1, 2,    0, 2, 3,
    5, 4, 6,    6, 4, 7,
    8, 9, 10,   8, 10, 11,
    13, 12, 14, 15, 14, 12,
    16, 17, 18, 16, 18, 19,
    21, 20, 22, 22, 20, 23,
];

fn box_mesh() -> Mesh {
    let vertices = BOX_POSITIONS.iter().map(|&p| p.into()).collect();
    Mesh::new(vertices, vec![], BOX_INDICES.to_vec()).unwrap()
}

#[test]
fn create_box_mesh() {
    let mesh = box_mesh();
    assert_eq!(24, mesh.vertex_count());
    assert_eq!(12, mesh.triangle_count());

    let mut facets = mesh.facets();
    assert_eq!(Some(Facet { p0: 0, p1: 1, p2: 2 }), facets.next());
    assert_eq!(Some(Facet { p0: 0, p1: 2, p2: 3 }), facets.next());
    assert_eq!(Some(Facet { p0: 5, p1: 4, p2: 6 }), facets.next());
    assert_eq!(10, facets.count());

    let first = mesh.triangles().next();
    assert_eq!(
        Some(Triangle {
            p0: Vector3::new(-1.0, 1.0, -1.0),
            p1: Vector3::new(-1.0, 1.0, 1.0),
            p2: Vector3::new(1.0, 1.0, 1.0),
        }),
        first
    );
}

#[test]
fn box_faces_point_outwards() {
    // Every side is wound counter-clockwise when seen from outside, so the
    // geometric normal points away from the origin.
    let mesh = box_mesh();
    for t in mesh.triangles() {
        let centre = (t.p0 + t.p1 + t.p2) / 3.0;
        let n = t.normal();
        assert!(n.x * centre.x + n.y * centre.y + n.z * centre.z > 0.0);
    }
}

#[test]
fn vertices_can_move_but_topology_cannot() {
    let mut mesh = box_mesh();
    for v in mesh.vertices_mut() {
        *v *= 2.0;
    }
    assert_eq!(Vector3::new(-2.0, 2.0, -2.0), mesh.vertices()[0]);
    assert_eq!(&BOX_INDICES[..], mesh.indices());

    let buffers = mesh.buffers();
    assert_eq!(72, buffers.positions.len());
    assert!(buffers.normals.is_empty());
    assert_eq!(&BOX_INDICES[..], buffers.indices);
}

#[test]
fn index_past_end_is_rejected() {
    let mut indices = BOX_INDICES.to_vec();
    indices[35] = 24;
    let vertices = BOX_POSITIONS.iter().map(|&p| p.into()).collect();
    assert_eq!(
        Err(MeshError::IndexOutOfRange {
            index: 24,
            position: 35,
            vertex_count: 24
        }),
        Mesh::new(vertices, vec![], indices)
    );
}
