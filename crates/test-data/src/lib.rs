pub struct ObjModel {
    pub text: &'static str,
    pub vertices: usize,
    pub triangles: usize,
}

pub struct StlModel {
    pub bytes: &'static [u8],
    pub triangles: usize,
    /// Distinct corner positions once coincident points are welded.
    pub welded_vertices: usize,
}

/// Box with flat-shaded sides; the six sides share no vertices.
pub const OBJ_CUBE: ObjModel = ObjModel {
    text: include_str!("../../../res/cube/cube.obj"),
    vertices: 24,
    triangles: 12,
};

pub const OBJ_TETRAHEDRON: ObjModel = ObjModel {
    text: include_str!("../../../res/tetrahedron/tetrahedron.obj"),
    vertices: 4,
    triangles: 4,
};

/// 5x5 grid in the z=0 plane with vertex 12 (the centre) raised to z=1.
pub const OBJ_BUMPY_GRID: ObjModel = ObjModel {
    text: include_str!("../../../res/bumpy-grid/bumpy-grid.obj"),
    vertices: 25,
    triangles: 32,
};

pub const STL_CUBE: StlModel = StlModel {
    bytes: include_bytes!("../../../res/cube/cube-bin.stl"),
    triangles: 12,
    welded_vertices: 8,
};
