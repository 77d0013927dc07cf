use smoothie_mesh::{MeshError, Vector3};
use smoothie_obj::{parse_obj, read_obj, save_obj, write_obj, ObjError, ObjReader};
use smoothie_test_data::{OBJ_BUMPY_GRID, OBJ_CUBE, OBJ_TETRAHEDRON};

#[test]
fn load_cube() {
    let mesh = parse_obj(OBJ_CUBE.text).unwrap();
    assert_eq!(OBJ_CUBE.vertices, mesh.vertex_count());
    assert_eq!(OBJ_CUBE.vertices, mesh.normals().len());
    assert_eq!(OBJ_CUBE.triangles, mesh.triangle_count());

    // Top side first, as listed in the file.
    assert_eq!(Vector3::new(-1.0, 1.0, -1.0), mesh.vertices()[0]);
    assert_eq!(Vector3::new(0.0, 1.0, 0.0), mesh.normals()[0]);
    assert_eq!(&[0, 1, 2, 0, 2, 3], &mesh.indices()[..6]);
    // Left side is wound 5, 4, 6.
    assert_eq!(&[5, 4, 6], &mesh.indices()[6..9]);
}

#[test]
fn load_through_reader() {
    let mut reader = std::io::Cursor::new(OBJ_TETRAHEDRON.text.as_bytes());
    let mesh = reader.read_obj().unwrap();
    assert_eq!(OBJ_TETRAHEDRON.vertices, mesh.vertex_count());
    assert_eq!(OBJ_TETRAHEDRON.triangles, mesh.triangle_count());
}

#[test]
fn reject_face_referencing_undefined_vertices() {
    let err = parse_obj("v 1 2 3\nvn 0 0 1\nf 1 2 3\n").unwrap_err();
    assert!(matches!(
        err,
        ObjError::Mesh(MeshError::IndexOutOfRange {
            index: 1,
            vertex_count: 1,
            ..
        })
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_obj(dir.path().join("missing.obj")).unwrap_err();
    assert!(matches!(err, ObjError::Io(_)));
}

#[test]
fn written_mesh_reloads_identically() {
    for model in [&OBJ_CUBE, &OBJ_BUMPY_GRID] {
        let mesh = parse_obj(model.text).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.obj");
        save_obj(&mesh, &path).unwrap();
        assert_eq!(mesh, read_obj(&path).unwrap());
    }
}

#[test]
fn write_keeps_fractional_positions_exact() {
    let text = "v 0.1 0.2 0.3\nv 1e-7 -2.5 3\nv 0.33333334 0 0\nf 1 2 3\n";
    let mesh = parse_obj(text).unwrap();
    let mut out = Vec::new();
    write_obj(&mesh, &mut out).unwrap();
    let written = String::from_utf8(out).unwrap();
    assert!(written.ends_with("f 1 2 3\n"));
    assert_eq!(mesh, parse_obj(&written).unwrap());
}
