use std::path::Path;

use anyhow::{bail, Context};
use log::info;
use smoothie_mesh::Mesh;

/// Loads a mesh, picking the format from the file extension.
pub fn load_mesh<P: AsRef<Path>>(p: P) -> anyhow::Result<Mesh> {
    let p = p.as_ref();
    let extension = p
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mesh = match extension.as_deref() {
        Some("obj") => smoothie_obj::read_obj(p)?,
        Some("stl") => smoothie_stl::read_stl(p)?,
        _ => bail!("unsupported mesh format: {}", p.display()),
    };
    info!(
        "loaded {}: {} vertices, {} triangles",
        p.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

pub fn load_mesh_with_context<P: AsRef<Path>>(p: P) -> anyhow::Result<Mesh> {
    let p = p.as_ref();
    load_mesh(p).with_context(|| format!("failed to load {}", p.display()))
}
