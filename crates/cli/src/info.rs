use std::io::Write;

use smoothie::AdjacencyGraph;

use crate::{args, load::load_mesh_with_context};

pub fn info_command<W: Write>(args: args::InfoArgs, out: &mut W) -> anyhow::Result<()> {
    let mesh = load_mesh_with_context(&args.input)?;
    let graph = AdjacencyGraph::from_mesh(&mesh);
    let max_valence = graph.iter().map(|(_, ns)| ns.len()).max().unwrap_or(0);

    writeln!(out, "vertices:  {}", mesh.vertex_count())?;
    writeln!(out, "normals:   {}", mesh.normals().len())?;
    writeln!(out, "triangles: {}", mesh.triangle_count())?;
    writeln!(out, "connected: {}", graph.len())?;
    writeln!(out, "isolated:  {}", graph.isolated_count())?;
    writeln!(out, "max valence: {}", max_valence)?;
    Ok(())
}
