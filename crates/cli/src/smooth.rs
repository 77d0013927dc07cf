use anyhow::Context;
use log::info;
use smoothie::{Session, SmootherConfig};

use crate::{args, load::load_mesh_with_context};

pub fn smooth_command(args: args::SmoothArgs) -> anyhow::Result<()> {
    let mesh = load_mesh_with_context(&args.input)?;
    let mut config = SmootherConfig::default();
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }

    let mut session = Session::new(mesh, config);
    session.smooth_now(None)?;
    smoothie_obj::save_obj(session.mesh(), &args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    info!(
        "wrote {} after {} iterations",
        args.output,
        session.smoother().config().iterations
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smoothie_test_data::{OBJ_BUMPY_GRID, STL_CUBE};

    #[test]
    fn smooth_obj_to_obj() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("grid.obj");
        let output = dir.path().join("grid-smooth.obj");
        std::fs::write(&input, OBJ_BUMPY_GRID.text).unwrap();

        smooth_command(args::SmoothArgs {
            input: input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            iterations: Some(3),
        })
        .unwrap();

        let original = smoothie_obj::read_obj(&input).unwrap();
        let smoothed = smoothie_obj::read_obj(&output).unwrap();
        let expected = smoothie::smooth(
            original.vertices(),
            &smoothie::AdjacencyGraph::from_mesh(&original),
            3,
        )
        .unwrap();
        assert_eq!(expected.as_slice(), smoothed.vertices());
        assert_eq!(original.indices(), smoothed.indices());
    }

    #[test]
    fn smooth_stl_to_obj() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cube.stl");
        let output = dir.path().join("cube.obj");
        std::fs::write(&input, STL_CUBE.bytes).unwrap();

        smooth_command(args::SmoothArgs {
            input: input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            iterations: None,
        })
        .unwrap();

        let smoothed = smoothie_obj::read_obj(&output).unwrap();
        assert_eq!(STL_CUBE.welded_vertices, smoothed.vertex_count());
        assert_eq!(STL_CUBE.triangles, smoothed.triangle_count());
    }

    #[test]
    fn missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = smooth_command(args::SmoothArgs {
            input: dir.path().join("nope.obj").to_string_lossy().into_owned(),
            output: dir.path().join("out.obj").to_string_lossy().into_owned(),
            iterations: None,
        });
        assert!(result.is_err());
        assert!(!dir.path().join("out.obj").exists());
    }
}
