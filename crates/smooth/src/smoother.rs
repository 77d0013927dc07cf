use cgmath::Zero;
use log::{debug, trace};
use smoothie_mesh::{Mesh, Vector3};

use crate::{AdjacencyGraph, CancelToken, SmoothError, SmootherConfig};

/// How a cancellable smoothing pass ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothOutcome {
    /// Every requested iteration ran and the result was written back.
    Completed { iterations: usize },
    /// The pass was stopped after `completed` iterations. Nothing was written
    /// back; the mesh is exactly as it was before the pass started.
    Cancelled { completed: usize },
}

fn check_len(graph: &AdjacencyGraph, vertices: &[Vector3]) -> Result<(), SmoothError> {
    if graph.vertex_count() != vertices.len() {
        return Err(SmoothError::VertexCountMismatch {
            graph: graph.vertex_count(),
            vertices: vertices.len(),
        });
    }
    Ok(())
}

// One Jacobi step: every new position is computed from `prev` only.
//
// Vertices without neighbors (unreferenced by any triangle, or only part of
// degenerate triangles) keep their previous position.
fn step(graph: &AdjacencyGraph, prev: &[Vector3], next: &mut [Vector3]) {
    next.copy_from_slice(prev);
    for (v, neighbors) in graph {
        if neighbors.is_empty() {
            continue;
        }
        // Neighbor sets iterate in ascending order, so the summation order (and
        // with it the rounding) is the same on every run.
        let sum = neighbors
            .iter()
            .fold(Vector3::zero(), |acc, &n| acc + prev[n as usize]);
        next[v as usize] = sum * (1.0 / neighbors.len() as f32);
    }
}

// Runs up to `iterations` steps, asking `stop` before each one. Returns the
// final positions and the number of steps that ran.
fn run<F: FnMut(usize) -> bool>(
    graph: &AdjacencyGraph,
    vertices: &[Vector3],
    iterations: usize,
    mut stop: F,
) -> (Vec<Vector3>, usize) {
    let mut current = vertices.to_vec();
    let mut next = current.clone();
    for i in 0..iterations {
        if stop(i) {
            debug!("smoothing cancelled after {} of {} iterations", i, iterations);
            return (current, i);
        }
        step(graph, &current, &mut next);
        std::mem::swap(&mut current, &mut next);
        trace!("finished smoothing iteration {}", i + 1);
    }
    (current, iterations)
}

/// Applies `iterations` rounds of Laplacian smoothing to `vertices`.
///
/// Each round replaces every vertex in `graph` with the average of its
/// neighbors' positions from the previous round. The result depends only on
/// the inputs: zero iterations returns `vertices` unchanged, and smoothing `a`
/// then `b` times gives bit-for-bit the same positions as smoothing `a + b`
/// times.
pub fn smooth(
    vertices: &[Vector3],
    graph: &AdjacencyGraph,
    iterations: usize,
) -> Result<Vec<Vector3>, SmoothError> {
    check_len(graph, vertices)?;
    Ok(run(graph, vertices, iterations, |_| false).0)
}

/// Smooths meshes that share one topology.
pub struct Smoother {
    graph: AdjacencyGraph,
    config: SmootherConfig,
}

impl Smoother {
    /// Builds the adjacency graph for `mesh`. The same smoother can be used on
    /// any mesh with identical indices.
    pub fn new(mesh: &Mesh, config: SmootherConfig) -> Self {
        Self::with_graph(AdjacencyGraph::from_mesh(mesh), config)
    }

    pub fn with_graph(graph: AdjacencyGraph, config: SmootherConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn config(&self) -> &SmootherConfig {
        &self.config
    }

    /// Smooths `mesh` in place using the configured iteration count.
    pub fn smooth_default(&self, mesh: &mut Mesh) -> Result<(), SmoothError> {
        self.smooth_mesh(mesh, self.config.iterations)
    }

    pub fn smooth_mesh(&self, mesh: &mut Mesh, iterations: usize) -> Result<(), SmoothError> {
        self.check_mesh(mesh)?;
        debug!(
            "smoothing {} vertices for {} iterations",
            mesh.vertex_count(),
            iterations
        );
        let (vertices, _) = run(&self.graph, mesh.vertices(), iterations, |_| false);
        mesh.set_vertices(vertices)?;
        Ok(())
    }

    fn check_mesh(&self, mesh: &Mesh) -> Result<(), SmoothError> {
        check_len(&self.graph, mesh.vertices())?;
        // Debug builds also check that the graph came from these indices.
        debug_assert!(
            AdjacencyGraph::from_mesh(mesh) == self.graph,
            "mesh has a different topology than the smoother's graph"
        );
        Ok(())
    }

    /// Like [`Smoother::smooth_mesh`], but stops between iterations once
    /// `cancel` is set. A cancelled pass leaves `mesh` untouched.
    pub fn smooth_mesh_cancellable(
        &self,
        mesh: &mut Mesh,
        iterations: usize,
        cancel: &CancelToken,
    ) -> Result<SmoothOutcome, SmoothError> {
        self.smooth_mesh_until(mesh, iterations, |_| cancel.is_cancelled())
    }

    // `stop` is asked before every iteration with the number of iterations
    // completed so far.
    fn smooth_mesh_until<F: FnMut(usize) -> bool>(
        &self,
        mesh: &mut Mesh,
        iterations: usize,
        stop: F,
    ) -> Result<SmoothOutcome, SmoothError> {
        self.check_mesh(mesh)?;
        debug!(
            "smoothing {} vertices for {} iterations",
            mesh.vertex_count(),
            iterations
        );
        let (vertices, completed) = run(&self.graph, mesh.vertices(), iterations, stop);
        if completed < iterations {
            return Ok(SmoothOutcome::Cancelled { completed });
        }
        mesh.set_vertices(vertices)?;
        Ok(SmoothOutcome::Completed { iterations })
    }
}
