use log::debug;
use smoothie_mesh::{Mesh, MeshBuffers};

use crate::{CancelToken, SmoothError, SmoothOutcome, Smoother, SmootherConfig};

/// Something that draws a mesh.
///
/// The core never talks to a graphics API. A renderer is handed borrowed
/// buffers once per frame and is responsible for everything on the GPU side.
pub trait Renderer {
    fn draw(&mut self, buffers: MeshBuffers<'_>);
}

/// Owns a loaded mesh and coordinates smoothing with continuous rendering.
///
/// A render loop is driven from outside: the loop calls [`Session::frame`]
/// once per frame and stops rescheduling itself when that returns `false`.
/// Smoothing is never interleaved with drawing; asking for a smoothing pass
/// stops the active loop first, and the caller starts a new one to display
/// the result.
pub struct Session {
    mesh: Mesh,
    smoother: Smoother,
    render_loop: Option<CancelToken>,
}

impl Session {
    pub fn new(mesh: Mesh, config: SmootherConfig) -> Self {
        let smoother = Smoother::new(&mesh, config);
        Self {
            mesh,
            smoother,
            render_loop: None,
        }
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn smoother(&self) -> &Smoother {
        &self.smoother
    }

    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }

    /// Starts a new render loop, stopping any previous one, and returns the
    /// token that stops it.
    pub fn start_rendering(&mut self) -> CancelToken {
        self.stop_rendering();
        let token = CancelToken::new();
        self.render_loop = Some(token.clone());
        token
    }

    pub fn stop_rendering(&mut self) {
        if let Some(token) = self.render_loop.take() {
            token.cancel();
        }
    }

    pub fn is_rendering(&self) -> bool {
        self.render_loop
            .as_ref()
            .map_or(false, |token| !token.is_cancelled())
    }

    /// Per-frame callback for the render loop.
    ///
    /// Draws the current mesh and returns `true` while the loop is active.
    /// Returns `false` without drawing once the loop has been stopped, either
    /// through the session or through its token.
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) -> bool {
        if !self.is_rendering() {
            self.render_loop = None;
            return false;
        }
        renderer.draw(self.mesh.buffers());
        true
    }

    /// Handles a "smooth now" request.
    ///
    /// Stops the active render loop, runs `iterations` passes (or the
    /// configured default) and returns the updated buffers for redisplay.
    pub fn smooth_now(
        &mut self,
        iterations: Option<usize>,
    ) -> Result<MeshBuffers<'_>, SmoothError> {
        self.stop_rendering();
        let iterations = iterations.unwrap_or(self.smoother.config().iterations);
        debug!("smooth requested: {} iterations", iterations);
        self.smoother.smooth_mesh(&mut self.mesh, iterations)?;
        Ok(self.mesh.buffers())
    }

    /// Like [`Session::smooth_now`], but the whole pass is abandoned if
    /// `cancel` is set before it finishes.
    pub fn smooth_now_cancellable(
        &mut self,
        iterations: Option<usize>,
        cancel: &CancelToken,
    ) -> Result<SmoothOutcome, SmoothError> {
        self.stop_rendering();
        let iterations = iterations.unwrap_or(self.smoother.config().iterations);
        self.smoother
            .smooth_mesh_cancellable(&mut self.mesh, iterations, cancel)
    }
}
