/// Iteration count used when a caller does not ask for a specific one.
pub const DEFAULT_ITERATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmootherConfig {
    /// Number of smoothing passes applied per "smooth now" request.
    pub iterations: usize,
}

impl Default for SmootherConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}
