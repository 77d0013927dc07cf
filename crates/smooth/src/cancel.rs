use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// A shared stop flag.
///
/// Clones observe the same flag, so the side that started an operation can
/// hand a clone to whoever is allowed to stop it. Once cancelled a token stays
/// cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
