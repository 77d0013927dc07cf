mod adjacency;
mod cancel;
mod config;
mod error;
mod session;
mod smoother;

pub use adjacency::*;
pub use cancel::*;
pub use config::*;
pub use error::*;
pub use session::*;
pub use smoother::*;
