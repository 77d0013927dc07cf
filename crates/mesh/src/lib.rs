mod accessor;
mod error;
mod geometry;
mod indexed;

pub use accessor::*;
pub use error::*;
pub use geometry::*;
pub use indexed::*;
