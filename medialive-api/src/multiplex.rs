mod operations;
mod program;
mod resource;

pub use operations::*;
pub use program::*;
pub use resource::*;
