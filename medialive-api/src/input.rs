mod attachment;
mod operations;
mod resource;

pub use attachment::*;
pub use operations::*;
pub use resource::*;
