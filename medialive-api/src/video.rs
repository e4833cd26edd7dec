mod color_space;
mod common;
mod description;
mod h264;
mod h265;

pub use color_space::*;
pub use common::*;
pub use description::*;
pub use h264::*;
pub use h265::*;
